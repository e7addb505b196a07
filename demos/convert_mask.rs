//! Usage: `convert_mask <input> <output.png> [threshold] [--symmetric]`

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use signed_distance_field::prelude::*;

    env_logger::init();

    let arguments: Vec<String> = std::env::args().skip(1).collect();
    let symmetric = arguments.iter().any(|argument| argument == "--symmetric");
    let positional: Vec<&String> = arguments.iter().filter(|argument| !argument.starts_with("--")).collect();

    let (input, output) = match positional.as_slice() {
        [input, output, ..] => (input.as_str(), output.as_str()),
        _ => return Err("usage: convert_mask <input> <output.png> [threshold] [--symmetric]".into()),
    };

    let threshold = match positional.get(2) {
        Some(threshold) => threshold.parse()?,
        None => 127,
    };

    let gray_image = image::open(input)?.to_luma8();
    log::info!("loaded {} ({}x{})", input, gray_image.width(), gray_image.height());

    let binary_image = binary_piston_image::of_gray_u8_image_with_threshold(&gray_image, threshold);
    let distance_field = compute_signed_byte_field(&binary_image, symmetric)?;

    distance_field.to_gray_image().save(output)?;
    log::info!("saved {}", output);

    Ok(())
}
