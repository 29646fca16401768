use std::ffi::OsStr;

use image::{DynamicImage, ImageDecoder, ImageReader, ImageResult};

use crate::image::Image;

/// Guesses the format based on file contents, ignoring the extension.
pub fn decode(file: &OsStr) -> ImageResult<Image> {
    let reader = ImageReader::open(file)?.with_guessed_format()?;
    let format = reader.format();
    let mut decoder = reader.into_decoder()?;
    // a broken color profile is not a reason to reject the whole image
    let icc = decoder.icc_profile().unwrap_or_default();
    let pixels = DynamicImage::from_decoder(decoder)?;
    Ok(Image {
        format,
        icc,
        pixels,
    })
}
