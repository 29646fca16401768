use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;

use crate::{error::ThumbnailError, image::Image, tn_try};

pub fn encode<W: Write>(image: &Image, writer: &mut W, quality: u8) -> Result<(), ThumbnailError> {
    let mut encoder = JpegEncoder::new_with_quality(writer, quality);
    if let Some(icc) = image.icc.clone() {
        let _ = encoder.set_icc_profile(icc); // ignore UnsupportedError
    };
    Ok(tn_try!(image.pixels.write_with_encoder(encoder)))
}
