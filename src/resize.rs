use image::{DynamicImage, RgbImage};
use pic_scale_safe::{ImageSize, ResamplingFunction};

use crate::{error::ThumbnailError, image::Image, tn_err, tn_try};

/// Shrinks the image in place so that it fits into `max_width`x`max_height`,
/// preserving the aspect ratio. Images that already fit are left alone.
///
/// The result is always 8-bit RGB, since that is all JPEG can hold.
pub fn thumbnail(
    image: &mut Image,
    max_width: u32,
    max_height: u32,
    filter: ResamplingFunction,
) -> Result<(), ThumbnailError> {
    let src_width = image.pixels.width();
    let src_height = image.pixels.height();
    let (dst_width, dst_height) =
        bounding_dimensions(src_width, src_height, max_width, max_height);

    // drops alpha and anything above 8 bits per channel
    let rgb = std::mem::replace(&mut image.pixels, DynamicImage::new_rgb8(0, 0)).into_rgb8();

    if (src_width, src_height) == (dst_width, dst_height) {
        image.pixels = DynamicImage::ImageRgb8(rgb);
        return Ok(());
    }

    log::debug!("resizing {src_width}x{src_height} to {dst_width}x{dst_height}");
    let src_size = ImageSize::new(src_width as usize, src_height as usize);
    let dst_size = ImageSize::new(dst_width as usize, dst_height as usize);
    let resized = tn_try!(pic_scale_safe::resize_rgb8(
        rgb.as_raw(),
        src_size,
        dst_size,
        filter
    ));
    let buffer = RgbImage::from_raw(dst_width, dst_height, resized)
        .ok_or_else(|| tn_err!("resizer returned a buffer of unexpected length"))?;
    image.pixels = DynamicImage::ImageRgb8(buffer);
    Ok(())
}

/// Largest dimensions with the source aspect ratio that fit into the box.
/// Never enlarges, and never returns a zero-sized dimension.
pub fn bounding_dimensions(width: u32, height: u32, max_width: u32, max_height: u32) -> (u32, u32) {
    if width <= max_width && height <= max_height {
        return (width, height);
    }
    // u64 so that the products cannot overflow
    let (w, h) = (width as u64, height as u64);
    let (max_w, max_h) = (max_width as u64, max_height as u64);
    // compare max_w/w against max_h/h without floating point
    if max_w * h <= max_h * w {
        // width is the limiting side
        let new_height = (h * max_w + w / 2) / w;
        (max_width, new_height.clamp(1, max_h) as u32)
    } else {
        let new_width = (w * max_h + h / 2) / h;
        (new_width.clamp(1, max_w) as u32, max_height)
    }
}
