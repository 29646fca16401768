use pic_scale_safe::ResamplingFunction;

/// Suffix that replaces the extension of the input file.
pub const THUMBNAIL_SUFFIX: &str = "_thumbnail.jpg";

/// Filter used for every downscale
pub const RESAMPLING: ResamplingFunction = ResamplingFunction::Lanczos3;

/// Fixed parameters of a thumbnail run.
/// There is no way to change them from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThumbnailSettings {
    /// Neither side of the thumbnail exceeds this
    pub max_width: u32,
    pub max_height: u32,
    /// Replaces the extension of the input file name
    pub suffix: &'static str,
    /// JPEG quality, 1-100
    pub quality: u8,
}

impl Default for ThumbnailSettings {
    fn default() -> Self {
        Self {
            max_width: 500,
            max_height: 500,
            suffix: THUMBNAIL_SUFFIX,
            // same as the libjpeg default
            quality: 75,
        }
    }
}
