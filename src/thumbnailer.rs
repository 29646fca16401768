use std::{
    ffi::{OsStr, OsString},
    io::Write,
};

use crate::{
    decode::decode,
    encode::encode_jpeg,
    error::ThumbnailError,
    resize,
    settings::{ThumbnailSettings, RESAMPLING},
    tn_err,
    utils::filename::replace_extension_with_suffix,
};

/// What happened to a single input file
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Written,
    /// The output path would have been the input itself
    Skipped,
    Failed,
}

/// Outcome counts for a whole run
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Summary {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Written => self.written += 1,
            Outcome::Skipped => self.skipped += 1,
            Outcome::Failed => self.failed += 1,
        }
    }
}

/// Path the thumbnail of `input` is written to
pub fn output_path(input: &OsStr, settings: &ThumbnailSettings) -> OsString {
    replace_extension_with_suffix(input, OsStr::new(settings.suffix))
}

/// Creates the thumbnail for one file.
///
/// Returns `Outcome::Skipped` without touching the disk if the thumbnail would overwrite the input.
/// `Outcome::Failed` is never returned; failures are reported as errors instead.
pub fn make_thumbnail(
    input: &OsStr,
    settings: &ThumbnailSettings,
) -> Result<Outcome, ThumbnailError> {
    let output = output_path(input, settings);
    if output == input {
        return Ok(Outcome::Skipped);
    }

    let mut image = decode(input).map_err(|error| {
        tn_err!("unable to open image '{}': {error}", input.to_string_lossy())
    })?;
    log::debug!(
        "decoded {} as {:?}, {}x{}",
        input.to_string_lossy(),
        image.format,
        image.pixels.width(),
        image.pixels.height()
    );
    resize::thumbnail(
        &mut image,
        settings.max_width,
        settings.max_height,
        RESAMPLING,
    )?;
    encode_jpeg(&image, &output, settings.quality)?;
    Ok(Outcome::Written)
}

/// Processes every path in order. A failing file gets one line on `diagnostics`
/// and does not stop the run.
///
/// Only an error writing to `diagnostics` itself is returned.
pub fn run<W: Write>(
    inputs: impl IntoIterator<Item = OsString>,
    settings: &ThumbnailSettings,
    diagnostics: &mut W,
) -> std::io::Result<Summary> {
    let mut summary = Summary::default();
    for input in inputs {
        let outcome = match make_thumbnail(&input, settings) {
            Ok(outcome) => outcome,
            Err(error) => {
                log::warn!("{error}");
                writeln!(
                    diagnostics,
                    "cannot create thumbnail for {}",
                    input.to_string_lossy()
                )?;
                Outcome::Failed
            }
        };
        log::debug!("{}: {outcome}", input.to_string_lossy());
        summary.record(outcome);
    }
    log::info!(
        "{} written, {} skipped, {} failed",
        summary.written,
        summary.skipped,
        summary.failed
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageFormat, RgbImage};
    use std::path::Path;

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbImage::from_fn(width, height, |x, y| image::Rgb([x as u8, y as u8, 0]))
            .save_with_format(path, ImageFormat::Png)
            .unwrap();
    }

    fn os(path: &Path) -> OsString {
        path.as_os_str().to_owned()
    }

    #[test]
    fn outcome_names() {
        assert_eq!(Outcome::Written.to_string(), "written");
        let name: &'static str = Outcome::Skipped.into();
        assert_eq!(name, "skipped");
    }

    #[test]
    fn default_output_path() {
        let settings = ThumbnailSettings::default();
        assert_eq!(
            output_path(OsStr::new("photo.png"), &settings),
            OsString::from("photo_thumbnail.jpg")
        );
    }

    #[test]
    fn thumbnail_is_written_next_to_the_input() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo.png");
        write_png(&input, 1200, 800);

        let outcome = make_thumbnail(input.as_os_str(), &Default::default()).unwrap();

        assert_eq!(outcome, Outcome::Written);
        let thumbnail = image::open(dir.path().join("photo_thumbnail.jpg")).unwrap();
        assert_eq!(thumbnail.dimensions(), (500, 333));
    }

    #[test]
    fn icc_profile_is_carried_into_the_thumbnail() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("tagged.jpg");
        let icc = b"display profile stand-in".repeat(8);
        let tagged = crate::image::Image {
            format: None,
            icc: Some(icc.clone()),
            pixels: image::DynamicImage::new_rgb8(900, 600),
        };
        let mut file = std::fs::File::create(&input).unwrap();
        crate::encoders::jpeg::encode(&tagged, &mut file, 90).unwrap();
        drop(file);

        let outcome = make_thumbnail(input.as_os_str(), &Default::default()).unwrap();

        assert_eq!(outcome, Outcome::Written);
        let thumbnail = decode(dir.path().join("tagged_thumbnail.jpg").as_os_str()).unwrap();
        assert_eq!(thumbnail.icc, Some(icc));
        assert_eq!((thumbnail.pixels.width(), thumbnail.pixels.height()), (500, 333));
    }

    #[test]
    fn colliding_output_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("photo");
        write_png(&input, 10, 10);
        let settings = ThumbnailSettings {
            suffix: "",
            ..Default::default()
        };
        let before = std::fs::read(&input).unwrap();

        let mut diagnostics = Vec::new();
        let summary = run([os(&input)], &settings, &mut diagnostics).unwrap();

        assert_eq!(summary.skipped, 1);
        assert!(diagnostics.is_empty());
        assert_eq!(std::fs::read(&input).unwrap(), before);
    }

    #[test]
    fn failures_are_reported_once_and_do_not_stop_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.png");
        let corrupt = dir.path().join("corrupt.png");
        std::fs::write(&corrupt, b"\x89PNG but not really").unwrap();
        let good = dir.path().join("good.png");
        write_png(&good, 20, 10);

        let mut diagnostics = Vec::new();
        let summary = run(
            [os(&missing), os(&corrupt), os(&good)],
            &Default::default(),
            &mut diagnostics,
        )
        .unwrap();

        assert_eq!(
            summary,
            Summary {
                written: 1,
                skipped: 0,
                failed: 2
            }
        );
        let text = String::from_utf8(diagnostics).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                format!("cannot create thumbnail for {}", missing.display()),
                format!("cannot create thumbnail for {}", corrupt.display()),
            ]
        );
        assert!(!dir.path().join("missing_thumbnail.jpg").exists());
        assert!(!dir.path().join("corrupt_thumbnail.jpg").exists());
        assert!(dir.path().join("good_thumbnail.jpg").exists());
    }

    #[test]
    fn no_inputs_do_nothing() {
        let mut diagnostics = Vec::new();
        let summary = run(Vec::new(), &Default::default(), &mut diagnostics).unwrap();
        assert_eq!(summary, Summary::default());
        assert!(diagnostics.is_empty());
    }
}
