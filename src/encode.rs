use std::{ffi::OsStr, io::BufWriter, path::Path};

use tempfile::NamedTempFile;

use crate::{encoders, error::ThumbnailError, image::Image, tn_err, tn_try};

/// Writes the image as JPEG to `path`, replacing whatever was there.
///
/// The data goes to a temporary file in the same directory first,
/// which is then renamed over `path`, so a failed write leaves no truncated file behind.
pub fn encode_jpeg(image: &Image, path: &OsStr, quality: u8) -> Result<(), ThumbnailError> {
    let path = Path::new(path);
    let directory = match path.parent() {
        // a bare file name has an empty parent
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file = temporary_file(path, directory)
        .map_err(|error| tn_err!("unable to open image '{}': {error}", path.display()))?;
    // Wrap in BufWriter for performance
    let mut writer = BufWriter::new(file);

    encoders::jpeg::encode(image, &mut writer, quality)?;

    // Flush explicitly: dropping a BufWriter swallows write errors.
    let file = tn_try!(writer.into_inner().map_err(|e| e.into_error()));
    // the rename must not become visible before the data is on disk
    tn_try!(file.as_file().sync_all());
    file.persist(path)
        .map_err(|error| tn_err!("unable to write image '{}': {error}", path.display()))?;
    Ok(())
}

/// Creates the temporary file with the permissions a plain create-or-truncate of `path` would give:
/// those of the file being replaced, or the default mode filtered through the umask.
fn temporary_file(path: &Path, directory: &Path) -> std::io::Result<NamedTempFile> {
    let existing = std::fs::metadata(path).ok().map(|metadata| metadata.permissions());
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = tempfile::Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // the umask applies to this at creation, just like for File::create
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let file = builder.tempfile_in(directory)?;
    if let Some(permissions) = existing {
        file.as_file().set_permissions(permissions)?;
    }
    Ok(file)
}
