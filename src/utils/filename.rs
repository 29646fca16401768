use std::{
    ffi::{OsStr, OsString},
    path::Path,
};

/// Replaces the extension of the file name with `suffix`, keeping the directory.
/// If no extension is present, appends `suffix` to the end.
///
/// Only the last extension is replaced: `archive.tar.gz` becomes `archive.tar{suffix}`.
/// Leading dots never start an extension, so `...jpg` and `.bashrc` are kept whole.
pub fn replace_extension_with_suffix(os_path_string: &OsStr, suffix: &OsStr) -> OsString {
    let path = Path::new(os_path_string);

    if let Some(filename_os_str) = path.file_name() {
        // `file_stem` splits `...jpg` into `..` and `jpg`
        let stem_os_str = match path.file_stem() {
            Some(stem) if !stem.as_encoded_bytes().iter().all(|&b| b == b'.') => stem,
            _ => filename_os_str,
        };
        let mut new_filename = OsString::new();
        new_filename.push(stem_os_str);
        new_filename.push(suffix);
        // `with_file_name` keeps the parent directory, including a leading "./"
        path.with_file_name(new_filename).into_os_string()
    } else {
        // no file name at all, e.g. ".." or "/"
        let mut result = os_path_string.to_owned();
        result.push(suffix);
        result
    }
}
