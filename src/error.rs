use std::fmt::{Debug, Display};
pub struct ThumbnailError(pub String);

impl Display for ThumbnailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for ThumbnailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ThumbnailError").field(&self.0).finish()
    }
}

impl std::error::Error for ThumbnailError {}

#[macro_export]
macro_rules! tn_err {
    ($($arg:tt)+) => {
        $crate::error::ThumbnailError(format!(
            "make-thumbnails: {} @ {}:{}:{}",
            format_args!($($arg)+),
            file!(),
            line!(),
            column!()
        ))
    };
}

#[macro_export]
macro_rules! tn_try {
    ($expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::tn_err!("{}", err));
            }
        }
    };
}
