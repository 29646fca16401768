//! Batch JPEG thumbnail generation.
//!
//! Every input image is shrunk to fit into a 500x500 box and written next to
//! the original as `<stem>_thumbnail.jpg`. The `make-thumbnails` binary is a thin
//! wrapper around [`thumbnailer::run`].

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod image;
pub mod resize;
pub mod settings;
pub mod thumbnailer;
mod utils;
