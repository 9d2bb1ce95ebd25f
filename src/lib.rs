//! `shotsize` resizes a fixed list of screenshots to one resolution and saves them as JPEG.
//!
//! The `resize-screenshots` binary runs [`batch::run`] with [`config::BatchConfig::default`].
//! Everything it does can be pointed elsewhere by building a different config.

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

pub mod batch;
pub mod config;
pub mod decode;
pub mod encode;
pub mod error;
pub mod filter;
pub mod geometry;
pub mod image;
pub mod init;
pub mod resize;
