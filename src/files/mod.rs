//! Static file serving
//!
//! This module implements the core static file logic: mapping request
//! paths to files under the document root and turning them into responses.

pub mod handler;
pub mod resolver;

pub use handler::StaticFileHandler;
pub use resolver::{ResolvedFile, UnsafePath, resolve};
