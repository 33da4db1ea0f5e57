//! Request handling for static files
//!
//! This module turns parsed requests into responses. Every outcome is a
//! `Response` value; per-request failures never cross the handler boundary.

use crate::files::resolver::{UnsafePath, resolve};
use crate::http::mime::content_type_for_extension;
use crate::http::request::Request;
use crate::http::response::{BodySource, Response, ResponseBuilder, StatusCode};
use std::time::{Duration, SystemTime};
use tokio::fs::File;

/// Value of the Server header on successful responses.
pub const SERVER_NAME: &str = "Bastion";

/// Far-future cache hint attached to every successful response.
const EXPIRES_AFTER: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// An opened file ready for streaming, with the metadata the response needs.
struct OpenFile {
    file: File,
    len: u64,
    modified: SystemTime,
}

/// Serves files from a fixed document root.
///
/// Constructed once at startup with the normalized root; holds no mutable
/// state, so a single instance is shared across all connection tasks.
pub struct StaticFileHandler {
    /// Document root, separator-terminated
    root: String,
}

impl StaticFileHandler {
    /// Creates a handler serving files under `root`.
    ///
    /// `root` must be separator-terminated, as produced by
    /// [`ServerConfig::normalized_root`](crate::config::ServerConfig::normalized_root).
    pub fn new(root: String) -> Self {
        Self { root }
    }

    /// Handles a single request and returns the response to write.
    ///
    /// This function:
    /// 1. Resolves the request path against the document root
    /// 2. Rejects traversal attempts with 403, no file access attempted
    /// 3. Opens the target file and streams it back with 200
    /// 4. Maps every filesystem fault uniformly to 404
    pub async fn handle(&self, request: &Request) -> Response {
        let resolved = match resolve(&self.root, &request.path) {
            Ok(resolved) => resolved,
            Err(UnsafePath) => {
                tracing::warn!(path = %request.path, "Rejected path with traversal marker");
                return Response::forbidden();
            }
        };

        match open_for_streaming(&resolved.path).await {
            Ok(opened) => {
                tracing::debug!(
                    path = %resolved.path,
                    len = opened.len,
                    "Serving file"
                );

                let now = SystemTime::now();
                ResponseBuilder::new(StatusCode::Ok)
                    .header("Server", SERVER_NAME)
                    .header("Date", httpdate::fmt_http_date(now))
                    .header("Last-Modified", httpdate::fmt_http_date(opened.modified))
                    .header("Expires", httpdate::fmt_http_date(now + EXPIRES_AFTER))
                    .header(
                        "Content-Type",
                        content_type_for_extension(&resolved.extension),
                    )
                    .body(BodySource::File {
                        file: opened.file,
                        len: opened.len,
                    })
                    .build()
            }
            Err(e) => {
                tracing::debug!(path = %resolved.path, error = %e, "File unavailable");
                Response::not_found()
            }
        }
    }
}

/// Opens a file for streaming and reads the metadata the response headers
/// need. Any fault (missing file, permission denied, not a regular file)
/// comes back as an error; the caller does not distinguish between them.
async fn open_for_streaming(path: &str) -> std::io::Result<OpenFile> {
    let file = File::open(path).await?;
    let metadata = file.metadata().await?;

    if !metadata.is_file() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }

    let modified = metadata.modified()?;

    Ok(OpenFile {
        file,
        len: metadata.len(),
        modified,
    })
}
