//! MIME type resolution based on file extensions.
//!
//! Incomplete list of mime types from here:
//! https://developer.mozilla.org/en-US/docs/Web/HTTP/Basics_of_HTTP/MIME_types/Complete_list_of_MIME_types

use std::collections::HashMap;
use std::sync::OnceLock;

/// Content type returned for extensions the table does not know, including
/// the empty extension.
pub const DEFAULT_CONTENT_TYPE: &str = "application/text";

/// Extension to MIME type pairs. Keys are lowercase; lookups are exact,
/// so a mixed-case extension falls through to the default.
const CONTENT_TYPES: &[(&str, &str)] = &[
    ("aac", "audio/aac"),
    ("abw", "application/x-abiword"),
    ("arc", "application/octet-stream"),
    ("avi", "video/x-msvideo"),
    ("azw", "application/vnd.amazon.ebook"),
    ("bin", "application/octet-stream"),
    ("bz", "application/x-bzip"),
    ("bz2", "application/x-bzip2"),
    ("csh", "application/x-csh"),
    ("css", "text/css"),
    ("csv", "text/csv"),
    ("doc", "application/msword"),
    (
        "docx",
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
    ),
    ("eot", "application/vnd.ms-fontobject"),
    ("epub", "application/epub+zip"),
    ("gif", "image/gif"),
    ("htm", "text/html"),
    ("html", "text/html"),
    ("ico", "image/x-icon"),
    ("ics", "text/calendar"),
    ("jar", "application/java-archive"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("js", "application/javascript"),
    ("json", "application/json"),
    ("mid", "audio/midi"),
    ("midi", "audio/midi"),
    ("mpeg", "video/mpeg"),
    ("mpkg", "application/vnd.apple.installer+xml"),
    ("odp", "application/vnd.oasis.opendocument.presentation"),
    ("ods", "application/vnd.oasis.opendocument.spreadsheet"),
    ("odt", "application/vnd.oasis.opendocument.text"),
    ("oga", "audio/ogg"),
    ("ogv", "video/ogg"),
    ("ogx", "application/ogg"),
    ("otf", "font/otf"),
    ("png", "image/png"),
    ("pdf", "application/pdf"),
    ("ppt", "application/vnd.ms-powerpoint"),
    (
        "pptx",
        "application/vnd.openxmlformats-officedocument.presentationml.presentation",
    ),
    ("rar", "application/x-rar-compressed"),
    ("rtf", "application/rtf"),
    ("sh", "application/x-sh"),
    ("svg", "image/svg+xml"),
    ("swf", "application/x-shockwave-flash"),
    ("tar", "application/x-tar"),
    ("tif", "image/tiff"),
    ("tiff", "image/tiff"),
    ("ts", "application/typescript"),
    ("ttf", "font/ttf"),
    ("vsd", "application/vnd.visio"),
    ("wav", "audio/x-wav"),
    ("weba", "audio/webm"),
    ("webm", "video/webm"),
    ("webp", "image/webp"),
    ("woff", "font/woff"),
    ("woff2", "font/woff2"),
    ("xhtml", "application/xhtml+xml"),
    ("xls", "application/vnd.ms-excel"),
    (
        "xlsx",
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
    ),
    ("xml", "application/xml"),
    ("xul", "application/vnd.mozilla.xul+xml"),
    ("zip", "application/zip"),
    ("3gp", "video/3gpp"),
    ("3g2", "video/3gpp2"),
    ("7z", "application/x-7z-compressed"),
];

fn table() -> &'static HashMap<&'static str, &'static str> {
    static TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
    TABLE.get_or_init(|| CONTENT_TYPES.iter().copied().collect())
}

/// Resolves a file extension (without the leading dot) to a MIME type.
///
/// Every input maps to some string: unknown extensions resolve to
/// [`DEFAULT_CONTENT_TYPE`].
///
/// # Example
///
/// ```
/// # use bastion::http::mime::content_type_for_extension;
/// assert_eq!(content_type_for_extension("css"), "text/css");
/// assert_eq!(content_type_for_extension("nope"), "application/text");
/// ```
pub fn content_type_for_extension(extension: &str) -> &'static str {
    table()
        .get(extension)
        .copied()
        .unwrap_or(DEFAULT_CONTENT_TYPE)
}
