use bastion::http::mime::{DEFAULT_CONTENT_TYPE, content_type_for_extension};

#[test]
fn test_common_web_types() {
    assert_eq!(content_type_for_extension("html"), "text/html");
    assert_eq!(content_type_for_extension("htm"), "text/html");
    assert_eq!(content_type_for_extension("css"), "text/css");
    assert_eq!(content_type_for_extension("js"), "application/javascript");
    assert_eq!(content_type_for_extension("json"), "application/json");
    assert_eq!(content_type_for_extension("svg"), "image/svg+xml");
    assert_eq!(content_type_for_extension("xhtml"), "application/xhtml+xml");
}

#[test]
fn test_image_types() {
    assert_eq!(content_type_for_extension("png"), "image/png");
    assert_eq!(content_type_for_extension("gif"), "image/gif");
    assert_eq!(content_type_for_extension("jpg"), "image/jpeg");
    assert_eq!(content_type_for_extension("jpeg"), "image/jpeg");
    assert_eq!(content_type_for_extension("webp"), "image/webp");
    assert_eq!(content_type_for_extension("tif"), "image/tiff");
    assert_eq!(content_type_for_extension("tiff"), "image/tiff");
    assert_eq!(content_type_for_extension("ico"), "image/x-icon");
}

#[test]
fn test_audio_video_types() {
    assert_eq!(content_type_for_extension("aac"), "audio/aac");
    assert_eq!(content_type_for_extension("mid"), "audio/midi");
    assert_eq!(content_type_for_extension("midi"), "audio/midi");
    assert_eq!(content_type_for_extension("oga"), "audio/ogg");
    assert_eq!(content_type_for_extension("wav"), "audio/x-wav");
    assert_eq!(content_type_for_extension("weba"), "audio/webm");
    assert_eq!(content_type_for_extension("avi"), "video/x-msvideo");
    assert_eq!(content_type_for_extension("mpeg"), "video/mpeg");
    assert_eq!(content_type_for_extension("ogv"), "video/ogg");
    assert_eq!(content_type_for_extension("webm"), "video/webm");
    assert_eq!(content_type_for_extension("3gp"), "video/3gpp");
    assert_eq!(content_type_for_extension("3g2"), "video/3gpp2");
}

#[test]
fn test_font_types() {
    assert_eq!(content_type_for_extension("otf"), "font/otf");
    assert_eq!(content_type_for_extension("ttf"), "font/ttf");
    assert_eq!(content_type_for_extension("woff"), "font/woff");
    assert_eq!(content_type_for_extension("woff2"), "font/woff2");
    assert_eq!(
        content_type_for_extension("eot"),
        "application/vnd.ms-fontobject"
    );
}

#[test]
fn test_document_and_archive_types() {
    assert_eq!(content_type_for_extension("pdf"), "application/pdf");
    assert_eq!(content_type_for_extension("doc"), "application/msword");
    assert_eq!(
        content_type_for_extension("docx"),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    );
    assert_eq!(
        content_type_for_extension("xlsx"),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(content_type_for_extension("zip"), "application/zip");
    assert_eq!(
        content_type_for_extension("rar"),
        "application/x-rar-compressed"
    );
    assert_eq!(content_type_for_extension("tar"), "application/x-tar");
    assert_eq!(content_type_for_extension("7z"), "application/x-7z-compressed");
    assert_eq!(content_type_for_extension("bz2"), "application/x-bzip2");
}

#[test]
fn test_unknown_extension_falls_through_to_default() {
    assert_eq!(content_type_for_extension("nope"), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type_for_extension("rs"), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_empty_extension_falls_through_to_default() {
    assert_eq!(content_type_for_extension(""), DEFAULT_CONTENT_TYPE);
}

#[test]
fn test_lookup_is_case_sensitive() {
    // The table stores lowercase keys only; mixed case misses
    assert_eq!(content_type_for_extension("HTML"), DEFAULT_CONTENT_TYPE);
    assert_eq!(content_type_for_extension("Css"), DEFAULT_CONTENT_TYPE);
}
