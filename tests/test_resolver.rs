use bastion::files::resolver::{INDEX_FILE, UnsafePath, resolve};

#[test]
fn test_resolves_plain_file_under_root() {
    let resolved = resolve("/srv/www/", "/css/site.css").unwrap();

    assert_eq!(resolved.path, "/srv/www//css/site.css");
    assert_eq!(resolved.extension, "css");
}

#[test]
fn test_rejects_parent_traversal() {
    assert_eq!(resolve("/srv/www/", "/../../etc/passwd"), Err(UnsafePath));
    assert_eq!(resolve("/srv/www/", "/a/../b"), Err(UnsafePath));
    assert_eq!(resolve("/srv/www/", ".."), Err(UnsafePath));
}

#[test]
fn test_rejects_any_double_dot_substring() {
    // Coarse on purpose: legitimate names containing ".." are rejected too
    assert_eq!(resolve("/srv/www/", "/notes..txt"), Err(UnsafePath));
    assert_eq!(resolve("/srv/www/", "/a..b/c.html"), Err(UnsafePath));
}

#[test]
fn test_directory_request_defaults_to_index_file() {
    let resolved = resolve("/srv/www/", "/").unwrap();

    assert_eq!(resolved.path, format!("/srv/www//{}", INDEX_FILE));
    assert_eq!(resolved.extension, "html");
}

#[test]
fn test_nested_directory_request_defaults_to_index_file() {
    let resolved = resolve("/srv/www/", "/docs/").unwrap();

    assert_eq!(resolved.path, format!("/srv/www//docs/{}", INDEX_FILE));
    assert_eq!(resolved.extension, "html");
}

#[test]
fn test_extension_is_empty_without_dot() {
    let resolved = resolve("/srv/www/", "/README").unwrap();

    assert_eq!(resolved.extension, "");
}

#[test]
fn test_extension_is_last_segment_after_dot() {
    let resolved = resolve("/srv/www/", "/archive.tar.gz").unwrap();

    assert_eq!(resolved.extension, "gz");
}

#[test]
fn test_extension_ignores_dots_in_directories() {
    // Only the final path component counts
    let resolved = resolve("/srv/www/", "/v1.2/readme").unwrap();

    assert_eq!(resolved.extension, "");
}

#[test]
fn test_no_filesystem_access_during_resolution() {
    // Resolution is pure string work; a file that does not exist resolves fine
    let resolved = resolve("/definitely/not/a/real/root/", "/ghost.html").unwrap();

    assert_eq!(resolved.path, "/definitely/not/a/real/root//ghost.html");
    assert_eq!(resolved.extension, "html");
}
