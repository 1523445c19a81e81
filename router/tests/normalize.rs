use trellis_router::{normalize_path, normalize_segments, split_path};

#[test]
fn normalize_path_should_collapse_separators() {
    assert_eq!(normalize_path("//users///42"), "/users/42");
    assert_eq!(normalize_path("users/42"), "/users/42");
}

#[test]
fn normalize_path_should_strip_trailing_slash() {
    assert_eq!(normalize_path("/users/"), "/users");
    assert_eq!(normalize_path("/users//"), "/users");
    assert_eq!(normalize_path("/"), "/");
}

#[test]
fn normalize_path_should_trim_surrounding_whitespace() {
    assert_eq!(normalize_path("  /users/42  "), "/users/42");
    assert_eq!(normalize_path("\t/\n"), "/");
}

#[test]
fn normalize_path_should_preserve_inner_spaces() {
    assert_eq!(normalize_path(" /foo bar/ baz "), "/foo bar/ baz");
}

#[test]
fn normalize_path_is_idempotent_on_examples() {
    for path in ["", "/", "a", "/a/", "//a//b//", " x / y ", "/<id>/"] {
        let once = normalize_path(path);
        assert_eq!(normalize_path(&once), once, "{path:?}");
    }
}

#[test]
fn split_path_should_drop_empty_segments() {
    assert_eq!(split_path("/a//b/"), vec!["a", "b"]);
    assert!(split_path("/").is_empty());
    assert!(split_path("").is_empty());
}

#[test]
fn normalize_segments_should_drop_empty_entries() {
    let segments = vec![String::new(), "a".into(), String::new(), "b".into()];
    assert_eq!(normalize_segments(&segments), vec!["a", "b"]);
}
