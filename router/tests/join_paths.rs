use trellis_router::{join_paths, normalize_path};

#[test]
fn join_paths_should_join_with_a_single_slash() {
    assert_eq!(join_paths("/foo", "bar"), "/foo/bar");
    assert_eq!(join_paths("/foo/", "bar"), "/foo/bar");
    assert_eq!(join_paths("/foo//", "bar//"), "/foo/bar");
}

#[test]
fn join_paths_should_ensure_leading_slash() {
    assert_eq!(join_paths("/foo", ""), "/foo");
    assert_eq!(join_paths("foo", ""), "/foo");
    assert_eq!(join_paths("", "foo"), "/foo");
    assert_eq!(join_paths("/", "foo"), "/foo");
    assert_eq!(join_paths("", ""), "/");
}

#[test]
fn join_paths_should_treat_leading_slash_as_absolute() {
    assert_eq!(join_paths("/foo", "/bar"), "/bar");
    assert_eq!(join_paths("/foo/", "/bar/"), "/bar");
    assert_eq!(join_paths("/anything/<id>", "//x//y/"), "/x/y");
    assert_eq!(join_paths("/foo", "/"), "/");
}

#[test]
fn join_paths_should_preserve_parameters() {
    assert_eq!(join_paths("/foo/<bar>", ""), "/foo/<bar>");
    assert_eq!(join_paths("/foo/<bar>", "baz"), "/foo/<bar>/baz");
    assert_eq!(join_paths("/foo", "<bar>/baz"), "/foo/<bar>/baz");
    assert_eq!(join_paths("", "<bar>/baz"), "/<bar>/baz");
}

#[test]
fn join_paths_nests_like_the_tree_builder() {
    let nested = join_paths(&join_paths("/app", "settings"), "profile");
    assert_eq!(nested, "/app/settings/profile");
    assert_eq!(
        join_paths(&join_paths("/app", "settings"), "/profile"),
        normalize_path("/profile")
    );
}
