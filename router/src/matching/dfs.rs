use super::{
    split_path, MatchChain, Matcher, PathSegment, RouteMatch, RouteNode,
};
use crate::ParamsMap;
use std::sync::Arc;

/// The reference matcher: a plain recursive depth-first walk.
///
/// Each call frame receives its own copy of the ancestor chain and returns
/// the chains it completed, so nothing is shared between frames.
#[derive(Debug, Default, Clone, Copy)]
pub struct DfsMatcher;

impl Matcher for DfsMatcher {
    fn match_routes<V>(
        &self,
        root: &Arc<RouteNode<V>>,
        path: &str,
    ) -> Vec<MatchChain<V>> {
        let target = split_path(path);
        visit(root, &target, Vec::new())
    }
}

fn visit<V>(
    node: &Arc<RouteNode<V>>,
    remaining: &[&str],
    ancestors: Vec<RouteMatch<V>>,
) -> Vec<MatchChain<V>> {
    let own = node.segments();
    if own.len() > remaining.len() {
        return Vec::new();
    }
    let (consumed, rest) = remaining.split_at(own.len());

    let mut params = ParamsMap::new();
    for (segment, concrete) in own.iter().zip(consumed) {
        if !segment.accepts(concrete) {
            return Vec::new();
        }
        if let PathSegment::Dynamic(name) = segment {
            params.insert(name.as_str(), *concrete);
        }
    }

    let mut chain = ancestors;
    if !node.is_synthetic() {
        chain.push(RouteMatch::new(Arc::clone(node), params, consumed));
    }

    let mut found = Vec::new();
    if rest.is_empty() && node.view().is_some() {
        found.push(MatchChain(chain.clone()));
    }
    for child in node.children() {
        found.extend(visit(child, rest, chain.clone()));
    }
    found
}

#[cfg(test)]
mod tests {
    use super::DfsMatcher;
    use crate::{build, params_map, Matcher, RouteDef};

    #[test]
    fn prunes_on_literal_mismatch() {
        let root = build([RouteDef::<()>::new("/a")
            .child(RouteDef::with_view("b", |_| ()))])
        .unwrap();
        assert!(DfsMatcher.match_routes(&root, "/x/b").is_empty());
        assert!(DfsMatcher.match_routes(&root, "/a").is_empty());
        assert_eq!(DfsMatcher.match_routes(&root, "/a/b").len(), 1);
    }

    #[test]
    fn captures_only_own_segments() {
        let root = build([RouteDef::<()>::new("/org/<org>")
            .child(RouteDef::with_view("repo/<repo>", |_| ()))])
        .unwrap();
        let chains = DfsMatcher.match_routes(&root, "/org/rust/repo/trellis");
        assert_eq!(chains.len(), 1);
        let chain = &chains[0];
        assert_eq!(chain.matches()[0].params(), &params_map!("org" => "rust"));
        assert_eq!(
            chain.matches()[1].params(),
            &params_map!("repo" => "trellis")
        );
        assert_eq!(chain.matches()[1].matched(), "/repo/trellis");
    }
}
