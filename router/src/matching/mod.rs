mod dfs;
mod flat;
mod path_segment;
mod resolve_path;
mod route;
mod tree;

pub use dfs::*;
pub use flat::*;
pub use path_segment::*;
pub use resolve_path::*;
pub use route::*;
pub use tree::*;

use crate::ParamsMap;
use core::fmt;
use std::sync::Arc;
use trellis_config::MatcherKind;

/// One node of a match chain together with what it captured.
pub struct RouteMatch<V> {
    node: Arc<RouteNode<V>>,
    /// Parameters captured by this node's own segments only.
    params: ParamsMap,
    /// The portion of the concrete path consumed by this node, e.g. `/42`.
    matched: String,
}

impl<V> RouteMatch<V> {
    pub(crate) fn new(
        node: Arc<RouteNode<V>>,
        params: ParamsMap,
        consumed: &[&str],
    ) -> Self {
        let mut matched = String::new();
        for segment in consumed {
            matched.push('/');
            matched.push_str(segment);
        }
        Self {
            node,
            params,
            matched,
        }
    }

    pub fn node(&self) -> &Arc<RouteNode<V>> {
        &self.node
    }

    /// The matched node's absolute template.
    pub fn template(&self) -> &str {
        self.node.path()
    }

    pub fn params(&self) -> &ParamsMap {
        &self.params
    }

    pub fn matched(&self) -> &str {
        &self.matched
    }

    /// Calls the node's view builder with this match, if it has one.
    pub fn view(&self) -> Option<V> {
        self.node.view().map(|view| view(self))
    }
}

impl<V> Clone for RouteMatch<V> {
    fn clone(&self) -> Self {
        Self {
            node: Arc::clone(&self.node),
            params: self.params.clone(),
            matched: self.matched.clone(),
        }
    }
}

/// Two matches are equal when they refer to the very same node and captured
/// the same values.
impl<V> PartialEq for RouteMatch<V> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
            && self.params == other.params
            && self.matched == other.matched
    }
}

impl<V> Eq for RouteMatch<V> {}

impl<V> fmt::Debug for RouteMatch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteMatch")
            .field("template", &self.node.path())
            .field("matched", &self.matched)
            .field("params", &self.params)
            .finish()
    }
}

/// Every node matched on the way from the root to a route with a view,
/// outermost first.
pub struct MatchChain<V>(pub(crate) Vec<RouteMatch<V>>);

impl<V> MatchChain<V> {
    pub fn matches(&self) -> &[RouteMatch<V>] {
        &self.0
    }

    /// The deepest match, whose view is rendered.
    pub fn terminal(&self) -> Option<&RouteMatch<V>> {
        self.0.last()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RouteMatch<V>> + '_ {
        self.0.iter()
    }

    /// Union of every member's parameters; deeper members win on duplicate
    /// names.
    pub fn params(&self) -> ParamsMap {
        let mut params = ParamsMap::new();
        for matched in &self.0 {
            params.merge(matched.params());
        }
        params
    }

    /// The concrete path this chain consumed.
    pub fn path(&self) -> String {
        let path: String = self.0.iter().map(RouteMatch::matched).collect();
        if path.is_empty() {
            "/".to_string()
        } else {
            path
        }
    }

    /// Absolute templates of the members, outermost first.
    pub fn templates(&self) -> Vec<&str> {
        self.0.iter().map(RouteMatch::template).collect()
    }
}

impl<V> Clone for MatchChain<V> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<V> PartialEq for MatchChain<V> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<V> Eq for MatchChain<V> {}

impl<V> fmt::Debug for MatchChain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

impl<V> IntoIterator for MatchChain<V> {
    type Item = RouteMatch<V>;
    type IntoIter = std::vec::IntoIter<RouteMatch<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a MatchChain<V> {
    type Item = &'a RouteMatch<V>;
    type IntoIter = std::slice::Iter<'a, RouteMatch<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Resolves a path against a built route tree.
///
/// Implementations return every complete chain in depth-first order:
/// earlier-declared siblings and shallower matches come first. No match is an
/// empty `Vec`, never an error. Routes are not re-ranked by specificity, so a
/// dynamic route declared before a static sibling wins for any path both
/// accept.
pub trait Matcher {
    fn match_routes<V>(
        &self,
        root: &Arc<RouteNode<V>>,
        path: &str,
    ) -> Vec<MatchChain<V>>;
}

/// Runtime choice between the two matchers.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum MatcherBackend {
    #[default]
    Reference,
    Accelerated,
}

impl From<MatcherKind> for MatcherBackend {
    fn from(kind: MatcherKind) -> Self {
        match kind {
            MatcherKind::Reference => MatcherBackend::Reference,
            MatcherKind::Accelerated => MatcherBackend::Accelerated,
        }
    }
}

impl Matcher for MatcherBackend {
    fn match_routes<V>(
        &self,
        root: &Arc<RouteNode<V>>,
        path: &str,
    ) -> Vec<MatchChain<V>> {
        match self {
            MatcherBackend::Reference => DfsMatcher.match_routes(root, path),
            MatcherBackend::Accelerated => {
                FlatMatcher.match_routes(root, path)
            }
        }
    }
}

/// Matches with the reference depth-first matcher.
pub fn match_routes<V>(
    root: &Arc<RouteNode<V>>,
    path: &str,
) -> Vec<MatchChain<V>> {
    DfsMatcher.match_routes(root, path)
}
