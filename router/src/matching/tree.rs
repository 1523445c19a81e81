use super::{
    join_paths, parse_segment, split_path, PathSegment, RouteDef, ViewFn,
};
use crate::RouteDeclarationError;
use core::fmt;
use std::{collections::HashSet, sync::Arc};

/// How many more target segments a subtree can consume before reaching a
/// route with a view, counting the node's own segments.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reach {
    pub min: usize,
    pub max: usize,
}

impl Reach {
    #[inline]
    pub fn contains(&self, remaining: usize) -> bool {
        self.min <= remaining && remaining <= self.max
    }
}

/// An immutable node of the built route tree.
///
/// Nodes own their children and never point back at their parent, so a
/// built tree can be shared freely between threads.
pub struct RouteNode<V> {
    path: String,
    segments: Vec<PathSegment>,
    view: Option<ViewFn<V>>,
    children: Vec<Arc<RouteNode<V>>>,
    reach: Reach,
    synthetic: bool,
}

impl<V> RouteNode<V> {
    /// The absolute template, already joined with every ancestor.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// This node's own segments, relative to its parent.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn view(&self) -> Option<&ViewFn<V>> {
        self.view.as_ref()
    }

    pub fn children(&self) -> &[Arc<RouteNode<V>>] {
        &self.children
    }

    pub fn reach(&self) -> Reach {
        self.reach
    }

    /// Whether this is the root created to hold several top-level routes.
    /// Such a root never shows up in a match chain.
    pub fn is_synthetic(&self) -> bool {
        self.synthetic
    }

    /// Absolute templates of every route that has a view, in the order the
    /// matcher would visit them.
    pub fn routes(&self) -> Vec<&str> {
        let mut routes = Vec::new();
        self.collect_routes(&mut routes);
        routes
    }

    fn collect_routes<'a>(&'a self, routes: &mut Vec<&'a str>) {
        if self.view.is_some() {
            routes.push(&self.path);
        }
        for child in &self.children {
            child.collect_routes(routes);
        }
    }
}

impl<V> fmt::Debug for RouteNode<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteNode")
            .field("path", &self.path)
            .field("segments", &self.segments)
            .field("has_view", &self.view.is_some())
            .field("synthetic", &self.synthetic)
            .field("children", &self.children)
            .finish()
    }
}

/// Builds the route tree from a forest of declarations.
///
/// A single declaration becomes the root itself. Several declarations are
/// placed under a synthetic `/` root in declaration order.
pub fn build<V>(
    forest: impl IntoIterator<Item = RouteDef<V>>,
) -> Result<Arc<RouteNode<V>>, RouteDeclarationError> {
    let mut forest: Vec<RouteDef<V>> = forest.into_iter().collect();
    let root = match forest.len() {
        0 => return Err(RouteDeclarationError::EmptyForest),
        1 => match forest.pop() {
            Some(def) => build_node(def, "/", &[])?,
            None => return Err(RouteDeclarationError::EmptyForest),
        },
        _ => {
            let children = forest
                .into_iter()
                .map(|def| build_node(def, "/", &[]).map(Arc::new))
                .collect::<Result<Vec<_>, _>>()?;
            RouteNode {
                path: "/".to_string(),
                segments: Vec::new(),
                view: None,
                reach: reach_of(0, false, &children),
                children,
                synthetic: true,
            }
        }
    };
    Ok(Arc::new(root))
}

fn build_node<V>(
    def: RouteDef<V>,
    parent: &str,
    parent_segments: &[&str],
) -> Result<RouteNode<V>, RouteDeclarationError> {
    let (template, view, children) = def.into_parts();
    let path = join_paths(parent, &template);
    let absolute = split_path(&path);

    let own = absolute.strip_prefix(parent_segments).ok_or_else(|| {
        RouteDeclarationError::DetachedAbsolutePath {
            template: path.clone(),
            parent: parent.to_string(),
        }
    })?;

    let segments = own
        .iter()
        .map(|segment| parse_segment(&path, segment))
        .collect::<Result<Vec<_>, _>>()?;

    let mut names = HashSet::new();
    for segment in &segments {
        if let PathSegment::Dynamic(name) = segment {
            if !names.insert(name.as_str()) {
                return Err(RouteDeclarationError::DuplicateParam {
                    template: path.clone(),
                    name: name.clone(),
                });
            }
        }
    }

    if view.is_none() && children.is_empty() {
        return Err(RouteDeclarationError::DeadEnd { template: path });
    }

    let children = children
        .into_iter()
        .map(|child| build_node(child, &path, &absolute).map(Arc::new))
        .collect::<Result<Vec<_>, _>>()?;

    #[cfg(feature = "tracing")]
    tracing::trace!(path = %path, own = segments.len(), "built route");

    Ok(RouteNode {
        reach: reach_of(segments.len(), view.is_some(), &children),
        path,
        segments,
        view,
        children,
        synthetic: false,
    })
}

fn reach_of<V>(
    own: usize,
    has_view: bool,
    children: &[Arc<RouteNode<V>>],
) -> Reach {
    let mut min = if has_view { Some(0) } else { None };
    let mut max = min;
    for child in children {
        let reach = child.reach();
        min = Some(min.map_or(reach.min, |m: usize| m.min(reach.min)));
        max = Some(max.map_or(reach.max, |m: usize| m.max(reach.max)));
    }
    // every leaf carries a view, so only an empty synthetic root lands here
    // with nothing reachable
    match (min, max) {
        (Some(min), Some(max)) => Reach {
            min: own + min,
            max: own + max,
        },
        _ => Reach { min: 1, max: 0 },
    }
}
