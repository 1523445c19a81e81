use super::{split_path, MatchChain, Matcher, PathSegment, RouteMatch, RouteNode};
use crate::ParamsMap;
use std::{ops::Range, sync::Arc};

/// A stack-based matcher that borrows from the target path while walking and
/// only allocates for chains it completes.
///
/// Subtrees whose [`Reach`](super::Reach) cannot cover the remaining segments
/// are skipped without being visited. Results are identical to
/// [`DfsMatcher`](super::DfsMatcher), order included.
#[derive(Debug, Default, Clone, Copy)]
pub struct FlatMatcher;

struct Frame<'n, V> {
    node: &'n Arc<RouteNode<V>>,
    offset: usize,
    trail_len: usize,
    captures_len: usize,
}

struct Step<'n, V> {
    node: &'n Arc<RouteNode<V>>,
    segments: Range<usize>,
    captures: Range<usize>,
}

impl Matcher for FlatMatcher {
    fn match_routes<V>(
        &self,
        root: &Arc<RouteNode<V>>,
        path: &str,
    ) -> Vec<MatchChain<V>> {
        let target = split_path(path);
        let mut found = Vec::new();
        let mut trail: Vec<Step<'_, V>> = Vec::new();
        let mut captures: Vec<(&str, &str)> = Vec::new();
        let mut stack = vec![Frame {
            node: root,
            offset: 0,
            trail_len: 0,
            captures_len: 0,
        }];

        while let Some(frame) = stack.pop() {
            trail.truncate(frame.trail_len);
            captures.truncate(frame.captures_len);

            let node = frame.node;
            let remaining = target.len() - frame.offset;
            if !node.reach().contains(remaining) {
                continue;
            }

            let end = frame.offset + node.segments().len();
            let Some(consumed) = target.get(frame.offset..end) else {
                continue;
            };
            if !node
                .segments()
                .iter()
                .zip(consumed)
                .all(|(segment, concrete)| segment.accepts(concrete))
            {
                continue;
            }

            let first_capture = captures.len();
            for (segment, concrete) in node.segments().iter().zip(consumed) {
                if let PathSegment::Dynamic(name) = segment {
                    captures.push((name.as_str(), *concrete));
                }
            }
            if !node.is_synthetic() {
                trail.push(Step {
                    node,
                    segments: frame.offset..end,
                    captures: first_capture..captures.len(),
                });
            }

            if end == target.len() && node.view().is_some() {
                found.push(materialize(&trail, &target, &captures));
            }

            // reversed so that the first-declared child is popped first
            for child in node.children().iter().rev() {
                stack.push(Frame {
                    node: child,
                    offset: end,
                    trail_len: trail.len(),
                    captures_len: captures.len(),
                });
            }
        }

        found
    }
}

fn materialize<V>(
    trail: &[Step<'_, V>],
    target: &[&str],
    captures: &[(&str, &str)],
) -> MatchChain<V> {
    let matches = trail
        .iter()
        .map(|step| {
            let params = captures[step.captures.clone()]
                .iter()
                .copied()
                .collect::<ParamsMap>();
            RouteMatch::new(
                Arc::clone(step.node),
                params,
                &target[step.segments.clone()],
            )
        })
        .collect();
    MatchChain(matches)
}

#[cfg(test)]
mod tests {
    use super::FlatMatcher;
    use crate::{build, DfsMatcher, Matcher, RouteDef};

    #[test]
    fn skips_subtrees_out_of_reach() {
        let root = build([RouteDef::<()>::new("/a")
            .child(RouteDef::with_view("b/c", |_| ()))])
        .unwrap();
        assert!(FlatMatcher.match_routes(&root, "/a/b").is_empty());
        assert!(FlatMatcher.match_routes(&root, "/a/b/c/d").is_empty());
        assert_eq!(FlatMatcher.match_routes(&root, "/a/b/c").len(), 1);
    }

    #[test]
    fn keeps_declaration_order() {
        let root = build([
            RouteDef::<()>::with_view("/items/<id>", |_| ()),
            RouteDef::with_view("/items/new", |_| ()),
        ])
        .unwrap();
        let flat = FlatMatcher.match_routes(&root, "/items/new");
        let dfs = DfsMatcher.match_routes(&root, "/items/new");
        assert_eq!(flat.len(), 2);
        assert_eq!(flat, dfs);
        assert_eq!(flat[0].templates(), vec!["/items/<id>"]);
    }
}
