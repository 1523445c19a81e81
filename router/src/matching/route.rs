use super::RouteMatch;
use core::fmt;
use std::sync::Arc;

/// Builds the view for a matched route.
pub type ViewFn<V> = Arc<dyn Fn(&RouteMatch<V>) -> V + Send + Sync>;

/// A declared route: a template, an optional view and nested routes.
///
/// Templates without a leading `/` are resolved against the parent's
/// absolute template; templates with one are taken as absolute.
///
/// ```rust
/// use trellis_router::RouteDef;
///
/// let routes: RouteDef<&'static str> = RouteDef::new("/users")
///     .child(RouteDef::with_view("<user_id>", |_| "user"))
///     .child(RouteDef::with_view("<user_id>/posts/<post_id>", |_| "post"));
/// assert_eq!(routes.children().len(), 2);
/// ```
pub struct RouteDef<V> {
    path: String,
    view: Option<ViewFn<V>>,
    children: Vec<RouteDef<V>>,
}

impl<V> RouteDef<V> {
    /// A route without a view. It needs at least one child to be valid.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            view: None,
            children: Vec::new(),
        }
    }

    pub fn with_view<F>(path: impl Into<String>, view: F) -> Self
    where
        F: Fn(&RouteMatch<V>) -> V + Send + Sync + 'static,
    {
        Self::new(path).view(view)
    }

    pub fn view<F>(mut self, view: F) -> Self
    where
        F: Fn(&RouteMatch<V>) -> V + Send + Sync + 'static,
    {
        self.view = Some(Arc::new(view));
        self
    }

    pub fn child(mut self, child: RouteDef<V>) -> Self {
        self.children.push(child);
        self
    }

    pub fn children_from(
        mut self,
        children: impl IntoIterator<Item = RouteDef<V>>,
    ) -> Self {
        self.children.extend(children);
        self
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn has_view(&self) -> bool {
        self.view.is_some()
    }

    pub fn children(&self) -> &[RouteDef<V>] {
        &self.children
    }

    pub(crate) fn into_parts(
        self,
    ) -> (String, Option<ViewFn<V>>, Vec<RouteDef<V>>) {
        (self.path, self.view, self.children)
    }
}

impl<V> Clone for RouteDef<V> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            view: self.view.clone(),
            children: self.children.clone(),
        }
    }
}

impl<V> fmt::Debug for RouteDef<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteDef")
            .field("path", &self.path)
            .field("has_view", &self.view.is_some())
            .field("children", &self.children)
            .finish()
    }
}
