use crate::{
    build, normalize_path, History, MatchChain, Matcher, MatcherBackend,
    NoMatchingRouteError, ParamsMap, RouteDef, RouteMatch, RouteNode,
    RouterError,
};
use core::fmt;
use std::sync::Arc;
use trellis_config::RouterOptions;

/// The result of one successful navigation.
pub struct Navigation<V> {
    path: String,
    chain: MatchChain<V>,
    active: RouteMatch<V>,
    params: ParamsMap,
}

impl<V> Navigation<V> {
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn chain(&self) -> &MatchChain<V> {
        &self.chain
    }

    pub fn active(&self) -> &RouteMatch<V> {
        &self.active
    }

    pub fn params(&self) -> &ParamsMap {
        &self.params
    }
}

impl<V> Clone for Navigation<V> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            chain: self.chain.clone(),
            active: self.active.clone(),
            params: self.params.clone(),
        }
    }
}

impl<V> fmt::Debug for Navigation<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigation")
            .field("path", &self.path)
            .field("chain", &self.chain)
            .field("params", &self.params)
            .finish()
    }
}

/// Where a router is in its lifecycle.
pub enum RouterState<'a, V> {
    /// Constructed, nothing navigated yet.
    Idle,
    Active(&'a Navigation<V>),
}

/// Owns a built route tree and the navigation state on top of it.
///
/// State only changes through [`go`](Router::go) and
/// [`replace`](Router::replace), each of which runs to completion before
/// returning. A failed navigation leaves every piece of state as it was.
/// Callers driving one router from several threads must serialize those
/// calls themselves.
///
/// ```rust
/// use trellis_router::{RouteDef, Router};
///
/// let mut router = Router::new([
///     RouteDef::with_view("/", |_| "home".to_string()),
///     RouteDef::with_view("/users/<user_id>", |m| {
///         format!("user {}", m.params().get("user_id").unwrap_or_default())
///     }),
/// ])?;
///
/// router.go("/users/42")?;
/// assert_eq!(router.current_path(), Some("/users/42"));
/// assert_eq!(router.render().as_deref(), Some("user 42"));
/// assert!(router.go("/missing").is_err());
/// assert_eq!(router.current_path(), Some("/users/42"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct Router<V> {
    root: Arc<RouteNode<V>>,
    matcher: MatcherBackend,
    navigation: Option<Navigation<V>>,
    history: History,
}

impl<V> Router<V> {
    /// Builds the route tree with default options.
    pub fn new(
        forest: impl IntoIterator<Item = RouteDef<V>>,
    ) -> Result<Self, RouterError> {
        Self::with_options(forest, RouterOptions::default())
    }

    pub fn with_options(
        forest: impl IntoIterator<Item = RouteDef<V>>,
        options: RouterOptions,
    ) -> Result<Self, RouterError> {
        let root = build(forest)?;
        Self::from_tree(root, options)
    }

    /// Wraps an already built tree. Several routers may share one tree.
    pub fn from_tree(
        root: Arc<RouteNode<V>>,
        options: RouterOptions,
    ) -> Result<Self, RouterError> {
        options.validate()?;
        Ok(Self {
            root,
            matcher: options.matcher.into(),
            navigation: None,
            history: History::with_limit(options.history_limit),
        })
    }

    /// Navigates to `path`, pushing it onto the history.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, fields(path = %path))
    )]
    pub fn go(
        &mut self,
        path: &str,
    ) -> Result<&RouteMatch<V>, NoMatchingRouteError> {
        let navigation = self.resolve(path)?;
        self.history.push(navigation.path.clone());
        Ok(self.commit(navigation))
    }

    /// Navigates to `path`, overwriting the newest history entry instead of
    /// adding one.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(level = "trace", skip_all, fields(path = %path))
    )]
    pub fn replace(
        &mut self,
        path: &str,
    ) -> Result<&RouteMatch<V>, NoMatchingRouteError> {
        let navigation = self.resolve(path)?;
        self.history.replace_top(navigation.path.clone());
        Ok(self.commit(navigation))
    }

    /// Resolves `path` without touching any state. The first chain in
    /// depth-first order is the canonical one.
    pub fn resolve(
        &self,
        path: &str,
    ) -> Result<Navigation<V>, NoMatchingRouteError> {
        let path = normalize_path(path);
        let chain = self
            .matcher
            .match_routes(&self.root, &path)
            .into_iter()
            .next();
        let Some(chain) = chain else {
            return Err(NoMatchingRouteError { path });
        };
        let Some(active) = chain.terminal().cloned() else {
            return Err(NoMatchingRouteError { path });
        };
        let params = chain.params();
        Ok(Navigation {
            path,
            chain,
            active,
            params,
        })
    }

    fn commit(&mut self, navigation: Navigation<V>) -> &RouteMatch<V> {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            path = %navigation.path,
            template = %navigation.active.template(),
            depth = navigation.chain.len(),
            "navigated"
        );
        &self.navigation.insert(navigation).active
    }

    pub fn state(&self) -> RouterState<'_, V> {
        match &self.navigation {
            None => RouterState::Idle,
            Some(navigation) => RouterState::Active(navigation),
        }
    }

    pub fn is_idle(&self) -> bool {
        self.navigation.is_none()
    }

    fn navigation(&self) -> Option<&Navigation<V>> {
        self.navigation.as_ref()
    }

    /// The normalized path of the last successful navigation.
    pub fn current_path(&self) -> Option<&str> {
        self.navigation().map(Navigation::path)
    }

    /// The deepest match of the canonical chain.
    pub fn active_match(&self) -> Option<&RouteMatch<V>> {
        self.navigation().map(Navigation::active)
    }

    pub fn active_chain(&self) -> Option<&MatchChain<V>> {
        self.navigation().map(Navigation::chain)
    }

    /// Absolute template of the active route, e.g. `/users/<user_id>`.
    pub fn active_template(&self) -> Option<&str> {
        self.active_match().map(RouteMatch::template)
    }

    /// Parameters captured along the whole active chain.
    pub fn params(&self) -> Option<&ParamsMap> {
        self.navigation().map(Navigation::params)
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn root(&self) -> &Arc<RouteNode<V>> {
        &self.root
    }

    pub fn matcher(&self) -> MatcherBackend {
        self.matcher
    }

    /// Builds the active route's view.
    pub fn render(&self) -> Option<V> {
        self.active_match().and_then(RouteMatch::view)
    }
}

impl<V> fmt::Debug for Router<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("matcher", &self.matcher)
            .field("current_path", &self.current_path())
            .field("history", &self.history)
            .finish_non_exhaustive()
    }
}
