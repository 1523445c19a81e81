use thiserror::Error;
use trellis_config::errors::RouterConfigError;

/// A route declaration that can never be turned into a usable tree.
///
/// Raised while the tree is built, before any navigation is possible.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteDeclarationError {
    #[error("malformed dynamic segment {segment:?} in route {template:?}")]
    MalformedSegment { template: String, segment: String },
    #[error("parameter <{name}> appears more than once in route {template:?}")]
    DuplicateParam { template: String, name: String },
    #[error("route {template:?} has neither a view nor child routes")]
    DeadEnd { template: String },
    #[error(
        "absolute route {template:?} is nested under {parent:?} but does not \
         extend it"
    )]
    DetachedAbsolutePath { template: String, parent: String },
    #[error("no routes were declared")]
    EmptyForest,
}

/// Navigation to a path that no declared route matches.
///
/// The router leaves its state untouched when this is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no route matches {path:?}")]
pub struct NoMatchingRouteError {
    /// The normalized path that was requested.
    pub path: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error(transparent)]
    Declaration(#[from] RouteDeclarationError),
    #[error(transparent)]
    NoMatch(#[from] NoMatchingRouteError),
    #[error(transparent)]
    Config(#[from] RouterConfigError),
}

/// A captured parameter could not be read as the requested type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParamError {
    #[error("could not find parameter {0}")]
    Missing(String),
    #[error("parameter {name} = {value:?} is invalid: {reason}")]
    Invalid {
        name: String,
        value: String,
        reason: String,
    },
}
