#![forbid(unsafe_code)]

//! A hierarchical path router.
//!
//! Route declarations ([`RouteDef`]) are built once into an immutable tree of
//! [`RouteNode`]s. A [`Matcher`] resolves a concrete path against that tree
//! into every [`MatchChain`] that fully consumes it, and a [`Router`] keeps
//! the navigation state (current path, active match, history) on top.
//!
//! ```rust
//! use trellis_router::{match_routes, build, RouteDef};
//!
//! let root = build([RouteDef::new("/app").child(RouteDef::with_view(
//!     "settings/profile",
//!     |_| "profile",
//! ))])?;
//!
//! let chains = match_routes(&root, "/app/settings/profile");
//! assert_eq!(chains.len(), 1);
//! assert_eq!(chains[0].templates(), vec!["/app", "/app/settings/profile"]);
//! # Ok::<(), trellis_router::RouteDeclarationError>(())
//! ```

mod error;
mod history;
mod matching;
mod params;
mod router;

pub use error::*;
pub use history::*;
pub use matching::*;
pub use params::*;
pub use router::*;
pub use trellis_config::{MatcherKind, RouterOptions};
