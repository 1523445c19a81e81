#![forbid(unsafe_code)]

//! Options for the Trellis router, loadable from TOML and the environment.
//!
//! ```toml
//! [router]
//! matcher = "accelerated"
//! history_limit = 64
//! ```
//!
//! Environment variables `TRELLIS_MATCHER` and `TRELLIS_HISTORY_LIMIT`
//! take precedence over anything read from a file.

pub mod errors;

use crate::errors::RouterConfigError;
use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::{env::VarError, fmt::Display, fs, path::Path, str::FromStr};
use typed_builder::TypedBuilder;

/// Name of the TOML table the router options are read from.
pub const SECTION: &str = "router";

/// Environment variable overriding [`RouterOptions::matcher`].
pub const MATCHER_ENV: &str = "TRELLIS_MATCHER";

/// Environment variable overriding [`RouterOptions::history_limit`].
pub const HISTORY_LIMIT_ENV: &str = "TRELLIS_HISTORY_LIMIT";

/// Which matcher backend resolves navigation paths.
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum MatcherKind {
    /// The recursive depth-first matcher.
    #[default]
    Reference,
    /// The stack-based matcher that prunes by subtree reach.
    Accelerated,
}

impl FromStr for MatcherKind {
    type Err = RouterConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        matcher_from_str(input)
    }
}

impl Display for MatcherKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatcherKind::Reference => f.write_str("reference"),
            MatcherKind::Accelerated => f.write_str("accelerated"),
        }
    }
}

/// Runtime options for a router.
#[derive(
    TypedBuilder,
    Debug,
    Default,
    Clone,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
)]
pub struct RouterOptions {
    /// Backend used by `go`/`replace`.
    #[builder(default)]
    #[serde(default)]
    pub matcher: MatcherKind,
    /// Upper bound on the number of history entries kept. Oldest entries are
    /// dropped first. `None` keeps everything.
    #[builder(default, setter(strip_option))]
    #[serde(default)]
    pub history_limit: Option<usize>,
}

impl RouterOptions {
    /// Checks the options for values that can never be honoured.
    pub fn validate(&self) -> Result<(), RouterConfigError> {
        if self.history_limit == Some(0) {
            return Err(RouterConfigError::InvalidHistoryLimit);
        }
        Ok(())
    }

    fn apply_env(mut self) -> Result<Self, RouterConfigError> {
        if let Some(matcher) = env_wo_default(MATCHER_ENV)? {
            self.matcher = matcher_from_str(&matcher)?;
        }
        if let Some(limit) = env_wo_default(HISTORY_LIMIT_ENV)? {
            let limit = limit.trim().parse::<usize>().map_err(|e| {
                RouterConfigError::ConfigError(format!(
                    "{HISTORY_LIMIT_ENV}: {e}"
                ))
            })?;
            self.history_limit = Some(limit);
        }
        Ok(self)
    }
}

/// Parses router options out of a TOML document containing a `[router]`
/// table. Environment variables are not consulted.
pub fn get_config_from_str(
    text: &str,
) -> Result<RouterOptions, RouterConfigError> {
    let config = Config::builder()
        .add_source(File::from_str(text, FileFormat::Toml))
        .build()?;
    let options = match config.get::<RouterOptions>(SECTION) {
        Ok(options) => options,
        Err(config::ConfigError::NotFound(_)) => {
            return Err(RouterConfigError::ConfigSectionNotFound)
        }
        Err(e) => return Err(e.into()),
    };
    options.validate()?;
    Ok(options)
}

/// Reads `path` and parses it with [`get_config_from_str`].
pub fn get_config_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<RouterOptions, RouterConfigError> {
    let text = fs::read_to_string(path.as_ref())
        .map_err(|_| RouterConfigError::ConfigNotFound)?;
    get_config_from_str(&text)
}

/// Loads options from an optional TOML file, then applies environment
/// overrides. Without a file, the defaults are the starting point.
pub fn get_configuration(
    path: Option<&str>,
) -> Result<RouterOptions, RouterConfigError> {
    let options = match path {
        Some(path) => get_config_from_file(path)?,
        None => RouterOptions::default(),
    };
    let options = options.apply_env()?;
    options.validate()?;
    Ok(options)
}

fn matcher_from_str(input: &str) -> Result<MatcherKind, RouterConfigError> {
    let sanitized = input.trim().to_lowercase();
    match sanitized.as_ref() {
        "reference" | "dfs" => Ok(MatcherKind::Reference),
        "accelerated" | "flat" => Ok(MatcherKind::Accelerated),
        _ => Err(RouterConfigError::ConfigError(format!(
            "{input} is not a supported matcher. Use 'reference' or \
             'accelerated'."
        ))),
    }
}

fn env_wo_default(key: &str) -> Result<Option<String>, RouterConfigError> {
    match std::env::var(key) {
        Ok(val) => Ok(Some(val)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e) => Err(RouterConfigError::ConfigError(format!("{key}: {e}"))),
    }
}

#[cfg(test)]
mod tests;
