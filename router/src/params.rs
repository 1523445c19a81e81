use crate::ParamError;
use linear_map::LinearMap;
use std::str::FromStr;

// A route rarely captures more than a handful of parameters, so a linear
// scan over a vector beats hashing here.
/// Captured dynamic segments, keyed by parameter name.
///
/// Equality ignores insertion order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ParamsMap(pub LinearMap<String, String>);

impl ParamsMap {
    /// Creates an empty map.
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with the given capacity.
    #[inline(always)]
    pub fn with_capacity(capacity: usize) -> Self {
        Self(LinearMap::with_capacity(capacity))
    }

    /// Inserts a value, returning the one it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Parses a parameter into any [`FromStr`] type.
    pub fn get_parsed<T>(&self, key: &str) -> Result<T, ParamError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let value = self
            .get(key)
            .ok_or_else(|| ParamError::Missing(key.to_string()))?;
        value.parse().map_err(|e: T::Err| ParamError::Invalid {
            name: key.to_string(),
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Copies every entry of `other` into `self`; entries from `other` win
    /// on duplicate names.
    pub fn merge(&mut self, other: &ParamsMap) {
        for (key, value) in other.0.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }
}

impl<K, V> FromIterator<(K, V)> for ParamsMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Builds a [`ParamsMap`] from `key => value` pairs.
///
/// ```rust
/// use trellis_router::params_map;
///
/// let params = params_map!("user_id" => "42");
/// assert_eq!(params.get("user_id"), Some("42"));
/// ```
#[macro_export]
macro_rules! params_map {
    ($($key:expr => $val:expr),* ,) => (
        $crate::params_map!($($key => $val),*)
    );
    ($($key:expr => $val:expr),*) => ({
        #[allow(unused_mut)]
        let mut map = $crate::ParamsMap::new();
        $( map.insert($key, $val); )*
        map
    });
}
