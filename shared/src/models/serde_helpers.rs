//! Serde helpers for documents written by older versions of the storefront
//!
//! Legacy records may carry explicit `null`s where the current model has a
//! default, so these map `null` to the default instead of failing.

use serde::{Deserialize, Deserializer};

/// Deserialize bool that treats null as true
pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}

/// Deserialize any `Default` value that treats null as the default
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Field default for flags that are on unless stated otherwise
pub fn default_true() -> bool {
    true
}
