//! Deserialization helpers for loosely typed backend records

use serde::{Deserialize, Deserializer};

/// Treat an explicit `null` like a missing key.
///
/// Pair with `#[serde(default)]` so both cases yield `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
