// Module name shadows the `serde` crate; use `::serde` for the external crate.
use ::serde::{Deserialize, Deserializer};

/// Deserialize an optional string, treating whitespace-only input as absent.
///
/// Use with `#[serde(default, deserialize_with = "holocron_core::serde::blank_as_none")]`
/// so presence checks only have to look at `Option::is_none`.
pub fn blank_as_none<'de, D>(d: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(d)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}
