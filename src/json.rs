//! Serde helpers used across the record types.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserializes a closed-set enumeration, yielding `None` instead of an
/// error when the raw value does not match any known constant.
///
/// The provider adds values to its enumerations over time; fields declared
/// with this helper tolerate unknown values the same way unknown keys are
/// tolerated. Use together with `#[serde(default)]` so absent keys also map
/// to `None`:
///
/// ```ignore
/// #[serde(default, deserialize_with = "crate::json::soft_enum")]
/// pub status: Option<JobState>,
/// ```
pub(crate) fn soft_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| serde_json::from_value(v).ok()))
}
