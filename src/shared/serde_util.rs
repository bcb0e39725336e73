//! Custom serde helpers for backend wire formats.

/// Deserializes a present-but-`null` JSON array as an empty `Vec`.
///
/// The backend sends `"bids": null` for an empty book side. Combine with
/// `#[serde(default)]` so an absent key stays `None` and can be reported as
/// missing by the conversion layer.
pub mod null_as_empty {
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: Deserialize<'de>,
    {
        let seq = Option::<Vec<T>>::deserialize(deserializer)?;
        Ok(Some(seq.unwrap_or_default()))
    }
}
