//! Usage API data models
//!
//! Response of `GET /api/oauth/usage`

use serde::{Deserialize, Deserializer, Serialize};

/// One rolling-window quota
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageBucket {
    /// Utilization percentage (0-100)
    #[serde(default, deserialize_with = "null_as_default")]
    pub utilization: f64,
    /// RFC 3339 timestamp when the window resets
    #[serde(default, deserialize_with = "null_as_default")]
    pub resets_at: String,
}

/// Both windows returned by the usage endpoint
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsageSnapshot {
    /// 5-hour rolling window
    #[serde(default, deserialize_with = "null_as_default")]
    pub five_hour: UsageBucket,
    /// 7-day rolling window
    #[serde(default, deserialize_with = "null_as_default")]
    pub seven_day: UsageBucket,
}

/// Treat an explicit `null` like a missing field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
