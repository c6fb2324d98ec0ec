use serde::Deserialize;

/// Body returned by the store lookup endpoint
#[derive(Debug, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub results: Option<Vec<RemoteAppInfo>>,
}

impl LookupResponse {
    /// Consumes the response and returns its first entry, if any
    pub fn into_first(self) -> Option<RemoteAppInfo> {
        self.results.and_then(|results| results.into_iter().next())
    }
}

/// A single published release as reported by the store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteAppInfo {
    pub version: String,
    /// Store page for the release
    pub track_view_url: String,
}

/// Result of a completed check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Version declared in the bundle metadata
    pub local_version: String,
    /// Release reported by the store
    pub remote: RemoteAppInfo,
    pub update_available: bool,
}
