use semver::Version;
use serde::Deserialize;
use tracing::debug;

/// How a remote version string is compared to the local one
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonMode {
    /// Raw string ordering ("2.4" > "2.3.9", "9.0" > "10.0")
    #[default]
    Lexicographic,
    /// Component-wise numeric ordering, falling back to string ordering
    Semantic,
}

/// Parse a version, padding missing minor/patch components with zeros
pub fn parse_version(version: &str) -> Option<Version> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}

/// Returns true if the remote version should be offered as an update
pub fn is_update_available(mode: ComparisonMode, local_version: &str, remote_version: &str) -> bool {
    match mode {
        ComparisonMode::Lexicographic => remote_version > local_version,
        ComparisonMode::Semantic => {
            match (parse_version(local_version), parse_version(remote_version)) {
                (Some(local), Some(remote)) => remote > local,
                _ => {
                    debug!(
                        "Falling back to string comparison for {} and {}",
                        local_version, remote_version
                    );
                    remote_version > local_version
                }
            }
        }
    }
}
