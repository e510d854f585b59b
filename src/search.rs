//! Search settings: the [`Search`] toggle and backend selector, and the
//! [`Fuse`] block for the full-text backend. These values are passed through
//! to the search library untouched.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The default match threshold used by the full-text backend when
/// [`FuseOptions::threshold`] is unset.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// The fields indexed by the full-text backend when none are configured.
pub const DEFAULT_KEYS: [&str; 5] =
    ["title", "tags", "categories", "excerpt", "content"];

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Search {
    pub enable: bool,

    /// The backend. Only meaningful when `enable` is set.
    #[serde(rename = "type", skip_serializing_if = "SearchType::is_default")]
    pub kind: SearchType,
}

/// Selects the search backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// The framework's built-in search.
    Default,

    /// The full-text backend, configured by [`Fuse`].
    Fuse,
}

impl Default for SearchType {
    fn default() -> Self {
        SearchType::Default
    }
}

impl SearchType {
    fn is_default(&self) -> bool {
        *self == SearchType::Default
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SearchType::Default => f.write_str("default"),
            SearchType::Fuse => f.write_str("fuse"),
        }
    }
}

/// The top-level `fuse` block.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Fuse {
    /// Where the framework writes the generated search index, relative to
    /// the site root. The framework picks a location when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,

    pub options: FuseOptions,
}

/// Matching options for the full-text backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FuseOptions {
    /// The indexed fields. Treated as a set: order is preserved for output
    /// but duplicates are reported by [`crate::validate`].
    pub keys: Vec<String>,

    /// Match strictness in `[0, 1]`; lower is stricter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,

    /// Whether the position of a match within the text is ignored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_location: Option<bool>,
}

impl Default for FuseOptions {
    fn default() -> Self {
        FuseOptions {
            keys: DEFAULT_KEYS.iter().map(|k| k.to_string()).collect(),
            threshold: None,
            ignore_location: None,
        }
    }
}

impl FuseOptions {
    /// The effective threshold, falling back to [`DEFAULT_THRESHOLD`].
    pub fn threshold(&self) -> f64 {
        self.threshold.unwrap_or(DEFAULT_THRESHOLD)
    }

    /// The effective location setting; location matters unless told
    /// otherwise.
    pub fn ignore_location(&self) -> bool {
        self.ignore_location.unwrap_or(false)
    }
}
