//! Defines [`SiteConfig`], the record describing the blog's identity and
//! feature toggles, along with the logic for loading it from a project file
//! and exporting it for the static site framework.

use crate::features::{MediumZoom, Sponsor, Statistics};
use crate::search::{Fuse, FuseOptions, Search, SearchType};
use crate::util::open;
use crate::validate::{validate, Violation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::debug;

/// The name of the project file searched for by
/// [`SiteConfig::from_directory`].
pub const PROJECT_FILE: &str = "site.config.yaml";

/// The blog's site configuration. Every field has a default, so a project
/// file only needs to list the values it cares about.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// The canonical site origin, e.g., `https://valaxy.site/`.
    pub url: String,

    /// The content language as a locale tag, e.g., `zh-CN`.
    pub lang: String,

    pub title: String,
    pub subtitle: String,
    pub description: String,

    /// The location of the site icon.
    pub favicon: String,

    pub author: Author,

    /// Outbound profile links, in display order.
    pub social: Vec<SocialLink>,

    pub search: Search,

    /// Options for the full-text search backend. Only consulted when
    /// [`Search::enable`] is set and [`Search::kind`] is [`SearchType::Fuse`];
    /// see [`SiteConfig::fuse_options`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuse: Option<Fuse>,

    pub sponsor: Sponsor,
    pub statistics: Statistics,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium_zoom: Option<MediumZoom>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        SiteConfig {
            url: String::from("/"),
            lang: String::from("zh-CN"),
            title: String::new(),
            subtitle: String::new(),
            description: String::new(),
            favicon: String::from("/favicon.svg"),
            author: Author::default(),
            social: Vec::new(),
            search: Search::default(),
            fuse: None,
            sponsor: Sponsor::default(),
            statistics: Statistics::default(),
            medium_zoom: None,
        }
    }
}

/// The site author's identity.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub name: String,

    /// The location of the avatar image.
    pub avatar: String,

    pub status: Status,
}

/// A short status shown next to the author's avatar.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Status {
    pub emoji: String,
    pub message: String,
}

/// An outbound profile link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// The display name, e.g., `GitHub`.
    pub name: String,

    /// The target URL.
    pub link: String,

    /// An icon identifier understood by the theme, e.g., `i-ri-github-line`.
    pub icon: String,

    /// The brand color, e.g., `#6e5494`.
    pub color: String,
}

impl SiteConfig {
    /// Searches `dir` and then each of its ancestors for [`PROJECT_FILE`] and
    /// loads the first one found.
    pub fn from_directory(dir: &Path) -> Result<SiteConfig> {
        // A relative path like `.` has no parents of its own to climb.
        let start = dir.canonicalize().map_err(|err| Error::Open {
            path: dir.to_owned(),
            err,
        })?;
        for ancestor in start.ancestors() {
            let path = ancestor.join(PROJECT_FILE);
            if path.exists() {
                return SiteConfig::from_file(&path);
            }
        }
        Err(Error::NotFound {
            start: dir.to_owned(),
        })
    }

    /// Loads a [`SiteConfig`] from a YAML project file.
    pub fn from_file(path: &Path) -> Result<SiteConfig> {
        let config: SiteConfig = serde_yaml::from_reader(open(path, "project")?)
            .map_err(|err| Error::Parse {
                path: path.to_owned(),
                err,
            })?;
        debug!(path = %path.display(), "loaded site configuration");
        Ok(config)
    }

    /// Parses a [`SiteConfig`] from a YAML string.
    pub fn from_yaml_str(input: &str) -> Result<SiteConfig> {
        Ok(serde_yaml::from_str(input)?)
    }

    /// Serializes the configuration as YAML, the project file format.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Serializes the configuration as pretty-printed JSON, the format the
    /// static site framework reads.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Serializes the configuration in the given [`Format`].
    pub fn export(&self, format: Format) -> Result<String> {
        match format {
            Format::Yaml => self.to_yaml(),
            Format::Json => self.to_json(),
        }
    }

    /// Returns the full-text search options if and only if search is enabled
    /// and the full-text backend is selected. The `fuse` block is otherwise
    /// ignored, even when present.
    pub fn fuse_options(&self) -> Option<&FuseOptions> {
        if self.search.enable && self.search.kind == SearchType::Fuse {
            self.fuse.as_ref().map(|fuse| &fuse.options)
        } else {
            None
        }
    }

    /// Checks the configuration against the schema's invariants. See
    /// [`crate::validate`].
    pub fn validate(&self) -> Vec<Violation> {
        validate(self)
    }
}

/// The output format for [`SiteConfig`] exports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Format, String> {
        match s {
            "yaml" | "yml" => Ok(Format::Yaml),
            "json" => Ok(Format::Json),
            _ => Err(format!("unknown format `{}`", s)),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

/// The error type for loading and exporting site configuration.
#[derive(Debug)]
pub enum Error {
    /// Returned when a file couldn't be opened.
    Open { path: PathBuf, err: std::io::Error },

    /// Returned when no [`PROJECT_FILE`] exists in the starting directory or
    /// any of its ancestors.
    NotFound { start: PathBuf },

    /// Returned when a project file isn't valid YAML or doesn't match the
    /// schema.
    Parse {
        path: PathBuf,
        err: serde_yaml::Error,
    },

    /// Returned for other YAML (de)serialization errors.
    Yaml(serde_yaml::Error),

    /// Returned for JSON serialization errors.
    Json(serde_json::Error),

    /// Returned when the log subscriber can't be installed.
    Logger(String),
}

impl fmt::Display for Error {
    /// Implements [`fmt::Display`] for [`Error`].
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Open { path, err } => {
                write!(f, "Opening file '{}': {}", path.display(), err)
            }
            Error::NotFound { start } => write!(
                f,
                "Could not find `{}` in '{}' or any parent directory",
                PROJECT_FILE,
                start.display()
            ),
            Error::Parse { path, err } => {
                write!(f, "Parsing '{}': {}", path.display(), err)
            }
            Error::Yaml(err) => err.fmt(f),
            Error::Json(err) => err.fmt(f),
            Error::Logger(msg) => write!(f, "Initializing logger: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    /// Implements [`std::error::Error`] for [`Error`].
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Open { path: _, err } => Some(err),
            Error::NotFound { start: _ } => None,
            Error::Parse { path: _, err } => Some(err),
            Error::Yaml(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Logger(_) => None,
        }
    }
}

impl From<serde_yaml::Error> for Error {
    /// Converts [`serde_yaml::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: serde_yaml::Error) -> Error {
        Error::Yaml(err)
    }
}

impl From<serde_json::Error> for Error {
    /// Converts [`serde_json::Error`]s into [`Error`]. This allows us to use
    /// the `?` operator.
    fn from(err: serde_json::Error) -> Error {
        Error::Json(err)
    }
}
