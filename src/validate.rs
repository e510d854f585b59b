//! Schema-conformance checks for [`SiteConfig`]. Construction never fails;
//! [`validate`] is a separate pass that reports every [`Violation`] it finds
//! rather than stopping at the first.

use crate::config::SiteConfig;
use crate::search::SearchType;
use std::collections::HashSet;
use std::fmt;
use url::Url;

/// A single way in which a [`SiteConfig`] breaks the schema's invariants.
#[derive(Clone, Debug, PartialEq)]
pub enum Violation {
    /// `url` isn't an absolute `http` or `https` URL.
    SiteUrl(String),

    /// A social link's target isn't an absolute URL.
    SocialLink { name: String, link: String },

    /// Full-text search is selected but there is no `fuse` block.
    MissingFuseOptions,

    /// Full-text search is selected but indexes no fields.
    EmptyFuseKeys,

    /// The same field is listed more than once in `fuse.options.keys`.
    DuplicateFuseKey(String),

    /// `fuse.options.threshold` lies outside `[0, 1]`.
    Threshold(f64),

    /// A reading speed is zero.
    ReadSpeed { lang: &'static str },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Violation::SiteUrl(url) => {
                write!(f, "url `{}` is not an absolute http(s) URL", url)
            }
            Violation::SocialLink { name, link } => write!(
                f,
                "social link `{}` has invalid target `{}`",
                name, link
            ),
            Violation::MissingFuseOptions => {
                f.write_str("search type is `fuse` but no `fuse` block is set")
            }
            Violation::EmptyFuseKeys => f.write_str("fuse.options.keys is empty"),
            Violation::DuplicateFuseKey(key) => {
                write!(f, "fuse.options.keys lists `{}` more than once", key)
            }
            Violation::Threshold(t) => {
                write!(f, "fuse.options.threshold {} is outside [0, 1]", t)
            }
            Violation::ReadSpeed { lang } => write!(
                f,
                "statistics.readTime.speed.{} must be positive",
                lang
            ),
        }
    }
}

/// Checks `config` against the schema's invariants. The `fuse` block is only
/// inspected when [`SiteConfig::fuse_options`] would return it.
pub fn validate(config: &SiteConfig) -> Vec<Violation> {
    let mut violations = Vec::new();

    if !is_http_url(&config.url) {
        violations.push(Violation::SiteUrl(config.url.clone()));
    }

    for social in &config.social {
        if Url::parse(&social.link).is_err() {
            violations.push(Violation::SocialLink {
                name: social.name.clone(),
                link: social.link.clone(),
            });
        }
    }

    if config.search.enable && config.search.kind == SearchType::Fuse && config.fuse.is_none() {
        violations.push(Violation::MissingFuseOptions);
    }

    if let Some(options) = config.fuse_options() {
        if options.keys.is_empty() {
            violations.push(Violation::EmptyFuseKeys);
        }
        let mut seen = HashSet::new();
        for key in &options.keys {
            if !seen.insert(key.as_str()) {
                violations.push(Violation::DuplicateFuseKey(key.clone()));
            }
        }
        if let Some(threshold) = options.threshold {
            if !(0.0..=1.0).contains(&threshold) {
                violations.push(Violation::Threshold(threshold));
            }
        }
    }

    let speed = config.statistics.read_time.speed;
    if speed.cn == 0 {
        violations.push(Violation::ReadSpeed { lang: "cn" });
    }
    if speed.en == 0 {
        violations.push(Violation::ReadSpeed { lang: "en" });
    }

    violations
}

fn is_http_url(input: &str) -> bool {
    match Url::parse(input) {
        Ok(url) => url.scheme() == "http" || url.scheme() == "https",
        Err(_) => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::presets::{self, Preset};
    use crate::search::{Fuse, FuseOptions};

    #[test]
    fn test_presets_are_valid() {
        for preset in Preset::all() {
            let config = preset.build();
            assert_eq!(Vec::<Violation>::new(), validate(&config), "preset `{}`", preset);
            assert!(
                config.url.starts_with("http://") || config.url.starts_with("https://")
            );
            assert!(config.statistics.read_time.speed.cn > 0);
            assert!(config.statistics.read_time.speed.en > 0);
            if config.search.kind == SearchType::Fuse {
                let keys = &config.fuse.as_ref().expect("fuse block").options.keys;
                assert!(!keys.is_empty());
            }
        }
    }

    #[test]
    fn test_relative_url() {
        let mut config = presets::gitee();
        config.url = String::from("/");
        assert_eq!(vec![Violation::SiteUrl(String::from("/"))], validate(&config));
    }

    #[test]
    fn test_non_http_url() {
        let mut config = presets::gitee();
        config.url = String::from("ftp://example.org/");
        assert_eq!(
            vec![Violation::SiteUrl(String::from("ftp://example.org/"))],
            validate(&config)
        );
    }

    #[test]
    fn test_bad_social_link() {
        let mut config = presets::gitee();
        config.social[0].link = String::from("gitee.com/someone");
        assert_eq!(
            vec![Violation::SocialLink {
                name: String::from("Gitee"),
                link: String::from("gitee.com/someone"),
            }],
            validate(&config)
        );
    }

    #[test]
    fn test_fuse_problems_reported() {
        let mut config = presets::fuse();
        config.fuse = Some(Fuse {
            data_path: None,
            options: FuseOptions {
                keys: vec![String::from("title"), String::from("title")],
                threshold: Some(1.5),
                ignore_location: None,
            },
        });
        assert_eq!(
            vec![
                Violation::DuplicateFuseKey(String::from("title")),
                Violation::Threshold(1.5),
            ],
            validate(&config)
        );
    }

    #[test]
    fn test_empty_keys() {
        let mut config = presets::fuse();
        if let Some(fuse) = config.fuse.as_mut() {
            fuse.options.keys.clear();
        }
        assert_eq!(vec![Violation::EmptyFuseKeys], validate(&config));
    }

    #[test]
    fn test_missing_fuse_block() {
        let mut config = presets::fuse();
        config.fuse = None;
        assert_eq!(vec![Violation::MissingFuseOptions], validate(&config));
    }

    #[test]
    fn test_fuse_ignored_when_search_disabled() {
        let mut config = presets::fuse();
        config.search.enable = false;
        if let Some(fuse) = config.fuse.as_mut() {
            fuse.options.keys.clear();
            fuse.options.threshold = Some(-1.0);
        }
        assert!(validate(&config).is_empty());
    }

    #[test]
    fn test_zero_read_speed() {
        let mut config = presets::gitee();
        config.statistics.read_time.speed.cn = 0;
        config.statistics.read_time.speed.en = 0;
        assert_eq!(
            vec![
                Violation::ReadSpeed { lang: "cn" },
                Violation::ReadSpeed { lang: "en" },
            ],
            validate(&config)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            "statistics.readTime.speed.cn must be positive",
            Violation::ReadSpeed { lang: "cn" }.to_string()
        );
    }
}
