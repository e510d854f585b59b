//! The blog's configuration variants. Each is an independent instance of the
//! same schema built entirely from literals; they differ in avatar, social
//! links, and search setup.

use crate::config::{Author, SiteConfig, SocialLink, Status};
use crate::features::{MediumZoom, ReadSpeed, ReadTime, Sponsor, Statistics};
use crate::search::{Fuse, FuseOptions, Search, SearchType, DEFAULT_KEYS};
use std::collections::BTreeMap;
use std::fmt;

const AVATAR: &str = "https://avatars.githubusercontent.com/u/99781695?v=4";

// Placeholder; no second avatar has been published.
const ALT_AVATAR: &str = "https://gitee.com/wzm_love_coding/avatar.png";

/// Names a configuration variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    Gitee,
    Github,
    Fuse,
    FuseStrict,
}

impl Preset {
    pub fn all() -> [Preset; 4] {
        [Preset::Gitee, Preset::Github, Preset::Fuse, Preset::FuseStrict]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Gitee => "gitee",
            Preset::Github => "github",
            Preset::Fuse => "fuse",
            Preset::FuseStrict => "fuse-strict",
        }
    }

    pub fn build(&self) -> SiteConfig {
        match self {
            Preset::Gitee => gitee(),
            Preset::Github => github(),
            Preset::Fuse => fuse(),
            Preset::FuseStrict => fuse_strict(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = String;

    fn from_str(s: &str) -> Result<Preset, String> {
        Preset::all()
            .iter()
            .copied()
            .find(|preset| preset.name() == s)
            .ok_or_else(|| format!("unknown preset `{}`", s))
    }
}

/// Built-in search, a single Gitee link.
pub fn gitee() -> SiteConfig {
    SiteConfig {
        url: String::from("https://valaxy.site/"),
        lang: String::from("zh-CN"),
        title: String::from("ZM's Blog"),
        subtitle: String::from("╮(╯▽╰)╭"),
        description: String::from("唱，跳，rap~~"),
        favicon: String::from(AVATAR),
        author: Author {
            name: String::from("前端练习生zm"),
            avatar: String::from(AVATAR),
            status: Status {
                emoji: String::from("🐔"),
                message: String::from("练习时长两年半~"),
            },
        },
        social: vec![gitee_link()],
        search: Search {
            enable: true,
            kind: SearchType::Default,
        },
        fuse: None,
        sponsor: Sponsor::default(),
        statistics: Statistics {
            enable: true,
            read_time: ReadTime {
                speed: ReadSpeed { cn: 300, en: 200 },
            },
        },
        medium_zoom: Some(MediumZoom {
            enable: Some(true),
            options: BTreeMap::new(),
        }),
    }
}

/// Built-in search, GitHub and Gitee links. The GitHub profile link is a
/// placeholder; the account name is assumed from the Gitee one.
pub fn github() -> SiteConfig {
    let mut config = gitee();
    config.social = vec![
        SocialLink {
            name: String::from("GitHub"),
            link: String::from("https://github.com/wzm-love-coding"),
            icon: String::from("i-ri-github-line"),
            color: String::from("#6e5494"),
        },
        gitee_link(),
    ];
    config
}

/// Full-text search over the standard fields with the backend's default
/// matching, and a placeholder avatar. Social links are those of
/// [`github`], including its placeholder profile link.
pub fn fuse() -> SiteConfig {
    let mut config = github();
    config.author.avatar = String::from(ALT_AVATAR);
    config.search = Search {
        enable: true,
        kind: SearchType::Fuse,
    };
    config.fuse = Some(Fuse {
        data_path: None,
        options: FuseOptions {
            keys: DEFAULT_KEYS.iter().map(|k| k.to_string()).collect(),
            threshold: None,
            ignore_location: None,
        },
    });
    config
}

/// Full-text search over titles and content only, stricter matching, match
/// position ignored. Avatar and social links are those of [`fuse`], so the
/// same placeholders apply.
pub fn fuse_strict() -> SiteConfig {
    let mut config = fuse();
    config.fuse = Some(Fuse {
        data_path: None,
        options: FuseOptions {
            keys: vec![String::from("title"), String::from("content")],
            threshold: Some(0.3),
            ignore_location: Some(true),
        },
    });
    config
}

fn gitee_link() -> SocialLink {
    SocialLink {
        name: String::from("Gitee"),
        link: String::from("https://gitee.com/wzm_love_coding"),
        icon: String::from("i-ri-github-line"),
        color: String::from("#6e5494"),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for preset in Preset::all() {
            assert_eq!(Ok(preset), preset.name().parse::<Preset>());
        }
        assert!("algolia".parse::<Preset>().is_err());
    }

    #[test]
    fn test_presets_differ() {
        let configs: Vec<SiteConfig> = Preset::all().iter().map(Preset::build).collect();
        for (i, a) in configs.iter().enumerate() {
            for b in &configs[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_avatars() {
        assert_eq!(AVATAR, gitee().author.avatar);
        assert_eq!(AVATAR, github().author.avatar);
        assert_eq!(ALT_AVATAR, fuse().author.avatar);
        assert_eq!(ALT_AVATAR, fuse_strict().author.avatar);
    }

    #[test]
    fn test_fuse_strict_keeps_explicit_values() {
        let config = fuse_strict();
        assert!(config.search.enable);
        assert_eq!(SearchType::Fuse, config.search.kind);
        let options = config.fuse_options().expect("fuse options");
        assert_eq!(vec!["title", "content"], options.keys);
        assert_eq!(Some(true), options.ignore_location);
        assert_eq!(0.3, options.threshold());
    }

    #[test]
    fn test_fuse_uses_default_threshold() {
        let config = fuse();
        let options = config.fuse_options().expect("fuse options");
        assert_eq!(None, options.threshold);
        assert_eq!(crate::search::DEFAULT_THRESHOLD, options.threshold());
    }

    #[test]
    fn test_gitee_matches_project_file() -> crate::config::Result<()> {
        let loaded = SiteConfig::from_file(
            &std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
                .join("testdata")
                .join(crate::config::PROJECT_FILE),
        )?;
        assert_eq!(gitee(), loaded);
        Ok(())
    }
}
