//! Boolean-gated feature blocks: [`Sponsor`], [`Statistics`], and
//! [`MediumZoom`]. Each is independent of the others.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The sponsor block shown beneath posts.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Sponsor {
    pub enable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Payment methods, in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub methods: Vec<SponsorMethod>,
}

/// A way to sponsor the author, e.g., a QR code image.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SponsorMethod {
    pub name: String,
    pub url: String,
    pub color: String,
    pub icon: String,
}

/// Reading-time and word-count statistics.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Statistics {
    pub enable: bool,
    pub read_time: ReadTime,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadTime {
    pub speed: ReadSpeed,
}

/// Reading speeds used to estimate an article's reading time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReadSpeed {
    /// Characters per minute for Chinese text.
    pub cn: u32,

    /// Words per minute for English text.
    pub en: u32,
}

impl Default for ReadSpeed {
    fn default() -> Self {
        ReadSpeed { cn: 300, en: 200 }
    }
}

impl ReadSpeed {
    /// Estimates the minutes needed to read `cn_chars` Chinese characters and
    /// `en_words` English words, rounded up. Returns `None` if either speed is
    /// zero.
    pub fn minutes(&self, cn_chars: u32, en_words: u32) -> Option<u32> {
        if self.cn == 0 || self.en == 0 {
            return None;
        }
        let minutes = cn_chars as f64 / self.cn as f64 + en_words as f64 / self.en as f64;
        Some(minutes.ceil() as u32)
    }
}

/// Click-to-zoom on images.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediumZoom {
    /// Left to the framework, which keeps zoom off, when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,

    /// Options handed to the zoom library as-is, e.g., `background` or
    /// `margin`.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

impl MediumZoom {
    /// The effective toggle; zoom is off unless enabled explicitly.
    pub fn is_enabled(&self) -> bool {
        self.enable.unwrap_or(false)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_read_minutes() {
        let speed = ReadSpeed::default();
        assert_eq!(Some(0), speed.minutes(0, 0));
        assert_eq!(Some(1), speed.minutes(300, 0));
        assert_eq!(Some(2), speed.minutes(300, 1));
        assert_eq!(Some(1), speed.minutes(150, 100));
    }

    #[test]
    fn test_read_minutes_zero_speed() {
        let speed = ReadSpeed { cn: 0, en: 200 };
        assert_eq!(None, speed.minutes(10, 10));
    }

    #[test]
    fn test_medium_zoom_options_pass_through() -> serde_yaml::Result<()> {
        let zoom: MediumZoom =
            serde_yaml::from_str("enable: true\noptions:\n  margin: 24\n  background: '#000'\n")?;
        assert!(zoom.is_enabled());
        assert_eq!(Some(&serde_json::json!(24)), zoom.options.get("margin"));
        assert_eq!(Some(&serde_json::json!("#000")), zoom.options.get("background"));
        Ok(())
    }

    #[test]
    fn test_medium_zoom_options_without_enable() -> serde_yaml::Result<()> {
        let zoom: MediumZoom = serde_yaml::from_str("options:\n  margin: 24\n")?;
        assert_eq!(None, zoom.enable);
        assert!(!zoom.is_enabled());
        let out = serde_yaml::to_string(&zoom)?;
        assert!(!out.contains("enable"));
        assert!(out.contains("margin"));
        Ok(())
    }

    #[test]
    fn test_sponsor_methods() -> serde_yaml::Result<()> {
        let sponsor: Sponsor = serde_yaml::from_str(
            "
enable: true
methods:
  - name: WeChat
    url: https://example.org/wechat.png
    color: '#2DC100'
    icon: i-ri-wechat-pay-line
",
        )?;
        assert!(sponsor.enable);
        assert_eq!(1, sponsor.methods.len());
        assert_eq!("WeChat", sponsor.methods[0].name);
        assert_eq!(None, sponsor.title);
        Ok(())
    }
}
