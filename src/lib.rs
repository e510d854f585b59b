//! Typed site configuration for a personal blog. The configuration is a
//! plain nested record ([`config::SiteConfig`]) of literal values describing
//! the blog's identity and its feature toggles, consumed by an external
//! static site framework. The crate:
//!
//! 1. Defines the schema ([`config`], [`search`], [`features`])
//! 2. Provides the blog's literal configuration variants ([`presets`])
//! 3. Loads project files and exports YAML or JSON ([`config`])
//! 4. Checks a configuration against the schema's invariants ([`validate`])
//!
//! Rendering, theming, and the search engine itself belong to the framework.

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]

pub mod config;
pub mod features;
pub mod logger;
pub mod presets;
pub mod search;
mod util;
pub mod validate;
