//! Site configuration — the typed registry the generator reads.
//!
//! The built-in values load lazily into frozen statics ([`SITE`], [`LOCALE`],
//! [`LOGO_IMAGE`], [`SOCIALS`]); a TOML file can replace them via [`load`].
//! Either way the configuration is constructed once and never mutated.
//!
//! # Module layout
//!
//! - **types** — Public configuration structs consumed by the generator
//!   (`SiteConfig`, `SiteInfo`, `LogoImage`, `SocialLink`).
//! - **raw** — Raw TOML deserialization types (`RawSiteConfig`, …).
//!   These mirror the file shape and use serde defaults; kept private.
//! - **load** — Loading logic: `load`, `load_from`, `expand_home`, plus the
//!   `[meta] base = "..."` overlay merge.
//! - **validate** — Fail-fast invariant checks run on every file-based load.

mod load;
mod raw;
mod types;
mod validate;

pub use load::{expand_home, load, load_from};
pub use types::*;
pub use validate::check as validate;

use std::sync::LazyLock;

/// The frozen built-in registry — constructed on first access, never mutated.
pub static REGISTRY: LazyLock<SiteConfig> = LazyLock::new(SiteConfig::builtin);

/// Site metadata.
pub static SITE: LazyLock<SiteInfo> = LazyLock::new(|| REGISTRY.site.clone());

/// Locale tags in preference order; empty means environment default.
pub static LOCALE: LazyLock<Vec<String>> = LazyLock::new(|| REGISTRY.locale.clone());

/// Logo rendering configuration.
pub static LOGO_IMAGE: LazyLock<LogoImage> = LazyLock::new(|| REGISTRY.logo.clone());

/// Social links in display order.
pub static SOCIALS: LazyLock<Vec<SocialLink>> = LazyLock::new(|| REGISTRY.socials.clone());
