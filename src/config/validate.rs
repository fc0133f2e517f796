//! Load-time invariant checks.
//!
//! Authoring mistakes fail here, before any consumer sees the data.

use std::sync::LazyLock;

use regex::Regex;
use tracing::warn;
use url::Url;

use crate::error::AppError;

use super::types::{KNOWN_ICON_KEYS, SiteConfig};

// Letter subtags, optionally hyphen-separated: "en", "en-EN", "pt-BR".
const LOCALE_TAG_PATTERN: &str = r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{2,8})*$";

static LOCALE_TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LOCALE_TAG_PATTERN).expect("locale tag pattern must compile"));

/// Check every invariant, returning the first violation as a `Config` error
/// naming the offending field.
pub fn check(cfg: &SiteConfig) -> Result<(), AppError> {
    if cfg.site.posts_per_page == 0 {
        return Err(AppError::Config(
            "site.posts_per_page must be at least 1".to_string(),
        ));
    }

    for (idx, social) in cfg.socials.iter().enumerate() {
        if social.name.is_empty() {
            return Err(AppError::Config(format!(
                "socials[{idx}]: name must not be empty"
            )));
        }
        check_href(idx, &social.name, &social.href)?;
        if !KNOWN_ICON_KEYS.contains(&social.name.as_str()) {
            warn!(
                name = %social.name,
                "social name has no matching icon, a generic link icon will be used"
            );
        }
    }

    if cfg.logo.enable && (cfg.logo.width == 0 || cfg.logo.height == 0) {
        return Err(AppError::Config(format!(
            "logo is enabled but sized {}x{}; both dimensions must be positive",
            cfg.logo.width, cfg.logo.height
        )));
    }

    for tag in &cfg.locale {
        if !LOCALE_TAG_RE.is_match(tag) {
            return Err(AppError::Config(format!(
                "locale: '{tag}' is not a valid locale tag"
            )));
        }
    }

    Ok(())
}

/// A social href must be a parseable absolute `http(s)` URL or `mailto:` URI.
fn check_href(idx: usize, name: &str, href: &str) -> Result<(), AppError> {
    if href.is_empty() {
        return Err(AppError::Config(format!(
            "socials[{idx}] ({name}): href must not be empty"
        )));
    }

    let parsed = Url::parse(href).map_err(|e| {
        AppError::Config(format!("socials[{idx}] ({name}): invalid href '{href}': {e}"))
    })?;

    match parsed.scheme() {
        "http" | "https" | "mailto" => Ok(()),
        other => Err(AppError::Config(format!(
            "socials[{idx}] ({name}): href scheme '{other}' is not supported, use http(s) or mailto"
        ))),
    }
}
