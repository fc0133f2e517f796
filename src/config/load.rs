//! Configuration loading.
//!
//! Reads TOML files, supports `[meta] base = "..."` inheritance chains, and
//! falls back to `config/default.toml` and then to the built-in values.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::AppError;

use super::raw::RawSiteConfig;
use super::types::{LogoImage, SiteConfig, SiteInfo, SocialLink};
use super::validate;

/// Deep-merge two TOML values.
/// Tables are merged recursively — the overlay only needs to specify keys
/// that differ from the base. For every other type (string, integer, array
/// of socials, …) the overlay value replaces the base value wholesale.
fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_tbl), toml::Value::Table(overlay_tbl)) => {
            for (key, ov_val) in overlay_tbl {
                let merged = match base_tbl.remove(&key) {
                    Some(base_val) => merge_toml(base_val, ov_val),
                    None => ov_val,
                };
                base_tbl.insert(key, merged);
            }
            toml::Value::Table(base_tbl)
        }
        (_, overlay) => overlay,
    }
}

/// Read a config file, follow any `[meta] base = "..."` chain, and return
/// the fully merged `toml::Value`. `visited` carries canonicalized paths
/// already seen in this chain so circular references are caught early.
fn load_raw_merged(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<toml::Value, AppError> {
    let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
    if !visited.insert(canonical) {
        return Err(AppError::Config(format!(
            "circular base reference detected at: {}",
            path.display()
        )));
    }

    let raw = fs::read_to_string(path)
        .map_err(|e| AppError::Config(format!("cannot read {}: {e}", path.display())))?;

    let overlay_val: toml::Value = toml::from_str(&raw)
        .map_err(|e| AppError::Config(format!("parse error in {}: {e}", path.display())))?;

    if let Some(base_str) = overlay_val
        .get("meta")
        .and_then(|m| m.get("base"))
        .and_then(|b| b.as_str())
    {
        let base_path = if Path::new(base_str).is_absolute() {
            PathBuf::from(base_str)
        } else {
            path.parent().unwrap_or(Path::new(".")).join(base_str)
        };
        let base_val = load_raw_merged(&base_path, visited)?;
        Ok(merge_toml(base_val, overlay_val))
    } else {
        Ok(overlay_val)
    }
}

/// Load the site configuration.
///
/// Resolution order: explicit `config_path`, then the `RKOUR_CONFIG` env var
/// (with `~` expansion), then `config/default.toml` if present, then the
/// built-in values. File-based loads are validated before being returned.
pub fn load(config_path: Option<&str>) -> Result<SiteConfig, AppError> {
    if let Some(path) = config_path {
        return load_from(Path::new(path));
    }

    if let Ok(path) = env::var("RKOUR_CONFIG") {
        return load_from(&expand_home(&path));
    }

    let default_path = Path::new("config/default.toml");
    if default_path.exists() {
        load_from(default_path)
    } else {
        Ok(SiteConfig::builtin())
    }
}

/// Load from an explicit path. Follows `[meta] base = "..."` inheritance
/// chains, resolves the raw shapes, then validates fail-fast.
pub fn load_from(path: &Path) -> Result<SiteConfig, AppError> {
    let merged_val = load_raw_merged(path, &mut HashSet::new())?;

    let parsed: RawSiteConfig = Deserialize::deserialize(merged_val).map_err(
        |e: toml::de::Error| AppError::Config(format!("config error in {}: {e}", path.display())),
    )?;

    let cfg = resolve(parsed);
    validate::check(&cfg)?;
    Ok(cfg)
}

/// Turn the raw TOML shapes into the public config.
///
/// Tooltip templates are interpolated here, once: a social without an
/// explicit `link_title` gets "<site title> on <name>". The empty `og_image`
/// sentinel becomes `None`.
fn resolve(parsed: RawSiteConfig) -> SiteConfig {
    let site = SiteInfo {
        website: parsed.site.website,
        author: parsed.site.author,
        description: parsed.site.description,
        title: parsed.site.title,
        og_image: if parsed.site.og_image.is_empty() {
            None
        } else {
            Some(parsed.site.og_image)
        },
        light_and_dark_mode: parsed.site.light_and_dark_mode,
        posts_per_page: parsed.site.posts_per_page,
    };

    let socials = parsed
        .socials
        .into_iter()
        .map(|s| {
            let link_title = s
                .link_title
                .unwrap_or_else(|| format!("{} on {}", site.title, s.name));
            SocialLink {
                name: s.name,
                href: s.href,
                link_title,
                active: s.active,
            }
        })
        .collect();

    SiteConfig {
        site,
        locale: parsed.locale,
        logo: LogoImage {
            enable: parsed.logo.enable,
            svg: parsed.logo.svg,
            width: parsed.logo.width,
            height: parsed.logo.height,
        },
        socials,
    }
}

/// Expand a leading `~` to the user's home directory.
/// Absolute or relative paths without `~` are returned unchanged.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}
