//! Raw TOML deserialization types.
//!
//! These structs mirror the TOML file shape and use `serde` defaults —
//! every key falls back to the built-in value, so a config file only needs
//! the keys it changes. The `load` module converts them into the public
//! `types` structs.

use serde::Deserialize;

/// Raw TOML shape — serde target before resolution.
#[derive(Deserialize)]
pub(super) struct RawSiteConfig {
    #[serde(default = "default_locale")]
    pub locale: Vec<String>,
    #[serde(default)]
    pub site: RawSite,
    #[serde(default)]
    pub logo: RawLogo,
    #[serde(default = "default_socials")]
    pub socials: Vec<RawSocial>,
}

#[derive(Deserialize)]
pub(super) struct RawSite {
    #[serde(default = "default_website")]
    pub website: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_description")]
    pub description: String,
    #[serde(default = "default_title")]
    pub title: String,
    /// Empty string means no OpenGraph image.
    #[serde(default)]
    pub og_image: String,
    #[serde(default = "default_true")]
    pub light_and_dark_mode: bool,
    #[serde(default = "default_posts_per_page")]
    pub posts_per_page: u32,
}

impl Default for RawSite {
    fn default() -> Self {
        Self {
            website: default_website(),
            author: default_author(),
            description: default_description(),
            title: default_title(),
            og_image: String::new(),
            light_and_dark_mode: true,
            posts_per_page: default_posts_per_page(),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct RawLogo {
    #[serde(default = "default_false")]
    pub enable: bool,
    #[serde(default = "default_true")]
    pub svg: bool,
    #[serde(default = "default_logo_width")]
    pub width: u32,
    #[serde(default = "default_logo_height")]
    pub height: u32,
}

impl Default for RawLogo {
    fn default() -> Self {
        Self {
            enable: false,
            svg: true,
            width: default_logo_width(),
            height: default_logo_height(),
        }
    }
}

#[derive(Deserialize)]
pub(super) struct RawSocial {
    pub name: String,
    pub href: String,
    /// Tooltip text; omitted means "<site title> on <name>".
    #[serde(default)]
    pub link_title: Option<String>,
    #[serde(default = "default_true")]
    pub active: bool,
}

// ── Default functions (used by serde) ────────────────────────────────────────

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

fn default_website() -> String {
    "https://raskour.com/".to_string()
}

fn default_author() -> String {
    "Rasmeet Kour".to_string()
}

fn default_description() -> String {
    "My personal blog to share articles about React, JavaScript, Accessibility, \
     tips and web fundamentals."
        .to_string()
}

fn default_title() -> String {
    "RKour".to_string()
}

fn default_posts_per_page() -> u32 {
    3
}

fn default_locale() -> Vec<String> {
    vec!["en-EN".to_string()]
}

fn default_logo_width() -> u32 {
    216
}

fn default_logo_height() -> u32 {
    46
}

fn default_socials() -> Vec<RawSocial> {
    vec![
        RawSocial {
            name: "Github".to_string(),
            href: "https://github.com/Raskour".to_string(),
            link_title: Some("Github Profile".to_string()),
            active: true,
        },
        RawSocial {
            name: "LinkedIn".to_string(),
            href: "https://www.linkedin.com/in/ras-kour/".to_string(),
            link_title: Some("LinkedIn Profile".to_string()),
            active: true,
        },
        RawSocial {
            name: "Mail".to_string(),
            href: "mailto:rasmeetkour735@gmail.com".to_string(),
            link_title: Some("Send an email to rasmeetkour735@gmail.com".to_string()),
            active: true,
        },
        // link_title omitted so the tooltip follows a retitled site.
        RawSocial {
            name: "CodePen".to_string(),
            href: "https://codesandbox.io/u/raskour".to_string(),
            link_title: None,
            active: true,
        },
    ]
}
