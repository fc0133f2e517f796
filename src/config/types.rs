//! Public configuration types.
//!
//! These are the resolved, ready-to-use structs that the generator consumes.
//! Raw TOML deserialization types live in `raw.rs`.

/// Site-wide metadata used in page titles, headers and meta tags.
#[derive(Debug, Clone)]
pub struct SiteInfo {
    /// Canonical site URL, with trailing slash.
    pub website: String,
    /// Author name used in bylines and the default meta author tag.
    pub author: String,
    /// Description for the meta description tag.
    pub description: String,
    /// Site title, also interpolated into social tooltips.
    pub title: String,
    /// Path to the OpenGraph image; `None` means no image is set.
    pub og_image: Option<String>,
    /// Whether the theme offers a light/dark mode toggle.
    pub light_and_dark_mode: bool,
    /// Posts listed per index page.
    pub posts_per_page: u32,
}

impl SiteInfo {
    /// Returns `true` if an OpenGraph image path is configured.
    pub fn has_og_image(&self) -> bool {
        self.og_image.is_some()
    }
}

/// Logo rendering configuration.
///
/// Dimensions are only meaningful when `enable` is set.
#[derive(Debug, Clone)]
pub struct LogoImage {
    /// Render the image logo instead of the text title.
    pub enable: bool,
    /// Whether the logo asset is an SVG (raster otherwise).
    pub svg: bool,
    /// Display width in pixels.
    pub width: u32,
    /// Display height in pixels.
    pub height: u32,
}

/// One outbound social/contact link.
#[derive(Debug, Clone)]
pub struct SocialLink {
    /// Icon key, conventionally one of [`KNOWN_ICON_KEYS`].
    pub name: String,
    /// Absolute `http(s)` URL or `mailto:` URI.
    pub href: String,
    /// Human-readable tooltip.
    pub link_title: String,
    /// Whether the link is rendered.
    pub active: bool,
}

/// Fully-resolved site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub site: SiteInfo,
    /// Locale tags in preference order; empty means environment default.
    pub locale: Vec<String>,
    pub logo: LogoImage,
    /// Social links in display order.
    pub socials: Vec<SocialLink>,
}

/// Icon keys the frontend ships icons for. A social `name` outside this set
/// still renders, with a generic link icon.
pub const KNOWN_ICON_KEYS: &[&str] = &[
    "Github",
    "Facebook",
    "Instagram",
    "LinkedIn",
    "Mail",
    "Twitter",
    "Twitch",
    "YouTube",
    "WhatsApp",
    "Snapchat",
    "Pinterest",
    "TikTok",
    "CodePen",
    "Discord",
    "GitLab",
    "Reddit",
    "Skype",
    "Steam",
    "Telegram",
    "Mastodon",
];

impl SiteConfig {
    /// Built-in configuration — the values the site ships with.
    ///
    /// Tooltip templates are interpolated here, once; the CodePen tooltip
    /// embeds the site title.
    pub fn builtin() -> Self {
        let title = "RKour".to_string();
        Self {
            site: SiteInfo {
                website: "https://raskour.com/".to_string(),
                author: "Rasmeet Kour".to_string(),
                description: "My personal blog to share articles about React, JavaScript, \
                              Accessibility, tips and web fundamentals."
                    .to_string(),
                title: title.clone(),
                og_image: None,
                light_and_dark_mode: true,
                posts_per_page: 3,
            },
            locale: vec!["en-EN".to_string()],
            logo: LogoImage {
                enable: false,
                svg: true,
                width: 216,
                height: 46,
            },
            socials: vec![
                SocialLink {
                    name: "Github".to_string(),
                    href: "https://github.com/Raskour".to_string(),
                    link_title: "Github Profile".to_string(),
                    active: true,
                },
                SocialLink {
                    name: "LinkedIn".to_string(),
                    href: "https://www.linkedin.com/in/ras-kour/".to_string(),
                    link_title: "LinkedIn Profile".to_string(),
                    active: true,
                },
                SocialLink {
                    name: "Mail".to_string(),
                    href: "mailto:rasmeetkour735@gmail.com".to_string(),
                    link_title: "Send an email to rasmeetkour735@gmail.com".to_string(),
                    active: true,
                },
                SocialLink {
                    name: "CodePen".to_string(),
                    href: "https://codesandbox.io/u/raskour".to_string(),
                    link_title: format!("{title} on CodePen"),
                    active: true,
                },
            ],
        }
    }

    /// Socials with `active` set, in declaration order.
    pub fn active_socials(&self) -> impl Iterator<Item = &SocialLink> {
        self.socials.iter().filter(|s| s.active)
    }

    /// Returns `true` if consumers should render the image logo instead of
    /// the text title.
    pub fn logo_should_render(&self) -> bool {
        self.logo.enable
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_four_socials_in_order() {
        let cfg = SiteConfig::builtin();
        let names: Vec<&str> = cfg.socials.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Github", "LinkedIn", "Mail", "CodePen"]);
    }

    #[test]
    fn builtin_names_are_known_icon_keys() {
        let cfg = SiteConfig::builtin();
        for social in &cfg.socials {
            assert!(
                KNOWN_ICON_KEYS.contains(&social.name.as_str()),
                "'{}' has no icon",
                social.name
            );
        }
    }

    #[test]
    fn no_og_image_by_default() {
        let cfg = SiteConfig::builtin();
        assert!(!cfg.site.has_og_image());
    }

    #[test]
    fn logo_disabled_by_default() {
        let cfg = SiteConfig::builtin();
        assert!(!cfg.logo_should_render());
        assert!(cfg.logo.svg);
        assert_eq!((cfg.logo.width, cfg.logo.height), (216, 46));
    }
}
