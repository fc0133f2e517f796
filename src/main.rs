//! rkour-site — site configuration check tool.
//!
//! Startup sequence:
//!   1. Load .env (if present)
//!   2. Init logger (RKOUR_LOG_LEVEL, falling back to "info")
//!   3. Load and validate the site config
//!   4. Print a summary and exit

use rkour_site::{config, error::AppError, logger};

use tracing::info;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), AppError> {
    // Load .env if present — ignore errors (file is optional).
    let _ = dotenvy::dotenv();

    let level = std::env::var("RKOUR_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    logger::parse_level(&level)?;
    logger::init(&level)?;

    let config_path = std::env::args().nth(1);
    let config = config::load(config_path.as_deref())?;

    info!(
        title = %config.site.title,
        author = %config.site.author,
        website = %config.site.website,
        posts_per_page = config.site.posts_per_page,
        locales = config.locale.len(),
        socials = config.socials.len(),
        active_socials = config.active_socials().count(),
        logo = config.logo_should_render(),
        "site config loaded"
    );

    println!(
        "✓ {} — {} active social link(s), {} post(s) per page",
        config.site.title,
        config.active_socials().count(),
        config.site.posts_per_page
    );

    Ok(())
}
