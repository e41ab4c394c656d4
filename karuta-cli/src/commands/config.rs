use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use karuta_store::settings::{load_settings_from, save_settings_to};
use karuta_store::{Settings, settings_path};

use super::Context;
use crate::CliError;

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show(ctx: &Context) -> Result<(), CliError> {
    let path = settings_path();
    log::info!(
        "{}",
        "karuta settings".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");
    log::info!(
        "  Settings file: {} {}",
        path.display().if_supports_color(Stdout, |t| t.cyan()),
        if path.exists() {
            "(exists)".if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()).to_string()
        },
    );
    log::info!(
        "  Collection:    {}",
        ctx.collection_path.display().if_supports_color(Stdout, |t| t.cyan()),
    );
    log::info!("");

    let rendered =
        toml::to_string_pretty(&ctx.settings).map_err(|e| CliError::config(e.to_string()))?;
    for line in rendered.lines() {
        log::info!("  {}", line);
    }
    Ok(())
}

/// Change one setting and write the file back.
pub(crate) fn run_config_set(key: &str, value: &str) -> Result<(), CliError> {
    let path = settings_path();
    let mut settings: Settings = load_settings_from(&path)?;

    if let Err(e) = settings.set(key, value) {
        log::info!("Known keys: {}", Settings::KEYS.join(", "));
        return Err(e.into());
    }
    save_settings_to(&path, &settings)?;

    log::info!(
        "{} {} = {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        key.if_supports_color(Stdout, |t| t.bold()),
        if value.trim().is_empty() { "(default)" } else { value.trim() },
    );
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    println!("{}", settings_path().display());
    Ok(())
}
