//! UI Settings
//!
//! Locale, theme and modal defaults, persisted as TOML in the config directory.

use crate::components::composite::modal::ModalSize;
use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use crate::i18n::Locale;
use crate::theme::colors::Palette;
use gpui::{App, Global};
use gpui_component::ThemeMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{error, info};

const SETTINGS_FILE: &str = "ui-kit.toml";
const LIGHT_THEME_MODE: &str = "light";
const DARK_THEME_MODE: &str = "dark";

/// Location of the settings file
pub fn settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE))
}

/// Persisted UI settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    locale: Option<String>,
    theme: Option<String>,
    modal_size: Option<ModalSize>,
    close_on_backdrop: Option<bool>,
}

impl Global for UiSettings {}

impl UiSettings {
    /// Load settings from the config directory, detecting the system locale when unset
    pub fn try_load() -> Result<Self> {
        let path = settings_path()?;
        let mut settings = Self::load_from(&path)?;

        if settings.locale.as_ref().is_none_or(|l| l.is_empty()) {
            let system = locale_config::Locale::current().to_string();
            let lang = system.split_once('-').map_or(system.as_str(), |(lang, _)| lang);
            if !lang.is_empty() {
                settings.locale = Some(lang.to_string());
            }
        }

        Ok(settings)
    }

    /// Load settings from `path`; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }

        let settings: Self = toml::from_str(&value).map_err(|e| {
            error!(error = %e, path = ?path, "Failed to parse settings file");
            e
        })?;
        Ok(settings)
    }

    /// Save settings to the config directory
    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path()?)
    }

    /// Save settings to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let value = toml::to_string_pretty(self)?;
        std::fs::write(path, value)?;
        info!(path = ?path, "Settings saved");
        Ok(())
    }

    /// Settings installed in the app, or defaults when none are installed
    pub fn global(cx: &App) -> Self {
        cx.try_global::<Self>().cloned().unwrap_or_default()
    }

    // ==================== Getters ====================

    pub fn locale(&self) -> Locale {
        self.locale
            .as_deref()
            .map(Locale::from_code)
            .unwrap_or_default()
    }

    pub fn theme(&self) -> ThemeMode {
        match self.theme.as_deref() {
            Some(DARK_THEME_MODE) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_mode(&self.theme())
    }

    pub fn modal_size(&self) -> ModalSize {
        self.modal_size.unwrap_or_default()
    }

    pub fn close_on_backdrop(&self) -> bool {
        self.close_on_backdrop.unwrap_or(true)
    }

    // ==================== Setters ====================

    pub fn set_locale(&mut self, locale: Locale) {
        self.locale = Some(locale.code().to_string());
    }

    pub fn set_theme(&mut self, theme: ThemeMode) {
        self.theme = Some(if matches!(theme, ThemeMode::Dark) {
            DARK_THEME_MODE.to_string()
        } else {
            LIGHT_THEME_MODE.to_string()
        });
    }

    pub fn set_modal_size(&mut self, size: ModalSize) {
        self.modal_size = Some(size);
    }

    pub fn set_close_on_backdrop(&mut self, close_on_backdrop: bool) {
        self.close_on_backdrop = Some(close_on_backdrop);
    }
}
