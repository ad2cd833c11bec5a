use std::{
    env, fs, io,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use shared::error::ControllerError;
use tracing::warn;

use crate::viewport::VisibilityThreshold;

pub const DEFAULT_SETTINGS_FILE: &str = "portfolio.toml";
const ENV_PREFIX: &str = "PORTFOLIO__";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub rotation_interval_ms: u64,
    pub submission_pending_ms: u64,
    pub submission_reset_ms: u64,
    pub section_threshold: f32,
    pub item_threshold: f32,
    pub carousel_item_width: f64,
    pub header_scroll_threshold: f32,
    pub hero_intro_delay_ms: u64,
    pub hero_shape_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            rotation_interval_ms: 5000,
            submission_pending_ms: 2000,
            submission_reset_ms: 3000,
            section_threshold: VisibilityThreshold::SECTION.fraction(),
            item_threshold: VisibilityThreshold::ITEM.fraction(),
            carousel_item_width: 420.0,
            header_scroll_threshold: 50.0,
            hero_intro_delay_ms: 800,
            hero_shape_count: 50,
            hero_seed: None,
        }
    }
}

impl Settings {
    pub fn rotation_interval(&self) -> Duration {
        Duration::from_millis(self.rotation_interval_ms)
    }

    pub fn submission_pending_delay(&self) -> Duration {
        Duration::from_millis(self.submission_pending_ms)
    }

    pub fn submission_reset_delay(&self) -> Duration {
        Duration::from_millis(self.submission_reset_ms)
    }

    pub fn hero_intro_delay(&self) -> Duration {
        Duration::from_millis(self.hero_intro_delay_ms)
    }

    pub fn section_threshold(&self) -> Result<VisibilityThreshold, ControllerError> {
        VisibilityThreshold::new(self.section_threshold).map_err(|_| {
            ControllerError::invalid_setting(
                "section_threshold",
                format!("{} is not in (0, 1]", self.section_threshold),
            )
        })
    }

    pub fn item_threshold(&self) -> Result<VisibilityThreshold, ControllerError> {
        VisibilityThreshold::new(self.item_threshold).map_err(|_| {
            ControllerError::invalid_setting(
                "item_threshold",
                format!("{} is not in (0, 1]", self.item_threshold),
            )
        })
    }

    pub fn validate(&self) -> Result<(), ControllerError> {
        if self.rotation_interval_ms == 0 {
            return Err(ControllerError::invalid_setting(
                "rotation_interval_ms",
                "interval must be positive",
            ));
        }
        self.section_threshold()?;
        self.item_threshold()?;
        if !(self.carousel_item_width.is_finite() && self.carousel_item_width > 0.0) {
            return Err(ControllerError::invalid_setting(
                "carousel_item_width",
                format!("{} is not a positive width", self.carousel_item_width),
            ));
        }
        if !self.header_scroll_threshold.is_finite() || self.header_scroll_threshold < 0.0 {
            return Err(ControllerError::invalid_setting(
                "header_scroll_threshold",
                format!("{} is not a non-negative offset", self.header_scroll_threshold),
            ));
        }
        Ok(())
    }

    /// Applies `PORTFOLIO__<FIELD>` overrides. Values that do not parse are
    /// skipped with a warning.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        fn parse<T: std::str::FromStr>(
            lookup: &impl Fn(&str) -> Option<String>,
            field: &str,
            target: &mut T,
        ) {
            let key = format!("{ENV_PREFIX}{}", field.to_ascii_uppercase());
            let Some(raw) = lookup(&key) else {
                return;
            };
            match raw.trim().parse::<T>() {
                Ok(value) => *target = value,
                Err(_) => warn!(%key, value = %raw, "config: ignoring unparsable override"),
            }
        }

        parse(&lookup, "rotation_interval_ms", &mut self.rotation_interval_ms);
        parse(&lookup, "submission_pending_ms", &mut self.submission_pending_ms);
        parse(&lookup, "submission_reset_ms", &mut self.submission_reset_ms);
        parse(&lookup, "section_threshold", &mut self.section_threshold);
        parse(&lookup, "item_threshold", &mut self.item_threshold);
        parse(&lookup, "carousel_item_width", &mut self.carousel_item_width);
        parse(&lookup, "header_scroll_threshold", &mut self.header_scroll_threshold);
        parse(&lookup, "hero_intro_delay_ms", &mut self.hero_intro_delay_ms);
        parse(&lookup, "hero_shape_count", &mut self.hero_shape_count);

        let key = format!("{ENV_PREFIX}HERO_SEED");
        if let Some(raw) = lookup(&key) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => self.hero_seed = Some(seed),
                Err(_) => warn!(%key, value = %raw, "config: ignoring unparsable override"),
            }
        }
    }
}

/// Loads settings from `path` (or `portfolio.toml` in the working directory),
/// then layers `PORTFOLIO__*` environment variables on top and validates.
///
/// A missing default file is fine; a missing explicit file is not.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => (PathBuf::from(DEFAULT_SETTINGS_FILE), false),
    };

    let mut settings = match fs::read_to_string(&path) {
        Ok(raw) => toml::from_str::<Settings>(&raw)
            .with_context(|| format!("failed to parse settings file {}", path.display()))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound && !explicit => Settings::default(),
        Err(err) => {
            return Err(err).with_context(|| {
                format!("failed to read settings file {}", path.display())
            })
        }
    };

    settings.apply_overrides(|key| env::var(key).ok());
    settings
        .validate()
        .with_context(|| format!("invalid settings loaded from {}", path.display()))?;
    Ok(settings)
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
