use std::path::PathBuf;
use std::sync::Arc;

use arc_swap::ArcSwap;
use figment::{
    Figment,
    providers::{Format, Json, Serialized},
};
use gpui::*;
use gpui_component::{Theme, ThemeMode, ThemeRegistry};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use snafu::{ResultExt, Snafu};

pub const SETTINGS_DIRECTORY_NAME: &str = "chatfolio";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Persisted appearance preferences.
///
/// `reduce_motion` skips the timed reveal entirely: the whole introduction
/// script and the quick actions appear immediately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppearanceSettings {
    #[serde(
        default = "default_theme_mode",
        serialize_with = "serialize_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
    #[serde(default)]
    pub theme_name: String,
    #[serde(default)]
    pub reduce_motion: bool,
}

impl Default for AppearanceSettings {
    fn default() -> Self {
        Self {
            theme_mode: default_theme_mode(),
            theme_name: String::new(),
            reduce_motion: false,
        }
    }
}

impl AppearanceSettings {
    pub fn normalized(mut self) -> Self {
        self.theme_name = self.theme_name.trim().to_string();
        self
    }

    /// The same settings with the light/dark mode flipped.
    pub fn with_toggled_mode(mut self) -> Self {
        self.theme_mode = if self.theme_mode.is_dark() {
            ThemeMode::Light
        } else {
            ThemeMode::Dark
        };
        self
    }

    /// Applies the configured theme preset, falling back to the bare mode
    /// when the preset name is unknown or empty.
    pub fn apply_theme(&self, window: Option<&mut Window>, cx: &mut App) {
        if let Some(theme_config) = ThemeRegistry::global(cx)
            .themes()
            .get(&SharedString::from(self.theme_name.trim().to_string()))
            .cloned()
        {
            let mode = theme_config.mode;
            let theme = Theme::global_mut(cx);
            if mode.is_dark() {
                theme.dark_theme = theme_config;
            } else {
                theme.light_theme = theme_config;
            }
            Theme::change(mode, window, cx);
            return;
        }

        Theme::change(self.theme_mode, window, cx);
    }
}

/// Swappable settings snapshot backed by a JSON file.
pub struct SettingsStore {
    settings: Arc<ArcSwap<AppearanceSettings>>,
    config_path: PathBuf,
}

impl SettingsStore {
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|path| path.join(SETTINGS_DIRECTORY_NAME))
            .unwrap_or_else(|| PathBuf::from(".chatfolio"))
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join(SETTINGS_FILE_NAME)
    }

    pub fn new(config_path: PathBuf) -> Self {
        let settings = Self::load_from_disk(&config_path);
        Self {
            settings: Arc::new(ArcSwap::from_pointee(settings)),
            config_path,
        }
    }

    pub fn load() -> Self {
        Self::new(Self::default_config_path())
    }

    pub fn settings(&self) -> Arc<AppearanceSettings> {
        self.settings.load_full()
    }

    pub fn update(&self, settings: AppearanceSettings) -> Result<(), SettingsError> {
        let normalized_settings = settings.normalized();
        self.persist(&normalized_settings)?;
        self.settings.store(Arc::new(normalized_settings));
        Ok(())
    }

    fn load_from_disk(path: &PathBuf) -> AppearanceSettings {
        if !path.exists() {
            tracing::info!("settings file not found at {:?}, using defaults", path);
            return AppearanceSettings::default();
        }

        let figment = Figment::from(Serialized::defaults(AppearanceSettings::default()))
            .merge(Json::file(path));

        match figment.extract::<AppearanceSettings>() {
            Ok(settings) => settings.normalized(),
            Err(error) => {
                tracing::warn!(
                    "failed to parse settings from {:?}: {}. using defaults",
                    path,
                    error
                );
                AppearanceSettings::default()
            }
        }
    }

    fn persist(&self, settings: &AppearanceSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context(CreateDirSnafu {
                stage: "create-settings-directory",
                path: parent.to_path_buf(),
            })?;
        }

        let content = serde_json::to_string_pretty(settings).context(SerializeConfigSnafu {
            stage: "serialize-settings-json",
        })?;

        let temp_path = self.config_path.with_extension("json.tmp");
        std::fs::write(&temp_path, content).context(WriteFileSnafu {
            stage: "write-temporary-settings-file",
            path: temp_path.clone(),
        })?;

        std::fs::rename(&temp_path, &self.config_path).context(RenameTempFileSnafu {
            stage: "rename-temporary-settings-file",
            from: temp_path,
            to: self.config_path.clone(),
        })?;

        tracing::info!("saved settings to {:?}", self.config_path);
        Ok(())
    }
}

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum SettingsError {
    #[snafu(display("failed to create settings directory at {path:?} on `{stage}`: {source}"))]
    CreateDir {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display("failed to serialize settings on `{stage}`: {source}"))]
    SerializeConfig {
        stage: &'static str,
        source: serde_json::Error,
    },
    #[snafu(display("failed to write settings file at {path:?} on `{stage}`: {source}"))]
    WriteFile {
        stage: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },
    #[snafu(display(
        "failed to replace settings file from {from:?} to {to:?} on `{stage}`: {source}"
    ))]
    RenameTempFile {
        stage: &'static str,
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

fn default_theme_mode() -> ThemeMode {
    ThemeMode::Light
}

fn serialize_theme_mode<S>(value: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    Ok(parse_theme_mode(&value))
}

fn parse_theme_mode(value: &str) -> ThemeMode {
    if value.trim().eq_ignore_ascii_case("dark") {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_theme_mode_strings_fall_back_to_light() {
        assert_eq!(parse_theme_mode("dark"), ThemeMode::Dark);
        assert_eq!(parse_theme_mode(" DARK "), ThemeMode::Dark);
        assert_eq!(parse_theme_mode("light"), ThemeMode::Light);
        assert_eq!(parse_theme_mode("solarized"), ThemeMode::Light);
        assert_eq!(parse_theme_mode(""), ThemeMode::Light);
    }

    #[test]
    fn toggling_mode_flips_and_round_trips() {
        let settings = AppearanceSettings::default();
        assert!(!settings.theme_mode.is_dark());

        let toggled = settings.clone().with_toggled_mode();
        assert!(toggled.theme_mode.is_dark());
        assert_eq!(toggled.with_toggled_mode(), settings);
    }

    #[test]
    fn normalization_trims_theme_names() {
        let settings = AppearanceSettings {
            theme_name: "  One Dark  ".to_string(),
            ..Default::default()
        };
        assert_eq!(settings.normalized().theme_name, "One Dark");
    }

    #[test]
    fn missing_fields_deserialize_to_defaults() {
        let settings: AppearanceSettings = serde_json::from_str("{}").expect("empty object parses");
        assert_eq!(settings, AppearanceSettings::default());

        let settings: AppearanceSettings =
            serde_json::from_str(r#"{"theme_mode":"dark","reduce_motion":true}"#)
                .expect("partial object parses");
        assert!(settings.theme_mode.is_dark());
        assert!(settings.reduce_motion);
    }
}
