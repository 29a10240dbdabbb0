use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when RUST_LOG is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Named easing curve applied to animation progress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EasingType {
    /// Jump straight to the target at the end of the duration
    None,
    Linear,
    /// Half-cosine curve, the classic default for page scrolling
    #[default]
    Swing,
    #[serde(alias = "easeOutCubic")]
    Cubic,
    #[serde(alias = "easeOutQuint")]
    Quintic,
    #[serde(alias = "easeOutExpo")]
    EaseOut,
}

impl EasingType {
    pub fn name(&self) -> &'static str {
        match self {
            EasingType::None => "none",
            EasingType::Linear => "linear",
            EasingType::Swing => "swing",
            EasingType::Cubic => "cubic",
            EasingType::Quintic => "quintic",
            EasingType::EaseOut => "ease-out",
        }
    }
}

impl fmt::Display for EasingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(EasingType::None),
            "linear" => Ok(EasingType::Linear),
            "swing" => Ok(EasingType::Swing),
            "cubic" | "easeOutCubic" => Ok(EasingType::Cubic),
            "quintic" | "easeOutQuint" => Ok(EasingType::Quintic),
            "ease-out" | "easeOutExpo" => Ok(EasingType::EaseOut),
            other => Err(crate::Error::InvalidRequest(format!(
                "unknown easing \"{}\"",
                other
            ))),
        }
    }
}

/// Scroll animation defaults, passed explicitly into the duration policy
/// and the request normalizer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Duration for requests without one, and for "auto"
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    /// Speed lock distance in px (0 = disabled). Movements shorter than
    /// this are sped up so they never crawl.
    #[serde(default = "default_lock_speed_below")]
    pub lock_speed_below: f64,
    /// Easing used when a request names none
    #[serde(default)]
    pub easing: EasingType,
    /// Frame rate for tick drivers
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
    /// Cancel running animations on user scroll/click
    #[serde(default = "default_true")]
    pub cancel_on_user_input: bool,
    /// Tolerance for comparing scroll targets
    #[serde(default = "default_position_tolerance")]
    pub position_tolerance_px: f64,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            lock_speed_below: default_lock_speed_below(),
            easing: EasingType::default(),
            animation_fps: default_animation_fps(),
            cancel_on_user_input: default_true(),
            position_tolerance_px: default_position_tolerance(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    400
}

fn default_lock_speed_below() -> f64 {
    1000.0
}

fn default_animation_fps() -> u32 {
    60
}

fn default_position_tolerance() -> f64 {
    0.5
}

impl AppConfig {
    /// Load configuration from the default path or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from an explicit path, falling back to defaults
    /// when the file does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "Loading configuration");
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    pub fn to_toml(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Get the configuration file path
    /// Always uses ~/.config/scrollable/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("scrollable")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrollConfig::default();
        assert_eq!(config.duration_ms, 400);
        assert_eq!(config.easing, EasingType::Swing);
        assert_eq!(config.animation_fps, 60);
        assert!(config.cancel_on_user_input);
        assert!((config.lock_speed_below - 1000.0).abs() < 0.001);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [scroll]
            duration_ms = 2000
            easing = "easeOutCubic"
            "#,
        )
        .unwrap();
        assert_eq!(config.scroll.duration_ms, 2000);
        assert_eq!(config.scroll.easing, EasingType::Cubic);
        assert_eq!(config.scroll.animation_fps, 60);
        assert_eq!(config.general.log_level, "info");
    }

    #[test]
    fn test_bad_toml_is_config_error() {
        let err = AppConfig::from_toml("[scroll]\nduration_ms = \"slow\"").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = AppConfig::load_from(Path::new("/nonexistent/scrollable.toml")).unwrap();
        assert_eq!(config.scroll.duration_ms, 400);
    }

    #[test]
    fn test_easing_names() {
        assert_eq!("swing".parse::<EasingType>().unwrap(), EasingType::Swing);
        assert_eq!("easeOutExpo".parse::<EasingType>().unwrap(), EasingType::EaseOut);
        assert!("bounce".parse::<EasingType>().is_err());
        for easing in [
            EasingType::None,
            EasingType::Linear,
            EasingType::Swing,
            EasingType::Cubic,
            EasingType::Quintic,
            EasingType::EaseOut,
        ] {
            assert_eq!(easing.name().parse::<EasingType>().unwrap(), easing);
        }
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let text = AppConfig::default().to_toml().unwrap();
        let config = AppConfig::from_toml(&text).unwrap();
        assert_eq!(config.scroll.easing, EasingType::Swing);
    }
}
