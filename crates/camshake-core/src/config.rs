use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::channel::ChannelKind;
use crate::error::ShakeError;

/// Shortest duration a channel may be clamped to by [`ShakeConfig::sanitized`].
pub const MIN_DURATION: f32 = 0.001;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV_VAR: &str = "CAMSHAKE_CONFIG";
/// Config path used when the environment variable is unset.
pub const DEFAULT_CONFIG_PATH: &str = "config/camshake.toml";

/// Tuning for one camera's shake, fixed once the effect is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShakeConfig {
    /// Max positional offset, in the units of the chosen transform space.
    pub position_intensity: f32,
    /// Seconds the position channel stays active after a trigger.
    pub position_duration: f32,
    /// Noise sampling speed along the time axis for position (higher = rougher).
    pub position_frequency: f32,
    /// Max rotational offset about the yaw axis (degrees).
    pub rotation_intensity: f32,
    /// Seconds the rotation channel stays active after a trigger.
    pub rotation_duration: f32,
    /// Noise sampling speed along the time axis for rotation.
    pub rotation_frequency: f32,
    /// Rate multiplier for the linear fade-out (1.0 fades across the full duration).
    pub fade_speed: f32,
    /// Apply offsets to the parent-relative transform instead of the world transform.
    pub use_local_space: bool,
}

impl Default for ShakeConfig {
    fn default() -> Self {
        Self {
            position_intensity: 0.5,
            position_duration: 0.5,
            position_frequency: 25.0,
            rotation_intensity: 2.0,
            rotation_duration: 0.4,
            rotation_frequency: 20.0,
            fade_speed: 2.0,
            use_local_space: true,
        }
    }
}

fn duration_is_valid(d: f32) -> bool {
    d.is_finite() && d > 0.0
}

impl ShakeConfig {
    /// Reject durations that would divide by zero when computing progress.
    pub fn validate(&self) -> Result<(), ShakeError> {
        for (channel, value) in [
            (ChannelKind::Position, self.position_duration),
            (ChannelKind::Rotation, self.rotation_duration),
        ] {
            if !duration_is_valid(value) {
                return Err(ShakeError::InvalidDuration { channel, value });
            }
        }
        Ok(())
    }

    /// Copy of this config with invalid durations clamped to [`MIN_DURATION`].
    pub fn sanitized(&self) -> Self {
        let mut cfg = self.clone();
        if !duration_is_valid(cfg.position_duration) {
            tracing::warn!(
                value = cfg.position_duration,
                "Invalid position_duration, clamping to {MIN_DURATION}"
            );
            cfg.position_duration = MIN_DURATION;
        }
        if !duration_is_valid(cfg.rotation_duration) {
            tracing::warn!(
                value = cfg.rotation_duration,
                "Invalid rotation_duration, clamping to {MIN_DURATION}"
            );
            cfg.rotation_duration = MIN_DURATION;
        }
        cfg
    }

    /// Parse a TOML document. Missing keys take their default values.
    pub fn from_toml_str(content: &str) -> Result<Self, ShakeError> {
        let cfg: Self =
            toml::from_str(content).map_err(|e| ShakeError::ConfigParse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ShakeError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| ShakeError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    /// Load config from `$CAMSHAKE_CONFIG` or `config/camshake.toml`. Falls back
    /// to defaults if the file is missing or unparseable, and clamps invalid
    /// durations rather than failing.
    pub fn load() -> Self {
        let path =
            std::env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str::<ShakeConfig>(&content) {
                Ok(cfg) => cfg.sanitized(),
                Err(e) => {
                    tracing::warn!("Failed to parse {path}: {e}, using defaults");
                    ShakeConfig::default()
                },
            },
            Err(_) => ShakeConfig::default(),
        }
    }
}
