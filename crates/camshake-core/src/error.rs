use crate::channel::ChannelKind;

#[derive(Debug, Clone, PartialEq)]
pub enum ShakeError {
    /// A channel duration was zero, negative, or not finite.
    InvalidDuration { channel: ChannelKind, value: f32 },
    /// The host could not supply the camera transform at attach time.
    TransformUnavailable,
    ConfigParse(String),
    ConfigRead { path: String, message: String },
}

impl std::fmt::Display for ShakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDuration { channel, value } => {
                write!(f, "{channel} duration must be positive, got {value}")
            },
            Self::TransformUnavailable => write!(f, "camera transform unavailable"),
            Self::ConfigParse(e) => write!(f, "config parse error: {e}"),
            Self::ConfigRead { path, message } => {
                write!(f, "failed to read config {path}: {message}")
            },
        }
    }
}

impl std::error::Error for ShakeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let e = ShakeError::InvalidDuration {
            channel: ChannelKind::Rotation,
            value: -1.0,
        };
        assert_eq!(format!("{e}"), "rotation duration must be positive, got -1");
        assert_eq!(
            format!("{}", ShakeError::TransformUnavailable),
            "camera transform unavailable"
        );
        assert!(format!("{}", ShakeError::ConfigParse("boom".into())).contains("boom"));
        let read = ShakeError::ConfigRead {
            path: "config/camshake.toml".into(),
            message: "missing".into(),
        };
        assert!(format!("{read}").contains("config/camshake.toml"));
    }
}
