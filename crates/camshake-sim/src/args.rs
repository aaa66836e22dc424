/// Options for a headless shake run, parsed from `--key=value` arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct SimArgs {
    pub frames: usize,
    pub fps: f32,
    pub seed: Option<u64>,
    /// Seconds at which a left click (position shake) lands.
    pub left_at: Vec<f32>,
    /// Seconds at which a right click (rotation shake) lands.
    pub right_at: Vec<f32>,
    pub config: Option<String>,
}

impl Default for SimArgs {
    fn default() -> Self {
        Self {
            frames: 120,
            fps: 60.0,
            seed: None,
            left_at: vec![0.1],
            right_at: vec![0.6],
            config: None,
        }
    }
}

fn parse_times(list: &str) -> Vec<f32> {
    list.split(',')
        .filter_map(|s| s.trim().parse::<f32>().ok())
        .filter(|t| t.is_finite() && *t >= 0.0)
        .collect()
}

impl SimArgs {
    /// Unknown or malformed arguments are logged and skipped.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut out = Self::default();
        for arg in args {
            if let Some(v) = arg.strip_prefix("--frames=")
                && let Ok(n) = v.parse()
            {
                out.frames = n;
            } else if let Some(v) = arg.strip_prefix("--fps=")
                && let Ok(fps) = v.parse::<f32>()
                && fps > 0.0
            {
                out.fps = fps;
            } else if let Some(v) = arg.strip_prefix("--seed=")
                && let Ok(seed) = v.parse()
            {
                out.seed = Some(seed);
            } else if let Some(v) = arg.strip_prefix("--left-at=") {
                out.left_at = parse_times(v);
            } else if let Some(v) = arg.strip_prefix("--right-at=") {
                out.right_at = parse_times(v);
            } else if let Some(v) = arg.strip_prefix("--config=") {
                out.config = Some(v.to_string());
            } else {
                tracing::warn!(arg = %arg, "Ignoring unrecognized argument");
            }
        }
        out
    }

    pub fn dt(&self) -> f32 {
        1.0 / self.fps
    }

    /// Whether a click scheduled in `times` lands in the frame `[start, start + dt)`.
    pub fn click_in_frame(times: &[f32], start: f32, dt: f32) -> bool {
        times.iter().any(|&t| t >= start && t < start + dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> SimArgs {
        SimArgs::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn defaults_when_empty() {
        assert_eq!(args(&[]), SimArgs::default());
    }

    #[test]
    fn parses_all_options() {
        let a = args(&[
            "--frames=30",
            "--fps=30",
            "--seed=9",
            "--left-at=0,0.5",
            "--right-at=1.25",
            "--config=shake.toml",
        ]);
        assert_eq!(a.frames, 30);
        assert_eq!(a.fps, 30.0);
        assert_eq!(a.seed, Some(9));
        assert_eq!(a.left_at, vec![0.0, 0.5]);
        assert_eq!(a.right_at, vec![1.25]);
        assert_eq!(a.config.as_deref(), Some("shake.toml"));
    }

    #[test]
    fn bad_values_fall_back() {
        let a = args(&["--frames=lots", "--fps=0", "--left-at=x,-1,0.2", "--bogus"]);
        assert_eq!(a.frames, 120);
        assert_eq!(a.fps, 60.0);
        assert_eq!(a.left_at, vec![0.2]);
    }

    #[test]
    fn click_lands_in_one_frame() {
        let dt = 0.1;
        let times = [0.25];
        assert!(!SimArgs::click_in_frame(&times, 0.1, dt));
        assert!(SimArgs::click_in_frame(&times, 0.2, dt));
        assert!(!SimArgs::click_in_frame(&times, 0.3, dt));
    }
}
