/// Which half of the effect a channel drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Position,
    Rotation,
}

impl std::fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Position => write!(f, "position"),
            Self::Rotation => write!(f, "rotation"),
        }
    }
}

/// Linear fade-out factor for a channel at `normalized_time` (0 = just
/// triggered, 1 = fully elapsed). A `fade_speed` above 1 reaches zero before
/// the timer runs out.
pub fn fade(normalized_time: f32, fade_speed: f32) -> f32 {
    (1.0 - normalized_time * fade_speed).clamp(0.0, 1.0)
}

/// Host deltas that are negative or not finite count as no elapsed time.
pub fn sanitize_delta(delta_time: f32) -> f32 {
    if delta_time.is_finite() && delta_time > 0.0 {
        delta_time
    } else {
        0.0
    }
}

/// Countdown state for one shake channel.
///
/// Idle while `timer == 0`, active while `timer > 0`. Triggering always
/// re-arms to the full duration; it never adds to the remaining time.
#[derive(Debug, Clone, PartialEq)]
pub struct ShakeChannel {
    kind: ChannelKind,
    duration: f32,
    timer: f32,
}

impl ShakeChannel {
    /// `duration` must already be validated as positive.
    pub fn new(kind: ChannelKind, duration: f32) -> Self {
        Self {
            kind,
            duration,
            timer: 0.0,
        }
    }

    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Remaining seconds of shake.
    pub fn timer(&self) -> f32 {
        self.timer
    }

    pub fn is_active(&self) -> bool {
        self.timer > 0.0
    }

    /// Progress through the channel: 0 right after a trigger, 1 once elapsed.
    pub fn normalized_time(&self) -> f32 {
        1.0 - self.timer / self.duration
    }

    pub fn trigger(&mut self) {
        let restarted = self.is_active();
        self.timer = self.duration;
        tracing::debug!(
            channel = %self.kind,
            duration = self.duration,
            restarted,
            "Shake triggered"
        );
    }

    pub fn cancel(&mut self) {
        if self.is_active() {
            tracing::debug!(channel = %self.kind, remaining = self.timer, "Shake cancelled");
        }
        self.timer = 0.0;
    }

    /// Count the timer down by `delta_time`, clamping at zero.
    ///
    /// Returns the normalized time when the channel is still active after the
    /// step, `None` when it is idle (including the frame it expires on).
    pub fn advance(&mut self, delta_time: f32) -> Option<f32> {
        if !self.is_active() {
            return None;
        }
        self.timer = (self.timer - sanitize_delta(delta_time)).max(0.0);
        if self.timer == 0.0 {
            tracing::debug!(channel = %self.kind, "Shake expired");
            return None;
        }
        Some(self.normalized_time())
    }
}
