use glam::{Quat, Vec3};
use rand::Rng;

use crate::channel::{ChannelKind, ShakeChannel, fade, sanitize_delta};
use crate::config::ShakeConfig;
use crate::error::ShakeError;
use crate::host::{CameraTransform, FrameClock, FrameInput, TransformSpace, TransformTarget};
use crate::noise::{NoiseSource, PerlinNoise, remap_signed};

/// Per-instance offsets into the noise field, one per sampled axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShakeSeeds {
    pub position: Vec3,
    pub rotation: f32,
}

impl ShakeSeeds {
    /// Seeds are drawn uniformly from `[0, RANGE)`.
    pub const RANGE: f32 = 100.0;

    pub fn draw<R: Rng>(rng: &mut R) -> Self {
        Self {
            position: Vec3::new(
                rng.random_range(0.0..Self::RANGE),
                rng.random_range(0.0..Self::RANGE),
                rng.random_range(0.0..Self::RANGE),
            ),
            rotation: rng.random_range(0.0..Self::RANGE),
        }
    }
}

/// Noise-driven camera shake with independent position and rotation channels.
///
/// The rest transform is captured once at construction. Each frame the
/// position channel adds a 3-axis offset and the rotation channel adds a yaw
/// offset (degrees) on top of it, both fading out linearly. An idle channel
/// contributes exactly nothing.
#[derive(Debug, Clone)]
pub struct ShakeEffect<N = PerlinNoise> {
    config: ShakeConfig,
    base: CameraTransform,
    position: ShakeChannel,
    rotation: ShakeChannel,
    seeds: ShakeSeeds,
    noise: N,
    position_offset: Vec3,
    rotation_offset: f32,
}

impl<N: NoiseSource> ShakeEffect<N> {
    /// Create an effect resting at `base`, drawing noise seeds from `rng`.
    pub fn new<R: Rng>(
        config: ShakeConfig,
        base: CameraTransform,
        rng: &mut R,
        noise: N,
    ) -> Result<Self, ShakeError> {
        config.validate()?;
        Ok(Self::from_validated(config, base, rng, noise))
    }

    /// Create an effect resting at the target's current transform, read in the
    /// space selected by `config.use_local_space`. A bad duration is reported
    /// before the target is touched.
    pub fn attach<T, R>(
        config: ShakeConfig,
        target: &T,
        rng: &mut R,
        noise: N,
    ) -> Result<Self, ShakeError>
    where
        T: TransformTarget + ?Sized,
        R: Rng,
    {
        config.validate()?;
        let space = TransformSpace::from_local_flag(config.use_local_space);
        let base = target
            .read_transform(space)
            .ok_or(ShakeError::TransformUnavailable)?;
        Ok(Self::from_validated(config, base, rng, noise))
    }

    fn from_validated<R: Rng>(
        config: ShakeConfig,
        base: CameraTransform,
        rng: &mut R,
        noise: N,
    ) -> Self {
        let seeds = ShakeSeeds::draw(rng);
        tracing::debug!(?seeds, ?base, "Shake effect initialized");
        Self {
            position: ShakeChannel::new(ChannelKind::Position, config.position_duration),
            rotation: ShakeChannel::new(ChannelKind::Rotation, config.rotation_duration),
            config,
            base,
            seeds,
            noise,
            position_offset: Vec3::ZERO,
            rotation_offset: 0.0,
        }
    }

    pub fn config(&self) -> &ShakeConfig {
        &self.config
    }

    pub fn space(&self) -> TransformSpace {
        TransformSpace::from_local_flag(self.config.use_local_space)
    }

    /// The rest transform the camera returns to when no channel is active.
    pub fn base_transform(&self) -> CameraTransform {
        self.base
    }

    pub fn seeds(&self) -> ShakeSeeds {
        self.seeds
    }

    pub fn position_channel(&self) -> &ShakeChannel {
        &self.position
    }

    pub fn rotation_channel(&self) -> &ShakeChannel {
        &self.rotation
    }

    /// Positional offset applied on the most recent update.
    pub fn position_offset(&self) -> Vec3 {
        self.position_offset
    }

    /// Yaw offset (degrees) applied on the most recent update.
    pub fn rotation_offset_degrees(&self) -> f32 {
        self.rotation_offset
    }

    pub fn is_shaking(&self) -> bool {
        self.position.is_active() || self.rotation.is_active()
    }

    /// Restart the position channel at full duration.
    pub fn trigger_position_shake(&mut self) {
        self.position.trigger();
    }

    /// Restart the rotation channel at full duration.
    pub fn trigger_rotation_shake(&mut self) {
        self.rotation.trigger();
    }

    pub fn cancel_position_shake(&mut self) {
        self.position.cancel();
        self.position_offset = Vec3::ZERO;
    }

    pub fn cancel_rotation_shake(&mut self) {
        self.rotation.cancel();
        self.rotation_offset = 0.0;
    }

    pub fn cancel_all(&mut self) {
        self.cancel_position_shake();
        self.cancel_rotation_shake();
    }

    /// Advance both channels by `delta_time` and return this frame's transform.
    ///
    /// `current_time` positions the noise samples; it should be the host's
    /// monotonic frame time. A negative `delta_time` counts as zero.
    pub fn update(&mut self, delta_time: f32, current_time: f32) -> CameraTransform {
        let dt = sanitize_delta(delta_time);

        self.position_offset = match self.position.advance(dt) {
            Some(t) => {
                let scale = self.config.position_intensity * fade(t, self.config.fade_speed);
                let at = current_time * self.config.position_frequency;
                Vec3::new(
                    self.signed_sample(self.seeds.position.x, at),
                    self.signed_sample(self.seeds.position.y, at),
                    self.signed_sample(self.seeds.position.z, at),
                ) * scale
            },
            None => Vec3::ZERO,
        };

        self.rotation_offset = match self.rotation.advance(dt) {
            Some(t) => {
                let scale = self.config.rotation_intensity * fade(t, self.config.fade_speed);
                let at = current_time * self.config.rotation_frequency;
                self.signed_sample(self.seeds.rotation, at) * scale
            },
            None => 0.0,
        };

        self.current_transform()
    }

    /// The transform produced by the most recent update.
    pub fn current_transform(&self) -> CameraTransform {
        let position = if self.position.is_active() {
            self.base.position + self.position_offset
        } else {
            self.base.position
        };
        let rotation = if self.rotation.is_active() {
            self.base.rotation * Quat::from_rotation_y(self.rotation_offset.to_radians())
        } else {
            self.base.rotation
        };
        CameraTransform { position, rotation }
    }

    /// Run one host frame: map click edges to triggers, update, and write the
    /// result back to the target in the configured space.
    pub fn drive_frame<C, T>(
        &mut self,
        clock: &C,
        input: FrameInput,
        target: &mut T,
    ) -> CameraTransform
    where
        C: FrameClock + ?Sized,
        T: TransformTarget + ?Sized,
    {
        if input.left_click_pressed {
            self.trigger_position_shake();
        }
        if input.right_click_pressed {
            self.trigger_rotation_shake();
        }
        let transform = self.update(clock.delta_secs(), clock.current_time_secs());
        target.write_transform(self.space(), transform);
        transform
    }

    fn signed_sample(&self, seed: f32, at: f32) -> f32 {
        remap_signed(self.noise.sample(seed, at))
    }
}
