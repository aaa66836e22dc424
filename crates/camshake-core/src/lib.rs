pub mod channel;
pub mod config;
pub mod error;
pub mod host;
pub mod noise;
pub mod shake;
pub mod time;

pub use crate::config::ShakeConfig;
pub use crate::error::ShakeError;
pub use crate::host::{CameraTransform, FrameClock, FrameInput, TransformSpace, TransformTarget};
pub use crate::noise::{NoiseSource, PerlinNoise};
pub use crate::shake::{ShakeEffect, ShakeSeeds};

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use glam::{Quat, Vec3};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::ShakeConfig;
    use crate::host::{CameraTransform, FrameInput, TransformSpace, TransformTarget};
    use crate::noise::{NoiseSource, PerlinNoise};
    use crate::shake::ShakeEffect;
    use crate::time::ManualClock;

    /// Deterministic RNG for reproducible noise seeds.
    pub fn seeded_rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    /// Effect backed by Perlin noise with seeds drawn from a fixed RNG.
    pub fn make_effect(config: ShakeConfig, base: CameraTransform) -> ShakeEffect {
        ShakeEffect::new(config, base, &mut seeded_rng(42), PerlinNoise::default())
            .expect("test config must be valid")
    }

    /// Effect backed by an arbitrary noise function, so tests can pin samples.
    pub fn make_effect_with_noise<F>(
        config: ShakeConfig,
        base: CameraTransform,
        noise: F,
    ) -> ShakeEffect<F>
    where
        F: Fn(f32, f32) -> f32,
    {
        ShakeEffect::new(config, base, &mut seeded_rng(42), noise)
            .expect("test config must be valid")
    }

    /// A camera under a translated parent. World space is the local transform
    /// composed with the parent's.
    #[derive(Debug, Clone)]
    pub struct TestCamera {
        pub parent: CameraTransform,
        pub local: CameraTransform,
        pub available: bool,
        pub writes: usize,
    }

    impl TestCamera {
        pub fn new(parent: CameraTransform, local: CameraTransform) -> Self {
            Self {
                parent,
                local,
                available: true,
                writes: 0,
            }
        }

        pub fn unavailable() -> Self {
            Self {
                available: false,
                ..Self::new(CameraTransform::IDENTITY, CameraTransform::IDENTITY)
            }
        }

        pub fn world(&self) -> CameraTransform {
            CameraTransform {
                position: self.parent.position + self.parent.rotation * self.local.position,
                rotation: self.parent.rotation * self.local.rotation,
            }
        }
    }

    impl TransformTarget for TestCamera {
        fn read_transform(&self, space: TransformSpace) -> Option<CameraTransform> {
            if !self.available {
                return None;
            }
            Some(match space {
                TransformSpace::Local => self.local,
                TransformSpace::World => self.world(),
            })
        }

        fn write_transform(&mut self, space: TransformSpace, transform: CameraTransform) {
            self.writes += 1;
            self.local = match space {
                TransformSpace::Local => transform,
                TransformSpace::World => {
                    let inv = self.parent.rotation.inverse();
                    CameraTransform {
                        position: inv * (transform.position - self.parent.position),
                        rotation: inv * transform.rotation,
                    }
                },
            };
        }
    }

    /// A parent offset from the origin and yawed, so local and world differ.
    pub fn offset_parent() -> CameraTransform {
        CameraTransform::new(Vec3::new(10.0, 0.0, -4.0), Quat::from_rotation_y(0.5))
    }

    /// Drive `frames` fixed steps of `dt`, taking input for frame `i` from
    /// `input_at(i)`. Returns the transform written each frame.
    pub fn run_frames<N, T>(
        effect: &mut ShakeEffect<N>,
        clock: &mut ManualClock,
        target: &mut T,
        frames: usize,
        dt: f32,
        input_at: impl Fn(usize) -> FrameInput,
    ) -> Vec<CameraTransform>
    where
        N: NoiseSource,
        T: TransformTarget,
    {
        let mut out = Vec::with_capacity(frames);
        for i in 0..frames {
            clock.tick(dt);
            out.push(effect.drive_frame(&*clock, input_at(i), target));
        }
        out
    }
}
