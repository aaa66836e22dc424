use ::noise::{NoiseFn, Perlin};

/// A deterministic, continuous 2D noise field with values in `[0, 1]`.
///
/// Sampling the same point twice must give the same value, and nearby points
/// must give nearby values. The shake samples along the second axis with time,
/// so any discontinuity there shows up as visible jitter.
pub trait NoiseSource {
    fn sample(&self, a: f32, b: f32) -> f32;
}

impl<F> NoiseSource for F
where
    F: Fn(f32, f32) -> f32,
{
    fn sample(&self, a: f32, b: f32) -> f32 {
        self(a, b)
    }
}

/// Map a `[0, 1]` noise value onto `[-1, 1]`.
pub fn remap_signed(n: f32) -> f32 {
    (n - 0.5) * 2.0
}

/// Perlin's permutation table repeats every 256 lattice cells.
const LATTICE_PERIOD: f64 = 256.0;

/// Classic gradient noise, remapped from `[-1, 1]` to `[0, 1]`.
///
/// Coordinates are wrapped into one lattice period, so arbitrarily large
/// times stay sampleable. Non-finite coordinates sample the midpoint, which
/// maps to a zero offset.
#[derive(Debug, Clone, Copy)]
pub struct PerlinNoise {
    perlin: Perlin,
}

impl PerlinNoise {
    pub fn new(seed: u32) -> Self {
        Self {
            perlin: Perlin::new(seed),
        }
    }
}

impl Default for PerlinNoise {
    fn default() -> Self {
        Self::new(0)
    }
}

impl NoiseSource for PerlinNoise {
    fn sample(&self, a: f32, b: f32) -> f32 {
        if !a.is_finite() || !b.is_finite() {
            return 0.5;
        }
        let a = f64::from(a).rem_euclid(LATTICE_PERIOD);
        let b = f64::from(b).rem_euclid(LATTICE_PERIOD);
        let v = self.perlin.get([a, b]);
        (((v + 1.0) * 0.5) as f32).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remap_covers_signed_range() {
        assert_eq!(remap_signed(0.0), -1.0);
        assert_eq!(remap_signed(0.5), 0.0);
        assert_eq!(remap_signed(1.0), 1.0);
    }

    #[test]
    fn perlin_is_deterministic() {
        let noise = PerlinNoise::new(7);
        let a = noise.sample(12.34, 5.67);
        let b = noise.sample(12.34, 5.67);
        assert_eq!(a, b);
        assert_eq!(PerlinNoise::new(7).sample(12.34, 5.67), a);
    }

    #[test]
    fn perlin_varies_over_time() {
        let noise = PerlinNoise::default();
        let first = noise.sample(42.5, 0.3);
        let differs = (1..50).any(|i| noise.sample(42.5, 0.3 + i as f32 * 0.37) != first);
        assert!(differs, "Noise should vary along the time axis");
    }

    #[test]
    fn non_finite_coordinates_sample_midpoint() {
        let noise = PerlinNoise::default();
        assert_eq!(noise.sample(10.5, f32::NAN), 0.5);
        assert_eq!(noise.sample(10.5, f32::INFINITY), 0.5);
        assert_eq!(noise.sample(f32::NEG_INFINITY, 3.0), 0.5);
        assert_eq!(remap_signed(noise.sample(10.5, f32::NAN)), 0.0);
    }

    #[test]
    fn coordinates_past_cast_limit_do_not_panic() {
        let noise = PerlinNoise::default();
        for b in [1e15f32, 1e18, 1e19, 1e20, f32::MAX, -f32::MAX] {
            let n = noise.sample(10.5, b);
            assert!((0.0..=1.0).contains(&n), "sample at b={b} gave {n}");
        }
    }

    #[test]
    fn wrapping_matches_lattice_period() {
        let noise = PerlinNoise::new(11);
        for t in [0.3f32, 3.7, 41.25, 120.6] {
            let here = noise.sample(17.5, t);
            let next_period = noise.sample(17.5, t + 256.0);
            assert!(
                (here - next_period).abs() < 1e-3,
                "t={t}: {here} vs {next_period}"
            );
        }
    }

    #[test]
    fn closures_are_noise_sources() {
        let flat = |_: f32, _: f32| 0.75_f32;
        assert_eq!(flat.sample(1.0, 2.0), 0.75);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn huge_coordinates_sample_without_fault(a in 0.0f32..100.0, exp in 10i32..38) {
                let b = 10f32.powi(exp);
                let noise = PerlinNoise::default();
                let n = noise.sample(a, b);
                prop_assert!(n.is_finite());
                prop_assert!(noise.sample(a, -b).is_finite());
            }

            #[test]
            fn perlin_is_continuous_in_time(seed in 0.0f32..100.0, t in 0.0f32..200.0) {
                let noise = PerlinNoise::default();
                let eps = 1e-4;
                let delta = (noise.sample(seed, t + eps) - noise.sample(seed, t)).abs();
                prop_assert!(delta < 0.01, "jump of {delta} over eps={eps} at t={t}");
            }
        }
    }
}
