mod args;
mod rig;

use glam::Vec3;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;

use camshake_core::time::ManualClock;
use camshake_core::{FrameClock, FrameInput, PerlinNoise, ShakeConfig, ShakeEffect, ShakeError};

use args::SimArgs;
use rig::{CameraRig, yaw_degrees};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = SimArgs::parse(std::env::args().skip(1));
    if let Err(e) = run(&args) {
        tracing::error!(error = %e, "Shake simulation failed");
        std::process::exit(1);
    }
}

/// RNG for the effect's seeds plus a Perlin field keyed off the full 64-bit seed.
fn seeded_sources(seed: u64) -> (StdRng, PerlinNoise) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = PerlinNoise::new(rng.random());
    (rng, noise)
}

fn run(args: &SimArgs) -> Result<(), ShakeError> {
    let config = match &args.config {
        Some(path) => ShakeConfig::load_from(path)?,
        None => ShakeConfig::load(),
    };
    let seed = args.seed.unwrap_or_else(rand::random);
    let (mut rng, noise) = seeded_sources(seed);

    let mut rig = CameraRig::new(Vec3::new(0.0, 0.0, 8.0), 0.0, 1.7, 0.15);
    let mut effect = ShakeEffect::attach(config, &rig, &mut rng, noise)?;
    let space = effect.space();

    tracing::info!(
        seed,
        frames = args.frames,
        fps = args.fps,
        ?space,
        "Camera shake simulation starting"
    );

    let dt = args.dt();
    let mut clock = ManualClock::new();
    let mut max_offset = 0.0f32;
    let mut max_yaw = 0.0f32;
    let rest_yaw = yaw_degrees(effect.base_transform().rotation);

    for frame in 0..args.frames {
        let start = clock.current_time_secs();
        let input = FrameInput {
            left_click_pressed: SimArgs::click_in_frame(&args.left_at, start, dt),
            right_click_pressed: SimArgs::click_in_frame(&args.right_at, start, dt),
        };
        if input.left_click_pressed {
            tracing::info!(frame, time = start, "Left click: position shake");
        }
        if input.right_click_pressed {
            tracing::info!(frame, time = start, "Right click: rotation shake");
        }

        clock.tick(dt);
        let transform = effect.drive_frame(&clock, input, &mut rig);
        let offset = transform.position - effect.base_transform().position;
        let yaw = yaw_degrees(transform.rotation) - rest_yaw;
        max_offset = max_offset.max(offset.length());
        max_yaw = max_yaw.max(yaw.abs());

        tracing::debug!(
            frame,
            time = clock.current_time_secs(),
            x = transform.position.x,
            y = transform.position.y,
            z = transform.position.z,
            yaw,
            shaking = effect.is_shaking(),
            "Frame"
        );
    }

    let world = rig.world();
    tracing::info!(
        max_offset,
        max_yaw,
        still_shaking = effect.is_shaking(),
        final_x = world.position.x,
        final_y = world.position.y,
        final_z = world.position.z,
        "Camera shake simulation finished"
    );
    Ok(())
}
