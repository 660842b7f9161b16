//! Drop demo
//!
//! Scatters crates above the ground, lets them fall, drags one around and
//! reports picks and placement checks through the log. Run with
//! `RUST_LOG=debug` to see the engine's own messages.
//!
//! Usage: `drop_demo [physics.toml | physics.ron]`

use planet_engine::prelude::*;
use rand::Rng;

// Scene layout
const NUM_CRATES: usize = 12;
const SCATTER_RADIUS: f32 = 20.0;
const DROP_HEIGHT: (f32, f32) = (5.0, 15.0);
const FALL_SPEED: (f32, f32) = (1.0, 4.0);

// Simulation
const TICK: f32 = 1.0 / 60.0;
const NUM_TICKS: usize = 600;

#[derive(thiserror::Error, Debug)]
enum DemoError {
    #[error("Failed to load physics config: {0}")]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Scene(#[from] SceneError),
}

const CRATE: EntityType = EntityType(1);
const PROBE: EntityType = EntityType(2);

fn load_config() -> Result<PhysicsConfig, DemoError> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(PhysicsConfig::default());
    };
    let config = PhysicsConfig::load_from_file(&path)?;
    config.validate()?;
    log::info!("Loaded physics config from {path}: {config:?}");
    Ok(config)
}

fn scatter_crates(scene: &mut Scene) {
    let mut rng = rand::thread_rng();
    for _ in 0..NUM_CRATES {
        let position = Vec3::new(
            rng.gen_range(-SCATTER_RADIUS..SCATTER_RADIUS),
            rng.gen_range(DROP_HEIGHT.0..DROP_HEIGHT.1),
            rng.gen_range(-SCATTER_RADIUS..SCATTER_RADIUS),
        );
        let drift = Vec3::new(rng.gen_range(-0.5..0.5), 0.0, rng.gen_range(-0.5..0.5));
        let velocity = drift + Vec3::new(0.0, -rng.gen_range(FALL_SPEED.0..FALL_SPEED.1), 0.0);
        let half_extent = rng.gen_range(0.5..1.5);

        scene.spawn(
            Entity::new(CRATE)
                .with_bounding_box(BoundingBox::cube(half_extent))
                .with_radius(half_extent * 3.0_f32.sqrt())
                .with_position(position)
                .with_velocity(velocity),
        );
    }
}

fn run() -> Result<(), DemoError> {
    let config = load_config()?;
    let mut scene = Scene::with_config(config);
    scatter_crates(&mut scene);

    let eye = Vec3::new(0.0, 30.0, -40.0);
    let probe = scene.spawn(
        Entity::new(PROBE)
            .with_bounding_box(BoundingBox::cube(0.5))
            .with_position(Vec3::new(-SCATTER_RADIUS - 5.0, 0.5, 0.0))
            .with_velocity(Vec3::new(1.0, 0.0, 0.0)),
    );

    for tick in 0..NUM_TICKS {
        scene.update(TICK);

        if tick % 120 == 0 {
            let landed = scene
                .iter()
                .filter(|(_, entity)| entity.entity_type() == CRATE)
                .filter(|(_, entity)| entity.position().y <= scene.config().ground_height)
                .count();
            log::info!("Tick {tick}: {landed}/{NUM_CRATES} crates on the ground");
        }
    }

    // Look at the middle of the field and pick whatever is in front
    let look = Ray::new(eye, Vec3::zeros() - eye);
    match scene.pick(&look) {
        Some(hit) => {
            log::info!("Picked {:?} at distance {:.2} ({:?})", hit.entity, hit.distance, hit.point);

            // Drag it up and over towards the probe's lane, then release
            scene.drag(hit.entity, &eye, &(Vec3::new(-10.0, 2.0, 0.0) - eye))?;
            scene.stop_dragging(hit.entity)?;
        }
        None => log::info!("Nothing under the cursor"),
    }

    // Sweep the probe across the whole field and list what it would hit
    let probe_entity = scene.entity(probe)?;
    let from = probe_entity.current_state();
    let to = OrientationState::new(Vec3::new(SCATTER_RADIUS + 5.0, 0.5, 0.0), from.rotation);
    let blockers = scene.path_collisions(probe, &from, &to)?;
    log::info!("Probe path crosses {} crate(s): {blockers:?}", blockers.len());
    log::info!("Probe can take its next step: {}", scene.can_advance(probe)?);

    Ok(())
}

fn main() {
    // Initialize logging; RUST_LOG overrides the default level
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
