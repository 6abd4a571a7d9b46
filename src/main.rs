// Orrery: headless frame loop over a solar system

use std::time::Duration;

use log::{debug, error, info};
use orrery::{composer, DemoConfig, OrreryError, SimulationClock, Transform};

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), OrreryError> {
    let config = DemoConfig::from_env()?;
    let system = config.load_system()?;
    info!(
        "animating {} bodies for {} frames at {} h/s",
        system.len(),
        config.frames,
        config.hours_per_second
    );

    // Reject a bad system before the first tick.
    composer::validate(system.bodies(), config.start_time)?;

    let frame = Duration::from_millis(config.frame_interval_ms);
    let mut clock = SimulationClock::starting_at(config.start_time, config.hours_per_second);
    let mut interval = tokio::time::interval(frame);
    let mut transforms = Vec::with_capacity(system.len());

    for index in 0..config.frames {
        interval.tick().await;
        let time = clock.time();
        composer::compute_into(system.bodies(), time, &mut transforms)?;

        for (named, matrix) in system.named_bodies().iter().zip(&transforms) {
            let pose = Transform::from_matrix(*matrix);
            debug!(
                "{:>8} pos={:.3} spin={:.3}",
                named.name,
                pose.position,
                pose.spin_angle()
            );
        }
        info!("frame {index}: t={time:.2}h");

        clock.tick(frame.as_secs_f32());
    }
    Ok(())
}
