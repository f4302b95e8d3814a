//! Replay a Synthetic Walk Through a Geofence
//!
//! Loads the fence set from `demos/geofences.toml`, then replays a walk that
//! approaches fence "1", lingers inside, and walks away again. Each
//! committed transition is printed once, the way an alerting layer would
//! surface it.
//!
//! Key concepts:
//! - Configuration loaded from TOML
//! - Debounced transitions (two agreeing fixes per crossing)
//! - Subscriber callbacks alongside returned events
//!
//! Run with: RUST_LOG=geofence_monitor=debug cargo run --example replay_track

use chrono::{Duration, Utc};
use geofence_monitor::{load_config, GeofenceMonitor, PositionSample, TransitionKind};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geofence_monitor=info".into()),
        )
        .init();

    println!("=== Geofence Replay ===\n");

    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/geofences.toml");
    let config = load_config(path)?;
    println!(
        "Loaded {} fences, debounce {} samples",
        config.fences.len(),
        config.debounce_samples
    );
    println!(
        "Source options (passed to the location provider): {:?}\n",
        config.source
    );

    let mut monitor = GeofenceMonitor::from_config(&config)?;
    monitor.subscribe(|event| {
        let title = match event.kind {
            TransitionKind::Entered => "Geofence Entered",
            TransitionKind::Exited => "Geofence Exited",
        };
        println!("  [alert] {title}: fence {}", event.fence_id);
    });

    // Walk south along longitude 3.3491, crossing fence "1"
    let track = [
        6.6080, 6.6070, 6.6064, 6.6060, 6.6059, 6.6058, 6.6052, 6.6045, 6.6035, 6.6030,
    ];

    let start = Utc::now();
    for (i, latitude) in track.iter().enumerate() {
        let at = start + Duration::seconds(10 * i as i64);
        let sample = PositionSample::at(*latitude, 3.3491, 15.0, at)?;
        let distance = sample
            .coordinate()
            .distance_to(&config.fences[0].center);
        println!("fix {i}: lat {latitude:.4} ({distance:.0} m from fence 1)");

        let events = monitor.observe(&sample);
        if !events.is_empty() {
            println!("  -> {} event(s) this fix", events.len());
        }
    }

    println!("\nFinal statuses:");
    for state in monitor.statuses() {
        println!("  fence {}: {}", state.fence_id, state.status);
    }

    println!("\n=== Replay Complete ===");
    Ok(())
}
