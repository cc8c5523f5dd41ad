//! Headless driver: runs zombies against a scripted boy and logs what they do.
mod config;
mod target;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use config::CliConfig;
use game_core::{BoundingBox, GameConfig, TargetEntity};
use runtime::{Runtime, RuntimeConfig};
use target::{Balls, Boy};
use tokio::time::MissedTickBehavior;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = CliConfig::from_env();

    // Held until exit so buffered file logs get flushed
    let _guard = setup_logging(config.session_id.as_deref())?;

    let runtime = build_runtime(&config)?;
    simulate(&config, runtime).await
}

fn build_runtime(cli: &CliConfig) -> Result<Runtime> {
    let mut config = match &cli.config_path {
        Some(path) => RuntimeConfig::load(path)
            .with_context(|| format!("failed to load runtime config {}", path.display()))?,
        None => RuntimeConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(count) = cli.zombie_count {
        config.zombie_count = count;
    }

    Runtime::builder()
        .config(config)
        .build()
        .context("failed to build runtime")
}

/// Steps the runtime once per frame at wall-clock pace until the frame
/// budget runs out or Ctrl-C arrives.
async fn simulate(cli: &CliConfig, mut runtime: Runtime) -> Result<()> {
    let dt = cli.tick_seconds();
    let game = runtime.config().game.clone();
    let mut boy = Boy::new(&game.world);
    let mut balls = Balls::scatter(&game, 6, 4);
    let mut dropped = 0_usize;

    let mut interval = tokio::time::interval(Duration::from_secs_f64(dt));
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    tracing::info!(
        frames = cli.frames,
        fps = cli.fps,
        zombies = runtime.zombies().len(),
        balls = balls.len(),
        "simulation started"
    );

    for _ in 0..cli.frames {
        tokio::select! {
            _ = interval.tick() => {}
            _ = &mut shutdown => {
                tracing::info!("interrupted");
                break;
            }
        }

        boy.advance(dt);
        let boy_bounds = BoundingBox::around(boy.position(), game.half_extent);
        for _ in 0..balls.collect_within(&boy_bounds) {
            boy.pick_up();
        }

        let report = runtime.step(dt, &boy);
        for failure in &report.failures {
            tracing::warn!(
                error = %failure,
                severity = failure.severity().as_str(),
                "tick dropped"
            );
        }
        dropped += report.failures.len();

        for (id, snapshot) in runtime.snapshots() {
            for _ in 0..balls.collect_within(&snapshot.bounds) {
                runtime.handle_collision(id, GameConfig::SCORE_COLLISION_GROUP)?;
            }
            tracing::debug!(
                tick = report.tick,
                zombie = %id,
                x = snapshot.position.x,
                y = snapshot.position.y,
                heading = snapshot.heading,
                activity = ?snapshot.activity,
                animation = snapshot.animation_name(),
                frame = snapshot.frame,
                score = snapshot.score,
                "zombie"
            );
        }
    }

    tracing::info!(
        ticks = runtime.tick_count(),
        dropped,
        boy_score = boy.score(),
        balls_left = balls.len(),
        "simulation finished"
    );

    println!(
        "{} ticks, boy scored {}, {} balls left{}",
        runtime.tick_count(),
        boy.score(),
        balls.len(),
        if balls.is_empty() { " (field cleared)" } else { "" }
    );
    for (id, snapshot) in runtime.snapshots() {
        println!(
            "{id}: ({:.1}, {:.1}) {:?} score {}",
            snapshot.position.x, snapshot.position.y, snapshot.activity, snapshot.score
        );
    }

    Ok(())
}

/// Setup logging to both stderr and a per-session file
fn setup_logging(session_id: Option<&str>) -> Result<WorkerGuard> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let session_id = session_id.map(str::to_owned).unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{timestamp}")
    });

    let session_log_dir = log_directory().join(&session_id);
    std::fs::create_dir_all(&session_log_dir)
        .with_context(|| format!("failed to create {}", session_log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, "zombie.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    tracing::info!(session = %session_id, "logging initialized");
    tracing::info!("Log file: {}/zombie.log", session_log_dir.display());

    Ok(guard)
}

/// Platform cache directory for logs, e.g. `~/.cache/zombie/logs` on Linux.
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "zombie")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("zombie"))
        .join("logs")
}
