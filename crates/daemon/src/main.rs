// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rouse Daemon (roused)
//!
//! Background process that owns the minute-tick loop and announces
//! alarm events.

use chrono::Timelike;
use rouse_core::{notice_for, EventBus, MinuteTick, SystemClock, WallClock};
use rouse_daemon::DaemonConfig;
use rouse_engine::AlarmClock;
use rouse_storage::JsonAlarmStore;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::signal::unix::{signal, SignalKind};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments: roused [--check] [config-path]
    let args: Vec<String> = std::env::args().skip(1).collect();
    let check_only = args.iter().any(|a| a == "--check");
    let config_path: Option<PathBuf> = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from);

    let config = match &config_path {
        Some(path) => DaemonConfig::load(path),
        None => Ok(DaemonConfig::default()),
    };
    let config = match config {
        Ok(config) => config,
        Err(error) => {
            eprintln!("invalid configuration: {}", error);
            std::process::exit(1);
        }
    };

    if check_only {
        println!("config ok");
        return Ok(());
    }

    let log_guard = setup_logging(&config)?;
    info!("Starting roused, data dir: {}", config.data_dir.display());

    let store = JsonAlarmStore::open(config.alarms_dir())?;
    let oracle = config.calendar.build();
    let bus = EventBus::new();

    // Drain announcements into the log
    let mut events = bus.subscribe();
    tokio::spawn(async move {
        while let Some(event) = events.recv().await {
            let notice = notice_for(&event);
            info!(
                event = event.name(),
                status = %notice.status,
                hour = notice.hour,
                minute = notice.minute,
                "alarm event"
            );
        }
    });

    let engine = AlarmClock::new(store, oracle, SystemClock, bus.clone());
    engine.start().await;

    // Set up signal handlers
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    info!("Daemon ready");

    // Signal ready for parent process (e.g., systemd, wrapper scripts)
    println!("READY");

    // Main tick loop: one engine pass per wall-clock minute
    loop {
        tokio::select! {
            _ = tokio::time::sleep(until_next_minute(&SystemClock)) => {
                let tick = MinuteTick::at(SystemClock.now());
                engine.on_minute_tick(tick).await;
            }

            // Graceful shutdown on SIGTERM
            _ = sigterm.recv() => {
                info!("Received SIGTERM, shutting down...");
                break;
            }

            // Graceful shutdown on SIGINT
            _ = sigint.recv() => {
                info!("Received SIGINT, shutting down...");
                break;
            }
        }
    }

    info!("Daemon stopped");
    drop(log_guard);
    Ok(())
}

/// Time to sleep so the next wake-up lands just past a minute boundary
fn until_next_minute(clock: &impl WallClock) -> Duration {
    let now = clock.now();
    let into_minute = u64::from(now.second()) * 1000 + u64::from(now.nanosecond() / 1_000_000);
    // Land ~50ms past the boundary so the tick reads the new minute
    Duration::from_millis(60_050_u64.saturating_sub(into_minute))
}

fn setup_logging(
    config: &DaemonConfig,
) -> Result<tracing_appender::non_blocking::WorkerGuard, std::io::Error> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Create log directory if needed
    let log_path = config.log_path();
    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Set up file appender
    let file_appender = tracing_appender::rolling::never(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| OsStr::new("roused.log")),
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Set up subscriber with env filter
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}
