//! Terminal animation demo
//!
//! A marker sweeps back and forth across a text track. Each sweep is one
//! animation inside an [`AnimationManager`]; the frame loop here plays the
//! role of the window timer and feeds a fixed delta every frame.

use crate::config::DemoConfig;
use anyhow::{Context, Result};
use glide_animation::{Animation, AnimationManager};
use parking_lot::Mutex;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

/// What a demo run did
#[derive(Debug, Clone, PartialEq)]
pub struct DemoSummary {
    pub frames: u64,
    pub sweeps: u32,
    /// Marker column after the last frame
    pub final_column: usize,
}

/// Render the track with the marker at `column`
pub fn render_track(column: usize, width: usize) -> String {
    let mut track = String::with_capacity(width + 2);
    track.push('[');
    for i in 0..width {
        track.push(if i == column { 'o' } else { '-' });
    }
    track.push(']');
    track
}

/// Map eased progress onto a track column for the given sweep direction
pub fn marker_column(progress: f32, forward: bool, width: usize) -> usize {
    let last = (width - 1) as f32;
    let position = if forward { progress } else { 1.0 - progress };
    (position * last).round().clamp(0.0, last) as usize
}

/// Run the demo, writing one line per frame
///
/// With `realtime` the loop sleeps to the frame cadence, redraws in place and
/// reports measured FPS; otherwise frames are produced as fast as possible.
pub fn run(config: &DemoConfig, realtime: bool, out: &mut impl Write) -> Result<DemoSummary> {
    let dt = config.frame_delta();
    let frame_budget = Duration::from_secs_f32(dt);
    let progress = Arc::new(Mutex::new(0.0f32));

    let mut manager = AnimationManager::new();
    let mut frames = 0u64;
    let mut forward = true;
    let mut column = marker_column(0.0, forward, config.width);

    let started = Instant::now();
    let mut fps = 0.0f32;
    let mut fps_window = (Instant::now(), 0u32);

    for sweep in 0..config.cycles {
        let sink = progress.clone();
        let name = if forward { "sweep-forward" } else { "sweep-back" };
        let animation = Animation::new(config.duration, config.easing.as_fn(), move |p| {
            *sink.lock() = p;
        })
        .context("Failed to create sweep animation")?
        .with_name(name);

        manager.spawn(animation).lock().start();
        tracing::debug!(sweep, forward, easing = %config.easing, "sweep started");

        while !manager.is_empty() {
            let frame_start = Instant::now();
            manager.update(dt);
            frames += 1;

            let eased = *progress.lock();
            column = marker_column(eased, forward, config.width);

            if realtime {
                fps_window.1 += 1;
                let window = fps_window.0.elapsed();
                if window >= Duration::from_secs(1) {
                    fps = fps_window.1 as f32 / window.as_secs_f32();
                    fps_window = (Instant::now(), 0);
                }
                write!(
                    out,
                    "\r{} Progress: {:.2}  X: {:>3}  FPS: {:.2}",
                    render_track(column, config.width),
                    eased,
                    column,
                    fps
                )?;
                out.flush()?;

                if let Some(rest) = frame_budget.checked_sub(frame_start.elapsed()) {
                    thread::sleep(rest);
                }
            } else {
                writeln!(
                    out,
                    "{} Progress: {:.2}  X: {:>3}",
                    render_track(column, config.width),
                    eased,
                    column
                )?;
            }
        }

        forward = !forward;
    }

    if realtime {
        writeln!(out)?;
    }

    tracing::info!(
        frames,
        sweeps = config.cycles,
        wall_secs = started.elapsed().as_secs_f32(),
        "demo finished"
    );

    Ok(DemoSummary {
        frames,
        sweeps: config.cycles,
        final_column: column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use glide_animation::Easing;

    fn config(cycles: u32) -> DemoConfig {
        DemoConfig {
            easing: Easing::Linear,
            duration: 1.0,
            fps: 10,
            width: 11,
            cycles,
        }
    }

    #[test]
    fn test_render_track() {
        assert_eq!(render_track(0, 5), "[o----]");
        assert_eq!(render_track(4, 5), "[----o]");
    }

    #[test]
    fn test_marker_column_direction() {
        assert_eq!(marker_column(0.0, true, 11), 0);
        assert_eq!(marker_column(1.0, true, 11), 10);
        assert_eq!(marker_column(0.5, true, 11), 5);
        assert_eq!(marker_column(1.0, false, 11), 0);
        assert_eq!(marker_column(0.2, false, 11), 8);
    }

    #[test]
    fn test_single_sweep_reaches_far_end() {
        let mut out = Vec::new();
        let summary = run(&config(1), false, &mut out).unwrap();

        assert!((10..=11).contains(&summary.frames));
        assert_eq!(summary.final_column, 10);

        let text = String::from_utf8(out).unwrap();
        let last = text.lines().last().unwrap();
        assert!(last.starts_with("[----------o]"));
        assert!(last.contains("Progress: 1.00"));
    }

    #[test]
    fn test_round_trip_returns_to_start() {
        let mut out = Vec::new();
        let summary = run(&config(2), false, &mut out).unwrap();

        assert_eq!(summary.sweeps, 2);
        assert_eq!(summary.final_column, 0);
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count() as u64, summary.frames);
    }

    #[test]
    fn test_zero_cycles_renders_nothing() {
        let mut out = Vec::new();
        let summary = run(&config(0), false, &mut out).unwrap();
        assert_eq!(summary.frames, 0);
        assert!(out.is_empty());
    }
}
