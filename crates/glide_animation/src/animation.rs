//! Timed animations
//!
//! An [`Animation`] owns the timing state of one transition. Each
//! [`update`](Animation::update) advances the elapsed time, clamps it to the
//! duration and reports the eased progress to the progress callback.

use crate::error::{AnimationError, Result};
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Easing curve held by an animation
pub type EasingCurve = Box<dyn Fn(f32) -> f32 + Send>;

/// Callback receiving eased progress
pub type ProgressCallback = Box<dyn FnMut(f32) + Send>;

/// Animation handle shared between a manager and its owner
pub type SharedAnimation = Arc<Mutex<Animation>>;

/// A single timed transition from progress 0 to progress 1
pub struct Animation {
    name: Option<String>,
    duration: f32,
    elapsed: f32,
    running: bool,
    easing: EasingCurve,
    on_progress: ProgressCallback,
}

impl Animation {
    /// Create a stopped animation
    ///
    /// `duration` is in seconds and must be finite and greater than zero.
    pub fn new<E, F>(duration: f32, easing: E, on_progress: F) -> Result<Self>
    where
        E: Fn(f32) -> f32 + Send + 'static,
        F: FnMut(f32) + Send + 'static,
    {
        if !duration.is_finite() || duration <= 0.0 {
            return Err(AnimationError::InvalidDuration(duration));
        }

        Ok(Self {
            name: None,
            duration,
            elapsed: 0.0,
            running: false,
            easing: Box::new(easing),
            on_progress: Box::new(on_progress),
        })
    }

    /// Builder: attach a label used in log output
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Wrap into a handle that can be added to a manager
    pub fn into_shared(self) -> SharedAnimation {
        Arc::new(Mutex::new(self))
    }

    /// Start (or resume) the animation
    ///
    /// Elapsed time is kept. Starting a finished animation makes the next
    /// update report full progress and stop it again; use
    /// [`restart`](Self::restart) to play it from the beginning.
    pub fn start(&mut self) {
        tracing::debug!(animation = self.label(), elapsed = self.elapsed, "start");
        self.running = true;
    }

    pub fn stop(&mut self) {
        if self.running {
            tracing::debug!(animation = self.label(), elapsed = self.elapsed, "stop");
        }
        self.running = false;
    }

    /// Rewind to the beginning and stop, without notifying the callback
    pub fn reset(&mut self) {
        self.elapsed = 0.0;
        self.running = false;
    }

    /// Rewind to the beginning and start
    pub fn restart(&mut self) {
        self.reset();
        self.start();
    }

    /// Advance the animation by delta time (in seconds)
    ///
    /// Does nothing unless running. Negative deltas count as zero. The
    /// callback fires exactly once per call while running; the call that
    /// reaches the duration stops the animation before reporting full
    /// progress.
    pub fn update(&mut self, delta_time: f32) {
        if !self.running {
            return;
        }

        self.elapsed += delta_time.max(0.0);
        if self.elapsed >= self.duration {
            self.elapsed = self.duration;
            self.running = false;
            tracing::debug!(
                animation = self.label(),
                duration = self.duration,
                "finished"
            );
        }

        let eased = (self.easing)(self.progress());
        tracing::trace!(animation = self.label(), elapsed = self.elapsed, eased);
        (self.on_progress)(eased);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether the elapsed time has reached the duration
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Raw (un-eased) progress: elapsed / duration
    pub fn progress(&self) -> f32 {
        self.elapsed / self.duration
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    fn label(&self) -> &str {
        self.name().unwrap_or("<anonymous>")
    }
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("name", &self.name)
            .field("duration", &self.duration)
            .field("elapsed", &self.elapsed)
            .field("running", &self.running)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::{ease_in_out_cubic, linear, Easing};

    /// Animation whose progress reports are collected into a shared vec
    fn recorded(duration: f32, easing: fn(f32) -> f32) -> (Animation, Arc<Mutex<Vec<f32>>>) {
        let reports = Arc::new(Mutex::new(Vec::new()));
        let sink = reports.clone();
        let animation = Animation::new(duration, easing, move |p| sink.lock().push(p))
            .expect("valid duration");
        (animation, reports)
    }

    #[test]
    fn test_two_step_completion() {
        let (mut anim, reports) = recorded(2.0, ease_in_out_cubic);
        anim.start();

        anim.update(1.0);
        assert_eq!(anim.elapsed(), 1.0);
        assert!(anim.is_running());
        assert_eq!(*reports.lock(), vec![ease_in_out_cubic(0.5)]);

        anim.update(1.0);
        assert_eq!(anim.elapsed(), 2.0);
        assert!(!anim.is_running());
        assert_eq!(*reports.lock(), vec![ease_in_out_cubic(0.5), 1.0]);
    }

    #[test]
    fn test_not_started_is_inert() {
        let (mut anim, reports) = recorded(1.0, linear);
        anim.update(0.5);
        anim.update(0.5);
        assert_eq!(anim.elapsed(), 0.0);
        assert!(reports.lock().is_empty());
    }

    #[test]
    fn test_stopped_is_inert() {
        let (mut anim, reports) = recorded(1.0, linear);
        anim.start();
        anim.update(0.25);
        anim.stop();
        anim.update(0.25);
        assert_eq!(anim.elapsed(), 0.25);
        assert_eq!(*reports.lock(), vec![0.25]);
    }

    #[test]
    fn test_overshoot_is_clamped() {
        let (mut anim, reports) = recorded(1.0, linear);
        anim.start();
        anim.update(5.0);
        assert_eq!(anim.elapsed(), 1.0);
        assert!(!anim.is_running());
        assert!(anim.is_finished());
        assert_eq!(*reports.lock(), vec![1.0]);
    }

    #[test]
    fn test_completion_reported_once() {
        let (mut anim, reports) = recorded(0.5, linear);
        anim.start();
        for _ in 0..10 {
            anim.update(0.2);
        }
        let reports = reports.lock();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports.iter().filter(|p| **p == 1.0).count(), 1);
        assert_eq!(*reports.last().unwrap(), 1.0);
    }

    #[test]
    fn test_stop_is_idempotent() {
        let (mut anim, _) = recorded(1.0, linear);
        anim.start();
        anim.update(0.3);
        anim.stop();
        let once = (anim.is_running(), anim.elapsed());
        anim.stop();
        assert_eq!((anim.is_running(), anim.elapsed()), once);
    }

    #[test]
    fn test_start_after_finish_completes_immediately() {
        let (mut anim, reports) = recorded(1.0, linear);
        anim.start();
        anim.update(2.0);

        anim.start();
        assert!(anim.is_running());
        anim.update(0.01);
        assert!(!anim.is_running());
        assert_eq!(*reports.lock(), vec![1.0, 1.0]);
    }

    #[test]
    fn test_restart_plays_from_beginning() {
        let (mut anim, reports) = recorded(1.0, linear);
        anim.start();
        anim.update(2.0);

        anim.restart();
        assert_eq!(anim.elapsed(), 0.0);
        anim.update(0.5);
        assert!(anim.is_running());
        assert_eq!(*reports.lock(), vec![1.0, 0.5]);
    }

    #[test]
    fn test_reset_does_not_notify() {
        let (mut anim, reports) = recorded(1.0, linear);
        anim.start();
        anim.update(0.5);
        anim.reset();
        assert!(!anim.is_running());
        assert_eq!(anim.elapsed(), 0.0);
        assert_eq!(reports.lock().len(), 1);
    }

    #[test]
    fn test_negative_delta_counts_as_zero() {
        let (mut anim, reports) = recorded(1.0, linear);
        anim.start();
        anim.update(0.5);
        anim.update(-0.3);
        assert_eq!(anim.elapsed(), 0.5);
        assert!(anim.is_running());
        assert_eq!(*reports.lock(), vec![0.5, 0.5]);
    }

    #[test]
    fn test_invalid_duration_rejected() {
        for duration in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let result = Animation::new(duration, linear, |_| {});
            assert!(
                matches!(result, Err(AnimationError::InvalidDuration(_))),
                "duration {duration} accepted"
            );
        }
    }

    #[test]
    fn test_easing_enum_and_closures_accepted() {
        let (mut anim, reports) = recorded(1.0, Easing::EaseInCubic.as_fn());
        anim.start();
        anim.update(0.5);
        assert_eq!(*reports.lock(), vec![0.125]);

        let mut doubled = Animation::new(1.0, |t| t * 2.0, |_| {}).unwrap();
        doubled.start();
        doubled.update(1.0);
        assert!(doubled.is_finished());
    }

    #[test]
    fn test_name_and_debug() {
        let anim = Animation::new(1.0, linear, |_| {})
            .unwrap()
            .with_name("fade-in");
        assert_eq!(anim.name(), Some("fade-in"));
        let debug = format!("{anim:?}");
        assert!(debug.contains("fade-in"));
        assert!(debug.contains("running: false"));
    }
}
