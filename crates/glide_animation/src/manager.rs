//! Animation manager
//!
//! Owns an ordered set of animations, updates them each frame and drops the
//! ones that have stopped.

use crate::animation::{Animation, SharedAnimation};

/// Advances a batch of animations with a shared frame delta
#[derive(Default)]
pub struct AnimationManager {
    animations: Vec<SharedAnimation>,
}

impl AnimationManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an animation
    ///
    /// The same handle may be added more than once; it is then updated once
    /// per entry each frame.
    pub fn add_animation(&mut self, animation: SharedAnimation) {
        self.animations.push(animation);
    }

    /// Wrap, append and return a handle to the animation
    pub fn spawn(&mut self, animation: Animation) -> SharedAnimation {
        let shared = animation.into_shared();
        self.add_animation(shared.clone());
        shared
    }

    /// Update every animation in insertion order, then prune stopped ones
    ///
    /// Pruning runs as a separate pass after the traversal, so every member
    /// present at the start of the call is visited exactly once per entry.
    pub fn update(&mut self, delta_time: f32) {
        for animation in &self.animations {
            animation.lock().update(delta_time);
        }

        let before = self.animations.len();
        self.animations.retain(|animation| animation.lock().is_running());

        let pruned = before - self.animations.len();
        if pruned > 0 {
            tracing::debug!(pruned, remaining = self.animations.len(), "pruned animations");
        }
    }

    /// Check if any managed animation is still running
    pub fn has_active_animations(&self) -> bool {
        self.animations.iter().any(|a| a.lock().is_running())
    }

    /// Get the number of managed entries
    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }

    /// Drop every managed entry without updating it
    pub fn clear(&mut self) {
        self.animations.clear();
    }

    /// Iterate over managed handles in update order
    pub fn iter(&self) -> impl Iterator<Item = &SharedAnimation> {
        self.animations.iter()
    }
}

impl std::fmt::Debug for AnimationManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnimationManager")
            .field("animations", &self.animations.len())
            .finish()
    }
}
