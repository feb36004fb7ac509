//! Animation resource registry.
//!
//! Clip definitions reused by many entities, looked up by string key.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Key of the clip played by dust effects.
pub const DUST_ANIMATION: &str = "dust";

/// Central registry of reusable animation definitions keyed by string IDs.
#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub animations: FxHashMap<String, AnimationResource>,
}

impl AnimationStore {
    pub fn insert(&mut self, key: impl Into<String>, clip: AnimationResource) {
        self.animations.insert(key.into(), clip);
    }

    pub fn get(&self, key: &str) -> Option<&AnimationResource> {
        self.animations.get(key)
    }
}

/// Immutable playback parameters of a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationResource {
    pub frame_count: usize,
    /// Frames per second playback speed.
    pub fps: f32,
    /// Whether the animation restarts after the last frame.
    pub looped: bool,
}

impl AnimationResource {
    /// Length of one pass in seconds.
    pub fn length(&self) -> f32 {
        if self.fps <= 0.0 {
            return 0.0;
        }
        self.frame_count as f32 / self.fps
    }
}
