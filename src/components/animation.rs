//! Animation playback state.
//!
//! [`Animation`] tracks which clip of the
//! [`AnimationStore`](crate::resources::animationstore::AnimationStore) an
//! entity plays and how far along it is. [`DespawnOnAnimationEnd`] turns a
//! one-shot effect (dust, sparks) into a self-cleaning entity: it is removed
//! once playback passes a fraction of the clip.
use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

use crate::resources::animationstore::AnimationResource;

#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct Animation {
    pub animation_key: String,
    pub frame_index: usize,
    /// Time spent on the current frame.
    pub elapsed_time: f32,
    /// Time since playback started, used for normalized progress.
    pub total_elapsed: f32,
    /// Set while blending into another clip; despawn checks wait for it to clear.
    pub in_transition: bool,
}
impl Animation {
    pub fn new(animation_key: impl Into<String>) -> Self {
        Self {
            animation_key: animation_key.into(),
            frame_index: 0,
            elapsed_time: 0.0,
            total_elapsed: 0.0,
            in_transition: false,
        }
    }

    /// Playback progress in clip lengths: 0.0 at start, 1.0 at the end of the
    /// first pass. Looping clips keep growing past 1.0.
    pub fn normalized_time(&self, clip: &AnimationResource) -> f32 {
        let length = clip.length();
        if length <= 0.0 {
            return 1.0;
        }
        self.total_elapsed / length
    }
}

/// Despawn the entity once its [`Animation`] reaches `threshold` normalized progress.
#[derive(Debug, Clone, Copy, Component)]
pub struct DespawnOnAnimationEnd {
    pub threshold: f32,
}

impl Default for DespawnOnAnimationEnd {
    fn default() -> Self {
        Self { threshold: 0.95 }
    }
}
