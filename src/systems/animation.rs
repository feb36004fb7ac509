//! Animation systems.
//!
//! - [`animation`] advances clip playback from
//!   [`AnimationStore`] timing data.
//! - [`animation_despawn_system`] removes one-shot effects carrying
//!   [`DespawnOnAnimationEnd`] once their normalized progress passes the
//!   threshold and no transition is running.
use bevy_ecs::prelude::*;
use log::warn;
use rustc_hash::FxHashSet;

use crate::components::animation::{Animation, DespawnOnAnimationEnd};
use crate::resources::animationstore::AnimationStore;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback.
///
/// Entities pointing at an unknown clip are skipped; the first time an entity
/// is seen with one a warning is logged.
pub fn animation(
    mut query: Query<(Entity, &mut Animation)>,
    animation_store: Res<AnimationStore>,
    time: Res<WorldTime>,
    mut warned: Local<FxHashSet<Entity>>,
) {
    for (entity, mut anim) in query.iter_mut() {
        let Some(clip) = animation_store.get(&anim.animation_key) else {
            if warned.insert(entity) {
                warn!(
                    "{:?} plays unknown animation '{}'",
                    entity, anim.animation_key
                );
            }
            continue;
        };

        anim.total_elapsed += time.delta;
        anim.elapsed_time += time.delta;
        if clip.fps <= 0.0 || clip.frame_count == 0 {
            continue;
        }

        let frame_duration = 1.0 / clip.fps;
        while anim.elapsed_time >= frame_duration {
            anim.elapsed_time -= frame_duration;
            anim.frame_index += 1;
            if anim.frame_index >= clip.frame_count {
                anim.frame_index = if clip.looped { 0 } else { clip.frame_count - 1 };
            }
        }
    }
}

pub fn animation_despawn_system(
    query: Query<(Entity, &Animation, &DespawnOnAnimationEnd)>,
    animation_store: Res<AnimationStore>,
    mut commands: Commands,
) {
    for (entity, anim, despawn) in query.iter() {
        let Some(clip) = animation_store.get(&anim.animation_key) else {
            continue;
        };
        if !anim.in_transition && anim.normalized_time(clip) >= despawn.threshold {
            commands.entity(entity).try_despawn();
        }
    }
}
