//! Effect spawning.
//!
//! Turns [`EffectCmd`] messages into short-lived effect entities. Dust plays
//! the [`DUST_ANIMATION`] clip once and is removed by
//! [`animation_despawn_system`](crate::systems::animation::animation_despawn_system).
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::animation::{Animation, DespawnOnAnimationEnd};
use crate::components::mapposition::MapPosition;
use crate::components::scale::Scale;
use crate::events::effects::EffectCmd;
use crate::resources::animationstore::DUST_ANIMATION;

pub fn effect_spawn_system(mut reader: MessageReader<EffectCmd>, mut commands: Commands) {
    for cmd in reader.read() {
        match *cmd {
            EffectCmd::SpawnDust { position, facing } => {
                let mut scale = Scale::default();
                scale.face(facing);
                let entity = commands
                    .spawn((
                        MapPosition { pos: position },
                        scale,
                        Animation::new(DUST_ANIMATION),
                        DespawnOnAnimationEnd::default(),
                    ))
                    .id();
                debug!("Spawned dust {:?} at {} facing {:?}", entity, position, facing);
            }
        }
    }
}

/// Advance the effect message queue; run once per tick before its writers.
pub fn update_effect_cmds(mut msgs: ResMut<Messages<EffectCmd>>) {
    msgs.update();
}
