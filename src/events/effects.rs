use bevy_ecs::message::Message;
use glam::Vec2;

use crate::components::locomotion::Facing;

/// Fire-and-forget visual effect requests.
///
/// Written by gameplay systems, consumed by
/// [`effect_spawn_system`](crate::systems::effects::effect_spawn_system).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub enum EffectCmd {
    SpawnDust { position: Vec2, facing: Facing },
}
