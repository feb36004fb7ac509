//! Locomotion system.
//!
//! Drives every [`LocomotionController`] once per tick from the shared
//! [`InputState`], then propagates the result to the other components of
//! the entity:
//! - displacement into [`MapPosition`]
//! - facing into [`Scale`] (when present)
//! - status and momentum into [`Signals`] (when present)
//! - effect requests into `Messages<EffectCmd>`
//!
//! Must run before [`movement`](crate::systems::movement::movement) so the
//! jump impulse is integrated on the tick it is applied.

use bevy_ecs::prelude::*;
use log::debug;

use crate::components::locomotion::{
    LocomotionCmd, LocomotionCmds, LocomotionController, LocomotionStatus,
};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::signals::Signals;
use crate::events::effects::EffectCmd;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn locomotion_system(
    mut query: Query<(
        Entity,
        &mut LocomotionController,
        &mut RigidBody,
        &mut MapPosition,
        Option<&mut Scale>,
        Option<&mut Signals>,
    )>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut effects: MessageWriter<EffectCmd>,
) {
    let input = input.locomotion_input();
    let mut cmds = LocomotionCmds::new();

    for (entity, mut controller, mut body, mut position, maybe_scale, maybe_signals) in
        query.iter_mut()
    {
        let before = controller.status();
        let displacement = controller.tick(&input, time.delta, &mut body, position.pos, &mut cmds);
        position.pos += displacement;

        let status = controller.status();
        if status != before {
            debug!("{:?}: {:?} -> {:?}", entity, before, status);
        }

        if let Some(mut scale) = maybe_scale {
            scale.face(controller.facing());
        }

        if let Some(mut signals) = maybe_signals {
            signals.set_exclusive_flag(status.signal_key(), &LocomotionStatus::SIGNAL_KEYS);
            signals.set_scalar("facing", controller.facing().sign());
            signals.set_scalar("speed_left", controller.state.speed_left);
            signals.set_scalar("speed_right", controller.state.speed_right);
        }

        for cmd in cmds.drain(..) {
            match cmd {
                LocomotionCmd::SpawnEffect { position, facing } => {
                    effects.write(EffectCmd::SpawnDust { position, facing });
                }
            }
        }
    }
}
