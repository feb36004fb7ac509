//! Ground contact.
//!
//! - [`ground_probe_system`] compares probed bodies against the
//!   [`GroundPlane`] after movement and triggers [`GroundContactEvent`]s.
//! - [`ground_contact_observer`] applies those events to the entity's
//!   [`LocomotionController`].
//!
//! Contact sequence per body: `Land` on the first touching tick, `OnGround`
//! every further touching tick, `FallOff` on the first tick without contact
//! unless the body left moving upward (a jump take-off).
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::groundprobe::GroundProbe;
use crate::components::locomotion::LocomotionController;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::events::ground::{GroundContact, GroundContactEvent};
use crate::resources::groundplane::GroundPlane;

pub fn ground_probe_system(
    mut query: Query<(Entity, &mut MapPosition, &RigidBody, &mut GroundProbe)>,
    plane: Option<Res<GroundPlane>>,
    mut commands: Commands,
) {
    let Some(plane) = plane else {
        return;
    };
    for (entity, mut position, body, mut probe) in query.iter_mut() {
        // Moving up through the plane is not a contact.
        let touching = position.pos.y <= plane.height && body.velocity.y <= 0.0;
        if touching {
            position.pos.y = plane.height;
            let ground_speed = plane.surface_velocity.y;
            let contact = if probe.in_contact {
                GroundContact::OnGround { ground_speed }
            } else {
                GroundContact::Land { ground_speed }
            };
            commands.trigger(GroundContactEvent { entity, contact });
        } else if probe.in_contact && body.velocity.y <= 0.0 {
            // Walked or dropped off. Taking off upward is not a fall.
            commands.trigger(GroundContactEvent {
                entity,
                contact: GroundContact::FallOff {
                    ground_velocity: plane.surface_velocity,
                },
            });
        }
        probe.in_contact = touching;
    }
}

pub fn ground_contact_observer(
    trigger: On<GroundContactEvent>,
    mut query: Query<(&mut LocomotionController, &mut RigidBody)>,
) {
    let event = trigger.event();
    let Ok((mut controller, mut body)) = query.get_mut(event.entity) else {
        debug!(
            "Ground contact for {:?} ignored: no controller/body",
            event.entity
        );
        return;
    };
    match event.contact {
        GroundContact::Land { ground_speed } => {
            debug!("{:?} landed", event.entity);
            controller.land(ground_speed, &mut body);
        }
        GroundContact::OnGround { ground_speed } => controller.on_ground(ground_speed, &mut body),
        GroundContact::FallOff { ground_velocity } => {
            debug!("{:?} left the ground", event.entity);
            controller.on_fall_off(ground_velocity, &mut body);
        }
    }
}
