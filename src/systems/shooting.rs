//! Charge shooting system.
//!
//! Reads the fire action from [`InputState`] and drives every
//! [`ChargeShooter`]:
//!
//! 1. Fire pressed: start charging and spawn a [`ChargingProjectile`] at the
//!    spawn point.
//! 2. Fire held while charging (including the press tick): accumulate charge,
//!    keep the charging projectile on the spawn point and grow it.
//! 3. Fire released: remove the charging projectile and fire a
//!    [`Projectile`] carrying the charge multiplier, request a camera shake
//!    and a sound.
//!
//! The spawn point is the shooter position plus `spawn_offset`, mirrored to
//! the shooter's facing.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::components::locomotion::{Facing, LocomotionController};
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::scale::Scale;
use crate::components::shooter::{ChargeShooter, ChargingProjectile, Projectile};
use crate::components::ttl::Ttl;
use crate::events::audio::AudioCmd;
use crate::events::camerashake::CameraShakeEvent;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

fn spawn_point(position: Vec2, offset: Vec2, facing: Facing) -> Vec2 {
    position + Vec2::new(offset.x * facing.sign(), offset.y)
}

pub fn shooting_system(
    mut shooters: Query<(
        &MapPosition,
        &mut ChargeShooter,
        Option<&LocomotionController>,
    )>,
    mut charging: Query<(&mut MapPosition, &mut Scale, &ChargingProjectile), Without<ChargeShooter>>,
    input: Res<InputState>,
    time: Res<WorldTime>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
) {
    let fire = input.fire;

    for (position, mut shooter, maybe_controller) in shooters.iter_mut() {
        let facing = maybe_controller.map_or(Facing::Right, |c| c.facing());
        let spawn_at = spawn_point(position.pos, shooter.config.spawn_offset, facing);

        if fire.just_pressed {
            shooter.start_charging();
            let base_scale = Vec2::ONE;
            let entity = commands
                .spawn((
                    MapPosition { pos: spawn_at },
                    Scale {
                        scale: base_scale,
                    },
                    ChargingProjectile { base_scale },
                ))
                .id();
            shooter.charging_projectile = Some(entity);
        }

        if fire.active && shooter.is_charging {
            let charge_scale = shooter.update_charging(time.delta);
            let follower = shooter
                .charging_projectile
                .and_then(|entity| charging.get_mut(entity).ok());
            if let Some((mut pos, mut scale, proj)) = follower {
                pos.pos = spawn_at;
                scale.scale = proj.base_scale * charge_scale;
            }
        }

        if fire.just_released {
            if let Some(entity) = shooter.charging_projectile.take() {
                commands.entity(entity).try_despawn();
            }
            let charge_multiplier = shooter.fire();
            let config = &shooter.config;

            let mut scale = Scale::default();
            scale.face(facing);
            commands.spawn((
                MapPosition { pos: spawn_at },
                scale,
                RigidBody::new()
                    .with_velocity(Vec2::new(config.projectile_speed * facing.sign(), 0.0)),
                Projectile { charge_multiplier },
                Ttl::new(config.projectile_lifetime),
            ));
            debug!(
                "Fired projectile at {} (charge x{:.2})",
                spawn_at, charge_multiplier
            );

            commands.trigger(CameraShakeEvent {
                duration: config.shake_duration,
                magnitude: config.shake_magnitude,
            });
            if let Some(id) = &config.sound_id {
                audio.write(AudioCmd::PlayFx { id: id.clone() });
            }
        }
    }
}
