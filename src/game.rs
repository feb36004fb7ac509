//! High-level game setup.
//!
//! [`Game`] owns the ECS world and the per-tick schedule. Building one inserts
//! every resource and observer the systems expect, registers the effect clips
//! and spawns the player. [`Game::step`] advances the simulation by one tick:
//!
//! 1. advance [`WorldTime`] by `dt`
//! 2. feed the tick's [`InputFrame`] into [`InputState`]
//! 3. run the schedule
//!
//! System order inside the schedule:
//! message queues → config → locomotion → shooting → movement → ground probe
//! (→ contact observer) → TTL, with effects/animation after locomotion and the
//! camera shake and audio drain after shooting.

use bevy_ecs::prelude::*;
use glam::Vec2;
use log::info;

use crate::components::groundprobe::GroundProbe;
use crate::components::locomotion::LocomotionController;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use crate::components::scale::Scale;
use crate::components::shooter::ChargeShooter;
use crate::components::signals::Signals;
use crate::events::audio::AudioCmd;
use crate::events::camerashake::camera_shake_observer;
use crate::events::effects::EffectCmd;
use crate::resources::animationstore::{AnimationResource, AnimationStore, DUST_ANIMATION};
use crate::resources::camera2d::Camera2DRes;
use crate::resources::gameconfig::GameConfig;
use crate::resources::groundplane::GroundPlane;
use crate::resources::input::{InputFrame, InputState};
use crate::resources::inputscript::InputScript;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::{animation, animation_despawn_system};
use crate::systems::audio::{drain_audio_cmds, update_audio_cmds};
use crate::systems::camera::camera_shake_system;
use crate::systems::effects::{effect_spawn_system, update_effect_cmds};
use crate::systems::gameconfig::apply_gameconfig_changes;
use crate::systems::ground::{ground_contact_observer, ground_probe_system};
use crate::systems::input::apply_input_frame;
use crate::systems::locomotion::locomotion_system;
use crate::systems::movement::movement;
use crate::systems::shooting::shooting_system;
use crate::systems::time::update_world_time;
use crate::systems::ttl::ttl_system;

/// Marker for the player-controlled entity.
#[derive(Component, Debug, Clone, Copy)]
pub struct Player;

pub struct Game {
    pub world: World,
    schedule: Schedule,
    pub player: Entity,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, String> {
        let mut world = build_world(config);
        let schedule = build_schedule(&mut world)?;
        let player = spawn_player(&mut world);
        info!("Game ready, player {:?}", player);
        Ok(Self {
            world,
            schedule,
            player,
        })
    }

    /// Advance the simulation by one tick of `dt` seconds.
    pub fn step(&mut self, frame: &InputFrame, dt: f32) {
        update_world_time(&mut self.world, dt);
        apply_input_frame(&mut self.world, frame);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<MapPosition>(self.player)
            .map_or(Vec2::ZERO, |p| p.pos)
    }

    pub fn player_controller(&self) -> Option<&LocomotionController> {
        self.world.get::<LocomotionController>(self.player)
    }

    pub fn player_body(&self) -> Option<&RigidBody> {
        self.world.get::<RigidBody>(self.player)
    }
}

/// Create a world holding every resource, message queue and observer used by
/// the schedule.
pub fn build_world(config: GameConfig) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime::default());
    world.insert_resource(InputState::default());
    world.insert_resource(GroundPlane {
        height: config.ground_height,
        surface_velocity: Vec2::ZERO,
    });
    world.insert_resource(Camera2DRes::new(Vec2::ZERO));
    world.insert_resource(default_animation_store());
    world.insert_resource(config);
    world.init_resource::<Messages<EffectCmd>>();
    world.init_resource::<Messages<AudioCmd>>();

    world.add_observer(ground_contact_observer);
    world.add_observer(camera_shake_observer);
    // Ensure the observers are registered before any system triggers events.
    world.flush();
    world
}

pub fn build_schedule(world: &mut World) -> Result<Schedule, String> {
    let mut update = Schedule::default();
    update.add_systems((update_effect_cmds, update_audio_cmds));
    update.add_systems(
        apply_gameconfig_changes
            .after(update_effect_cmds)
            .after(update_audio_cmds),
    );
    update.add_systems(locomotion_system.after(apply_gameconfig_changes));
    update.add_systems(shooting_system.after(locomotion_system));
    update.add_systems(movement.after(shooting_system));
    update.add_systems(ground_probe_system.after(movement));
    update.add_systems(ttl_system.after(movement));
    update.add_systems(effect_spawn_system.after(locomotion_system));
    update.add_systems(animation.after(effect_spawn_system));
    update.add_systems(animation_despawn_system.after(animation));
    update.add_systems(camera_shake_system.after(shooting_system));
    update.add_systems(drain_audio_cmds.after(shooting_system));

    update
        .initialize(world)
        .map_err(|e| format!("Failed to initialize schedule: {}", e))?;
    Ok(update)
}

/// Spawn the player standing on the ground plane, configured from [`GameConfig`].
pub fn spawn_player(world: &mut World) -> Entity {
    let config = world.resource::<GameConfig>().clone();
    world
        .spawn((
            Player,
            MapPosition::new(0.0, config.ground_height),
            RigidBody::new().with_force(GRAVITY_FORCE, Vec2::new(0.0, config.gravity)),
            LocomotionController::new(config.locomotion),
            ChargeShooter::new(config.shooter),
            Scale::default(),
            Signals::default(),
            GroundProbe::default(),
        ))
        .id()
}

pub fn default_animation_store() -> AnimationStore {
    let mut store = AnimationStore::default();
    store.insert(
        DUST_ANIMATION,
        AnimationResource {
            frame_count: 6,
            fps: 12.0,
            looped: false,
        },
    );
    store
}

/// Built-in input sequence used when no script is given: walk, jump at three
/// hold lengths, slide, turn around, fast-fall and a charged shot.
pub fn demo_script() -> InputScript {
    let idle = InputFrame {
        repeat: 1,
        ..Default::default()
    };
    let frame = |f: InputFrame, repeat: u32| InputFrame { repeat, ..f };
    InputScript::from_frames([
        frame(idle, 10),
        frame(InputFrame { right: true, ..idle }, 40),
        frame(InputFrame { right: true, jump: true, ..idle }, 3),
        frame(idle, 40),
        frame(InputFrame { jump: true, ..idle }, 10),
        frame(idle, 40),
        frame(InputFrame { left: true, jump: true, ..idle }, 30),
        frame(InputFrame { left: true, down: true, ..idle }, 20),
        frame(idle, 40),
        frame(InputFrame { fire: true, ..idle }, 90),
        frame(idle, 60),
    ])
}
