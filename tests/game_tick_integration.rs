//! Full-schedule tick tests: locomotion, ground contact, effects, shooting and
//! config propagation running together through [`Game::step`].

use bevy_ecs::message::Message;
use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use glam::Vec2;

use platformkit::components::animation::Animation;
use platformkit::components::locomotion::{Facing, LocomotionStatus};
use platformkit::components::mapposition::MapPosition;
use platformkit::components::rigidbody::{GRAVITY_FORCE, RigidBody};
use platformkit::components::scale::Scale;
use platformkit::components::shooter::{ChargingProjectile, Projectile};
use platformkit::components::signals::Signals;
use platformkit::components::ttl::Ttl;
use platformkit::events::audio::AudioCmd;
use platformkit::game::{Game, demo_script};
use platformkit::resources::camera2d::Camera2DRes;
use platformkit::resources::gameconfig::GameConfig;
use platformkit::resources::groundplane::GroundPlane;
use platformkit::resources::input::InputFrame;

const DT: f32 = 1.0 / 60.0;
const EPSILON: f32 = 1e-3;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn idle() -> InputFrame {
    InputFrame {
        repeat: 1,
        ..Default::default()
    }
}

fn right() -> InputFrame {
    InputFrame {
        right: true,
        ..idle()
    }
}

fn left() -> InputFrame {
    InputFrame { left: true, ..idle() }
}

fn jump() -> InputFrame {
    InputFrame { jump: true, ..idle() }
}

fn fire() -> InputFrame {
    InputFrame { fire: true, ..idle() }
}

/// A game whose player has already touched down and is standing still.
fn settled_game() -> Game {
    let mut game = Game::new(GameConfig::new()).unwrap();
    run(&mut game, idle(), 5);
    game
}

fn run(game: &mut Game, frame: InputFrame, ticks: usize) {
    for _ in 0..ticks {
        game.step(&frame, DT);
    }
}

/// Run `ticks` ticks and return the highest player y reached.
fn run_tracking_peak(game: &mut Game, frame: InputFrame, ticks: usize) -> f32 {
    let mut peak = game.player_position().y;
    for _ in 0..ticks {
        game.step(&frame, DT);
        peak = peak.max(game.player_position().y);
    }
    peak
}

fn status(game: &Game) -> LocomotionStatus {
    game.player_controller().unwrap().status()
}

fn count<C: Component>(game: &mut Game) -> usize {
    game.world
        .query_filtered::<Entity, With<C>>()
        .iter(&game.world)
        .count()
}

fn read_messages<M: Message + Clone>(world: &mut World) -> Vec<M> {
    let mut state = SystemState::<MessageReader<M>>::new(world);
    let mut reader = state.get_mut(world);
    reader.read().cloned().collect()
}

/// Peak height of a jump whose button is held for `hold_ticks` ticks.
fn jump_peak(hold_ticks: usize) -> f32 {
    let mut game = settled_game();
    let held = run_tracking_peak(&mut game, jump(), hold_ticks);
    held.max(run_tracking_peak(&mut game, idle(), 90))
}

#[test]
fn standing_player_rests_on_the_ground_plane() {
    let mut game = settled_game();
    run(&mut game, idle(), 30);
    assert_eq!(status(&game), LocomotionStatus::Grounded);
    assert_eq!(game.player_position(), Vec2::ZERO);
    assert_eq!(game.player_body().unwrap().velocity.y, 0.0);
}

#[test]
fn walking_ramps_to_max_speed_then_slides_to_a_stop() {
    let mut game = settled_game();
    run(&mut game, right(), 60);
    let signals = game.world.get::<Signals>(game.player).unwrap();
    let speed = signals.get_scalar("speed_right").unwrap();
    assert!((6.0..6.5).contains(&speed), "speed_right = {}", speed);
    assert_eq!(signals.get_scalar("facing"), Some(1.0));
    let released_at = game.player_position().x;
    assert!(released_at > 4.0);

    run(&mut game, idle(), 60);
    let stopped_at = game.player_position().x;
    assert!(stopped_at > released_at, "released momentum keeps sliding");
    run(&mut game, idle(), 10);
    assert_eq!(game.player_position().x, stopped_at);
}

#[test]
fn turning_left_flips_facing_and_scale() {
    let mut game = settled_game();
    run(&mut game, left(), 10);
    assert_eq!(game.player_controller().unwrap().facing(), Facing::Left);
    let scale = game.world.get::<Scale>(game.player).unwrap();
    assert!(scale.scale.x < 0.0);
    assert!(game.player_position().x < 0.0);
}

#[test]
fn full_jump_rises_and_lands_back_on_the_ground() {
    let mut game = settled_game();
    game.step(&jump(), DT);
    assert_eq!(status(&game), LocomotionStatus::Jumping);
    let signals = game.world.get::<Signals>(game.player).unwrap();
    assert!(signals.has_flag("jumping"));
    assert!(!signals.has_flag("grounded"));

    let peak = run_tracking_peak(&mut game, jump(), 29);
    game.step(&idle(), DT);
    assert_eq!(status(&game), LocomotionStatus::Airborne);
    // about v^2 / 2g with v = 12, g = 30
    assert!(peak > 2.2 && peak < 2.5, "peak = {}", peak);

    run(&mut game, idle(), 60);
    assert_eq!(status(&game), LocomotionStatus::Grounded);
    assert_eq!(game.player_position().y, 0.0);
}

#[test]
fn shorter_holds_give_lower_jumps() {
    let full = jump_peak(30);
    let medium = jump_peak(9);
    let small_hop = jump_peak(2);
    assert!(medium < full - 0.1, "medium {} full {}", medium, full);
    assert!(small_hop < full - 0.1, "small hop {} full {}", small_hop, full);
}

#[test]
fn jump_is_allowed_within_coyote_time() {
    let mut game = settled_game();
    game.world.resource_mut::<GroundPlane>().height = -100.0;
    run(&mut game, idle(), 3);
    assert_eq!(status(&game), LocomotionStatus::Grounded);

    game.step(&jump(), DT);
    assert_eq!(status(&game), LocomotionStatus::Jumping);
    assert!(game.player_body().unwrap().velocity.y > 10.0);
}

#[test]
fn jump_is_refused_after_coyote_time() {
    let mut game = settled_game();
    game.world.resource_mut::<GroundPlane>().height = -100.0;
    run(&mut game, idle(), 10);
    assert_eq!(status(&game), LocomotionStatus::Airborne);

    game.step(&jump(), DT);
    assert_eq!(status(&game), LocomotionStatus::Airborne);
    assert!(game.player_body().unwrap().velocity.y < 0.0);
}

#[test]
fn fast_fall_adds_downward_displacement_while_airborne() {
    let falling = || {
        let mut game = settled_game();
        game.world.resource_mut::<GroundPlane>().height = -100.0;
        run(&mut game, idle(), 10);
        game
    };
    let mut plain = falling();
    let mut fast = falling();
    run(&mut plain, idle(), 10);
    let down = InputFrame { down: true, ..idle() };
    run(&mut fast, down, 10);

    // 10 ticks of movement_speed * dt
    let extra = plain.player_position().y - fast.player_position().y;
    assert!(approx_eq(extra, 1.0), "extra = {}", extra);
}

#[test]
fn direction_press_on_ground_spawns_dust_that_despawns() {
    let mut game = settled_game();
    game.step(&right(), DT);
    assert_eq!(count::<Animation>(&mut game), 1);

    let (pos, scale) = game
        .world
        .query_filtered::<(&MapPosition, &Scale), With<Animation>>()
        .single(&game.world)
        .map(|(p, s)| (p.pos, s.scale))
        .unwrap();
    assert_eq!(pos, Vec2::ZERO);
    assert!(scale.x > 0.0);

    // held, not pressed again
    run(&mut game, right(), 20);
    assert_eq!(count::<Animation>(&mut game), 1);

    // 0.5s clip, removed at 95% progress
    run(&mut game, idle(), 20);
    assert_eq!(count::<Animation>(&mut game), 0);
}

#[test]
fn direction_press_in_the_air_spawns_no_dust() {
    let mut game = settled_game();
    run(&mut game, jump(), 5);
    let jump_left = InputFrame { jump: true, ..left() };
    game.step(&jump_left, DT);
    assert_eq!(count::<Animation>(&mut game), 0);
}

#[test]
fn charged_shot_fires_projectile_with_multiplier() {
    let mut game = settled_game();
    run(&mut game, fire(), 60);
    assert_eq!(count::<ChargingProjectile>(&mut game), 1);
    let charge_scale = game
        .world
        .query_filtered::<&Scale, With<ChargingProjectile>>()
        .single(&game.world)
        .map(|s| s.scale.x)
        .unwrap();
    // 1s of a 2s max charge
    assert!(approx_eq(charge_scale, 1.5), "charge scale = {}", charge_scale);

    game.step(&idle(), DT);
    assert_eq!(count::<ChargingProjectile>(&mut game), 0);
    let (projectile, body, ttl) = game
        .world
        .query::<(&Projectile, &RigidBody, &Ttl)>()
        .single(&game.world)
        .map(|(p, b, t)| (*p, b.velocity, t.remaining))
        .unwrap();
    assert!(approx_eq(projectile.charge_multiplier, 1.5));
    assert_eq!(body, Vec2::new(20.0, 0.0));
    assert!(ttl > 4.9 && ttl <= 5.0);

    let sounds = read_messages::<AudioCmd>(&mut game.world);
    assert_eq!(
        sounds,
        vec![AudioCmd::PlayFx {
            id: "shoot".to_string()
        }]
    );
    assert!(game.world.resource::<Camera2DRes>().shake.is_some());
}

#[test]
fn camera_returns_to_rest_after_shake() {
    let mut game = settled_game();
    run(&mut game, fire(), 2);
    game.step(&idle(), DT);
    run(&mut game, idle(), 20);
    let camera = game.world.resource::<Camera2DRes>();
    assert!(camera.shake.is_none());
    assert_eq!(camera.target, Vec2::ZERO);
}

#[test]
fn projectile_flies_until_its_ttl_runs_out() {
    let mut game = settled_game();
    game.step(&fire(), DT);
    game.step(&idle(), DT);
    run(&mut game, idle(), 60);
    let x = game
        .world
        .query_filtered::<&MapPosition, With<Projectile>>()
        .single(&game.world)
        .map(|p| p.pos.x)
        .unwrap();
    // spawn offset 0.5 plus ~1s at 20 units/s
    assert!(x > 20.0, "x = {}", x);

    run(&mut game, idle(), 260);
    assert_eq!(count::<Projectile>(&mut game), 0);
}

#[test]
fn firing_without_camera_still_shoots() {
    let mut game = settled_game();
    game.world.remove_resource::<Camera2DRes>();
    game.step(&fire(), DT);
    game.step(&idle(), DT);
    assert_eq!(count::<Projectile>(&mut game), 1);
}

#[test]
fn config_changes_reach_live_entities() {
    let mut game = settled_game();
    {
        let mut config = game.world.resource_mut::<GameConfig>();
        config.gravity = -10.0;
        config.ground_height = 1.0;
        config.locomotion.movement_speed = 3.0;
        config.shooter.projectile_speed = 5.0;
    }
    game.step(&idle(), DT);

    let body = game.player_body().unwrap();
    assert_eq!(
        body.get_force(GRAVITY_FORCE).unwrap().value,
        Vec2::new(0.0, -10.0)
    );
    assert_eq!(game.player_controller().unwrap().config.movement_speed, 3.0);
    assert_eq!(game.world.resource::<GroundPlane>().height, 1.0);
    assert_eq!(game.player_position().y, 1.0);

    game.step(&fire(), DT);
    game.step(&idle(), DT);
    let velocity = game
        .world
        .query_filtered::<&RigidBody, With<Projectile>>()
        .single(&game.world)
        .map(|b| b.velocity)
        .unwrap();
    assert_eq!(velocity, Vec2::new(5.0, 0.0));
}

#[test]
fn demo_script_plays_through_and_ends_grounded() {
    let mut game = Game::new(GameConfig::new()).unwrap();
    let script = demo_script();
    for tick in 0..script.len() + 60 {
        game.step(&script.frame(tick), DT);
    }
    assert_eq!(status(&game), LocomotionStatus::Grounded);
    assert_eq!(game.player_position().y, 0.0);
}
