//! ECS resources made available to systems.
//!
//! Overview
//! - `animationstore` – clip definitions reused across entities
//! - `camera2d` – shared 2D camera and its running shake
//! - `gameconfig` – INI-backed tunables for movement, physics and shooting
//! - `groundplane` – the flat surface ground probes test against
//! - `input` – per-tick action state with press/release edges
//! - `inputscript` – JSON input playback for headless runs
//! - `worldtime` – simulation time and delta
pub mod animationstore;
pub mod camera2d;
pub mod gameconfig;
pub mod groundplane;
pub mod input;
pub mod inputscript;
pub mod worldtime;
