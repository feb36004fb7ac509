//! Event and message types exchanged between systems.
//!
//! Submodules:
//! - [`audio`] – sound requests queued for an audio backend
//! - [`camerashake`] – camera shake request and the observer that starts it
//! - [`effects`] – visual effect requests (dust)
//! - [`ground`] – contact changes reported to the locomotion controller
pub mod audio;
pub mod camerashake;
pub mod effects;
pub mod ground;
