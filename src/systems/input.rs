//! Input update.
//!
//! [`apply_input_frame`] writes one tick of held levels into
//! [`InputState`](crate::resources::input::InputState), computing the
//! press/release edges. It runs outside the schedule, before it, the same way
//! the world time is advanced.
use bevy_ecs::prelude::*;
use log::trace;

use crate::resources::input::{InputFrame, InputState};

pub fn apply_input_frame(world: &mut World, frame: &InputFrame) {
    let mut input = world.resource_mut::<InputState>();
    input.apply(frame);
    trace!("input: {:?}", frame);
}
