//! Audio command queue.
//!
//! Gameplay systems write [`AudioCmd`]s; a playback backend is expected to
//! read `Messages<AudioCmd>`. Without one, [`drain_audio_cmds`] logs them so
//! headless runs still show what would have played.
use bevy_ecs::prelude::*;
use log::info;

use crate::events::audio::AudioCmd;

/// Advance the ECS message queue for AudioCmd so same-frame readers can observe writes.
pub fn update_audio_cmds(mut msgs: ResMut<Messages<AudioCmd>>) {
    msgs.update();
}

pub fn drain_audio_cmds(mut reader: MessageReader<AudioCmd>) {
    for cmd in reader.read() {
        match cmd {
            AudioCmd::PlayFx { id } => info!("[audio] play fx '{}'", id),
        }
    }
}
