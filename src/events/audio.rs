use bevy_ecs::message::Message;

/// Commands for the audio backend.
///
/// The crate only queues these; a playback backend drains
/// `Messages<AudioCmd>` (the headless runner just logs them).
#[derive(Message, Debug, Clone, PartialEq)]
pub enum AudioCmd {
    PlayFx { id: String },
}
