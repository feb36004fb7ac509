//! Scripted input source.
//!
//! An [`InputScript`] is a JSON array of [`InputFrame`]s played back one per
//! tick, with `repeat` expanding a frame over several ticks:
//!
//! ```json
//! [
//!   { "right": true, "repeat": 30 },
//!   { "right": true, "jump": true, "repeat": 12 },
//!   { "repeat": 60 }
//! ]
//! ```
//!
//! Ticks past the end of the script read as all inputs released.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;

use crate::resources::input::InputFrame;

#[derive(Resource, Debug, Clone, Default)]
pub struct InputScript {
    /// One entry per tick, `repeat` already expanded.
    frames: Vec<InputFrame>,
}

impl InputScript {
    pub fn from_frames(frames: impl IntoIterator<Item = InputFrame>) -> Self {
        let frames = frames
            .into_iter()
            .flat_map(|f| std::iter::repeat_n(InputFrame { repeat: 1, ..f }, f.repeat as usize))
            .collect();
        Self { frames }
    }

    pub fn from_json(json: &str) -> Result<Self, String> {
        let frames: Vec<InputFrame> =
            serde_json::from_str(json).map_err(|e| format!("Invalid input script: {}", e))?;
        Ok(Self::from_frames(frames))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, String> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read input script {:?}: {}", path, e))?;
        let script = Self::from_json(&json)?;
        info!("Loaded input script {:?}: {} ticks", path, script.len());
        Ok(script)
    }

    /// Input for `tick`, released once the script has run out.
    pub fn frame(&self, tick: usize) -> InputFrame {
        self.frames.get(tick).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}
