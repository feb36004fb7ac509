// Signals for communication between components

use bevy_ecs::prelude::Component;
use rustc_hash::{FxHashMap, FxHashSet};

/// Per-entity scalars and flags published by gameplay systems.
///
/// The locomotion system writes the controller status here so animation and
/// effect collaborators can read it without depending on the controller type.
#[derive(Debug, Clone, Default, Component)]
pub struct Signals {
    pub scalars: FxHashMap<String, f32>,
    pub flags: FxHashSet<String>,
}

impl Signals {
    pub fn with_flag(mut self, key: impl Into<String>) -> Self {
        self.set_flag(key);
        self
    }
    pub fn set_scalar(&mut self, key: impl Into<String>, value: f32) {
        self.scalars.insert(key.into(), value);
    }
    pub fn get_scalar(&self, key: &str) -> Option<f32> {
        self.scalars.get(key).copied()
    }
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
    /// Set `key` and clear every other flag in `group`.
    pub fn set_exclusive_flag(&mut self, key: &str, group: &[&str]) {
        for other in group {
            if *other != key {
                self.flags.remove(*other);
            }
        }
        self.flags.insert(key.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exclusive_flag_clears_siblings() {
        let mut s = Signals::default().with_flag("a").with_flag("unrelated");
        s.set_exclusive_flag("b", &["a", "b", "c"]);
        assert!(!s.has_flag("a"));
        assert!(s.has_flag("b"));
        assert!(!s.has_flag("c"));
        assert!(s.has_flag("unrelated"));
    }

    #[test]
    fn scalars_roundtrip_by_key() {
        let mut s = Signals::default();
        assert_eq!(s.get_scalar("speed"), None);
        s.set_scalar("speed", 4.5);
        assert_eq!(s.get_scalar("speed"), Some(4.5));
    }
}
