//! Animation script registry.
//!
//! Scripts are shared by every object that plays them and looked up by
//! string id. The store starts from the built-in set in
//! [`crate::objects::default_animations`] and can be extended or overridden
//! from a JSON file mapping ids to scripts:
//!
//! ```json
//! {
//!   "ring_spin": { "frames": [0, 1, 2, 3], "delay": 7, "end": "loop" },
//!   "bubble_full": { "frames": [3, 4, 5], "delay": 7, "end": { "loop_back": 2 } }
//! }
//! ```
//!
//! A script whose `delays` list is not the same length as its `frames` is
//! rejected when loaded and trips a debug assertion when inserted directly.

use std::path::Path;

use bevy_ecs::prelude::Resource;
use log::info;
use rustc_hash::FxHashMap;
use serde::de::Error as _;

use crate::components::animation::AnimationScript;
use crate::error::LoadError;

#[derive(Resource, Debug, Clone, Default)]
pub struct AnimationStore {
    pub scripts: FxHashMap<String, AnimationScript>,
}

impl AnimationStore {
    pub fn get(&self, id: &str) -> Option<&AnimationScript> {
        self.scripts.get(id)
    }

    pub fn insert(&mut self, id: impl Into<String>, script: AnimationScript) {
        let id = id.into();
        debug_assert!(
            script.delays_match(),
            "animation script {id:?} has {} frames but a different number of delays",
            script.frames.len()
        );
        self.scripts.insert(id, script);
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Merges scripts from a JSON document, replacing ids that already exist.
    /// Returns the number of scripts read.
    pub fn merge_json(&mut self, json: &str) -> Result<usize, serde_json::Error> {
        let scripts: FxHashMap<String, AnimationScript> = serde_json::from_str(json)?;
        if let Some((id, script)) = scripts.iter().find(|(_, script)| !script.delays_match()) {
            return Err(serde_json::Error::custom(format!(
                "animation script {id:?} has {} frames but {} delays",
                script.frames.len(),
                script.delays.as_ref().map_or(0, Vec::len)
            )));
        }
        let count = scripts.len();
        self.scripts.extend(scripts);
        Ok(count)
    }

    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> Result<usize, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let count = self.merge_json(&text).map_err(|e| LoadError::json(path, e))?;
        info!("Loaded {} animation scripts from {:?}", count, path);
        Ok(count)
    }
}
