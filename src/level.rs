//! Level layouts.
//!
//! A level is a JSON document listing placed objects, actors and optionally
//! a flat terrain floor:
//!
//! ```json
//! {
//!   "floor_y": 400,
//!   "walls": [0, 4000],
//!   "actors": [{ "x": 64, "y": 300, "main": true }],
//!   "objects": [
//!     { "kind": "ring", "x": 160, "y": 340 },
//!     { "kind": "spikes", "subtype": 17, "x": 400, "y": 384 },
//!     { "kind": "spring", "x": 600, "y": 392, "flip": false }
//!   ]
//! }
//! ```
//!
//! [`LevelLayout::spawn`] places everything into a [`World`] through the
//! same spawn functions objects use for their children.

use std::path::Path;

use bevy_ecs::prelude::*;
use bevy_ecs::system::SystemState;
use log::info;
use serde::{Deserialize, Serialize};

use crate::components::actor::{Actor, MainActor};
use crate::components::objectkind::Kind;
use crate::error::LoadError;
use crate::objects::spawn_placed;
use crate::resources::terrain::{FlatTerrain, Terrain};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub kind: Kind,
    #[serde(default)]
    pub subtype: u8,
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub flip: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActorPlacement {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub main: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct LevelLayout {
    #[serde(default)]
    pub floor_y: Option<i32>,
    #[serde(default)]
    pub walls: Option<(i32, i32)>,
    #[serde(default)]
    pub actors: Vec<ActorPlacement>,
    #[serde(default)]
    pub objects: Vec<Placement>,
}

impl LevelLayout {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::io(path, e))?;
        let layout = Self::from_json(&text).map_err(|e| LoadError::json(path, e))?;
        info!(
            "Loaded level {:?}: {} objects, {} actors",
            path,
            layout.objects.len(),
            layout.actors.len()
        );
        Ok(layout)
    }

    /// Flat terrain described by the layout, if it has a floor.
    pub fn terrain(&self) -> Option<FlatTerrain> {
        let floor = FlatTerrain::new(self.floor_y?);
        Some(match self.walls {
            Some((left, right)) => floor.with_walls(left, right),
            None => floor,
        })
    }

    /// Spawns actors and objects and installs the terrain. Returns the
    /// entities of the placed objects in layout order.
    pub fn spawn(&self, world: &mut World) -> Vec<Entity> {
        if let Some(terrain) = self.terrain() {
            world.insert_resource(Terrain::new(terrain));
        }
        for actor in &self.actors {
            let mut entity = world.spawn(Actor::new(actor.x, actor.y));
            if actor.main {
                entity.insert(MainActor);
            }
        }

        let mut state = SystemState::<Commands>::new(world);
        let placed = {
            let mut commands = state.get_mut(world);
            self.objects
                .iter()
                .map(|p| spawn_placed(&mut commands, p.kind, p.subtype, p.x, p.y, p.flip))
                .collect()
        };
        state.apply(world);
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let layout = LevelLayout::from_json(
            r#"{ "objects": [ { "kind": "collapsing_platform", "x": 10, "y": 20 } ] }"#,
        )
        .unwrap();
        assert_eq!(layout.floor_y, None);
        assert!(layout.actors.is_empty());
        assert_eq!(
            layout.objects[0],
            Placement {
                kind: Kind::CollapsingPlatform,
                subtype: 0,
                x: 10,
                y: 20,
                flip: false
            }
        );
        assert!(layout.terrain().is_none());
    }

    #[test]
    fn unknown_kind_is_an_error() {
        assert!(LevelLayout::from_json(r#"{ "objects": [ { "kind": "boss", "x": 0, "y": 0 } ] }"#).is_err());
    }

    #[test]
    fn terrain_with_walls() {
        let layout = LevelLayout::from_json(r#"{ "floor_y": 300, "walls": [0, 900] }"#).unwrap();
        assert_eq!(layout.terrain(), Some(FlatTerrain::new(300).with_walls(0, 900)));
    }
}
