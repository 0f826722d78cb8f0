//! Level terrain queries.
//!
//! Collision against the level itself is not simulated here. Objects that
//! walk or bounce ask the [`Terrain`] service how far the nearest surface is
//! and adjust themselves; when no service is installed they skip the check.

use bevy_ecs::prelude::Resource;

/// Result of probing for a surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SurfaceProbe {
    /// Signed distance to the surface; negative means the probe point is
    /// already inside it.
    pub distance: i32,
}

pub trait TerrainQuery: Send + Sync {
    /// Distance from `(x, y)` down to the floor, if within `range` pixels.
    fn floor_distance(&self, x: i32, y: i32, range: i32) -> Option<SurfaceProbe>;
    /// Distance from `(x, y)` to a wall on the given side, if within `range`.
    fn wall_distance(&self, x: i32, y: i32, facing_right: bool, range: i32)
    -> Option<SurfaceProbe>;
}

#[derive(Resource)]
pub struct Terrain(pub Box<dyn TerrainQuery>);

impl Terrain {
    pub fn new(query: impl TerrainQuery + 'static) -> Self {
        Terrain(Box::new(query))
    }
}

/// Flat floor with optional vertical walls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FlatTerrain {
    pub floor_y: i32,
    pub left_wall: Option<i32>,
    pub right_wall: Option<i32>,
}

impl FlatTerrain {
    pub fn new(floor_y: i32) -> Self {
        Self {
            floor_y,
            left_wall: None,
            right_wall: None,
        }
    }

    pub fn with_walls(mut self, left: i32, right: i32) -> Self {
        self.left_wall = Some(left);
        self.right_wall = Some(right);
        self
    }
}

impl TerrainQuery for FlatTerrain {
    fn floor_distance(&self, _x: i32, y: i32, range: i32) -> Option<SurfaceProbe> {
        let distance = self.floor_y - y;
        (distance < range).then_some(SurfaceProbe { distance })
    }

    fn wall_distance(
        &self,
        x: i32,
        _y: i32,
        facing_right: bool,
        range: i32,
    ) -> Option<SurfaceProbe> {
        let distance = if facing_right {
            self.right_wall? - x
        } else {
            x - self.left_wall?
        };
        (distance < range).then_some(SurfaceProbe { distance })
    }
}
