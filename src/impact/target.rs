//! Destructible target shapes and their materials

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::geom::{Polygon, Rect};

/// What a target is made of
///
/// The first three are the slicing tiers (health counts hits); the last
/// three are demolition materials (health is durability points).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Material {
    #[default]
    Soft,
    Medium,
    Hard,
    Wood,
    Brick,
    Concrete,
}

impl Material {
    pub fn as_str(&self) -> &'static str {
        match self {
            Material::Soft => "Soft",
            Material::Medium => "Medium",
            Material::Hard => "Hard",
            Material::Wood => "Wood",
            Material::Brick => "Brick",
            Material::Concrete => "Concrete",
        }
    }

    /// Starting health: required hits for slicing tiers, durability for demolition
    pub fn durability(&self) -> f32 {
        match self {
            Material::Soft => 1.0,
            Material::Medium => 2.0,
            Material::Hard => 3.0,
            Material::Wood => 30.0,
            Material::Brick => 60.0,
            Material::Concrete => 100.0,
        }
    }

    /// Health removed by one successful slice
    pub fn hit_damage(&self) -> f32 {
        1.0
    }

    /// Multiplier on incoming blast power
    pub fn damage_scale(&self) -> f32 {
        match self {
            Material::Soft | Material::Medium | Material::Hard | Material::Wood => 1.0,
            Material::Brick => 0.75,
            Material::Concrete => 0.5,
        }
    }

    /// Whether this is one of the demolition materials
    pub fn is_structural(&self) -> bool {
        matches!(self, Material::Wood | Material::Brick | Material::Concrete)
    }

    /// Debris color (0xRRGGBB) handed to the renderer through fragment tags
    pub fn debris_color(&self) -> u32 {
        match self {
            Material::Soft => 0xF2_6D_6D,
            Material::Medium => 0xF5_B9_42,
            Material::Hard => 0x8E_C0_4F,
            Material::Wood => 0xA0_6A_3B,
            Material::Brick => 0xB2_4A_34,
            Material::Concrete => 0x9A_9A_9A,
        }
    }
}

/// Outline of a target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Rect(Rect),
    /// Convex polygon (demolition blocks)
    Polygon(Polygon),
}

impl Shape {
    /// Axis-aligned bounds
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Rect(rect) => *rect,
            Shape::Polygon(poly) => poly.bounds(),
        }
    }

    /// Reference center for precision scoring
    pub fn center(&self) -> Vec2 {
        match self {
            Shape::Rect(rect) => rect.center(),
            Shape::Polygon(poly) => poly.centroid(),
        }
    }

    /// Distance from the center at which precision reaches zero
    pub fn half_diagonal(&self) -> f32 {
        self.bounds().half_diagonal()
    }

    /// Zero-area rects and polygons with fewer than 3 vertices
    pub fn is_degenerate(&self) -> bool {
        match self {
            Shape::Rect(rect) => rect.is_degenerate(),
            Shape::Polygon(poly) => !poly.is_valid(),
        }
    }

    /// Inclusive point containment
    pub fn contains(&self, p: Vec2) -> bool {
        match self {
            Shape::Rect(rect) => rect.contains(p),
            Shape::Polygon(poly) => poly.contains(p),
        }
    }

    /// Point of the shape nearest to `p` (`p` itself when inside)
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        match self {
            Shape::Rect(rect) => crate::geom::closest_point_on_rect(p, rect),
            Shape::Polygon(poly) => poly.closest_point(p),
        }
    }
}

/// A destructible target owned by the playfield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetShape {
    pub id: u32,
    pub shape: Shape,
    pub material: Material,
    pub health: f32,
    pub max_health: f32,
}

impl TargetShape {
    pub fn new(id: u32, shape: Shape, material: Material) -> Self {
        let health = material.durability();
        Self {
            id,
            shape,
            material,
            health,
            max_health: health,
        }
    }

    pub fn rect(id: u32, rect: Rect, material: Material) -> Self {
        Self::new(id, Shape::Rect(rect), material)
    }

    pub fn polygon(id: u32, polygon: Polygon, material: Material) -> Self {
        Self::new(id, Shape::Polygon(polygon), material)
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.health <= 0.0
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.shape.bounds()
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.shape.center()
    }

    /// Remaining health as a fraction of the starting value (for crack overlays)
    pub fn health_fraction(&self) -> f32 {
        if self.max_health <= 0.0 {
            return 0.0;
        }
        (self.health / self.max_health).clamp(0.0, 1.0)
    }
}
