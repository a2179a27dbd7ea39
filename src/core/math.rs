//=========================================================================
// Scene Math
//=========================================================================
//
// Minimal 2D vector type shared by input events, node placement and
// physics calls. Scene space is y-up with the origin at the bottom-left
// corner of the scene frame.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::ops::{Add, Mul, Sub};

//=== Vec2 ================================================================

/// 2D point, size or vector in scene units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Vector with only a vertical component.
    pub const fn up(y: f32) -> Self {
        Self { x: 0.0, y }
    }

    /// Component-wise product (used for size × scale).
    pub fn scaled(self, scale: Vec2) -> Self {
        Self::new(self.x * scale.x, self.y * scale.y)
    }

    /// Centre point of a frame with this size.
    pub fn center(self) -> Self {
        self * 0.5
    }
}

//--- Operators -----------------------------------------------------------

impl Add for Vec2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
