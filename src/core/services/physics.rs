//=========================================================================
// Physics Service
//=========================================================================

use crate::core::math::Vec2;
use super::NodeId;

//=== BodySpec ============================================================

/// Rectangular physics body attached to a node.
///
/// `category` and `collision` are bitmasks: two bodies collide when one's
/// collision mask intersects the other's category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodySpec {
    pub size: Vec2,
    pub dynamic: bool,
    pub category: u32,
    pub collision: u32,
}

impl BodySpec {
    /// A static (non-simulated) rectangle with no filtering set.
    pub fn rectangle(size: Vec2) -> Self {
        Self {
            size,
            dynamic: false,
            category: 0,
            collision: 0,
        }
    }

    pub fn dynamic(mut self, dynamic: bool) -> Self {
        self.dynamic = dynamic;
        self
    }

    pub fn category(mut self, category: u32) -> Self {
        self.category = category;
        self
    }

    pub fn collides_with(mut self, mask: u32) -> Self {
        self.collision = mask;
        self
    }
}

//=== PhysicsService ======================================================

/// Body creation and manipulation. The simulation itself is the backend's.
pub trait PhysicsService {
    /// Sets world gravity in scene units per second squared.
    fn set_gravity(&mut self, gravity: Vec2);

    /// Encloses the scene frame of `size` in an edge-loop boundary.
    fn set_boundary(&mut self, size: Vec2);

    fn attach_body(&mut self, node: NodeId, body: BodySpec);

    /// Toggles whether the body is simulated.
    fn set_dynamic(&mut self, node: NodeId, dynamic: bool);

    fn set_velocity(&mut self, node: NodeId, velocity: Vec2);

    /// Applies an instantaneous momentum change.
    fn apply_impulse(&mut self, node: NodeId, impulse: Vec2);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rectangle_defaults_to_static_unfiltered() {
        let body = BodySpec::rectangle(Vec2::new(10.0, 20.0));
        assert!(!body.dynamic);
        assert_eq!(body.category, 0);
        assert_eq!(body.collision, 0);
    }

    #[test]
    fn builder_sets_masks() {
        let body = BodySpec::rectangle(Vec2::new(1.0, 1.0))
            .dynamic(true)
            .category(1 << 1)
            .collides_with(1 << 2);
        assert!(body.dynamic);
        assert_eq!(body.category, 0b010);
        assert_eq!(body.collision, 0b100);
    }
}
