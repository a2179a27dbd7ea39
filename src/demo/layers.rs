//=========================================================================
// Layers & Physics Categories
//=========================================================================

//=== Layer ===============================================================

/// Draw order of the demo's nodes (higher draws on top).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Layer {
    Background,
    Ground,
    Hero,
    Ui,
}

impl Layer {
    /// z-position handed to the node service.
    pub fn z(self) -> f32 {
        self as u8 as f32
    }
}

//=== PhysicsCategory =====================================================

/// Collision category bitmasks.
pub struct PhysicsCategory;

impl PhysicsCategory {
    pub const NONE: u32 = 1 << 0;
    pub const HERO: u32 = 1 << 1;
    pub const GROUND: u32 = 1 << 2;
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layers_stack_in_declaration_order() {
        assert_eq!(Layer::Background.z(), 0.0);
        assert_eq!(Layer::Ground.z(), 1.0);
        assert_eq!(Layer::Hero.z(), 2.0);
        assert_eq!(Layer::Ui.z(), 3.0);
    }

    #[test]
    fn categories_are_disjoint_bits() {
        let all = [PhysicsCategory::NONE, PhysicsCategory::HERO, PhysicsCategory::GROUND];
        for (i, a) in all.iter().enumerate() {
            assert_eq!(a.count_ones(), 1);
            for b in &all[i + 1..] {
                assert_eq!(a & b, 0);
            }
        }
    }
}
