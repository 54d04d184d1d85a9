//! Collision categories for every body that takes part in contacts.
//!
//! A body carries exactly one category bit as its Rapier membership and a
//! [`CategoryMask`] as its filter. Contact handling reads the membership back
//! through [`CollisionCategory::from_bits`] instead of inspecting components.
use bevy_rapier2d::prelude::{CollisionGroups, Group};

// Bitmasks
pub const BALL_CATEGORY: u32 = 0x1 << 0; // 0b0001
pub const BOTTOM_CATEGORY: u32 = 0x1 << 1; // 0b0010
pub const BLOCK_CATEGORY: u32 = 0x1 << 2; // 0b0100
pub const PADDLE_CATEGORY: u32 = 0x1 << 3; // 0b1000

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollisionCategory {
    Ball,
    Bottom,
    Block,
    Paddle,
}

impl CollisionCategory {
    pub const ALL: [CollisionCategory; 4] = [
        CollisionCategory::Ball,
        CollisionCategory::Bottom,
        CollisionCategory::Block,
        CollisionCategory::Paddle,
    ];

    pub const fn bits(self) -> u32 {
        match self {
            CollisionCategory::Ball => BALL_CATEGORY,
            CollisionCategory::Bottom => BOTTOM_CATEGORY,
            CollisionCategory::Block => BLOCK_CATEGORY,
            CollisionCategory::Paddle => PADDLE_CATEGORY,
        }
    }

    /// Category for a membership mask holding exactly one known flag.
    /// Engine-default bodies (all bits set) and empty masks map to `None`.
    pub fn from_bits(bits: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.bits() == bits)
    }

    pub fn group(self) -> Group {
        Group::from_bits_truncate(self.bits())
    }
}

/// Set of categories a body reports contacts against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CategoryMask(pub u32);

impl CategoryMask {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn with(self, category: CollisionCategory) -> Self {
        Self(self.0 | category.bits())
    }

    pub const fn contains(self, category: CollisionCategory) -> bool {
        self.0 & category.bits() != 0
    }

    pub fn group(self) -> Group {
        Group::from_bits_truncate(self.0)
    }
}

impl FromIterator<CollisionCategory> for CategoryMask {
    fn from_iter<I: IntoIterator<Item = CollisionCategory>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), CategoryMask::with)
    }
}

/// Rapier groups for a body of `category` that should touch `contacts`.
///
/// Contacts are reported only when each body's membership is in the other's
/// filter, so boundary walls keep `Group::ALL` on both sides.
pub fn collision_groups(category: CollisionCategory, contacts: CategoryMask) -> CollisionGroups {
    CollisionGroups::new(category.group(), contacts.group() | Group::from_bits_truncate(!ALL_CATEGORIES))
}

const ALL_CATEGORIES: u32 = BALL_CATEGORY | BOTTOM_CATEGORY | BLOCK_CATEGORY | PADDLE_CATEGORY;

/// Contact mask the game assigns to each category.
pub fn contact_mask(category: CollisionCategory) -> CategoryMask {
    use CollisionCategory::*;
    match category {
        Ball => [Bottom, Block, Paddle].into_iter().collect(),
        Bottom | Block | Paddle => CategoryMask::empty().with(Ball),
    }
}

/// Groups for a body of `category` using the game's contact table.
pub fn groups_for(category: CollisionCategory) -> CollisionGroups {
    collision_groups(category, contact_mask(category))
}
