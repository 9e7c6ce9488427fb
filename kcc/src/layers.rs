use serde::{Deserialize, Serialize};

/// Trait implemented by collision layer enums.
///
/// The enum's discriminant (via `#[repr(u8)]`) is the bit index inside a [`LayerMask`].
pub trait CollisionLayer {
    fn bit_index(&self) -> u8;

    fn mask(&self) -> LayerMask {
        // NOTE: `bit_index()` must be < 32.
        LayerMask::from_bits(1u32 << u32::from(self.bit_index()))
    }
}

/// Collision layer bitmask.
///
/// Static colliders carry a membership mask; queries carry a filter mask. A collider
/// takes part in a query when the two masks share at least one bit.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayerMask {
    pub bits: u32,
}

impl Default for LayerMask {
    fn default() -> Self {
        Self::ALL
    }
}

impl LayerMask {
    pub const NONE: Self = Self { bits: 0 };
    pub const ALL: Self = Self { bits: u32::MAX };

    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    // --- Single layer operations ---
    pub fn add<L: CollisionLayer>(&mut self, layer: L) {
        self.bits |= layer.mask().bits;
    }

    pub fn remove<L: CollisionLayer>(&mut self, layer: L) {
        self.bits &= !layer.mask().bits;
    }

    pub fn has<L: CollisionLayer>(&self, layer: L) -> bool {
        self.intersects(layer.mask())
    }

    // --- Bulk operations ---
    pub fn from_layers<L: CollisionLayer + Copy>(layers: &[L]) -> Self {
        let mut mask = Self::NONE;
        for &layer in layers {
            mask.add(layer);
        }
        mask
    }

    /// True if the two masks share at least one layer.
    #[inline]
    pub fn intersects(&self, other: LayerMask) -> bool {
        (self.bits & other.bits) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }
}

/// Declare a layer enum and implement [`CollisionLayer`] for it.
///
/// Example:
/// ```rust
/// kcc::define_collision_layers!(WorldLayer, {
///     Ground,
///     OneWay,
///     Hazard,
/// });
///
/// let mask = kcc::LayerMask::from_layers(&[WorldLayer::Ground, WorldLayer::OneWay]);
/// assert!(mask.has(WorldLayer::Ground));
/// assert!(!mask.has(WorldLayer::Hazard));
/// ```
#[macro_export]
macro_rules! define_collision_layers {
    ($name:ident, { $($variant:ident),* $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        #[repr(u8)]
        pub enum $name {
            $($variant),*
        }

        impl $crate::layers::CollisionLayer for $name {
            fn bit_index(&self) -> u8 {
                *self as u8
            }
        }
    };
}
