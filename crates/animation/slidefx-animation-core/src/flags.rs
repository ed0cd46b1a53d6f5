use serde::{Deserialize, Serialize};

/// Construction flags shared by all adapters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationFlags(u32);

impl AnimationFlags {
    pub const NONE: Self = Self(0);
    /// Do not move the shape into an animation sprite. For effects that
    /// need no intermediate-frame hit testing.
    pub const NO_SPRITE: Self = Self(1);

    #[inline]
    pub const fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for AnimationFlags {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}
