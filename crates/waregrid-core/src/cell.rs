//! The [`Cell`] type — per-cell floor occupancy.

/// A single floor cell: either open to travel or blocked by racking,
/// machinery, or another fixed obstacle.
///
/// Display concerns (start/end markers, route highlighting) belong to the
/// caller; the grid stores walkability only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub walkable: bool,
}

impl Cell {
    /// An open cell.
    pub const OPEN: Self = Self { walkable: true };

    /// A blocked cell.
    pub const BLOCKED: Self = Self { walkable: false };

    /// Set walkability (builder).
    #[inline]
    pub const fn with_walkable(mut self, walkable: bool) -> Self {
        self.walkable = walkable;
        self
    }
}

impl Default for Cell {
    /// Floors default to fully open; callers mark obstacles afterwards.
    #[inline]
    fn default() -> Self {
        Self::OPEN
    }
}
