//! Terrain kinds and their movement costs.

use std::fmt;

/// What occupies a grid cell.
///
/// `Wall` is impassable. Every other kind is passable and carries a positive
/// cost paid when a path enters the cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TerrainKind {
    #[default]
    Wall,
    /// Plain floor, cost 1.
    Open,
    /// Cost 3.
    Forest,
    /// Cost 5.
    Mud,
}

impl TerrainKind {
    /// Cost of entering a cell of this kind, or `None` for walls.
    #[inline]
    pub const fn cost(self) -> Option<u32> {
        match self {
            Self::Wall => None,
            Self::Open => Some(1),
            Self::Forest => Some(3),
            Self::Mud => Some(5),
        }
    }

    /// Whether a path may enter this cell.
    #[inline]
    pub const fn is_passable(self) -> bool {
        !matches!(self, Self::Wall)
    }

    /// Whether this is a passable kind costing more than plain floor.
    #[inline]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Forest | Self::Mud)
    }

    /// Single-character glyph used by text renderings.
    pub const fn glyph(self) -> char {
        match self {
            Self::Wall => '#',
            Self::Open => '.',
            Self::Forest => 'f',
            Self::Mud => 'm',
        }
    }
}

impl fmt::Display for TerrainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wall => "wall",
            Self::Open => "open",
            Self::Forest => "forest",
            Self::Mud => "mud",
        };
        f.write_str(name)
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn terrain_json() {
        let json = serde_json::to_string(&TerrainKind::Forest).unwrap();
        assert_eq!(json, "\"Forest\"");
        let back: TerrainKind = serde_json::from_str(&json).unwrap();
        assert_eq!(back, TerrainKind::Forest);
    }
}
