//! Hex coordinate system for the game board (column-zigzag offset)
//!
//! Cells are addressed by column `x` and row `y`. Odd columns sit half a hex
//! lower than even columns. Distances are computed in axial space, where
//! `q = x` and `r = y - floor(x / 2)`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Offset coordinate of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct HexCoord {
    pub x: i32,
    pub y: i32,
}

/// Axial coordinate (q, r) derived from an offset coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AxialCoord {
    pub q: i32,
    pub r: i32,
}

impl AxialCoord {
    /// Cube coordinate S (derived from q and r)
    pub fn s(&self) -> i32 {
        -self.q - self.r
    }
}

/// Neighbor slots in enumeration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HexSide {
    Top,
    Bottom,
    LeftUpper,
    LeftLower,
    RightUpper,
    RightLower,
}

impl HexSide {
    /// All sides, in the order neighbors are enumerated
    pub fn all() -> [HexSide; 6] {
        [
            HexSide::Top,
            HexSide::Bottom,
            HexSide::LeftUpper,
            HexSide::LeftLower,
            HexSide::RightUpper,
            HexSide::RightLower,
        ]
    }

    /// Offset (dx, dy) of this side for a cell in the given column
    pub fn offset(&self, column: i32) -> (i32, i32) {
        let odd = column.rem_euclid(2) == 1;
        match (self, odd) {
            (HexSide::Top, _) => (0, -1),
            (HexSide::Bottom, _) => (0, 1),
            (HexSide::LeftUpper, false) => (-1, -1),
            (HexSide::LeftLower, false) => (-1, 0),
            (HexSide::RightUpper, false) => (1, -1),
            (HexSide::RightLower, false) => (1, 0),
            (HexSide::LeftUpper, true) => (-1, 0),
            (HexSide::LeftLower, true) => (-1, 1),
            (HexSide::RightUpper, true) => (1, 0),
            (HexSide::RightLower, true) => (1, 1),
        }
    }
}

impl HexCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Convert to axial coordinates
    pub fn to_axial(&self) -> AxialCoord {
        AxialCoord {
            q: self.x,
            r: self.y - self.x.div_euclid(2),
        }
    }

    /// Minimum number of adjacent-cell steps between two cells
    pub fn distance(&self, other: &Self) -> u32 {
        let a = self.to_axial();
        let b = other.to_axial();
        let dq = (a.q - b.q).abs();
        let dr = (a.r - b.r).abs();
        let ds = (a.s() - b.s()).abs();
        ((dq + dr + ds) / 2) as u32
    }

    /// Neighbor in the given direction, ignoring board bounds
    pub fn neighbor(&self, side: HexSide) -> HexCoord {
        let (dx, dy) = side.offset(self.x);
        HexCoord::new(self.x + dx, self.y + dy)
    }

    /// All six neighbors, ignoring board bounds
    pub fn all_neighbors(&self) -> [HexCoord; 6] {
        HexSide::all().map(|side| self.neighbor(side))
    }

    /// Neighbors that lie on a `width` x `height` grid
    pub fn neighbors(&self, width: i32, height: i32) -> Vec<HexCoord> {
        self.all_neighbors()
            .into_iter()
            .filter(|coord| coord.in_bounds(width, height))
            .collect()
    }

    /// Adjacency is membership in the neighbor set
    pub fn is_adjacent(&self, other: &Self) -> bool {
        self.all_neighbors().contains(other)
    }

    /// Check if coordinate is within grid bounds
    pub fn in_bounds(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < width && self.y < height
    }
}

impl fmt::Display for HexCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

impl FromStr for HexCoord {
    type Err = String;

    /// Parse the "x,y" cell key
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once(',')
            .ok_or_else(|| format!("expected 'x,y', got '{}'", s))?;
        let x = x
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("bad column in '{}': {}", s, e))?;
        let y = y
            .trim()
            .parse::<i32>()
            .map_err(|e| format!("bad row in '{}': {}", s, e))?;
        Ok(HexCoord::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axial_conversion() {
        assert_eq!(HexCoord::new(0, 0).to_axial(), AxialCoord { q: 0, r: 0 });
        assert_eq!(HexCoord::new(3, 4).to_axial(), AxialCoord { q: 3, r: 3 });
        assert_eq!(HexCoord::new(4, 4).to_axial(), AxialCoord { q: 4, r: 2 });
    }

    #[test]
    fn test_hex_distance_same() {
        let a = HexCoord::new(5, 5);
        assert_eq!(a.distance(&a), 0);
    }

    #[test]
    fn test_hex_distance_straight_column() {
        let a = HexCoord::new(2, 1);
        let b = HexCoord::new(2, 6);
        assert_eq!(a.distance(&b), 5);
    }

    #[test]
    fn test_hex_distance_across_columns() {
        // Even column (2,2) touches (3,1) and (3,2)
        assert_eq!(HexCoord::new(2, 2).distance(&HexCoord::new(3, 1)), 1);
        assert_eq!(HexCoord::new(2, 2).distance(&HexCoord::new(3, 2)), 1);
        assert_eq!(HexCoord::new(2, 2).distance(&HexCoord::new(3, 3)), 2);
        // Odd column (3,2) touches (4,2) and (4,3)
        assert_eq!(HexCoord::new(3, 2).distance(&HexCoord::new(4, 3)), 1);
        assert_eq!(HexCoord::new(3, 2).distance(&HexCoord::new(4, 1)), 2);
    }

    #[test]
    fn test_even_column_neighbors() {
        let n = HexCoord::new(2, 2).all_neighbors();
        assert_eq!(
            n,
            [
                HexCoord::new(2, 1),
                HexCoord::new(2, 3),
                HexCoord::new(1, 1),
                HexCoord::new(1, 2),
                HexCoord::new(3, 1),
                HexCoord::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_odd_column_neighbors() {
        let n = HexCoord::new(3, 2).all_neighbors();
        assert_eq!(
            n,
            [
                HexCoord::new(3, 1),
                HexCoord::new(3, 3),
                HexCoord::new(2, 2),
                HexCoord::new(2, 3),
                HexCoord::new(4, 2),
                HexCoord::new(4, 3),
            ]
        );
    }

    #[test]
    fn test_neighbors_are_distance_one() {
        for x in 1..15 {
            for y in 1..7 {
                let c = HexCoord::new(x, y);
                for n in c.all_neighbors() {
                    assert_eq!(c.distance(&n), 1, "{} -> {}", c, n);
                }
            }
        }
    }

    #[test]
    fn test_corner_neighbors_clipped() {
        let corner = HexCoord::new(0, 0);
        let n = corner.neighbors(16, 8);
        assert_eq!(n, vec![HexCoord::new(0, 1), HexCoord::new(1, 0)]);
    }

    #[test]
    fn test_is_adjacent() {
        assert!(HexCoord::new(2, 2).is_adjacent(&HexCoord::new(1, 2)));
        assert!(!HexCoord::new(2, 2).is_adjacent(&HexCoord::new(1, 3)));
        assert!(!HexCoord::new(2, 2).is_adjacent(&HexCoord::new(2, 2)));
    }

    #[test]
    fn test_parse_key() {
        assert_eq!("13,4".parse::<HexCoord>(), Ok(HexCoord::new(13, 4)));
        assert_eq!(" 2 , 3 ".parse::<HexCoord>(), Ok(HexCoord::new(2, 3)));
        assert!("13".parse::<HexCoord>().is_err());
        assert!("a,b".parse::<HexCoord>().is_err());
        assert_eq!(HexCoord::new(13, 4).to_string(), "13,4");
    }
}
