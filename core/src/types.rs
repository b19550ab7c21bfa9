use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for grid rows/columns and sub-cell positions.
pub type Coord = u8;

/// Count type used for cell counts and scratched-sub-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// Axis-aligned frame in card space, used to place a symbol within its grid cell.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

pub trait BrushIterExt {
    fn iter_brush(&self, center: Coord2, radius: Coord) -> BrushIter;
}

impl<T> BrushIterExt for Array2<T> {
    fn iter_brush(&self, center: Coord2, radius: Coord) -> BrushIter {
        let dim = self.dim();
        let bounds = (dim.0.try_into().unwrap(), dim.1.try_into().unwrap());
        BrushIter::new(center, bounds, radius)
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// Iterates the in-bounds square neighborhood of Chebyshev radius `radius`
/// around `center`, the center itself included. Radius 0 yields only the
/// center.
#[derive(Debug)]
pub struct BrushIter {
    center: Coord2,
    bounds: Coord2,
    radius: Coord,
    cursor: u32,
}

impl BrushIter {
    fn new(center: Coord2, bounds: Coord2, radius: Coord) -> Self {
        Self {
            center,
            bounds,
            radius,
            cursor: 0,
        }
    }

    fn side(&self) -> u32 {
        u32::from(self.radius) * 2 + 1
    }
}

impl Iterator for BrushIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let side = self.side();
        let window = side * side;

        while self.cursor < window {
            let dx = (self.cursor % side) as isize - isize::from(self.radius);
            let dy = (self.cursor / side) as isize - isize::from(self.radius);
            self.cursor += 1;

            if let Some(next_item) = apply_delta(self.center, (dx, dy), self.bounds) {
                return Some(next_item);
            }
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn grid(size: Coord2) -> Array2<bool> {
        Array2::default(size.to_nd_index())
    }

    #[test]
    fn brush_radius_one_covers_three_by_three_block() {
        let cells: Vec<Coord2> = grid((10, 10)).iter_brush((5, 5), 1).collect();

        assert_eq!(cells.len(), 9);
        assert!(
            cells
                .iter()
                .all(|&(x, y)| (4..=6).contains(&x) && (4..=6).contains(&y))
        );
    }

    #[test]
    fn brush_clips_at_grid_corner() {
        let cells: Vec<Coord2> = grid((10, 10)).iter_brush((0, 0), 1).collect();

        assert_eq!(cells.len(), 4);
        assert!(cells.contains(&(0, 0)));
        assert!(cells.contains(&(1, 1)));
    }

    #[test]
    fn brush_radius_zero_yields_only_center() {
        let cells: Vec<Coord2> = grid((10, 10)).iter_brush((3, 7), 0).collect();

        assert_eq!(cells, [(3, 7)]);
    }
}
