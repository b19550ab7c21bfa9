use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Stable identity of one grid cell within its board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SymbolId(pub u32);

/// Derived per-symbol lifecycle. `Revealed` and `Matched` are permanent once
/// reached.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SymbolState {
    Hidden,
    Revealing,
    Revealed,
    Matched,
}

/// Monotone grid of scratched sub-cells. Bits only ever turn on, so coverage
/// never decreases and re-scratching is a no-op.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScratchMask {
    cells: Array2<bool>,
    scratched: CellCount,
}

impl ScratchMask {
    pub fn new(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            scratched: 0,
        }
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn scratched_count(&self) -> CellCount {
        self.scratched
    }

    /// Fraction of sub-cells scratched so far, in `[0, 1]`.
    pub fn coverage(&self) -> f32 {
        f32::from(self.scratched) / f32::from(self.total_cells())
    }

    pub fn in_bounds(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    /// Marks a single sub-cell, returning how many sub-cells were newly
    /// scratched (0 or 1). Out-of-bounds coordinates are ignored.
    pub fn mark(&mut self, coords: Coord2) -> CellCount {
        if !self.in_bounds(coords) {
            return 0;
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if *cell {
            0
        } else {
            *cell = true;
            self.scratched += 1;
            1
        }
    }

    /// Marks the square neighborhood of `radius` around `center`, clipped to
    /// the mask bounds. An out-of-bounds center marks nothing.
    pub fn mark_brush(&mut self, center: Coord2, radius: Coord) -> CellCount {
        if !self.in_bounds(center) {
            return 0;
        }

        let mut marked = 0;
        for coords in self.cells.iter_brush(center, radius) {
            marked += self.mark(coords);
        }
        marked
    }
}

impl Index<Coord2> for ScratchMask {
    type Output = bool;

    fn index(&self, (x, y): Coord2) -> &Self::Output {
        &self.cells[(x as usize, y as usize)]
    }
}

/// One grid cell: a symbol kind behind a scratch-off cover.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Symbol {
    id: SymbolId,
    kind: SymbolKind,
    frame: Rect,
    mask: ScratchMask,
    fully_revealed: bool,
    matched: bool,
}

impl Symbol {
    pub(crate) fn new(id: SymbolId, kind: SymbolKind, frame: Rect, mask_size: Coord2) -> Self {
        Self {
            id,
            kind,
            frame,
            mask: ScratchMask::new(mask_size),
            fully_revealed: false,
            matched: false,
        }
    }

    pub fn id(&self) -> SymbolId {
        self.id
    }

    pub fn kind(&self) -> SymbolKind {
        self.kind
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn mask(&self) -> &ScratchMask {
        &self.mask
    }

    pub fn coverage(&self) -> f32 {
        self.mask.coverage()
    }

    pub fn is_fully_revealed(&self) -> bool {
        self.fully_revealed
    }

    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub fn state(&self) -> SymbolState {
        if self.matched {
            SymbolState::Matched
        } else if self.fully_revealed {
            SymbolState::Revealed
        } else if self.mask.scratched_count() == 0 {
            SymbolState::Hidden
        } else {
            SymbolState::Revealing
        }
    }

    pub(crate) fn scratch(&mut self, at: Coord2, policy: ScratchPolicy) -> CellCount {
        match policy {
            ScratchPolicy::Point => self.mask.mark(at),
            ScratchPolicy::Brush { radius } => self.mask.mark_brush(at, radius),
        }
    }

    /// Runs the coverage check, returning `true` only on the false-to-true
    /// reveal transition. The flag never reverts.
    pub(crate) fn update_reveal(&mut self, threshold: f32) -> bool {
        if self.fully_revealed || self.mask.coverage() < threshold {
            return false;
        }

        self.fully_revealed = true;
        true
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbol() -> Symbol {
        let frame = Rect {
            x: 0.0,
            y: 0.0,
            width: 40.0,
            height: 40.0,
        };
        Symbol::new(SymbolId(0), SymbolKind(7), frame, (10, 10))
    }

    #[test]
    fn marking_is_idempotent() {
        let mut mask = ScratchMask::new((10, 10));

        assert_eq!(mask.mark((4, 4)), 1);
        assert_eq!(mask.mark((4, 4)), 0);
        assert_eq!(mask.scratched_count(), 1);
    }

    #[test]
    fn out_of_bounds_marks_are_ignored() {
        let mut mask = ScratchMask::new((10, 10));

        assert_eq!(mask.mark((10, 0)), 0);
        assert_eq!(mask.mark_brush((0, 20), 1), 0);
        assert_eq!(mask.scratched_count(), 0);
    }

    #[test]
    fn brush_marks_clipped_neighborhood() {
        let mut mask = ScratchMask::new((10, 10));

        assert_eq!(mask.mark_brush((5, 5), 1), 9);
        for x in 4..=6 {
            for y in 4..=6 {
                assert!(mask[(x, y)]);
            }
        }

        let mut corner = ScratchMask::new((10, 10));
        assert_eq!(corner.mark_brush((0, 0), 1), 4);
    }

    #[test]
    fn reveal_fires_at_ninety_percent_exactly_once() {
        let mut symbol = symbol();

        let mut scratched = 0;
        for y in 0..10 {
            for x in 0..10 {
                if scratched == 89 {
                    break;
                }
                symbol.scratch((x, y), ScratchPolicy::Point);
                scratched += 1;
            }
        }
        assert!(!symbol.update_reveal(0.9));

        symbol.scratch((9, 9), ScratchPolicy::Point);
        assert!(symbol.update_reveal(0.9));
        assert!(symbol.is_fully_revealed());

        symbol.scratch((8, 9), ScratchPolicy::Point);
        assert!(!symbol.update_reveal(0.9));
        assert!(symbol.is_fully_revealed());
    }

    #[test]
    fn state_follows_reveal_and_match_transitions() {
        let mut symbol = symbol();
        assert_eq!(symbol.state(), SymbolState::Hidden);

        symbol.scratch((0, 0), ScratchPolicy::Point);
        assert_eq!(symbol.state(), SymbolState::Revealing);

        for y in 0..10 {
            for x in 0..10 {
                symbol.scratch((x, y), ScratchPolicy::Point);
            }
        }
        symbol.update_reveal(0.9);
        assert_eq!(symbol.state(), SymbolState::Revealed);

        symbol.mark_matched();
        assert_eq!(symbol.state(), SymbolState::Matched);
    }
}
