#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::BitOr;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use symbol::*;
pub use types::*;
pub use vocabulary::*;

mod engine;
mod error;
mod generator;
mod symbol;
mod types;
mod vocabulary;

/// Rule determining when a board is complete.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum WinPolicy {
    /// Every cell must be revealed and the match quota met.
    FullClear,
    /// The match quota alone ends the game.
    Quota,
}

/// How one scratch event marks sub-cells.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ScratchPolicy {
    Point,
    Brush { radius: Coord },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    pub rows: Coord,
    pub columns: Coord,
    pub card_size: (f32, f32),
    pub symbol_size: f32,
    /// Reveal granularity of each symbol's scratch mask.
    pub mask_size: Coord2,
    /// Coverage fraction at which a symbol counts as fully revealed.
    pub reveal_threshold: f32,
    pub scratch_policy: ScratchPolicy,
    pub win_policy: WinPolicy,
    pub required_matches: CellCount,
    pub target_placement: TargetPlacement,
    pub vocabulary: Vocabulary,
}

impl BoardConfig {
    /// The classic 9x3 card: one match wins, but the whole card must be
    /// cleared first.
    pub fn classic() -> Self {
        Self {
            rows: 9,
            columns: 3,
            card_size: (350.0, 500.0),
            symbol_size: 40.0,
            mask_size: (10, 10),
            reveal_threshold: 0.9,
            scratch_policy: ScratchPolicy::Point,
            win_policy: WinPolicy::FullClear,
            required_matches: 1,
            target_placement: TargetPlacement::Probabilistic(0.95),
            vocabulary: Vocabulary::classic(),
        }
    }

    /// The taller quota variant: three matches win immediately, target cells
    /// always seeded.
    pub fn quota_rush() -> Self {
        Self {
            rows: 9,
            columns: 3,
            card_size: (350.0, 600.0),
            symbol_size: 40.0,
            mask_size: (10, 10),
            reveal_threshold: 0.9,
            scratch_policy: ScratchPolicy::Brush { radius: 1 },
            win_policy: WinPolicy::Quota,
            required_matches: 3,
            target_placement: TargetPlacement::Guaranteed,
            vocabulary: Vocabulary::classic(),
        }
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.columns)
    }

    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.columns == 0 {
            return Err(GameError::EmptyGrid);
        }
        if self.mask_size.0 == 0 || self.mask_size.1 == 0 {
            return Err(GameError::EmptyMask);
        }
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(GameError::InvalidThreshold);
        }
        if self.required_matches == 0 {
            return Err(GameError::ZeroRequiredMatches);
        }
        if self.required_matches > self.total_cells() {
            return Err(GameError::TooManyMatches);
        }
        Ok(())
    }

    /// Frame of the symbol centered within its grid cell, in card space.
    pub fn cell_frame(&self, row: Coord, column: Coord) -> Rect {
        let cell_width = self.card_size.0 / f32::from(self.columns);
        let cell_height = self.card_size.1 / f32::from(self.rows);

        Rect {
            x: f32::from(column) * cell_width + cell_width / 2.0 - self.symbol_size / 2.0,
            y: f32::from(row) * cell_height + cell_height / 2.0 - self.symbol_size / 2.0,
            width: self.symbol_size,
            height: self.symbol_size,
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::classic()
    }
}

/// A symbol kind placed at its frame, before the board wraps it in scratch
/// state.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlacedSymbol {
    pub kind: SymbolKind,
    pub frame: Rect,
}

/// Output of a [`CardGenerator`]: the drawn target kind plus the filled,
/// shuffled cell list. Cell order is presentation order; each cell keeps its
/// own frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardLayout {
    target: SymbolKind,
    cells: Vec<PlacedSymbol>,
}

impl CardLayout {
    pub fn new(target: SymbolKind, cells: Vec<PlacedSymbol>) -> Self {
        Self { target, cells }
    }

    pub fn target(&self) -> SymbolKind {
        self.target
    }

    pub fn cells(&self) -> &[PlacedSymbol] {
        &self.cells
    }

    pub fn cell_count(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn target_cell_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.kind == self.target)
            .count()
            .try_into()
            .unwrap()
    }

    pub(crate) fn into_parts(self) -> (SymbolKind, Vec<PlacedSymbol>) {
        (self.target, self.cells)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ScratchOutcome {
    NoChange,
    Scratched,
    Revealed,
    Matched,
    Won,
}

impl ScratchOutcome {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::NoChange)
    }
}

impl BitOr for ScratchOutcome {
    type Output = ScratchOutcome;

    fn bitor(self, rhs: Self) -> Self::Output {
        use ScratchOutcome::*;
        match (self, rhs) {
            (Won, _) => Won,
            (_, Won) => Won,
            (Matched, _) => Matched,
            (_, Matched) => Matched,
            (Revealed, _) => Revealed,
            (_, Revealed) => Revealed,
            (Scratched, _) => Scratched,
            (_, Scratched) => Scratched,
            (NoChange, NoChange) => NoChange,
        }
    }
}
