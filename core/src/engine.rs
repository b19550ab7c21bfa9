use alloc::vec::Vec;
use core::num::Saturating;
use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CardState {
    Playing,
    Won,
}

impl CardState {
    pub const fn is_won(self) -> bool {
        matches!(self, Self::Won)
    }
}

impl Default for CardState {
    fn default() -> Self {
        Self::Playing
    }
}

/// Fire-and-forget feedback signal for the presentation layer. The engine
/// never waits on delivery; a host that cannot play an effect just drops it.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Effect {
    Match,
    Win,
}

impl Effect {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::Win => "win",
        }
    }
}

pub type EffectBatch = SmallVec<[Effect; 2]>;

/// The scratch-match board. All mutation flows through [`ScratchCard::scratch`];
/// reveal, match, and win transitions are monotone and fire their effects at
/// most once. Not internally synchronized: a multi-threaded host must
/// serialize mutating calls.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScratchCard {
    config: BoardConfig,
    target: SymbolKind,
    cells: Vec<Symbol>,
    revealed_ids: HashSet<SymbolId>,
    matched_count: Saturating<CellCount>,
    state: CardState,
    effects: EffectBatch,
}

impl ScratchCard {
    pub fn new(config: BoardConfig, layout: CardLayout) -> Result<Self> {
        config.validate()?;
        if layout.cell_count() != config.total_cells() {
            return Err(GameError::InvalidBoardShape);
        }

        let (target, placed) = layout.into_parts();
        let mask_size = config.mask_size;
        let cells = placed
            .into_iter()
            .enumerate()
            .map(|(index, cell)| Symbol::new(SymbolId(index as u32), cell.kind, cell.frame, mask_size))
            .collect();

        Ok(Self {
            config,
            target,
            cells,
            revealed_ids: HashSet::new(),
            matched_count: Saturating(0),
            state: CardState::Playing,
            effects: SmallVec::new(),
        })
    }

    /// Generates a fresh board from `config` with a seeded random layout.
    pub fn generate(config: BoardConfig, seed: u64) -> Result<Self> {
        let layout = RandomCardGenerator::new(seed).generate(&config)?;
        Self::new(config, layout)
    }

    /// A fresh board under the same configuration: new target, new grid,
    /// zeroed counters. The current board is left untouched; `Won` is
    /// terminal per instance.
    pub fn reset(&self, seed: u64) -> Result<Self> {
        Self::generate(self.config.clone(), seed)
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn target_kind(&self) -> SymbolKind {
        self.target
    }

    pub fn state(&self) -> CardState {
        self.state
    }

    pub fn has_won(&self) -> bool {
        self.state.is_won()
    }

    pub fn cells(&self) -> &[Symbol] {
        &self.cells
    }

    pub fn cell(&self, id: SymbolId) -> Option<&Symbol> {
        self.cells.iter().find(|symbol| symbol.id() == id)
    }

    pub fn matched_count(&self) -> CellCount {
        self.matched_count.0
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_ids.len().try_into().unwrap()
    }

    /// Drains the effects accumulated since the last call, in firing order.
    pub fn take_effects(&mut self) -> EffectBatch {
        core::mem::take(&mut self.effects)
    }

    /// Applies one scratch event at sub-cell `at` of symbol `id`. Unknown
    /// ids, out-of-bounds coordinates, and scratches on a finished board are
    /// silent no-ops.
    pub fn scratch(&mut self, id: SymbolId, at: Coord2) -> Result<ScratchOutcome> {
        use ScratchOutcome::*;

        if self.state.is_won() {
            return Ok(NoChange);
        }

        let Some(index) = self.cells.iter().position(|symbol| symbol.id() == id) else {
            return Ok(NoChange);
        };

        let marked = self.cells[index].scratch(at, self.config.scratch_policy);
        if marked == 0 {
            return Ok(NoChange);
        }

        let mut outcome = Scratched;
        if self.cells[index].update_reveal(self.config.reveal_threshold) {
            outcome = outcome | self.on_symbol_revealed(index);
        }
        Ok(outcome)
    }

    /// Match/win evaluation, entered exactly once per symbol via the reveal
    /// transition.
    fn on_symbol_revealed(&mut self, index: usize) -> ScratchOutcome {
        use ScratchOutcome::*;

        let id = self.cells[index].id();
        if !self.revealed_ids.insert(id) {
            return Revealed;
        }

        let mut outcome = Revealed;
        if self.cells[index].kind() == self.target {
            self.cells[index].mark_matched();
            self.matched_count += 1;
            self.effects.push(Effect::Match);
            outcome = Matched;
        }

        if self.win_condition_met() {
            self.state = CardState::Won;
            self.effects.push(Effect::Win);
            outcome = Won;
        }

        outcome
    }

    fn win_condition_met(&self) -> bool {
        let quota_met = self.matched_count.0 >= self.config.required_matches;
        match self.config.win_policy {
            WinPolicy::FullClear => quota_met && self.revealed_ids.len() == self.cells.len(),
            WinPolicy::Quota => quota_met,
        }
    }
}
