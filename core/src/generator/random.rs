use alloc::vec::Vec;

use super::*;

/// Seeded uniform generation: draw a target kind, fill the grid from the
/// vocabulary, reserve a cell for the target per the placement policy, then
/// shuffle presentation order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RandomCardGenerator {
    seed: u64,
}

impl RandomCardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl CardGenerator for RandomCardGenerator {
    fn generate(self, config: &BoardConfig) -> Result<CardLayout> {
        use rand::prelude::*;

        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let kind_count = config.vocabulary.kind_count();
        if kind_count == 0 {
            log::warn!("Vocabulary is empty, every cell falls back to the default kind");
        }

        let draw_kind = |rng: &mut SmallRng| {
            if kind_count == 0 {
                SymbolKind::DEFAULT
            } else {
                SymbolKind(rng.random_range(0..kind_count))
            }
        };

        let target = draw_kind(&mut rng);
        let total = config.total_cells();

        let reserved = match config.target_placement {
            TargetPlacement::Guaranteed => Some(rng.random_range(0..total)),
            TargetPlacement::Probabilistic(chance) => {
                if rng.random::<f32>() < chance {
                    Some(rng.random_range(0..total))
                } else {
                    None
                }
            }
        };

        let mut cells = Vec::with_capacity(usize::from(total));
        let mut index: CellCount = 0;
        for row in 0..config.rows {
            for column in 0..config.columns {
                let kind = if reserved == Some(index) {
                    target
                } else {
                    draw_kind(&mut rng)
                };
                cells.push(PlacedSymbol {
                    kind,
                    frame: config.cell_frame(row, column),
                });
                index += 1;
            }
        }

        // A draw short of the match quota would leave the board unwinnable,
        // so top up by overwriting random non-target cells.
        let mut present: CellCount = cells
            .iter()
            .filter(|cell| cell.kind == target)
            .count()
            .try_into()
            .unwrap();
        if present < config.required_matches {
            log::warn!(
                "Drew {} target cells but {} are required, topping up",
                present,
                config.required_matches
            );
            while present < config.required_matches {
                let slot = usize::from(rng.random_range(0..total));
                if cells[slot].kind != target {
                    cells[slot].kind = target;
                    present += 1;
                }
            }
        }

        // presentation-order shuffle, frames stay with their cells
        cells.shuffle(&mut rng);

        Ok(CardLayout::new(target, cells))
    }
}
