use crate::{DatabaseEntity, TacticEntity};
use lineup_core::{CompatibilityWeights, LineupResult, PositionCatalog, Slot, Tactic};
use log::info;

pub struct DatabaseGenerator;

impl DatabaseGenerator {
    /// Validated catalog; any inconsistency in the data files fails here, at startup
    pub fn catalog(data: &DatabaseEntity) -> LineupResult<PositionCatalog> {
        let mut builder = PositionCatalog::builder();

        if let Some(weights) = &data.catalog.weights {
            builder = builder.weights(CompatibilityWeights {
                exact: weights.exact,
                acceptable: weights.acceptable,
            });
        }

        for position in &data.catalog.positions {
            builder = builder.position(&position.code, &position.name);
        }

        for tactic in &data.tactics {
            builder = builder.tactic(Self::generate_tactic(tactic));
        }

        let catalog = builder.build()?;

        info!(
            "catalog generated: {} positions, {} tactics",
            catalog.positions().len(),
            catalog.tactics().len()
        );

        Ok(catalog)
    }

    fn generate_tactic(tactic: &TacticEntity) -> Tactic {
        let slots = tactic
            .slots
            .iter()
            .map(|slot| {
                let accepts: Vec<&str> = slot.accepts.iter().map(String::as_str).collect();
                Slot::new(&slot.id, &slot.label, &accepts).with_coordinates(slot.x, slot.y)
            })
            .collect();

        Tactic::new(&tactic.id, &tactic.name, slots)
    }
}
