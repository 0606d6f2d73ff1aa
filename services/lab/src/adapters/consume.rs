//! services/lab/src/adapters/consume.rs
//!
//! In-memory implementation of the `ElectricConsumeRepository` port.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use physics_lab_core::domain::{ConsumeDraft, ElectricConsume, EntityId};
use physics_lab_core::ports::{ElectricConsumeRepository, PortError, PortResult};
use tracing::debug;

use super::store::IdTable;

#[derive(Debug, Default)]
pub struct InMemoryConsumeRepository {
    table: Mutex<IdTable<ElectricConsume>>,
}

impl InMemoryConsumeRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ElectricConsumeRepository for InMemoryConsumeRepository {
    fn add_electric_consume(&self, draft: ConsumeDraft) -> EntityId {
        let id = self
            .table
            .lock()
            .insert_with(|id| ElectricConsume::new(id, draft));
        debug!(id, "electric consume recorded");
        id
    }

    fn modify_electric_consume(&self, id: EntityId, draft: ConsumeDraft) -> PortResult<()> {
        if self
            .table
            .lock()
            .replace_with(id, |id| ElectricConsume::new(id, draft))
        {
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Electric consume {} not found", id)))
        }
    }

    fn delete_electric_consume(&self, id: EntityId) -> PortResult<()> {
        if self.table.lock().remove(id) {
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Electric consume {} not found", id)))
        }
    }

    fn list_electric_consume(&self, appliance: &str) -> BTreeMap<EntityId, ElectricConsume> {
        let table = self.table.lock();
        if appliance.trim().is_empty() {
            return table.snapshot();
        }
        let wanted = appliance.to_lowercase();
        table.filtered_or_all(|row| row.appliance.to_lowercase() == wanted)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn draft(appliance: &str, power_w: f64) -> ConsumeDraft {
        ConsumeDraft {
            appliance: appliance.to_string(),
            power_w,
            time_h: 2.0,
            tariff: 0.5,
            user: "ana".to_string(),
        }
    }

    #[test]
    fn result_is_cost_in_kilowatt_hours() {
        let repo = InMemoryConsumeRepository::new();
        let id = repo.add_electric_consume(draft("Heater", 1000.0));
        assert_relative_eq!(repo.list_electric_consume("")[&id].result, 1.0);

        repo.modify_electric_consume(id, draft("Heater", 3000.0)).unwrap();
        assert_relative_eq!(repo.list_electric_consume("")[&id].result, 3.0);
    }

    #[test]
    fn filter_is_case_insensitive_exact_match() {
        let repo = InMemoryConsumeRepository::new();
        let lamp = repo.add_electric_consume(draft("Lamp", 60.0));
        repo.add_electric_consume(draft("Lamp post", 100.0));
        repo.add_electric_consume(draft("Oven", 2000.0));

        let filtered = repo.list_electric_consume("LAMP");
        assert_eq!(filtered.keys().copied().collect::<Vec<_>>(), vec![lamp]);
    }

    #[test]
    fn unmatched_filter_falls_back_to_everything() {
        let repo = InMemoryConsumeRepository::new();
        repo.add_electric_consume(draft("Lamp", 60.0));
        repo.add_electric_consume(draft("Oven", 2000.0));
        assert_eq!(repo.list_electric_consume("Fridge"), repo.list_electric_consume(""));
        assert_eq!(repo.list_electric_consume("  ").len(), 2);
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let repo = InMemoryConsumeRepository::new();
        repo.add_electric_consume(draft("Lamp", 60.0));
        assert!(repo.modify_electric_consume(4, draft("Oven", 1.0)).is_err());
        assert!(matches!(
            repo.delete_electric_consume(4),
            Err(PortError::NotFound(_))
        ));
        assert_eq!(repo.list_electric_consume("").len(), 1);
    }
}
