//! services/lab/src/adapters/force.rs
//!
//! In-memory implementation of the `ForceRepository` port.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use physics_lab_core::domain::{EntityId, ForceE};
use physics_lab_core::ports::{ForceRepository, PortError, PortResult};
use tracing::debug;

use super::store::IdTable;

#[derive(Debug, Default)]
pub struct InMemoryForceRepository {
    table: Mutex<IdTable<ForceE>>,
}

impl InMemoryForceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ForceRepository for InMemoryForceRepository {
    fn add_force_e(&self, field_e: f64, charge_q: f64) -> EntityId {
        let id = self
            .table
            .lock()
            .insert_with(|id| ForceE::new(id, field_e, charge_q));
        debug!(id, field_e, charge_q, "force recorded");
        id
    }

    fn modify_force_e(&self, id: EntityId, field_e: f64, charge_q: f64) -> PortResult<()> {
        if self
            .table
            .lock()
            .replace_with(id, |id| ForceE::new(id, field_e, charge_q))
        {
            debug!(id, "force modified");
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Force {} not found", id)))
        }
    }

    fn delete_force_e(&self, id: EntityId) -> PortResult<()> {
        if self.table.lock().remove(id) {
            debug!(id, "force deleted");
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Force {} not found", id)))
        }
    }

    fn list_forces_e(&self) -> BTreeMap<EntityId, ForceE> {
        self.table.lock().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn add_modify_delete_scenario() {
        let repo = InMemoryForceRepository::new();
        let id = repo.add_force_e(10.0, 2.0);
        assert_relative_eq!(repo.list_forces_e()[&id].result, 20.0);

        repo.modify_force_e(id, 5.0, 2.0).unwrap();
        let listing = repo.list_forces_e();
        let stored = &listing[&id];
        assert_eq!(stored.id, id);
        assert_relative_eq!(stored.field_e, 5.0);
        assert_relative_eq!(stored.result, 10.0);

        repo.delete_force_e(id).unwrap();
        assert!(!repo.list_forces_e().contains_key(&id));
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let repo = InMemoryForceRepository::new();
        repo.add_force_e(1.0, 1.0);
        assert!(matches!(repo.modify_force_e(9, 1.0, 1.0), Err(PortError::NotFound(_))));
        assert!(matches!(repo.delete_force_e(9), Err(PortError::NotFound(_))));
        assert_eq!(repo.list_forces_e().len(), 1);
    }

    #[test]
    fn listing_is_a_snapshot() {
        let repo = InMemoryForceRepository::new();
        let id = repo.add_force_e(3.0, 3.0);
        let mut listing = repo.list_forces_e();
        listing.get_mut(&id).unwrap().result = -1.0;
        listing.clear();
        assert_relative_eq!(repo.list_forces_e()[&id].result, 9.0);
    }
}
