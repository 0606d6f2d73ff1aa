//! services/lab/src/adapters/torque.rs
//!
//! In-memory implementation of the `TorqueRepository` port.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use physics_lab_core::domain::{EntityId, Torque};
use physics_lab_core::ports::{PortError, PortResult, TorqueRepository};
use tracing::debug;

use super::store::IdTable;

#[derive(Debug, Default)]
pub struct InMemoryTorqueRepository {
    table: Mutex<IdTable<Torque>>,
}

impl InMemoryTorqueRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TorqueRepository for InMemoryTorqueRepository {
    fn add_torque(&self, field_e: f64, charge_q: f64, distance_r: f64, angle_a: f64) -> EntityId {
        let id = self
            .table
            .lock()
            .insert_with(|id| Torque::new(id, field_e, charge_q, distance_r, angle_a));
        debug!(id, field_e, charge_q, distance_r, angle_a, "torque recorded");
        id
    }

    fn modify_torque(
        &self,
        id: EntityId,
        field_e: f64,
        charge_q: f64,
        distance_r: f64,
        angle_a: f64,
    ) -> PortResult<()> {
        let replaced = self
            .table
            .lock()
            .replace_with(id, |id| Torque::new(id, field_e, charge_q, distance_r, angle_a));
        if replaced {
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Torque {} not found", id)))
        }
    }

    fn delete_torque(&self, id: EntityId) -> PortResult<()> {
        if self.table.lock().remove(id) {
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Torque {} not found", id)))
        }
    }

    fn list_torques(&self) -> BTreeMap<EntityId, Torque> {
        self.table.lock().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn right_angle_torque() {
        let repo = InMemoryTorqueRepository::new();
        let id = repo.add_torque(4.0, 2.0, 3.0, 90.0);
        let listing = repo.list_torques();
        let stored = &listing[&id];
        assert_relative_eq!(stored.result, 24.0, epsilon = 1.0e-12);
        assert_relative_eq!(stored.angle_a, 90.0);
    }

    #[test]
    fn modify_recomputes_from_full_input() {
        let repo = InMemoryTorqueRepository::new();
        let id = repo.add_torque(4.0, 2.0, 3.0, 90.0);
        repo.modify_torque(id, 4.0, 2.0, 3.0, 30.0).unwrap();
        assert_relative_eq!(repo.list_torques()[&id].result, 12.0, epsilon = 1.0e-9);
        assert!(matches!(
            repo.modify_torque(id + 1, 1.0, 1.0, 1.0, 1.0),
            Err(PortError::NotFound(_))
        ));
    }

    #[test]
    fn delete_reports_existence() {
        let repo = InMemoryTorqueRepository::new();
        let id = repo.add_torque(1.0, 1.0, 1.0, 45.0);
        assert!(repo.delete_torque(id).is_ok());
        assert!(repo.delete_torque(id).is_err());
        assert!(repo.list_torques().is_empty());
    }
}
