//! services/lab/src/adapters/field.rs
//!
//! In-memory implementation of the `FieldERepository` port. The field strength
//! is computed here from the charge, distance and angle; a zero distance is
//! stored as the infinite or NaN value it produces.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use physics_lab_core::domain::{EntityId, FieldE};
use physics_lab_core::ports::{FieldERepository, PortError, PortResult};
use tracing::{debug, warn};

use super::store::IdTable;

#[derive(Debug, Default)]
pub struct InMemoryFieldRepository {
    table: Mutex<IdTable<FieldE>>,
}

impl InMemoryFieldRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FieldERepository for InMemoryFieldRepository {
    fn add_field_e(
        &self,
        charge_q: f64,
        distance_r: f64,
        angle_a: f64,
        direction: &str,
    ) -> EntityId {
        let field = FieldE::new(0, charge_q, distance_r, angle_a, direction);
        if !field.result.is_finite() {
            warn!(charge_q, distance_r, "field strength is not finite");
        }
        let id = self.table.lock().insert_with(|id| FieldE { id, ..field });
        debug!(id, charge_q, distance_r, angle_a, "field recorded");
        id
    }

    fn modify_field_e(
        &self,
        id: EntityId,
        charge_q: f64,
        distance_r: f64,
        angle_a: f64,
        direction: &str,
    ) -> PortResult<()> {
        let replaced = self
            .table
            .lock()
            .replace_with(id, |id| FieldE::new(id, charge_q, distance_r, angle_a, direction));
        if replaced {
            debug!(id, "field modified");
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Field {} not found", id)))
        }
    }

    fn delete_field_e(&self, id: EntityId) -> PortResult<()> {
        if self.table.lock().remove(id) {
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Field {} not found", id)))
        }
    }

    fn list_fields_e(&self) -> BTreeMap<EntityId, FieldE> {
        self.table.lock().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use physics_lab_core::physics::COULOMB_CONSTANT;

    use super::*;

    #[test]
    fn add_then_list_round_trips_inputs() {
        let repo = InMemoryFieldRepository::new();
        let id = repo.add_field_e(2.5e-6, 0.3, 0.0, "radial");
        let listing = repo.list_fields_e();
        let stored = &listing[&id];
        assert_eq!(stored.charge_q, 2.5e-6);
        assert_eq!(stored.distance_r, 0.3);
        assert_eq!(stored.angle_a, 0.0);
        assert_eq!(stored.direction, "radial");
        assert_relative_eq!(stored.result, COULOMB_CONSTANT * 2.5e-6 / (0.3 * 0.3));
    }

    #[test]
    fn angle_does_not_change_the_result() {
        let repo = InMemoryFieldRepository::new();
        let flat = repo.add_field_e(4.0, 2.0, 0.0, "x");
        let tilted = repo.add_field_e(4.0, 2.0, 60.0, "xy");
        let listing = repo.list_fields_e();
        assert_relative_eq!(
            listing[&tilted].result,
            listing[&flat].result,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn negative_charge_uses_its_magnitude() {
        let repo = InMemoryFieldRepository::new();
        let id = repo.add_field_e(-1.0, 1.0, 0.0, "inward");
        assert_relative_eq!(repo.list_fields_e()[&id].result, COULOMB_CONSTANT);
    }

    #[test]
    fn zero_distance_is_stored_verbatim() {
        let repo = InMemoryFieldRepository::new();
        let id = repo.add_field_e(1.0, 0.0, 0.0, "none");
        assert!(repo.list_fields_e()[&id].result.is_infinite());
    }

    #[test]
    fn modify_keeps_the_id_and_recomputes() {
        let repo = InMemoryFieldRepository::new();
        let first = repo.add_field_e(1.0, 1.0, 0.0, "a");
        let second = repo.add_field_e(1.0, 1.0, 0.0, "b");
        repo.modify_field_e(first, 1.0, 2.0, 45.0, "c").unwrap();

        let listing = repo.list_fields_e();
        assert_eq!(listing[&first].id, first);
        assert_eq!(listing[&first].direction, "c");
        assert_relative_eq!(listing[&first].result, COULOMB_CONSTANT / 4.0, max_relative = 1.0e-12);
        assert_eq!(listing[&second].direction, "b");
    }

    #[test]
    fn unknown_ids_are_not_found() {
        let repo = InMemoryFieldRepository::new();
        repo.add_field_e(1.0, 1.0, 0.0, "a");
        assert!(matches!(
            repo.modify_field_e(3, 1.0, 1.0, 0.0, "z"),
            Err(PortError::NotFound(_))
        ));
        assert!(matches!(repo.delete_field_e(3), Err(PortError::NotFound(_))));
        assert_eq!(repo.list_fields_e().len(), 1);
    }
}
