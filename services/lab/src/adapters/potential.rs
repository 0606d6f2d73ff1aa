//! services/lab/src/adapters/potential.rs
//!
//! In-memory implementation of the `PotencialERepository` port.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use physics_lab_core::domain::{EntityId, PotencialE};
use physics_lab_core::ports::{PortError, PortResult, PotencialERepository};
use tracing::debug;

use super::store::IdTable;

#[derive(Debug, Default)]
pub struct InMemoryPotentialRepository {
    table: Mutex<IdTable<PotencialE>>,
}

impl InMemoryPotentialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PotencialERepository for InMemoryPotentialRepository {
    fn add_potencial_e(&self, field_e: f64, distance_d: f64) -> EntityId {
        let id = self
            .table
            .lock()
            .insert_with(|id| PotencialE::new(id, field_e, distance_d));
        debug!(id, field_e, distance_d, "potential recorded");
        id
    }

    fn modify_potencial_e(&self, id: EntityId, field_e: f64, distance_d: f64) -> PortResult<()> {
        if self
            .table
            .lock()
            .replace_with(id, |id| PotencialE::new(id, field_e, distance_d))
        {
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Potential {} not found", id)))
        }
    }

    fn delete_potencial_e(&self, id: EntityId) -> PortResult<()> {
        if self.table.lock().remove(id) {
            Ok(())
        } else {
            Err(PortError::NotFound(format!("Potential {} not found", id)))
        }
    }

    fn list_potenciales_e(&self) -> BTreeMap<EntityId, PotencialE> {
        self.table.lock().snapshot()
    }
}
