//! services/lab/src/adapters/store.rs
//!
//! The id-keyed table every in-memory repository is built on: a map plus the
//! counter that hands out ids. Ids come from the counter only and are never
//! reused, even after the highest one is deleted.

use std::collections::BTreeMap;

use physics_lab_core::domain::EntityId;

#[derive(Debug)]
pub(crate) struct IdTable<T> {
    rows: BTreeMap<EntityId, T>,
    next_id: EntityId,
}

impl<T> Default for IdTable<T> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            next_id: 0,
        }
    }
}

impl<T: Clone> IdTable<T> {
    /// Assigns the next id, builds the row with it, and stores it.
    pub(crate) fn insert_with(&mut self, build: impl FnOnce(EntityId) -> T) -> EntityId {
        let id = self.next_id;
        self.rows.insert(id, build(id));
        self.next_id += 1;
        id
    }

    /// Rebuilds the row stored under `id`. Returns false, without calling
    /// `build`, when there is no such row.
    pub(crate) fn replace_with(&mut self, id: EntityId, build: impl FnOnce(EntityId) -> T) -> bool {
        match self.rows.get_mut(&id) {
            Some(row) => {
                *row = build(id);
                true
            }
            None => false,
        }
    }

    pub(crate) fn get(&self, id: EntityId) -> Option<&T> {
        self.rows.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: EntityId) -> Option<&mut T> {
        self.rows.get_mut(&id)
    }

    pub(crate) fn remove(&mut self, id: EntityId) -> bool {
        self.rows.remove(&id).is_some()
    }

    pub(crate) fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    pub(crate) fn next_id(&self) -> EntityId {
        self.next_id
    }

    pub(crate) fn snapshot(&self) -> BTreeMap<EntityId, T> {
        self.rows.clone()
    }

    /// Rows matching `keep`; every row when none match.
    pub(crate) fn filtered_or_all(&self, keep: impl Fn(&T) -> bool) -> BTreeMap<EntityId, T> {
        let matched: BTreeMap<EntityId, T> = self
            .rows
            .iter()
            .filter(|(_, row)| keep(row))
            .map(|(id, row)| (*id, row.clone()))
            .collect();
        if matched.is_empty() {
            self.snapshot()
        } else {
            matched
        }
    }
}
