//! crates/physics_lab_core/src/ports.rs
//!
//! Defines the repository contracts (traits) for the lab's core logic.
//! These traits form the boundary between the core and whatever store backs it.
//! Every operation is synchronous and runs to completion on the caller's thread.
//!
//! Repositories perform no trimming and no format validation: callers are
//! expected to run the `validation` helpers before handing input over.

use std::collections::BTreeMap;

use crate::domain::{
    ConsumeDraft, ElectricConsume, EmployeeDraft, EntityId, FieldE, ForceE, PotencialE, Torque,
    UserAccount,
};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Conflict: {0}")]
    Conflict(String),
    #[error("Unauthorized")]
    Unauthorized,
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Repository Ports (Traits)
//=========================================================================================
// Listings always return an owned snapshot ordered by id; mutating it never
// touches stored state.
//=========================================================================================

pub trait ElectricConsumeRepository: Send + Sync {
    fn add_electric_consume(&self, draft: ConsumeDraft) -> EntityId;

    fn modify_electric_consume(&self, id: EntityId, draft: ConsumeDraft) -> PortResult<()>;

    fn delete_electric_consume(&self, id: EntityId) -> PortResult<()>;

    /// Blank `appliance` lists everything. Otherwise lists records whose
    /// appliance matches case-insensitively, falling back to everything when
    /// nothing matches.
    fn list_electric_consume(&self, appliance: &str) -> BTreeMap<EntityId, ElectricConsume>;
}

pub trait FieldERepository: Send + Sync {
    fn add_field_e(&self, charge_q: f64, distance_r: f64, angle_a: f64, direction: &str)
        -> EntityId;

    fn modify_field_e(
        &self,
        id: EntityId,
        charge_q: f64,
        distance_r: f64,
        angle_a: f64,
        direction: &str,
    ) -> PortResult<()>;

    fn delete_field_e(&self, id: EntityId) -> PortResult<()>;

    fn list_fields_e(&self) -> BTreeMap<EntityId, FieldE>;
}

pub trait ForceRepository: Send + Sync {
    fn add_force_e(&self, field_e: f64, charge_q: f64) -> EntityId;

    fn modify_force_e(&self, id: EntityId, field_e: f64, charge_q: f64) -> PortResult<()>;

    fn delete_force_e(&self, id: EntityId) -> PortResult<()>;

    fn list_forces_e(&self) -> BTreeMap<EntityId, ForceE>;
}

pub trait PotencialERepository: Send + Sync {
    fn add_potencial_e(&self, field_e: f64, distance_d: f64) -> EntityId;

    fn modify_potencial_e(&self, id: EntityId, field_e: f64, distance_d: f64) -> PortResult<()>;

    fn delete_potencial_e(&self, id: EntityId) -> PortResult<()>;

    fn list_potenciales_e(&self) -> BTreeMap<EntityId, PotencialE>;
}

pub trait TorqueRepository: Send + Sync {
    fn add_torque(&self, field_e: f64, charge_q: f64, distance_r: f64, angle_a: f64) -> EntityId;

    fn modify_torque(
        &self,
        id: EntityId,
        field_e: f64,
        charge_q: f64,
        distance_r: f64,
        angle_a: f64,
    ) -> PortResult<()>;

    fn delete_torque(&self, id: EntityId) -> PortResult<()>;

    fn list_torques(&self) -> BTreeMap<EntityId, Torque>;
}

pub trait UserRepository: Send + Sync {
    // --- Account Management ---
    /// Stores the account without checking uniqueness; see `is_username_available`
    /// and `is_email_unique`.
    fn add_employee(&self, draft: EmployeeDraft) -> EntityId;

    fn is_username_available(&self, username: &str) -> bool;

    fn is_email_unique(&self, email: &str) -> bool;

    /// Replaces the whole account. Fails with `Conflict` when the new username
    /// belongs to a different account.
    fn modify_employee(&self, id: EntityId, draft: EmployeeDraft) -> PortResult<()>;

    fn modify_password(&self, id: EntityId, new_password: &str) -> PortResult<()>;

    /// Replaces only the personal data of an account.
    fn update_profile(&self, id: EntityId, name: &str, address: &str, email: &str)
        -> PortResult<()>;

    fn delete_employee(&self, id: EntityId) -> PortResult<()>;

    /// Blank `name` lists everything; otherwise case-insensitive exact match on
    /// the display name, falling back to everything when nothing matches.
    fn list_employees(&self, name: &str) -> BTreeMap<EntityId, UserAccount>;

    /// Number of accounts ever created, i.e. the next id to be assigned.
    fn user_count(&self) -> u32;

    // --- Session ---
    /// On success the account becomes the current user. A failed attempt
    /// leaves the session untouched.
    fn login(&self, username: &str, password: &str) -> PortResult<UserAccount>;

    fn current_user(&self) -> Option<UserAccount>;
}
