//! services/lab/src/console/state.rs
//!
//! Defines the application state shared by every workflow.

use std::sync::Arc;

use physics_lab_core::domain::{EmployeeDraft, EntityId, Role};
use physics_lab_core::ports::{
    ElectricConsumeRepository, FieldERepository, ForceRepository, PotencialERepository,
    TorqueRepository, UserRepository,
};
use tracing::info;

use crate::adapters::{
    InMemoryConsumeRepository, InMemoryFieldRepository, InMemoryForceRepository,
    InMemoryPotentialRepository, InMemoryTorqueRepository, InMemoryUserRepository,
};
use crate::config::Config;
use crate::error::LabResult;

//=========================================================================================
// AppState (Created Once at Startup)
//=========================================================================================

/// The shared application state, created once at startup and passed by
/// reference to every workflow. Each repository lives exactly as long as this
/// value; nothing is global.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub consumes: Arc<dyn ElectricConsumeRepository>,
    pub fields: Arc<dyn FieldERepository>,
    pub forces: Arc<dyn ForceRepository>,
    pub potentials: Arc<dyn PotencialERepository>,
    pub torques: Arc<dyn TorqueRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Builds a state backed by fresh, empty in-memory repositories.
    pub fn in_memory(config: Arc<Config>) -> Self {
        Self {
            config,
            consumes: Arc::new(InMemoryConsumeRepository::new()),
            fields: Arc::new(InMemoryFieldRepository::new()),
            forces: Arc::new(InMemoryForceRepository::new()),
            potentials: Arc::new(InMemoryPotentialRepository::new()),
            torques: Arc::new(InMemoryTorqueRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }

    /// Creates the configured `Owner` account, and logs it in when
    /// `auto_login` is set. Returns the new account id, if any.
    pub fn seed_owner(&self) -> LabResult<Option<EntityId>> {
        let Some(seed) = self.config.owner.clone() else {
            return Ok(None);
        };
        let username = seed.username.clone();
        let password = seed.password.clone();
        let id = self.users.add_employee(EmployeeDraft {
            username: seed.username,
            password: seed.password,
            name: seed.name,
            address: seed.address,
            email: seed.email.to_lowercase(),
            role: Role::Owner,
        });
        info!(id, %username, "owner account seeded");

        if self.config.auto_login {
            self.users.login(&username, &password)?;
        }
        Ok(Some(id))
    }
}
