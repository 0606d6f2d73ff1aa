//! services/lab/src/adapters/users.rs
//!
//! In-memory implementation of the `UserRepository` port, including the login
//! session. Accounts and the session share one lock so a login always sees a
//! consistent set of accounts.

use std::collections::BTreeMap;

use parking_lot::Mutex;
use physics_lab_core::domain::{EmployeeDraft, EntityId, UserAccount};
use physics_lab_core::ports::{PortError, PortResult, UserRepository};
use tracing::{debug, info, warn};

use super::store::IdTable;

#[derive(Debug, Default)]
struct Accounts {
    table: IdTable<UserAccount>,
    /// Snapshot of the logged-in account. Kept in step with edits to that
    /// account; survives its deletion and is only replaced by another login.
    current: Option<UserAccount>,
}

impl Accounts {
    fn username_available(&self, username: &str) -> bool {
        self.table.values().all(|account| account.username != username)
    }

    fn refresh_session(&mut self, id: EntityId) {
        if self.current.as_ref().map(|current| current.id) == Some(id) {
            self.current = self.table.get(id).cloned();
        }
    }
}

#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    accounts: Mutex<Accounts>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn not_found(id: EntityId) -> PortError {
    PortError::NotFound(format!("User {} not found", id))
}

impl UserRepository for InMemoryUserRepository {
    fn add_employee(&self, draft: EmployeeDraft) -> EntityId {
        let role = draft.role.clone();
        let id = self
            .accounts
            .lock()
            .table
            .insert_with(|id| UserAccount::new(id, draft));
        info!(id, %role, "account created");
        id
    }

    fn is_username_available(&self, username: &str) -> bool {
        self.accounts.lock().username_available(username)
    }

    fn is_email_unique(&self, email: &str) -> bool {
        self.accounts
            .lock()
            .table
            .values()
            .all(|account| account.email != email)
    }

    fn modify_employee(&self, id: EntityId, draft: EmployeeDraft) -> PortResult<()> {
        let mut accounts = self.accounts.lock();
        let available = accounts.username_available(&draft.username);
        let existing = accounts.table.get(id).ok_or_else(|| not_found(id))?;
        if !existing.may_take_username(&draft.username, available) {
            warn!(id, username = %draft.username, "username already taken");
            return Err(PortError::Conflict(format!(
                "Username {} is already in use",
                draft.username
            )));
        }

        accounts
            .table
            .replace_with(id, |id| UserAccount::new(id, draft));
        accounts.refresh_session(id);
        debug!(id, "account modified");
        Ok(())
    }

    fn modify_password(&self, id: EntityId, new_password: &str) -> PortResult<()> {
        let mut accounts = self.accounts.lock();
        let account = accounts.table.get_mut(id).ok_or_else(|| not_found(id))?;
        account.password = new_password.to_string();
        accounts.refresh_session(id);
        debug!(id, "password changed");
        Ok(())
    }

    fn update_profile(
        &self,
        id: EntityId,
        name: &str,
        address: &str,
        email: &str,
    ) -> PortResult<()> {
        let mut accounts = self.accounts.lock();
        let account = accounts.table.get_mut(id).ok_or_else(|| not_found(id))?;
        account.name = name.to_string();
        account.address = address.to_string();
        account.email = email.to_string();
        accounts.refresh_session(id);
        debug!(id, "profile updated");
        Ok(())
    }

    fn delete_employee(&self, id: EntityId) -> PortResult<()> {
        if self.accounts.lock().table.remove(id) {
            info!(id, "account deleted");
            Ok(())
        } else {
            Err(not_found(id))
        }
    }

    fn list_employees(&self, name: &str) -> BTreeMap<EntityId, UserAccount> {
        let accounts = self.accounts.lock();
        if name.trim().is_empty() {
            return accounts.table.snapshot();
        }
        let wanted = name.to_lowercase();
        accounts
            .table
            .filtered_or_all(|account| account.name.to_lowercase() == wanted)
    }

    fn user_count(&self) -> u32 {
        self.accounts.lock().table.next_id()
    }

    fn login(&self, username: &str, password: &str) -> PortResult<UserAccount> {
        let mut accounts = self.accounts.lock();
        let matched = accounts
            .table
            .values()
            .find(|account| account.username == username && account.password == password)
            .cloned();
        match matched {
            Some(account) => {
                info!(id = account.id, role = %account.role, "login succeeded");
                accounts.current = Some(account.clone());
                Ok(account)
            }
            None => {
                warn!(%username, "login rejected");
                Err(PortError::Unauthorized)
            }
        }
    }

    fn current_user(&self) -> Option<UserAccount> {
        self.accounts.lock().current.clone()
    }
}
