//! services/lab/src/console/session.rs
//!
//! The login session and the role gate in front of staff management.

use physics_lab_core::domain::UserAccount;

use crate::console::state::AppState;
use crate::error::{LabError, LabResult};

/// The logged-in account, or `Unauthorized` when nobody has logged in yet.
pub fn require_login(state: &AppState) -> LabResult<UserAccount> {
    state
        .users
        .current_user()
        .ok_or_else(|| LabError::Unauthorized("Please log in first.".to_string()))
}

/// The logged-in account, provided its role may manage staff.
pub fn require_staff_manager(state: &AppState) -> LabResult<UserAccount> {
    let user = require_login(state)?;
    if user.role.can_manage_staff() {
        Ok(user)
    } else {
        Err(LabError::Unauthorized(format!(
            "The {} role cannot manage staff.",
            user.role
        )))
    }
}
