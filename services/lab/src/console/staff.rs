//! services/lab/src/console/staff.rs
//!
//! Account workflows: login, the logged-in user's own profile, and staff
//! management behind the role gate. Usernames and emails are checked for
//! uniqueness here, before the repository is asked to store anything.

use physics_lab_core::domain::{EmployeeDraft, EntityId, Role, UserAccount};
use physics_lab_core::ports::PortError;
use physics_lab_core::validation::{is_valid_email, normalize_name};
use tracing::info;

use crate::console::forms::require_filled;
use crate::console::protocol::{EmployeeForm, ProfileForm};
use crate::console::session::{require_login, require_staff_manager};
use crate::console::state::AppState;
use crate::error::{LabError, LabResult};

//=========================================================================================
// Session
//=========================================================================================

pub fn login(state: &AppState, username: &str, password: &str) -> LabResult<UserAccount> {
    let [username, _] = require_filled([("username", username), ("password", password)])?;
    state.users.login(username, password).map_err(|e| match e {
        PortError::Unauthorized => {
            LabError::Unauthorized("Invalid username or password.".to_string())
        }
        other => other.into(),
    })
}

pub fn change_password(state: &AppState, password: &str, confirmation: &str) -> LabResult<()> {
    let user = require_login(state)?;
    require_filled([("password", password), ("confirmation", confirmation)])?;
    if password != confirmation {
        return Err(LabError::Validation("Passwords do not match.".to_string()));
    }
    state.users.modify_password(user.id, password)?;
    info!(id = user.id, "password changed by its owner");
    Ok(())
}

/// Changes the logged-in user's name, address and email.
pub fn update_profile(state: &AppState, form: &ProfileForm) -> LabResult<()> {
    let user = require_login(state)?;
    let [name, address, email] = require_filled([
        ("name", form.name.as_str()),
        ("address", form.address.as_str()),
        ("email", form.email.as_str()),
    ])?;
    let email = checked_email(state, email, Some(&user))?;
    Ok(state.users.update_profile(user.id, name, address, &email)?)
}

//=========================================================================================
// Staff Management
//=========================================================================================

/// Lower-cases and validates an email, then checks nobody else holds it.
/// `owner` is the account allowed to keep the address it already has.
fn checked_email(state: &AppState, raw: &str, owner: Option<&UserAccount>) -> LabResult<String> {
    let email = raw.to_lowercase();
    if !is_valid_email(&email) {
        return Err(LabError::Validation("Invalid email format.".to_string()));
    }
    let own = owner.is_some_and(|account| account.email.eq_ignore_ascii_case(&email));
    if !own && !state.users.is_email_unique(&email) {
        return Err(LabError::Validation("Email already in use.".to_string()));
    }
    Ok(email)
}

fn employee_draft(
    state: &AppState,
    form: &EmployeeForm,
    existing: Option<&UserAccount>,
) -> LabResult<EmployeeDraft> {
    let [username, _, name, address, email, role] = require_filled([
        ("username", form.username.as_str()),
        ("password", form.password.as_str()),
        ("name", form.name.as_str()),
        ("address", form.address.as_str()),
        ("email", form.email.as_str()),
        ("role", form.role.as_str()),
    ])?;
    let email = checked_email(state, email, existing)?;

    let own = existing.is_some_and(|account| account.username.eq_ignore_ascii_case(username));
    if !own && !state.users.is_username_available(username) {
        return Err(LabError::Validation("Username already in use.".to_string()));
    }

    Ok(EmployeeDraft {
        username: username.to_string(),
        password: form.password.clone(),
        name: normalize_name(name),
        address: address.to_string(),
        email,
        role: Role::from(role),
    })
}

pub fn register_employee(state: &AppState, form: &EmployeeForm) -> LabResult<EntityId> {
    require_staff_manager(state)?;
    let draft = employee_draft(state, form, None)?;
    Ok(state.users.add_employee(draft))
}

pub fn modify_employee(state: &AppState, id: EntityId, form: &EmployeeForm) -> LabResult<()> {
    require_staff_manager(state)?;
    let existing = state
        .users
        .list_employees("")
        .remove(&id)
        .ok_or_else(|| PortError::NotFound(format!("User {} not found", id)))?;
    let draft = employee_draft(state, form, Some(&existing))?;
    Ok(state.users.modify_employee(id, draft)?)
}

pub fn delete_employee(state: &AppState, id: EntityId) -> LabResult<()> {
    require_staff_manager(state)?;
    Ok(state.users.delete_employee(id)?)
}

/// The staff table: the name-filtered accounts without `Owner` accounts and
/// without the logged-in user.
pub fn list_staff(state: &AppState, filter: &str) -> LabResult<Vec<UserAccount>> {
    let manager = require_staff_manager(state)?;
    let name = normalize_name(filter.trim());
    Ok(state
        .users
        .list_employees(&name)
        .into_values()
        .filter(|account| account.role != Role::Owner && account.id != manager.id)
        .collect())
}
