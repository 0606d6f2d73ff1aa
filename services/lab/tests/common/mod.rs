#![allow(dead_code)]

use std::sync::Arc;

use lab_lib::config::Config;
use lab_lib::console::protocol::EmployeeForm;
use lab_lib::console::AppState;

/// A state with a seeded `root` Owner account, already logged in.
pub fn owner_state() -> AppState {
    let config = Config::from_lookup(|key| match key {
        "LAB_OWNER_USER" => Some("root".to_string()),
        "LAB_OWNER_PASSWORD" => Some("toor".to_string()),
        "LAB_OWNER_NAME" => Some("Root".to_string()),
        "LAB_AUTO_LOGIN" => Some("true".to_string()),
        _ => None,
    })
    .expect("test configuration is valid");
    let state = AppState::in_memory(Arc::new(config));
    state.seed_owner().expect("owner seeds");
    state
}

/// A state with no accounts and nobody logged in.
pub fn empty_state() -> AppState {
    let config = Config::from_lookup(|_| None).expect("defaults are valid");
    AppState::in_memory(Arc::new(config))
}

pub fn employee_form(username: &str, name: &str, role: &str) -> EmployeeForm {
    EmployeeForm {
        username: username.to_string(),
        password: format!("{username}-pw"),
        name: name.to_string(),
        address: "Calle 5 #10".to_string(),
        email: format!("{username}@lab.io"),
        role: role.to_string(),
    }
}
