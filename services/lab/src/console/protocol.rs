//! services/lab/src/console/protocol.rs
//!
//! Defines the JSON-lines message protocol between a front end and the lab
//! console. Every form field arrives as the raw text the user typed; the
//! workflows trim and validate it before any repository sees it.

use physics_lab_core::domain::{
    ElectricConsume, EntityId, FieldE, ForceE, PotencialE, Torque, UserAccount,
};
use serde::{Deserialize, Serialize};

//=========================================================================================
// Forms
//=========================================================================================

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ConsumeForm {
    pub appliance: String,
    pub power: String,
    pub time: String,
    pub tariff: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct FieldForm {
    pub charge: String,
    pub distance: String,
    pub angle: String,
    pub direction: String,
}

/// Force, potential and torque forms pick their field strength from a recorded
/// electric field instead of typing it.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ForceForm {
    pub field_id: EntityId,
    pub charge: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct PotentialForm {
    pub field_id: EntityId,
    pub distance: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct TorqueForm {
    pub field_id: EntityId,
    pub charge: String,
    pub distance: String,
    pub angle: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct EmployeeForm {
    pub username: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub role: String,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct ProfileForm {
    pub name: String,
    pub address: String,
    pub email: String,
}

//=========================================================================================
// Messages Sent TO the Console
//=========================================================================================

/// One command per input line.
#[derive(Deserialize, Debug)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientCommand {
    // --- Session ---
    Login { username: String, password: String },
    CurrentUser,
    ChangePassword { password: String, confirmation: String },
    UpdateProfile { form: ProfileForm },

    // --- Staff (Owner / Administrator only) ---
    RegisterEmployee { form: EmployeeForm },
    ModifyEmployee { id: EntityId, form: EmployeeForm },
    DeleteEmployee { id: EntityId },
    ListStaff {
        #[serde(default)]
        filter: String,
    },

    // --- Measurements ---
    AddConsume { form: ConsumeForm },
    ModifyConsume { id: EntityId, form: ConsumeForm },
    DeleteConsume { id: EntityId },
    ListConsumes {
        #[serde(default)]
        filter: String,
    },

    AddField { form: FieldForm },
    ModifyField { id: EntityId, form: FieldForm },
    DeleteField { id: EntityId },
    ListFields,

    AddForce { form: ForceForm },
    ModifyForce { id: EntityId, form: ForceForm },
    DeleteForce { id: EntityId },
    ListForces,

    AddPotential { form: PotentialForm },
    ModifyPotential { id: EntityId, form: PotentialForm },
    DeletePotential { id: EntityId },
    ListPotentials,

    AddTorque { form: TorqueForm },
    ModifyTorque { id: EntityId, form: TorqueForm },
    DeleteTorque { id: EntityId },
    ListTorques,
}

//=========================================================================================
// Messages Sent FROM the Console
//=========================================================================================

/// One reply per command.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerReply {
    LoggedIn { user: AccountView },
    CurrentUser { user: Option<AccountView> },
    /// A record was stored under a freshly assigned id.
    Created { id: EntityId },
    /// A modify, delete or password/profile change went through.
    Done,
    Staff { rows: Vec<AccountView> },
    Consumes { rows: Vec<ConsumeView> },
    Fields { rows: Vec<FieldView> },
    Forces { rows: Vec<ForceView> },
    Potentials { rows: Vec<PotentialView> },
    Torques { rows: Vec<TorqueView> },
    Error { message: String },
}

//=========================================================================================
// Row Views
//=========================================================================================
// Non-finite results (a field at zero distance) serialize as `null`.
//=========================================================================================

/// Account row. The password never leaves the console.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct AccountView {
    pub id: EntityId,
    pub username: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub role: String,
}

impl From<&UserAccount> for AccountView {
    fn from(account: &UserAccount) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            name: account.name.clone(),
            address: account.address.clone(),
            email: account.email.clone(),
            role: account.role.to_string(),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ConsumeView {
    pub id: EntityId,
    pub appliance: String,
    pub power_w: f64,
    pub time_h: f64,
    pub tariff: f64,
    pub result: f64,
}

impl From<&ElectricConsume> for ConsumeView {
    fn from(consume: &ElectricConsume) -> Self {
        Self {
            id: consume.id,
            appliance: consume.appliance.clone(),
            power_w: consume.power_w,
            time_h: consume.time_h,
            tariff: consume.tariff,
            result: consume.result,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct FieldView {
    pub id: EntityId,
    pub charge_q: f64,
    pub distance_r: f64,
    pub angle_a: f64,
    pub direction: String,
    pub result: f64,
}

impl From<&FieldE> for FieldView {
    fn from(field: &FieldE) -> Self {
        Self {
            id: field.id,
            charge_q: field.charge_q,
            distance_r: field.distance_r,
            angle_a: field.angle_a,
            direction: field.direction.clone(),
            result: field.result,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ForceView {
    pub id: EntityId,
    pub field_e: f64,
    pub charge_q: f64,
    pub result: f64,
}

impl From<&ForceE> for ForceView {
    fn from(force: &ForceE) -> Self {
        Self {
            id: force.id,
            field_e: force.field_e,
            charge_q: force.charge_q,
            result: force.result,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct PotentialView {
    pub id: EntityId,
    pub field_e: f64,
    pub distance_d: f64,
    pub result: f64,
}

impl From<&PotencialE> for PotentialView {
    fn from(potential: &PotencialE) -> Self {
        Self {
            id: potential.id,
            field_e: potential.field_e,
            distance_d: potential.distance_d,
            result: potential.result,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct TorqueView {
    pub id: EntityId,
    pub field_e: f64,
    pub charge_q: f64,
    pub distance_r: f64,
    pub angle_a: f64,
    pub result: f64,
}

impl From<&Torque> for TorqueView {
    fn from(torque: &Torque) -> Self {
        Self {
            id: torque.id,
            field_e: torque.field_e,
            charge_q: torque.charge_q,
            distance_r: torque.distance_r,
            angle_a: torque.angle_a,
            result: torque.result,
        }
    }
}
