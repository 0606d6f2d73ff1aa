//! services/lab/src/console/measurements.rs
//!
//! Workflows for the five physics tables. Each one validates the raw form,
//! makes exactly one repository mutation, and leaves refreshing the listing to
//! the caller. All of them require a logged-in user.

use physics_lab_core::domain::{
    ConsumeDraft, ElectricConsume, EntityId, FieldE, ForceE, PotencialE, Torque,
};
use physics_lab_core::ports::PortError;
use physics_lab_core::validation::normalize_name;
use tracing::info;

use crate::console::forms::{numeric, require_filled};
use crate::console::protocol::{ConsumeForm, FieldForm, ForceForm, PotentialForm, TorqueForm};
use crate::console::session::require_login;
use crate::console::state::AppState;
use crate::error::{LabError, LabResult};

//=========================================================================================
// Electric Consumption
//=========================================================================================

fn consume_draft(form: &ConsumeForm, user: String) -> LabResult<ConsumeDraft> {
    let [appliance, power, time, tariff] = require_filled([
        ("appliance", form.appliance.as_str()),
        ("power", form.power.as_str()),
        ("time", form.time.as_str()),
        ("tariff", form.tariff.as_str()),
    ])?;
    Ok(ConsumeDraft {
        appliance: normalize_name(appliance),
        power_w: numeric("power", power)?,
        time_h: numeric("time", time)?,
        tariff: numeric("tariff", tariff)?,
        user,
    })
}

pub fn add_consume(state: &AppState, form: &ConsumeForm) -> LabResult<EntityId> {
    let user = require_login(state)?;
    let draft = consume_draft(form, user.username)?;
    let id = state.consumes.add_electric_consume(draft);
    info!(id, "electric consume registered");
    Ok(id)
}

/// Records of other users are reported as missing.
fn require_own_consume(state: &AppState, id: EntityId, username: &str) -> LabResult<()> {
    match state.consumes.list_electric_consume("").get(&id) {
        Some(consume) if consume.user == username => Ok(()),
        _ => Err(PortError::NotFound(format!("Electric consume {} not found", id)).into()),
    }
}

pub fn modify_consume(state: &AppState, id: EntityId, form: &ConsumeForm) -> LabResult<()> {
    let user = require_login(state)?;
    require_own_consume(state, id, &user.username)?;
    let draft = consume_draft(form, user.username)?;
    Ok(state.consumes.modify_electric_consume(id, draft)?)
}

pub fn delete_consume(state: &AppState, id: EntityId) -> LabResult<()> {
    let user = require_login(state)?;
    require_own_consume(state, id, &user.username)?;
    Ok(state.consumes.delete_electric_consume(id)?)
}

/// The logged-in user's own records, after the repository's appliance filter.
pub fn list_consumes(state: &AppState, filter: &str) -> LabResult<Vec<ElectricConsume>> {
    let user = require_login(state)?;
    let appliance = normalize_name(filter.trim());
    Ok(state
        .consumes
        .list_electric_consume(&appliance)
        .into_values()
        .filter(|consume| consume.user == user.username)
        .collect())
}

//=========================================================================================
// Electric Field
//=========================================================================================

fn field_inputs(form: &FieldForm) -> LabResult<(f64, f64, f64, String)> {
    let [charge, distance, angle, direction] = require_filled([
        ("charge", form.charge.as_str()),
        ("distance", form.distance.as_str()),
        ("angle", form.angle.as_str()),
        ("direction", form.direction.as_str()),
    ])?;
    Ok((
        numeric("charge", charge)?,
        numeric("distance", distance)?,
        numeric("angle", angle)?,
        direction.to_string(),
    ))
}

pub fn add_field(state: &AppState, form: &FieldForm) -> LabResult<EntityId> {
    require_login(state)?;
    let (charge, distance, angle, direction) = field_inputs(form)?;
    let id = state.fields.add_field_e(charge, distance, angle, &direction);
    info!(id, "electric field registered");
    Ok(id)
}

pub fn modify_field(state: &AppState, id: EntityId, form: &FieldForm) -> LabResult<()> {
    require_login(state)?;
    let (charge, distance, angle, direction) = field_inputs(form)?;
    Ok(state.fields.modify_field_e(id, charge, distance, angle, &direction)?)
}

pub fn delete_field(state: &AppState, id: EntityId) -> LabResult<()> {
    require_login(state)?;
    Ok(state.fields.delete_field_e(id)?)
}

pub fn list_fields(state: &AppState) -> LabResult<Vec<FieldE>> {
    require_login(state)?;
    Ok(state.fields.list_fields_e().into_values().collect())
}

/// Field strength of a recorded electric field, as picked in the force,
/// potential and torque forms.
pub fn recorded_field_strength(state: &AppState, field_id: EntityId) -> LabResult<f64> {
    let fields = state.fields.list_fields_e();
    if fields.is_empty() {
        return Err(LabError::Validation(
            "No electric field has been recorded yet.".to_string(),
        ));
    }
    fields
        .get(&field_id)
        .map(|field| field.result)
        .ok_or_else(|| PortError::NotFound(format!("Field {} not found", field_id)).into())
}

//=========================================================================================
// Coulomb Force
//=========================================================================================

fn force_inputs(state: &AppState, form: &ForceForm) -> LabResult<(f64, f64)> {
    let [charge] = require_filled([("charge", form.charge.as_str())])?;
    let charge = numeric("charge", charge)?;
    Ok((recorded_field_strength(state, form.field_id)?, charge))
}

pub fn add_force(state: &AppState, form: &ForceForm) -> LabResult<EntityId> {
    require_login(state)?;
    let (field_e, charge) = force_inputs(state, form)?;
    let id = state.forces.add_force_e(field_e, charge);
    info!(id, "force registered");
    Ok(id)
}

pub fn modify_force(state: &AppState, id: EntityId, form: &ForceForm) -> LabResult<()> {
    require_login(state)?;
    let (field_e, charge) = force_inputs(state, form)?;
    Ok(state.forces.modify_force_e(id, field_e, charge)?)
}

pub fn delete_force(state: &AppState, id: EntityId) -> LabResult<()> {
    require_login(state)?;
    Ok(state.forces.delete_force_e(id)?)
}

pub fn list_forces(state: &AppState) -> LabResult<Vec<ForceE>> {
    require_login(state)?;
    Ok(state.forces.list_forces_e().into_values().collect())
}

//=========================================================================================
// Electric Potential
//=========================================================================================

fn potential_inputs(state: &AppState, form: &PotentialForm) -> LabResult<(f64, f64)> {
    let [distance] = require_filled([("distance", form.distance.as_str())])?;
    let distance = numeric("distance", distance)?;
    Ok((recorded_field_strength(state, form.field_id)?, distance))
}

pub fn add_potential(state: &AppState, form: &PotentialForm) -> LabResult<EntityId> {
    require_login(state)?;
    let (field_e, distance) = potential_inputs(state, form)?;
    let id = state.potentials.add_potencial_e(field_e, distance);
    info!(id, "potential registered");
    Ok(id)
}

pub fn modify_potential(state: &AppState, id: EntityId, form: &PotentialForm) -> LabResult<()> {
    require_login(state)?;
    let (field_e, distance) = potential_inputs(state, form)?;
    Ok(state.potentials.modify_potencial_e(id, field_e, distance)?)
}

pub fn delete_potential(state: &AppState, id: EntityId) -> LabResult<()> {
    require_login(state)?;
    Ok(state.potentials.delete_potencial_e(id)?)
}

pub fn list_potentials(state: &AppState) -> LabResult<Vec<PotencialE>> {
    require_login(state)?;
    Ok(state.potentials.list_potenciales_e().into_values().collect())
}

//=========================================================================================
// Torque
//=========================================================================================

fn torque_inputs(state: &AppState, form: &TorqueForm) -> LabResult<(f64, f64, f64, f64)> {
    let [charge, distance, angle] = require_filled([
        ("charge", form.charge.as_str()),
        ("distance", form.distance.as_str()),
        ("angle", form.angle.as_str()),
    ])?;
    let charge = numeric("charge", charge)?;
    let distance = numeric("distance", distance)?;
    let angle = numeric("angle", angle)?;
    Ok((recorded_field_strength(state, form.field_id)?, charge, distance, angle))
}

pub fn add_torque(state: &AppState, form: &TorqueForm) -> LabResult<EntityId> {
    require_login(state)?;
    let (field_e, charge, distance, angle) = torque_inputs(state, form)?;
    let id = state.torques.add_torque(field_e, charge, distance, angle);
    info!(id, "torque registered");
    Ok(id)
}

pub fn modify_torque(state: &AppState, id: EntityId, form: &TorqueForm) -> LabResult<()> {
    require_login(state)?;
    let (field_e, charge, distance, angle) = torque_inputs(state, form)?;
    Ok(state.torques.modify_torque(id, field_e, charge, distance, angle)?)
}

pub fn delete_torque(state: &AppState, id: EntityId) -> LabResult<()> {
    require_login(state)?;
    Ok(state.torques.delete_torque(id)?)
}

pub fn list_torques(state: &AppState) -> LabResult<Vec<Torque>> {
    require_login(state)?;
    Ok(state.torques.list_torques().into_values().collect())
}
