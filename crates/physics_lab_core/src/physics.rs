//! crates/physics_lab_core/src/physics.rs
//!
//! The formulas behind every derived `result` field. All functions are pure and
//! never guard against degenerate input: a zero distance yields an infinite or
//! NaN field strength, which is stored as-is.

/// Coulomb constant _k_ in N·m²/C², at the precision used by the lab sheets.
pub const COULOMB_CONSTANT: f64 = 8.99e9;

/// Watts in one kilowatt. Tariffs are quoted per kWh while power is entered in W.
pub const WATTS_PER_KILOWATT: f64 = 1000.0;

/// Magnitude of the electric field of a point charge, `k·|q| / r²`.
#[inline]
#[must_use]
pub fn coulomb_field_magnitude(charge_q: f64, distance_r: f64) -> f64 {
    COULOMB_CONSTANT * charge_q.abs() / (distance_r * distance_r)
}

/// Field strength stored on a `FieldE` record.
///
/// With a non-zero angle the magnitude is split into its x/y components and
/// recombined, which gives back the magnitude up to rounding.
#[must_use]
pub fn resolved_field(charge_q: f64, distance_r: f64, angle_deg: f64) -> f64 {
    let magnitude = coulomb_field_magnitude(charge_q, distance_r);
    if angle_deg != 0.0 {
        let radians = angle_deg.to_radians();
        let ex = magnitude * radians.cos();
        let ey = magnitude * radians.sin();
        (ex * ex + ey * ey).sqrt()
    } else {
        magnitude
    }
}

/// Electric force on a charge placed in a field, `E·q`.
#[inline]
#[must_use]
pub fn coulomb_force(field_e: f64, charge_q: f64) -> f64 {
    field_e * charge_q
}

/// Electric potential across a distance in a uniform field, `E·d`.
#[inline]
#[must_use]
pub fn electric_potential(field_e: f64, distance_d: f64) -> f64 {
    field_e * distance_d
}

/// Torque on a dipole, `(q·r)·E·sin(θ)` with θ in degrees.
#[inline]
#[must_use]
pub fn dipole_torque(field_e: f64, charge_q: f64, distance_r: f64, angle_deg: f64) -> f64 {
    (charge_q * distance_r) * field_e * angle_deg.to_radians().sin()
}

/// Cost of running an appliance: watts × hours × tariff per kWh.
#[inline]
#[must_use]
pub fn consumption_cost(power_w: f64, time_h: f64, tariff_per_kwh: f64) -> f64 {
    power_w * time_h * tariff_per_kwh / WATTS_PER_KILOWATT
}
