//! crates/physics_lab_core/src/domain.rs
//!
//! Defines the pure, core data structures for the lab.
//! These structs are independent of any storage or serialization format.
//! Every record carrying a `result` computes it in its constructor, so a
//! result is always derived from the inputs stored next to it.

use std::fmt;

use crate::physics;

/// Identifier assigned by a repository. Never reused after deletion.
pub type EntityId = u32;

/// Energy cost of running one appliance.
#[derive(Debug, Clone, PartialEq)]
pub struct ElectricConsume {
    pub id: EntityId,
    pub appliance: String,
    /// Power draw in watts.
    pub power_w: f64,
    /// Usage time in hours.
    pub time_h: f64,
    /// Tariff in local currency per kWh.
    pub tariff: f64,
    /// Username of the account that recorded the entry.
    pub user: String,
    pub result: f64,
}

impl ElectricConsume {
    pub fn new(id: EntityId, draft: ConsumeDraft) -> Self {
        let result = physics::consumption_cost(draft.power_w, draft.time_h, draft.tariff);
        Self {
            id,
            appliance: draft.appliance,
            power_w: draft.power_w,
            time_h: draft.time_h,
            tariff: draft.tariff,
            user: draft.user,
            result,
        }
    }
}

/// Caller-supplied fields of an `ElectricConsume`, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct ConsumeDraft {
    pub appliance: String,
    pub power_w: f64,
    pub time_h: f64,
    pub tariff: f64,
    pub user: String,
}

/// Electric field of a point charge.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldE {
    pub id: EntityId,
    pub charge_q: f64,
    pub distance_r: f64,
    /// Angle in degrees.
    pub angle_a: f64,
    /// Free-form direction label ("radial", "north", ...).
    pub direction: String,
    pub result: f64,
}

impl FieldE {
    pub fn new(id: EntityId, charge_q: f64, distance_r: f64, angle_a: f64, direction: &str) -> Self {
        Self {
            id,
            charge_q,
            distance_r,
            angle_a,
            direction: direction.to_string(),
            result: physics::resolved_field(charge_q, distance_r, angle_a),
        }
    }
}

/// Coulomb force on a charge in a field.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceE {
    pub id: EntityId,
    pub field_e: f64,
    pub charge_q: f64,
    pub result: f64,
}

impl ForceE {
    pub fn new(id: EntityId, field_e: f64, charge_q: f64) -> Self {
        Self {
            id,
            field_e,
            charge_q,
            result: physics::coulomb_force(field_e, charge_q),
        }
    }
}

/// Electric potential across a distance.
#[derive(Debug, Clone, PartialEq)]
pub struct PotencialE {
    pub id: EntityId,
    pub field_e: f64,
    pub distance_d: f64,
    pub result: f64,
}

impl PotencialE {
    pub fn new(id: EntityId, field_e: f64, distance_d: f64) -> Self {
        Self {
            id,
            field_e,
            distance_d,
            result: physics::electric_potential(field_e, distance_d),
        }
    }
}

/// Torque on a dipole in a field.
#[derive(Debug, Clone, PartialEq)]
pub struct Torque {
    pub id: EntityId,
    pub field_e: f64,
    pub charge_q: f64,
    pub distance_r: f64,
    /// Angle in degrees.
    pub angle_a: f64,
    pub result: f64,
}

impl Torque {
    pub fn new(id: EntityId, field_e: f64, charge_q: f64, distance_r: f64, angle_a: f64) -> Self {
        Self {
            id,
            field_e,
            charge_q,
            distance_r,
            angle_a,
            result: physics::dipole_torque(field_e, charge_q, distance_r, angle_a),
        }
    }
}

/// Account role. The set is open: unknown labels are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Role {
    Owner,
    Administrator,
    Employee,
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::Owner => "Owner",
            Role::Administrator => "Administrator",
            Role::Employee => "Employee",
            Role::Other(label) => label,
        }
    }

    /// Whether this role may open and edit the staff table.
    pub fn can_manage_staff(&self) -> bool {
        matches!(self, Role::Owner | Role::Administrator)
    }
}

impl From<&str> for Role {
    fn from(label: &str) -> Self {
        match label {
            "Owner" => Role::Owner,
            "Administrator" => Role::Administrator,
            "Employee" => Role::Employee,
            other => Role::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Passwords are kept as entered; the lab compares them verbatim at login.
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: EntityId,
    pub username: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub role: Role,
}

impl UserAccount {
    pub fn new(id: EntityId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            username: draft.username,
            password: draft.password,
            name: draft.name,
            address: draft.address,
            email: draft.email,
            role: draft.role,
        }
    }

    /// Self-exempt uniqueness check: an account may take `candidate` as its
    /// username when nobody holds it, or when it already holds it itself.
    pub fn may_take_username(&self, candidate: &str, available: bool) -> bool {
        available || self.username == candidate
    }
}

/// Caller-supplied fields of a `UserAccount`, before an id is assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeDraft {
    pub username: String,
    pub password: String,
    pub name: String,
    pub address: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn draft(username: &str) -> EmployeeDraft {
        EmployeeDraft {
            username: username.to_string(),
            password: "pw".to_string(),
            name: "Ana".to_string(),
            address: "Calle 1".to_string(),
            email: format!("{username}@lab.io"),
            role: Role::Employee,
        }
    }

    #[test]
    fn role_labels_round_trip() {
        for label in ["Owner", "Administrator", "Employee", "Intern"] {
            assert_eq!(Role::from(label).as_str(), label);
        }
        assert_eq!(Role::from("Intern"), Role::Other("Intern".to_string()));
    }

    #[test]
    fn only_owner_and_administrator_manage_staff() {
        assert!(Role::Owner.can_manage_staff());
        assert!(Role::Administrator.can_manage_staff());
        assert!(!Role::Employee.can_manage_staff());
        assert!(!Role::from("owner").can_manage_staff());
    }

    #[test]
    fn self_exempt_check_allows_own_username() {
        let account = UserAccount::new(0, draft("ana"));
        assert!(account.may_take_username("ana", false));
        assert!(account.may_take_username("bea", true));
        assert!(!account.may_take_username("bea", false));
    }

    #[test]
    fn constructors_derive_results() {
        assert_relative_eq!(ForceE::new(0, 10.0, 2.0).result, 20.0);
        assert_relative_eq!(PotencialE::new(0, 3.0, 4.0).result, 12.0);
        assert_relative_eq!(Torque::new(0, 4.0, 2.0, 3.0, 90.0).result, 24.0, epsilon = 1.0e-12);

        let consume = ElectricConsume::new(
            7,
            ConsumeDraft {
                appliance: "Kettle".to_string(),
                power_w: 2000.0,
                time_h: 0.5,
                tariff: 0.3,
                user: "ana".to_string(),
            },
        );
        assert_eq!(consume.id, 7);
        assert_relative_eq!(consume.result, 0.3, epsilon = 1.0e-12);
    }
}
