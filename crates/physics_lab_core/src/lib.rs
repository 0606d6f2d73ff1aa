pub mod domain;
pub mod physics;
pub mod ports;
pub mod validation;

pub use domain::{
    ConsumeDraft, ElectricConsume, EmployeeDraft, EntityId, FieldE, ForceE, PotencialE, Role,
    Torque, UserAccount,
};
pub use ports::{
    ElectricConsumeRepository, FieldERepository, ForceRepository, PortError, PortResult,
    PotencialERepository, TorqueRepository, UserRepository,
};
pub use validation::{is_numeric_string, is_valid_email, normalize_name};
