pub mod consume;
pub mod field;
pub mod force;
pub mod potential;
pub(crate) mod store;
pub mod torque;
pub mod users;

pub use consume::InMemoryConsumeRepository;
pub use field::InMemoryFieldRepository;
pub use force::InMemoryForceRepository;
pub use potential::InMemoryPotentialRepository;
pub use torque::InMemoryTorqueRepository;
pub use users::InMemoryUserRepository;
