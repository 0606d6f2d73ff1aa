pub mod forms;
pub mod handler;
pub mod measurements;
pub mod protocol;
pub mod session;
pub mod staff;
pub mod state;

// Re-export the command loop so the binary can drive it directly.
pub use handler::{handle_command, run};
pub use state::AppState;
