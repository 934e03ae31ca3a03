//! Browser front-end for Blazel: LinkedIn draft generation, human feedback
//! capture, and LoRA adapter management against the Blazel API.

pub mod api;
pub mod auth;
pub mod components;
pub mod diff;
pub mod session;
pub mod stream;

pub use components::*;
pub use session::Session;
