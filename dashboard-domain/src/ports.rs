// Port Traits (Interfaces)
// Define what the domain needs from infrastructure

pub mod sources;

pub use sources::*;
