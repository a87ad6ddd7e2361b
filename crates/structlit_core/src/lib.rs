//! Serialize nested in-memory values into literal assignment scripts.

/// Value model, literal emitters, outline walk, and input loading.
pub mod lit;
