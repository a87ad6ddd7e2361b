/// Literal script emission command.
pub mod emit;
/// Node outline command.
pub mod info;
mod util;
