pub use errors::*;
pub use moves::*;
pub use protocol_types::*;
pub use rules::*;
pub use state::*;
pub use strategy::*;

#[cfg(test)]
mod arbitrary;
mod errors;
mod moves;
mod protocol_types;
mod rules;
mod state;
mod strategy;
