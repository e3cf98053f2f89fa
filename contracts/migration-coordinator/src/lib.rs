pub mod contract;
pub mod error;
pub mod state;

mod claims;
mod helpers;
mod treasury;

#[cfg(test)]
mod testing;

pub use migration_core::coordinator::msg;
