pub mod asset;
pub mod authorizer;
pub mod coordinator;
pub mod error;
pub mod grant_manager;
pub mod math;
pub mod snapshot_token;
pub mod vault;

#[cfg(not(target_arch = "wasm32"))]
pub mod testing;
