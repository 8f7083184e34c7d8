#![allow(unexpected_cfgs)]

pub mod identity_manager;
pub mod ix;
pub mod ownable;
pub mod root;

pub use identity_manager::*;
pub use ix::*;
pub use ownable::*;
pub use root::*;

/// Seed of the PDA through which the messenger speaks for a remote sender.
pub const BRIDGE_AUTHORITY_SEED: &[u8] = b"bridge_authority";
