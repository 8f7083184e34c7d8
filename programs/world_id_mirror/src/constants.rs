use anchor_lang::prelude::*;

#[constant]
pub const MIRROR_SEED: &[u8] = b"mirror";

#[constant]
pub const ROOT_SEED: &[u8] = b"root";

/// System-owned PDA holding the lamports that fund new root entries.
#[constant]
pub const RENT_VAULT_SEED: &[u8] = b"rent_vault";

/// Roots never expire unless the owner configures otherwise, so the bootstrap
/// root stays valid until the first reconfiguration.
#[constant]
pub const DEFAULT_ROOT_HISTORY_EXPIRY: u64 = u64::MAX;
