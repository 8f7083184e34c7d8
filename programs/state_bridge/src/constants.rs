use anchor_lang::prelude::*;

#[constant]
pub const STATE_BRIDGE_SEED: &[u8] = b"state_bridge";

#[constant]
pub const OUTGOING_MESSAGE_SEED: &[u8] = b"outgoing_message";

/// Destination gas for `receive_root`: root entry creation plus the ledger update.
#[constant]
pub const RECEIVE_ROOT_GAS_LIMIT: u64 = 200_000;

/// Destination gas for `set_root_history_expiry`, a single field write.
#[constant]
pub const SET_ROOT_HISTORY_EXPIRY_GAS_LIMIT: u64 = 50_000;

/// Upper bound on a serialized payload; outgoing message accounts are sized for it.
pub const MAX_PAYLOAD_LEN: usize = 512;

mod private {
    use anchor_lang::prelude::*;

    #[cfg(feature = "devnet")]
    pub mod config {
        use super::*;

        pub const ESCROW_VAULT: Pubkey = pubkey!("E4j5bCRfLt2Zq4ChKVJdgmXXiEzLz5wpqxsY9udHFHSo");
    }

    #[cfg(feature = "mainnet")]
    pub mod config {
        use super::*;

        pub const ESCROW_VAULT: Pubkey = pubkey!("EdtvNEseP8QBbtUgy93rd93bWg7oEtZKUVHjeg3FJshr");
    }

    #[cfg(not(any(feature = "devnet", feature = "mainnet")))]
    pub mod config {
        use super::*;

        pub const ESCROW_VAULT: Pubkey = pubkey!("9LqzYQhhqwoDZfVWf4f8PR75EUnRqgV2UJuXXv15AkaE");
    }
}

pub use private::config::*;
