use anchor_lang::prelude::*;
use common::{CallerResolver, LocalCaller, Ownable, Ownership, OwnershipError, OwnershipTransferred};

/// Fixed-cost fee model of the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, InitSpace)]
pub struct FeeConfig {
    /// Flat cost, in lamports, of getting a message accepted by the transport.
    pub max_submission_cost: u64,
    /// Lamports paid per unit of destination gas.
    pub gas_price_bid: u64,
}

/// Home-chain relay configuration, at PDA `[STATE_BRIDGE_SEED]`.
///
/// The PDA itself is the sender of every relayed message, so the mirror's
/// cross-domain owner is this account's address.
#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct StateBridge {
    /// Always a local owner: the home chain has no messenger to alias through.
    pub ownership: Ownership,

    /// Identity manager state account holding the latest root.
    pub identity_manager: Pubkey,

    /// Program expected to own `identity_manager`.
    pub identity_manager_program: Pubkey,

    /// Mirror program on the target chain.
    pub world_id_mirror: Pubkey,

    /// Target-side messenger that executes relayed instructions.
    pub messenger: Pubkey,

    pub fee_config: FeeConfig,

    /// Nonce of the next outgoing message. Doubles as the ticket id.
    pub nonce: u64,
}

impl Ownable for StateBridge {
    fn ownership(&self) -> &Ownership {
        &self.ownership
    }

    fn ownership_mut(&mut self) -> &mut Ownership {
        &mut self.ownership
    }

    fn caller_resolver(&self, _is_local: bool) -> Box<dyn CallerResolver> {
        Box::new(LocalCaller)
    }

    fn accepts_cross_domain_owner(&self) -> bool {
        false
    }

    /// Renunciation is permanently disabled.
    fn renounce_ownership(&mut self, _caller: &Pubkey) -> Result<OwnershipTransferred> {
        err!(OwnershipError::CannotRenounceOwnership)
    }
}
