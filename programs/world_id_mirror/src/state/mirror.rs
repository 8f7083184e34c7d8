use anchor_lang::prelude::*;
use common::{
    CallerResolver, CrossDomainCaller, LocalCaller, Ownable, Ownership, OwnershipError,
    OwnershipTransferred,
};

/// Root history state of the mirror, at PDA `[MIRROR_SEED]`.
///
/// Individual roots live in their own [`RootEntry`](crate::state::RootEntry)
/// accounts; this account tracks the newest one and the expiry window applied
/// to all the others.
#[account]
#[derive(Debug, PartialEq, Eq, InitSpace)]
pub struct Mirror {
    /// Who may push roots and reconfigure the mirror. In production this is the
    /// home-chain state bridge, reached through `messenger`.
    pub ownership: Ownership,

    /// Program that relays home-chain instructions and signs for remote senders
    /// with their alias PDA.
    pub messenger: Pubkey,

    /// Root of the most recent successful insert, or `NO_ROOT`.
    pub latest_root: [u8; 32],

    /// Seconds a non-latest root stays valid after its insertion.
    pub root_history_expiry: u64,

    /// Number of roots received so far.
    pub root_count: u64,
}

impl Ownable for Mirror {
    fn ownership(&self) -> &Ownership {
        &self.ownership
    }

    fn ownership_mut(&mut self) -> &mut Ownership {
        &mut self.ownership
    }

    fn caller_resolver(&self, is_local: bool) -> Box<dyn CallerResolver> {
        if is_local {
            Box::new(LocalCaller)
        } else {
            Box::new(CrossDomainCaller::new(self.messenger))
        }
    }

    /// Renunciation is permanently disabled.
    fn renounce_ownership(&mut self, _caller: &Pubkey) -> Result<OwnershipTransferred> {
        err!(OwnershipError::CannotRenounceOwnership)
    }
}
