use anchor_lang::prelude::*;

use crate::BRIDGE_AUTHORITY_SEED;

/// Single-owner authorization state embedded in every owned account.
///
/// An owner is either *local* (it signs transactions on this chain directly) or
/// *cross-domain* (it lives on the other chain and reaches this one through the
/// messenger, which signs with an alias PDA derived from the owner's key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, AnchorSerialize, AnchorDeserialize, InitSpace)]
pub struct Ownership {
    pub owner: Pubkey,
    pub owner_is_local: bool,
    pub pending_owner: Option<Pubkey>,
    pub pending_owner_is_local: bool,
}

impl Ownership {
    pub fn new(owner: Pubkey, owner_is_local: bool) -> Self {
        Self {
            owner,
            owner_is_local,
            pending_owner: None,
            pending_owner_is_local: true,
        }
    }
}

/// Maps an identity to the key that must sign on its behalf in this domain.
pub trait CallerResolver {
    fn signer_for(&self, identity: &Pubkey) -> Pubkey;

    fn authorizes(&self, identity: &Pubkey, caller: &Pubkey) -> bool {
        self.signer_for(identity) == *caller
    }
}

/// Identities that sign for themselves.
pub struct LocalCaller;

impl CallerResolver for LocalCaller {
    fn signer_for(&self, identity: &Pubkey) -> Pubkey {
        *identity
    }
}

/// Identities from the other chain, aliased by the messenger program.
pub struct CrossDomainCaller {
    pub messenger: Pubkey,
}

impl CrossDomainCaller {
    pub fn new(messenger: Pubkey) -> Self {
        Self { messenger }
    }
}

impl CallerResolver for CrossDomainCaller {
    fn signer_for(&self, identity: &Pubkey) -> Pubkey {
        Pubkey::find_program_address(&[BRIDGE_AUTHORITY_SEED, identity.as_ref()], &self.messenger).0
    }
}

/// Two-step ownership over an account.
///
/// Implementors only provide access to their [`Ownership`] and the resolver for
/// each domain. Programs that must never become ownerless override
/// [`Ownable::renounce_ownership`] to reject unconditionally.
pub trait Ownable {
    fn ownership(&self) -> &Ownership;

    fn ownership_mut(&mut self) -> &mut Ownership;

    fn caller_resolver(&self, is_local: bool) -> Box<dyn CallerResolver>;

    /// Whether an identity from the other chain may be nominated as owner.
    fn accepts_cross_domain_owner(&self) -> bool {
        true
    }

    fn only_owner(&self, caller: &Pubkey) -> Result<()> {
        let ownership = self.ownership();
        let resolver = self.caller_resolver(ownership.owner_is_local);
        require!(
            resolver.authorizes(&ownership.owner, caller),
            OwnershipError::Unauthorized
        );
        Ok(())
    }

    /// Nominates `new_owner`. Ownership only moves once the candidate accepts.
    fn transfer_ownership(
        &mut self,
        caller: &Pubkey,
        new_owner: Pubkey,
        is_local: bool,
    ) -> Result<OwnershipTransferStarted> {
        self.only_owner(caller)?;
        require_keys_neq!(new_owner, Pubkey::default(), OwnershipError::ZeroOwner);
        require!(
            is_local || self.accepts_cross_domain_owner(),
            OwnershipError::CrossDomainOwnerUnsupported
        );

        let ownership = self.ownership_mut();
        ownership.pending_owner = Some(new_owner);
        ownership.pending_owner_is_local = is_local;

        Ok(OwnershipTransferStarted {
            previous_owner: ownership.owner,
            pending_owner: new_owner,
            is_local,
        })
    }

    fn accept_ownership(&mut self, caller: &Pubkey) -> Result<OwnershipTransferred> {
        let current = *self.ownership();
        let pending_owner = current
            .pending_owner
            .ok_or_else(|| error!(OwnershipError::NoPendingOwner))?;

        let resolver = self.caller_resolver(current.pending_owner_is_local);
        require!(
            resolver.authorizes(&pending_owner, caller),
            OwnershipError::NotPendingOwner
        );

        *self.ownership_mut() = Ownership::new(pending_owner, current.pending_owner_is_local);

        Ok(OwnershipTransferred {
            previous_owner: current.owner,
            new_owner: pending_owner,
            is_cross_domain: !current.pending_owner_is_local,
        })
    }

    fn renounce_ownership(&mut self, caller: &Pubkey) -> Result<OwnershipTransferred> {
        self.only_owner(caller)?;

        let previous_owner = self.ownership().owner;
        *self.ownership_mut() = Ownership::new(Pubkey::default(), true);

        Ok(OwnershipTransferred {
            previous_owner,
            new_owner: Pubkey::default(),
            is_cross_domain: false,
        })
    }
}

#[event]
#[derive(Debug)]
pub struct OwnershipTransferStarted {
    pub previous_owner: Pubkey,
    pub pending_owner: Pubkey,
    pub is_local: bool,
}

#[event]
#[derive(Debug)]
pub struct OwnershipTransferred {
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
    pub is_cross_domain: bool,
}

#[error_code]
pub enum OwnershipError {
    #[msg("Caller is not the owner")]
    Unauthorized = 7000,
    #[msg("Ownership cannot be renounced")]
    CannotRenounceOwnership,
    #[msg("Caller is not the pending owner")]
    NotPendingOwner,
    #[msg("No ownership transfer is pending")]
    NoPendingOwner,
    #[msg("Owner cannot be the default pubkey")]
    ZeroOwner,
    #[msg("Cross-domain owners are not supported here")]
    CrossDomainOwnerUnsupported,
}
