#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod internal;
pub mod state;

use instructions::*;


declare_id!("A9NMdCw4R6nRdy2MywwaKC1Fn2r64rxyw4PEwFotVHja");

#[program]
pub mod world_id_mirror {
    use super::*;

    /// Initializes the mirror's root history.
    /// Must be called once during deployment.
    ///
    /// # Arguments
    /// * `ctx`                 - The context containing the payer, the mirror PDA to create and
    ///                           the initializing authority (the owner itself when local)
    /// * `owner`               - Identity allowed to push roots and reconfigure the mirror
    /// * `owner_is_local`      - False when `owner` lives on the home chain and acts through
    ///                           the messenger's alias PDA
    /// * `messenger`           - Program relaying home-chain instructions to this chain
    /// * `root_history_expiry` - Seconds a non-latest root stays valid; defaults to never expiring
    pub fn initialize(
        ctx: Context<Initialize>,
        owner: Pubkey,
        owner_is_local: bool,
        messenger: Pubkey,
        root_history_expiry: Option<u64>,
    ) -> Result<()> {
        initialize_handler(ctx, owner, owner_is_local, messenger, root_history_expiry)
    }

    /// Records a root relayed from the home chain and makes it the latest root.
    /// Only the owner may call this instruction; a root can be received only once.
    ///
    /// The owner's signer only signs, so a messenger may pass its alias PDA as a
    /// readonly signer holding no lamports. Rent for the new root entry comes from
    /// the rent vault PDA, which must be funded beforehand.
    ///
    /// # Arguments
    /// * `ctx`  - The context containing the owner's signer, the mirror, the rent vault
    ///            and the root entry PDA
    /// * `root` - The identity manager root to record
    pub fn receive_root(ctx: Context<ReceiveRoot>, root: [u8; 32]) -> Result<()> {
        receive_root_handler(ctx, root)
    }

    /// Updates how long non-latest roots stay valid.
    /// Only the owner may call this instruction.
    pub fn set_root_history_expiry(ctx: Context<UpdateMirror>, expiry: u64) -> Result<()> {
        set_root_history_expiry_handler(ctx, expiry)
    }

    /// Returns whether `root` is the latest root or a historical root that has not expired.
    pub fn is_valid_root(ctx: Context<CheckRoot>, root: [u8; 32]) -> Result<bool> {
        is_valid_root_handler(ctx, root)
    }

    /// Fails with `ExpiredRoot` or `NonExistentRoot` unless `root` is valid.
    /// Meant to be invoked through CPI by programs verifying proofs against the mirror.
    pub fn require_valid_root(ctx: Context<CheckRoot>, root: [u8; 32]) -> Result<()> {
        require_valid_root_handler(ctx, root)
    }

    /// Returns the latest received root.
    pub fn latest_root(ctx: Context<ReadMirror>) -> Result<[u8; 32]> {
        latest_root_handler(ctx)
    }

    /// Returns the configured root history expiry, in seconds.
    pub fn root_history_expiry(ctx: Context<ReadMirror>) -> Result<u64> {
        root_history_expiry_handler(ctx)
    }

    /// Starts a two-step ownership transfer. Only the owner may call this instruction.
    pub fn transfer_ownership(
        ctx: Context<UpdateMirror>,
        new_owner: Pubkey,
        is_local: bool,
    ) -> Result<()> {
        transfer_ownership_handler(ctx, new_owner, is_local)
    }

    /// Completes an ownership transfer. Only the pending owner may call this instruction.
    pub fn accept_ownership(ctx: Context<UpdateMirror>) -> Result<()> {
        accept_ownership_handler(ctx)
    }

    /// Always fails: the mirror can never be left without an owner.
    pub fn renounce_ownership(ctx: Context<UpdateMirror>) -> Result<()> {
        renounce_ownership_handler(ctx)
    }
}
