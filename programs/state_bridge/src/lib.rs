#![allow(unexpected_cfgs)]

use anchor_lang::prelude::*;

pub mod constants;
pub mod instructions;
pub mod internal;
pub mod state;

use instructions::*;
use state::*;


declare_id!("EskMmhaefe2omeVrZc2Qyw6EqF6UTikgZYhJgqDDYccz");

#[program]
pub mod state_bridge {
    use super::*;

    /// Initializes the state bridge configuration.
    /// Must be called once during deployment.
    ///
    /// # Arguments
    /// * `ctx`        - The context containing the payer, the state bridge PDA to create and
    ///                  the owner's signature
    /// * `owner`      - Local identity allowed to reconfigure the bridge and the mirror
    /// * `wiring`     - Identity manager, mirror and messenger addresses
    /// * `fee_config` - Initial transport fee parameters
    pub fn initialize(
        ctx: Context<Initialize>,
        owner: Pubkey,
        wiring: Wiring,
        fee_config: FeeConfig,
    ) -> Result<()> {
        initialize_handler(ctx, owner, wiring, fee_config)
    }

    /// Reads the identity manager's latest root and relays it to the mirror.
    /// Anyone may call this instruction; the caller escrows `fee_budget` lamports
    /// and is refunded whatever the transport does not spend.
    ///
    /// # Arguments
    /// * `ctx`        - The context containing the payer, the identity manager account,
    ///                  the escrow vault and the outgoing message PDA to create
    /// * `fee_budget` - Lamports to escrow; must cover `estimate_required_fee`
    ///
    /// Returns the ticket id of the submitted message.
    pub fn propagate_root(ctx: Context<PropagateRoot>, fee_budget: u64) -> Result<u64> {
        propagate_root_handler(ctx, fee_budget)
    }

    /// Relays a new root history expiry to the mirror.
    /// Only the owner may call this instruction.
    ///
    /// # Arguments
    /// * `ctx`        - The context containing the owner's signer, the escrow vault
    ///                  and the outgoing message PDA to create
    /// * `expiry`     - Seconds a non-latest root stays valid on the mirror
    /// * `fee_budget` - Lamports to escrow; must cover `estimate_required_fee`
    pub fn set_root_history_expiry(
        ctx: Context<SetRootHistoryExpiry>,
        expiry: u64,
        fee_budget: u64,
    ) -> Result<u64> {
        set_root_history_expiry_handler(ctx, expiry, fee_budget)
    }

    /// Returns `max_submission_cost + gas_price_bid * l2_gas_limit` under the
    /// current fee configuration.
    pub fn estimate_required_fee(ctx: Context<ReadStateBridge>, l2_gas_limit: u64) -> Result<u64> {
        estimate_required_fee_handler(ctx, l2_gas_limit)
    }

    /// Updates the transport fee parameters.
    /// Only the owner may call this instruction.
    pub fn set_fee_config(ctx: Context<UpdateStateBridge>, fee_config: FeeConfig) -> Result<()> {
        set_fee_config_handler(ctx, fee_config)
    }

    /// Starts a two-step ownership transfer to a local identity.
    /// Only the owner may call this instruction.
    pub fn transfer_ownership(
        ctx: Context<UpdateStateBridge>,
        new_owner: Pubkey,
        is_local: bool,
    ) -> Result<()> {
        transfer_ownership_handler(ctx, new_owner, is_local)
    }

    /// Completes an ownership transfer. Only the pending owner may call this instruction.
    pub fn accept_ownership(ctx: Context<UpdateStateBridge>) -> Result<()> {
        accept_ownership_handler(ctx)
    }

    /// Always fails: the state bridge can never be left without an owner.
    pub fn renounce_ownership(ctx: Context<UpdateStateBridge>) -> Result<()> {
        renounce_ownership_handler(ctx)
    }
}
