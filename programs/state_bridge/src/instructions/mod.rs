use anchor_lang::prelude::*;

use crate::{constants::STATE_BRIDGE_SEED, state::StateBridge};

pub mod estimate_required_fee;
pub mod initialize;
pub mod ownership;
pub mod propagate_root;
pub mod set_fee_config;
pub mod set_root_history_expiry;

pub use estimate_required_fee::*;
pub use initialize::*;
pub use ownership::*;
pub use propagate_root::*;
pub use set_fee_config::*;
pub use set_root_history_expiry::*;

/// Accounts struct for owner configuration and ownership instructions.
#[derive(Accounts)]
pub struct UpdateStateBridge<'info> {
    /// The owner, or the pending owner when accepting a transfer.
    pub authority: Signer<'info>,

    #[account(mut, seeds = [STATE_BRIDGE_SEED], bump)]
    pub state_bridge: Account<'info, StateBridge>,
}

#[derive(Accounts)]
pub struct ReadStateBridge<'info> {
    #[account(seeds = [STATE_BRIDGE_SEED], bump)]
    pub state_bridge: Account<'info, StateBridge>,
}
