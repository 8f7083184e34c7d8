use anchor_lang::prelude::*;
use common::Ownable;

use crate::{instructions::UpdateStateBridge, state::FeeConfig};

/// Replace the transport fee parameters used for future messages.
pub fn set_fee_config_handler(
    ctx: Context<UpdateStateBridge>,
    fee_config: FeeConfig,
) -> Result<()> {
    let state_bridge = &mut ctx.accounts.state_bridge;
    state_bridge.only_owner(&ctx.accounts.authority.key())?;

    state_bridge.fee_config = fee_config;

    emit!(FeeConfigUpdated {
        max_submission_cost: fee_config.max_submission_cost,
        gas_price_bid: fee_config.gas_price_bid,
    });

    Ok(())
}

#[event]
pub struct FeeConfigUpdated {
    pub max_submission_cost: u64,
    pub gas_price_bid: u64,
}
