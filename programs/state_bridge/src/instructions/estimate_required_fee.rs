use anchor_lang::prelude::*;

use crate::instructions::ReadStateBridge;

pub fn estimate_required_fee_handler(
    ctx: Context<ReadStateBridge>,
    l2_gas_limit: u64,
) -> Result<u64> {
    ctx.accounts.state_bridge.fee_config.required_fee(l2_gas_limit)
}
