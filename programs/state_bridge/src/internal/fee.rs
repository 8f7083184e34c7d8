use anchor_lang::prelude::*;

use crate::{internal::RelayError, state::FeeConfig};

/// `max_submission_cost + gas_price_bid * l2_gas_limit`, failing on overflow
/// instead of wrapping.
pub fn required_fee(
    max_submission_cost: u64,
    gas_price_bid: u64,
    l2_gas_limit: u64,
) -> Result<u64> {
    gas_price_bid
        .checked_mul(l2_gas_limit)
        .and_then(|gas_cost| gas_cost.checked_add(max_submission_cost))
        .ok_or_else(|| error!(RelayError::FeeOverflow))
}

impl FeeConfig {
    pub fn required_fee(&self, l2_gas_limit: u64) -> Result<u64> {
        required_fee(self.max_submission_cost, self.gas_price_bid, l2_gas_limit)
    }

    /// Fails with `InsufficientFee` unless `fee_budget` covers a message with
    /// `l2_gas_limit` destination gas.
    pub fn check_fee_budget(&self, l2_gas_limit: u64, fee_budget: u64) -> Result<()> {
        let required = self.required_fee(l2_gas_limit)?;
        require_gte!(fee_budget, required, RelayError::InsufficientFee);
        Ok(())
    }
}
