use anchor_lang::prelude::*;

use crate::{constants::MIRROR_SEED, state::Mirror};

pub mod initialize;
pub mod ownership;
pub mod receive_root;
pub mod set_root_history_expiry;
pub mod views;

pub use initialize::*;
pub use ownership::*;
pub use receive_root::*;
pub use set_root_history_expiry::*;
pub use views::*;

/// Accounts struct for instructions that mutate mirror configuration or ownership.
/// Authorization is checked in the handlers against the mirror's ownership state,
/// since a cross-domain owner signs through its alias PDA rather than its own key.
#[derive(Accounts)]
pub struct UpdateMirror<'info> {
    /// The signer claiming to act for the owner (or pending owner).
    pub authority: Signer<'info>,

    /// The mirror state account.
    #[account(mut, seeds = [MIRROR_SEED], bump)]
    pub mirror: Account<'info, Mirror>,
}
