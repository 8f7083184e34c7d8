use anchor_lang::{
    prelude::*,
    system_program::{self, Allocate, Assign, Transfer},
};

use crate::{
    constants::{RENT_VAULT_SEED, ROOT_SEED},
    state::RootEntry,
};

pub const ROOT_ENTRY_SPACE: usize = 8 + RootEntry::INIT_SPACE;

/// Lamports the vault must move into an entry address already holding `current`.
pub fn entry_top_up(rent: &Rent, current: u64) -> u64 {
    rent.minimum_balance(ROOT_ENTRY_SPACE).saturating_sub(current)
}

/// Creates the root entry PDA and writes `entry` into it, with rent taken from
/// the rent vault.
///
/// Lamports already sitting at the entry address count toward its rent.
pub fn create_root_entry<'info>(
    system_program: &Program<'info, System>,
    rent_vault: &AccountInfo<'info>,
    rent_vault_bump: u8,
    root_entry: &AccountInfo<'info>,
    root_entry_bump: u8,
    entry: &RootEntry,
) -> Result<()> {
    let rent = Rent::get()?;
    let top_up = entry_top_up(&rent, root_entry.lamports());

    if top_up > 0 {
        require_gte!(
            rent_vault.lamports(),
            top_up.saturating_add(rent.minimum_balance(0)),
            RentVaultError::RentVaultUnderfunded
        );

        let vault_seeds: &[&[&[u8]]] = &[&[RENT_VAULT_SEED, &[rent_vault_bump]]];
        let cpi_ctx = CpiContext::new_with_signer(
            system_program.to_account_info(),
            Transfer {
                from: rent_vault.clone(),
                to: root_entry.clone(),
            },
            vault_seeds,
        );
        system_program::transfer(cpi_ctx, top_up)?;
    }

    let entry_seeds: &[&[&[u8]]] = &[&[ROOT_SEED, entry.root.as_ref(), &[root_entry_bump]]];

    let cpi_ctx = CpiContext::new_with_signer(
        system_program.to_account_info(),
        Allocate {
            account_to_allocate: root_entry.clone(),
        },
        entry_seeds,
    );
    system_program::allocate(cpi_ctx, ROOT_ENTRY_SPACE as u64)?;

    let cpi_ctx = CpiContext::new_with_signer(
        system_program.to_account_info(),
        Assign {
            account_to_assign: root_entry.clone(),
        },
        entry_seeds,
    );
    system_program::assign(cpi_ctx, &crate::ID)?;

    let mut data = root_entry.try_borrow_mut_data()?;
    entry.try_serialize(&mut &mut data[..])?;

    Ok(())
}

#[error_code]
pub enum RentVaultError {
    #[msg("Rent vault cannot fund a new root entry")]
    RentVaultUnderfunded = 8500,
}
