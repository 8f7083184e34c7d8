use anchor_lang::prelude::*;

use crate::Root;

/// Offset of the latest root inside the identity manager's state account,
/// right after the 8-byte account discriminator.
pub const LATEST_ROOT_OFFSET: usize = 8;

/// Reads the identity manager's current root from its state account.
///
/// The identity manager is an external program; the only part of its layout
/// relied upon here is the root stored at [`LATEST_ROOT_OFFSET`].
pub fn read_latest_root(account: &AccountInfo, identity_manager_program: &Pubkey) -> Result<Root> {
    require_keys_eq!(
        *account.owner,
        *identity_manager_program,
        IdentityManagerError::InvalidOwner
    );

    let data = account.try_borrow_data()?;
    parse_latest_root(&data)
}

pub fn parse_latest_root(data: &[u8]) -> Result<Root> {
    let bytes = data
        .get(LATEST_ROOT_OFFSET..LATEST_ROOT_OFFSET + 32)
        .ok_or_else(|| error!(IdentityManagerError::AccountTooSmall))?;

    let mut root = [0u8; 32];
    root.copy_from_slice(bytes);
    Ok(root)
}

#[error_code]
pub enum IdentityManagerError {
    #[msg("Identity manager account is not owned by the identity manager program")]
    InvalidOwner = 10000,
    #[msg("Identity manager account is too small to hold a root")]
    AccountTooSmall,
}
