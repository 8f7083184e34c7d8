use anchor_lang::prelude::*;

pub mod envelope;
pub mod fee;
pub mod transport;

pub use envelope::*;
pub use fee::*;
pub use transport::*;

#[error_code]
pub enum RelayError {
    #[msg("Fee budget is below the required escrow")]
    InsufficientFee = 9000,
    #[msg("Escrow is below the transport minimum")]
    InsufficientEscrow,
    #[msg("Fee computation overflowed")]
    FeeOverflow,
    #[msg("Identity manager has no root yet")]
    NoRootToPropagate,
    #[msg("Incorrect escrow vault")]
    IncorrectEscrowVault,
    #[msg("Incorrect identity manager account")]
    IncorrectIdentityManager,
    #[msg("Payload could not be encoded within the size limit")]
    PayloadEncodingFailed,
}
