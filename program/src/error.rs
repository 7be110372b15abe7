use num_derive::FromPrimitive;
use solana_program::program_error::ProgramError;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, FromPrimitive)]
pub enum OfferError {
    #[error("Invalid instruction")]
    InvalidInstruction,
    #[error("Missing required signer")]
    NotSigner,
    #[error("Account does not match the expected program address")]
    InvalidStateAccount,
    #[error("Offer manager is already initialized")]
    DoubleInitialization,
    #[error("Offer manager is not initialized")]
    NotInitialized,
    #[error("Referenced offer has never been registered")]
    NotFound,
    #[error("Caller is not the required party for this offer")]
    Unauthorized,
    #[error("Offer is already activated")]
    AlreadyActivated,
    #[error("Payment does not exactly match the required taker amount")]
    AmountMismatch,
    #[error("Amount must be greater than zero")]
    InvalidAmount,
    #[error("Offer id counter overflowed")]
    Overflow,
}

impl From<OfferError> for ProgramError {
    fn from(e: OfferError) -> Self {
        ProgramError::Custom(e as u32)
    }
}
