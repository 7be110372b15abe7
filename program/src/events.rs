use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{entrypoint::ProgramResult, log::sol_log_data, program_error::ProgramError};

/// Current taker routing info for an offer. `Register` and `UpdateTaker`
/// both emit this shape, so observers track "taker info for offer X"
/// through a single event.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq)]
pub struct OfferTakerUpdated {
    pub offer_id: u64,
    pub taker_intmax_address: [u8; 32],
}

impl OfferTakerUpdated {
    pub const NAME: &'static [u8] = b"OfferTakerUpdated";

    pub fn emit(&self) -> ProgramResult {
        let data = borsh::to_vec(self).map_err(|e| ProgramError::BorshIoError(e.to_string()))?;
        sol_log_data(&[Self::NAME, &data]);
        Ok(())
    }
}

/// Terminal settlement notification. Carries the destination the maker's
/// asset should be delivered to, so relayers can route the off-chain leg.
#[derive(BorshSerialize, BorshDeserialize, Debug, PartialEq, Eq)]
pub struct OfferActivated {
    pub offer_id: u64,
    pub taker_intmax_address: [u8; 32],
}

impl OfferActivated {
    pub const NAME: &'static [u8] = b"OfferActivated";

    pub fn emit(&self) -> ProgramResult {
        let data = borsh::to_vec(self).map_err(|e| ProgramError::BorshIoError(e.to_string()))?;
        sol_log_data(&[Self::NAME, &data]);
        Ok(())
    }
}
