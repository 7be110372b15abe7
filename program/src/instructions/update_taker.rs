use crate::error::OfferError;
use crate::events::OfferTakerUpdated;
use crate::state::{Offer, OFFER_SEED};

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    pubkey::Pubkey,
};

/// Accounts:
/// [signer maker]
/// [writable offer]
pub fn update_taker(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    offer_id: u64,
    new_taker_intmax_address: [u8; 32],
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let maker = next_account_info(account_info_iter)?;
    let offer_info = next_account_info(account_info_iter)?;

    // Basic checks
    if !maker.is_signer {
        return Err(OfferError::NotSigner.into());
    }
    if !offer_info.is_writable {
        return Err(OfferError::InvalidStateAccount.into());
    }

    // An id that was never allocated has no account behind its PDA
    let (offer_pda, _offer_bump) =
        Pubkey::find_program_address(&[OFFER_SEED, &offer_id.to_le_bytes()], program_id);
    if offer_pda != *offer_info.key
        || offer_info.owner != program_id
        || offer_info.data_is_empty()
    {
        return Err(OfferError::NotFound.into());
    }

    let mut offer =
        Offer::try_from_slice(&offer_info.data.borrow()).map_err(|_| OfferError::NotFound)?;

    // Only the registering maker may retarget the taker leg, and only
    // while the trade is unsettled
    if offer.maker != *maker.key {
        return Err(OfferError::Unauthorized.into());
    }
    if offer.activated {
        return Err(OfferError::AlreadyActivated.into());
    }

    offer.taker_intmax_address = new_taker_intmax_address;
    offer.serialize(&mut &mut offer_info.data.borrow_mut()[..])?;

    msg!("Updated taker routing for offer {}", offer_id);
    OfferTakerUpdated {
        offer_id,
        taker_intmax_address: new_taker_intmax_address,
    }
    .emit()?;

    Ok(())
}
