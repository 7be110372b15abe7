use crate::error::OfferError;
use crate::events::OfferTakerUpdated;
use crate::state::{Offer, OfferManagerState, OFFER_MANAGER_SEED, OFFER_SEED};

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::{invoke_signed, set_return_data},
    pubkey::Pubkey,
    sysvar::{rent::Rent, Sysvar},
};
use solana_system_interface::instruction;

/// Accounts:
/// [signer, writable maker]
/// [writable manager_state]
/// [writable offer]
/// [readonly system program]
/// [readonly rent sysvar]
pub fn register(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    maker_intmax_address: [u8; 32],
    maker_asset_id: [u8; 32],
    maker_amount: u64,
    taker: Pubkey,
    taker_intmax_address: [u8; 32],
    taker_token_address: Pubkey,
    taker_amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let maker = next_account_info(account_info_iter)?;
    let manager_state = next_account_info(account_info_iter)?;
    let offer_info = next_account_info(account_info_iter)?;
    let _system_prog = next_account_info(account_info_iter)?;
    let rent_sysvar = next_account_info(account_info_iter)?;

    // Basic checks
    if !maker.is_signer {
        return Err(OfferError::NotSigner.into());
    }
    if !manager_state.is_writable || !offer_info.is_writable {
        return Err(OfferError::InvalidStateAccount.into());
    }

    // A zero quantity on either leg would produce a vacuous offer
    if maker_amount == 0 || taker_amount == 0 {
        return Err(OfferError::InvalidAmount.into());
    }

    let (state_pda, _state_bump) = Pubkey::find_program_address(&[OFFER_MANAGER_SEED], program_id);
    if state_pda != *manager_state.key {
        return Err(OfferError::InvalidStateAccount.into());
    }
    if manager_state.data_is_empty() || manager_state.owner != program_id {
        return Err(OfferError::NotInitialized.into());
    }

    let mut state = OfferManagerState::try_from_slice(&manager_state.data.borrow())
        .map_err(|_| OfferError::InvalidStateAccount)?;
    if !state.is_initialized {
        return Err(OfferError::NotInitialized.into());
    }

    // The offer account must be the PDA for the id being allocated
    let offer_id = state.next_offer_id;
    let (offer_pda, offer_bump) =
        Pubkey::find_program_address(&[OFFER_SEED, &offer_id.to_le_bytes()], program_id);
    if offer_pda != *offer_info.key {
        return Err(OfferError::InvalidStateAccount.into());
    }

    msg!("Creating offer account for id {}", offer_id);
    let space = Offer::LEN;
    let rent = &Rent::from_account_info(rent_sysvar)?;
    let lamports = rent.minimum_balance(space);

    let create_offer_ix = instruction::create_account(
        maker.key,      // Payer
        offer_info.key, // New account address
        lamports,       // Lamports
        space as u64,   // Space
        program_id,     // Owner program
    );
    invoke_signed(
        &create_offer_ix,
        &[maker.clone(), offer_info.clone()],
        &[&[OFFER_SEED, &offer_id.to_le_bytes(), &[offer_bump]]],
    )?;

    let offer = Offer {
        id: offer_id,
        maker: *maker.key,
        maker_intmax_address,
        maker_asset_id,
        maker_amount,
        taker,
        taker_intmax_address,
        taker_token_address,
        taker_amount,
        activated: false,
    };
    offer.serialize(&mut &mut offer_info.data.borrow_mut()[..])?;

    state.next_offer_id = offer_id.checked_add(1).ok_or(OfferError::Overflow)?;
    state.serialize(&mut &mut manager_state.data.borrow_mut()[..])?;

    OfferTakerUpdated {
        offer_id,
        taker_intmax_address,
    }
    .emit()?;
    set_return_data(&offer_id.to_le_bytes());

    Ok(())
}
