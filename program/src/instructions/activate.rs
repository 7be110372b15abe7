use crate::error::OfferError;
use crate::events::OfferActivated;
use crate::state::{Offer, NATIVE_TOKEN_ADDRESS, OFFER_MANAGER_SEED, OFFER_SEED};

use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke,
    pubkey::Pubkey,
};
use solana_system_interface::instruction;
use spl_associated_token_account::get_associated_token_address;
use spl_token::instruction as token_instruction;

/// Accounts:
/// [signer, writable taker]
/// [writable manager_state]
/// [writable offer]
/// then for native-currency offers:
/// [readonly system program]
/// or for token offers:
/// [writable taker_token_account]
/// [writable vault_token_account]
/// [readonly token program]
pub fn activate(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    offer_id: u64,
    payment_amount: u64,
) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let taker = next_account_info(account_info_iter)?;
    let manager_state = next_account_info(account_info_iter)?;
    let offer_info = next_account_info(account_info_iter)?;

    // Basic checks
    if !taker.is_signer {
        return Err(OfferError::NotSigner.into());
    }
    if !offer_info.is_writable {
        return Err(OfferError::InvalidStateAccount.into());
    }

    // Payments are held by the manager PDA, so it must be the real one
    let (state_pda, _state_bump) = Pubkey::find_program_address(&[OFFER_MANAGER_SEED], program_id);
    if state_pda != *manager_state.key {
        return Err(OfferError::InvalidStateAccount.into());
    }

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

    if offer.taker != *taker.key {
        return Err(OfferError::Unauthorized.into());
    }
    if offer.activated {
        return Err(OfferError::AlreadyActivated.into());
    }
    // Under- and overpayment are both rejected; there is no partial fill
    // and no refund path
    if payment_amount != offer.taker_amount {
        return Err(OfferError::AmountMismatch.into());
    }

    if offer.taker_token_address == NATIVE_TOKEN_ADDRESS {
        let _system_prog = next_account_info(account_info_iter)?;

        if !manager_state.is_writable {
            return Err(OfferError::InvalidStateAccount.into());
        }

        msg!("Collecting native payment of {} lamports", payment_amount);
        let transfer_ix = instruction::transfer(taker.key, manager_state.key, payment_amount);
        invoke(&transfer_ix, &[taker.clone(), manager_state.clone()])?;
    } else {
        let taker_token_account = next_account_info(account_info_iter)?;
        let vault_token_account = next_account_info(account_info_iter)?;
        let token_prog = next_account_info(account_info_iter)?;

        // Token payments land in the manager PDA's associated token
        // account for the payment mint
        let expected_vault =
            get_associated_token_address(manager_state.key, &offer.taker_token_address);
        if expected_vault != *vault_token_account.key {
            return Err(OfferError::InvalidStateAccount.into());
        }

        msg!("Collecting token payment of {}", payment_amount);
        let transfer_ix = token_instruction::transfer(
            token_prog.key,
            taker_token_account.key,
            vault_token_account.key,
            taker.key,
            &[taker.key],
            payment_amount,
        )?;
        invoke(
            &transfer_ix,
            &[
                taker_token_account.clone(),
                vault_token_account.clone(),
                taker.clone(),
                token_prog.clone(),
            ],
        )?;
    }

    offer.activated = true;
    offer.serialize(&mut &mut offer_info.data.borrow_mut()[..])?;

    OfferActivated {
        offer_id,
        taker_intmax_address: offer.taker_intmax_address,
    }
    .emit()?;

    Ok(())
}
