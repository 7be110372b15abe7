use crate::error::OfferError;
use crate::state::{OfferManagerState, OFFER_MANAGER_SEED};

use borsh::BorshSerialize;
use solana_program::{
    account_info::{next_account_info, AccountInfo},
    entrypoint::ProgramResult,
    msg,
    program::invoke_signed,
    pubkey::Pubkey,
    sysvar::{rent::Rent, Sysvar},
};
use solana_system_interface::instruction;

/// Accounts:
/// [signer, writable payer]
/// [writable manager_state]
/// [readonly system program]
/// [readonly rent sysvar]
pub fn initialize(program_id: &Pubkey, accounts: &[AccountInfo]) -> ProgramResult {
    let account_info_iter = &mut accounts.iter();

    let payer = next_account_info(account_info_iter)?;
    let manager_state = next_account_info(account_info_iter)?;
    let _system_prog = next_account_info(account_info_iter)?;
    let rent_sysvar = next_account_info(account_info_iter)?;

    // Basic checks
    if !payer.is_signer {
        return Err(OfferError::NotSigner.into());
    }
    if !manager_state.is_writable {
        return Err(OfferError::InvalidStateAccount.into());
    }

    // The manager state lives at a fixed PDA so there can only ever be one
    // ledger per program deployment
    let (state_pda, state_bump) = Pubkey::find_program_address(&[OFFER_MANAGER_SEED], program_id);
    if state_pda != *manager_state.key {
        return Err(OfferError::InvalidStateAccount.into());
    }

    if !manager_state.data_is_empty() {
        return Err(OfferError::DoubleInitialization.into());
    }

    msg!("Creating offer manager state account");
    let space = OfferManagerState::LEN;
    let rent = &Rent::from_account_info(rent_sysvar)?;
    let lamports = rent.minimum_balance(space);

    let create_state_ix = instruction::create_account(
        payer.key,         // Payer
        manager_state.key, // New account address
        lamports,          // Lamports
        space as u64,      // Space
        program_id,        // Owner program
    );
    invoke_signed(
        &create_state_ix,
        &[payer.clone(), manager_state.clone()],
        &[&[OFFER_MANAGER_SEED, &[state_bump]]],
    )?;

    let initial_state = OfferManagerState {
        is_initialized: true,
        next_offer_id: 0,
    };
    initial_state.serialize(&mut &mut manager_state.data.borrow_mut()[..])?;

    Ok(())
}
