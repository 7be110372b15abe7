use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{account_info::AccountInfo, entrypoint::ProgramResult, pubkey::Pubkey};

use crate::error::OfferError;
use crate::instructions;

#[derive(Debug, BorshSerialize, BorshDeserialize)]
pub enum OfferInstruction {
    /// One-time ledger setup. Creates the manager state account with the
    /// offer counter at zero.
    Initialize,
    /// Registers a new offer owned by the signing maker and assigns it the
    /// next sequential id.
    Register {
        maker_intmax_address: [u8; 32],
        maker_asset_id: [u8; 32],
        maker_amount: u64,
        taker: Pubkey,
        taker_intmax_address: [u8; 32],
        taker_token_address: Pubkey,
        taker_amount: u64,
    },
    /// Maker-only reassignment of the taker's off-chain destination, valid
    /// until the offer activates.
    UpdateTaker {
        offer_id: u64,
        new_taker_intmax_address: [u8; 32],
    },
    /// Taker-only settlement. `payment_amount` is deposited into ledger
    /// custody within the same instruction and must exactly equal the
    /// offer's `taker_amount`.
    Activate { offer_id: u64, payment_amount: u64 },
}

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instr = OfferInstruction::try_from_slice(instruction_data)
        .map_err(|_| OfferError::InvalidInstruction)?;

    match instr {
        OfferInstruction::Initialize => instructions::initialize(program_id, accounts),
        OfferInstruction::Register {
            maker_intmax_address,
            maker_asset_id,
            maker_amount,
            taker,
            taker_intmax_address,
            taker_token_address,
            taker_amount,
        } => instructions::register(
            program_id,
            accounts,
            maker_intmax_address,
            maker_asset_id,
            maker_amount,
            taker,
            taker_intmax_address,
            taker_token_address,
            taker_amount,
        ),
        OfferInstruction::UpdateTaker {
            offer_id,
            new_taker_intmax_address,
        } => instructions::update_taker(program_id, accounts, offer_id, new_taker_intmax_address),
        OfferInstruction::Activate {
            offer_id,
            payment_amount,
        } => instructions::activate(program_id, accounts, offer_id, payment_amount),
    }
}
