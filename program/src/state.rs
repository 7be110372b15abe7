use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;

/// Sentinel stored in `Offer::taker_token_address` when the taker pays in
/// the chain's native currency instead of a specific token mint.
pub const NATIVE_TOKEN_ADDRESS: Pubkey = Pubkey::new_from_array([0u8; 32]);

pub const OFFER_MANAGER_SEED: &[u8] = b"offer-manager";
pub const OFFER_SEED: &[u8] = b"offer";

#[derive(BorshSerialize, BorshDeserialize, Debug, Default)]
pub struct OfferManagerState {
    pub is_initialized: bool,
    pub next_offer_id: u64,
}

impl OfferManagerState {
    pub const LEN: usize = 1 + 8;

    /// Offer ids are allocated densely from 0, so every id below the
    /// counter references an existing offer.
    pub fn is_registered(&self, offer_id: u64) -> bool {
        offer_id < self.next_offer_id
    }
}

#[derive(BorshSerialize, BorshDeserialize, Debug)]
pub struct Offer {
    pub id: u64, // Sequential identifier, assigned at registration
    pub maker: Pubkey, // Party that registered the offer
    pub maker_intmax_address: [u8; 32], // Where the maker receives the payment proof
    pub maker_asset_id: [u8; 32], // Off-chain asset the maker is offering
    pub maker_amount: u64, // Quantity of the maker's asset
    pub taker: Pubkey, // Party allowed to activate the offer
    pub taker_intmax_address: [u8; 32], // Where the maker's asset should be delivered
    pub taker_token_address: Pubkey, // Payment mint, or the native-currency sentinel
    pub taker_amount: u64, // Exact payment the taker must deposit
    pub activated: bool, // Set once when the offer settles
}

impl Offer {
    pub const LEN: usize = 8 + 32 + 32 + 32 + 8 + 32 + 32 + 32 + 8 + 1;
}
