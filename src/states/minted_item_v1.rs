use bytemuck::{Pod, Zeroable};
use shank::ShankAccount;
use solana_program::{msg, program_error::ProgramError, pubkey::Pubkey};

use crate::utils::TRAIT_CATEGORY_COUNT;

/// One minted item and its immutable trait seed.
///
/// Written exactly once, at mint time, and never mutated afterwards: a later
/// change to the trait counts does not revalidate or rewrite the stored seed.
///
/// PDA seed: `[program_id, "minted_item_v1", config, item_id]`
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, ShankAccount)]
pub struct MintedItemV1 {
    /// The wallet the item was minted to; one of the seed-derivation inputs.
    pub owner: Pubkey,

    /// Never-reused identifier, assigned sequentially from `config.minted`.
    pub item_id: u64,

    /// Unix timestamp that entered the derivation digest.
    pub minted_at: i64,

    /// Trait indices, one per category in category order. Each was reduced
    /// modulo the category's count configured at mint time.
    pub seed: [u32; 7],
}

impl MintedItemV1 {
    pub const LEN: usize = size_of::<Self>();
    pub const SEED: &[u8; 14] = b"minted_item_v1";

    pub fn new(
        owner: Pubkey,
        item_id: u64,
        minted_at: i64,
        seed: [u32; TRAIT_CATEGORY_COUNT],
    ) -> Self {
        Self {
            owner,
            item_id,
            minted_at,
            seed,
        }
    }

    #[inline(always)]
    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            msg!("Load minted item account data length wrong");
            return Err(ProgramError::InvalidAccountData);
        }

        bytemuck::try_from_bytes(&data[..Self::LEN]).map_err(|_| ProgramError::InvalidAccountData)
    }

    #[inline(always)]
    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN {
            msg!("Load mut minted item account data length wrong");
            return Err(ProgramError::InvalidAccountData);
        }

        bytemuck::try_from_bytes_mut(&mut data[..Self::LEN])
            .map_err(|_| ProgramError::InvalidAccountData)
    }

    #[inline(always)]
    pub fn init(data: &mut [u8], item: &Self) -> Result<(), ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        data[..Self::LEN].copy_from_slice(bytemuck::bytes_of(item));
        Ok(())
    }

    #[inline(always)]
    pub fn to_bytes(&self) -> Vec<u8> {
        bytemuck::bytes_of(self).to_vec()
    }

    #[inline(always)]
    pub fn seed(&self) -> [u32; TRAIT_CATEGORY_COUNT] {
        self.seed
    }
}
