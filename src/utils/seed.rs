use sha2::{Digest, Sha256};
use solana_program::{msg, program_error::ProgramError, pubkey::Pubkey};

use crate::utils::{StreetmintError, TRAIT_CATEGORY_COUNT};

/// Derives the immutable trait seed for one minted item.
///
/// The inputs are combined order-sensitively into a single sha256 digest:
/// `item_id (LE) || minter || entropy || timestamp (LE)`. The digest is then
/// read as a big-endian 256-bit integer and partitioned into seven
/// non-overlapping 32-bit windows at bit offsets 0, 32, .., 192 (bit 0 being
/// the least significant), one window per trait category in category order.
/// Each window is reduced modulo that category's configured variant count.
///
/// Purely a function of its arguments: identical inputs always produce an
/// identical seed, so any client can re-derive and audit a stored seed.
pub fn derive_trait_seed(
    item_id: u64,
    minter: &Pubkey,
    entropy: &[u8; 32],
    timestamp: i64,
    counts: &[u32; TRAIT_CATEGORY_COUNT],
) -> Result<[u32; TRAIT_CATEGORY_COUNT], ProgramError> {
    for (category, &count) in counts.iter().enumerate() {
        if count == 0 {
            msg!("Trait count for category index {} is zero", category);
            return Err(StreetmintError::InvalidTraitCount.into());
        }
    }

    let mut hasher = Sha256::new();
    hasher.update(item_id.to_le_bytes());
    hasher.update(minter.as_ref());
    hasher.update(entropy);
    hasher.update(timestamp.to_le_bytes());
    let digest = hasher.finalize();

    let mut seed = [0u32; TRAIT_CATEGORY_COUNT];
    for (index, slot) in seed.iter_mut().enumerate() {
        // Window `index` covers bits [32 * index, 32 * index + 32) of the
        // digest counted from the least-significant end.
        let start = digest.len() - 4 * (index + 1);
        let mut window = [0u8; 4];
        window.copy_from_slice(&digest[start..start + 4]);
        *slot = u32::from_be_bytes(window) % counts[index];
    }

    Ok(seed)
}
