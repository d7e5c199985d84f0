use solana_program::{account_info::AccountInfo, clock::Epoch, pubkey::Pubkey};

use crate::utils::TRAIT_CATEGORY_COUNT;

pub fn mock_counts(value: u32) -> [u32; TRAIT_CATEGORY_COUNT] {
    [value; TRAIT_CATEGORY_COUNT]
}

pub fn mock_account(
    key: Pubkey,
    is_signer: bool,
    is_writable: bool,
    lamports: u64,
    data_len: usize,
    owner: Pubkey,
) -> AccountInfo<'static> {
    let lamports = Box::new(lamports);
    let data = vec![0u8; data_len].into_boxed_slice();
    let owner = Box::new(owner);

    AccountInfo::new(
        Box::leak(Box::new(key)),
        is_signer,
        is_writable,
        Box::leak(lamports),
        Box::leak(data),
        Box::leak(owner),
        false,
        Epoch::default(),
    )
}
