use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    system_program,
};

use crate::states::{ConfigV1, MintedItemV1};

pub trait AccountCheck {
    fn check<'info>(account: &AccountInfo<'info>) -> ProgramResult;
}

pub struct SignerAccount;

impl AccountCheck for SignerAccount {
    fn check<'info>(account: &AccountInfo<'info>) -> ProgramResult {
        if !account.is_signer {
            msg!("SignerAccount: account {} must be a signer", account.key);
            return Err(ProgramError::MissingRequiredSignature);
        }

        Ok(())
    }
}

pub struct WritableAccount;

impl AccountCheck for WritableAccount {
    fn check<'info>(account: &AccountInfo<'info>) -> ProgramResult {
        if !account.is_writable {
            msg!("WritableAccount: account {} must be writable", account.key);
            return Err(ProgramError::InvalidAccountData);
        }

        Ok(())
    }
}

pub struct UninitializedAccount;

impl AccountCheck for UninitializedAccount {
    fn check<'info>(account: &AccountInfo<'info>) -> ProgramResult {
        if account.lamports() != 0 || !account.data_is_empty() {
            msg!(
                "UninitializedAccount: account {} is already initialized",
                account.key
            );
            return Err(ProgramError::AccountAlreadyInitialized);
        }

        Ok(())
    }
}

pub struct SystemAccount;

impl AccountCheck for SystemAccount {
    fn check<'info>(account: &AccountInfo<'info>) -> ProgramResult {
        if account.key != &system_program::ID {
            msg!(
                "SystemAccount: account {} is not the system program",
                account.key
            );
            return Err(ProgramError::IncorrectProgramId);
        }

        Ok(())
    }
}

pub struct ConfigAccount;

impl AccountCheck for ConfigAccount {
    fn check<'info>(account: &AccountInfo<'info>) -> ProgramResult {
        if account.owner != &crate::ID {
            msg!(
                "ConfigAccount: invalid owner {} (expected program {})",
                account.owner,
                crate::ID
            );
            return Err(ProgramError::InvalidAccountOwner);
        }

        if account.data_len() != ConfigV1::LEN {
            msg!(
                "ConfigAccount: invalid data length (expected {}, found {}) for account {}",
                ConfigV1::LEN,
                account.data_len(),
                account.key
            );
            return Err(ProgramError::InvalidAccountData);
        }

        Ok(())
    }
}

pub struct MintedItemAccount;

impl AccountCheck for MintedItemAccount {
    fn check<'info>(account: &AccountInfo<'info>) -> ProgramResult {
        if account.owner != &crate::ID {
            msg!(
                "MintedItemAccount: invalid owner {} (expected program {})",
                account.owner,
                crate::ID
            );
            return Err(ProgramError::InvalidAccountOwner);
        }

        if account.data_len() != MintedItemV1::LEN {
            msg!(
                "MintedItemAccount: invalid data length (expected {}, found {}) for account {}",
                MintedItemV1::LEN,
                account.data_len(),
                account.key
            );
            return Err(ProgramError::InvalidAccountData);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::mock::mock_account;
    use solana_program::pubkey::Pubkey;

    const WRONG_PROGRAM_ID: Pubkey = Pubkey::new_from_array([2u8; 32]);

    fn mock_account_info(
        is_signer: bool,
        is_writable: bool,
        owner: Pubkey,
        data_len: usize,
    ) -> AccountInfo<'static> {
        mock_account(
            Pubkey::new_unique(),
            is_signer,
            is_writable,
            1,
            data_len,
            owner,
        )
    }

    #[test]
    fn test_signer_account() {
        let acc = mock_account_info(true, false, Pubkey::new_unique(), 0);
        assert!(SignerAccount::check(&acc).is_ok());

        let acc = mock_account_info(false, false, Pubkey::new_unique(), 0);
        assert_eq!(
            SignerAccount::check(&acc).unwrap_err(),
            ProgramError::MissingRequiredSignature
        );
    }

    #[test]
    fn test_writable_account() {
        let acc = mock_account_info(false, true, Pubkey::new_unique(), 0);
        assert!(WritableAccount::check(&acc).is_ok());

        let acc = mock_account_info(false, false, Pubkey::new_unique(), 10);
        assert_eq!(
            WritableAccount::check(&acc).unwrap_err(),
            ProgramError::InvalidAccountData
        );
    }

    #[test]
    fn test_uninitialized_account() {
        let acc = mock_account(Pubkey::new_unique(), false, true, 0, 0, Pubkey::new_unique());
        assert!(UninitializedAccount::check(&acc).is_ok());

        let acc = mock_account_info(false, false, Pubkey::new_unique(), 10);
        assert_eq!(
            UninitializedAccount::check(&acc).unwrap_err(),
            ProgramError::AccountAlreadyInitialized
        );
    }

    #[test]
    fn test_system_account() {
        let acc = mock_account(system_program::ID, false, false, 1, 0, Pubkey::default());
        assert!(SystemAccount::check(&acc).is_ok());

        let acc = mock_account_info(false, false, Pubkey::default(), 0);
        assert_eq!(
            SystemAccount::check(&acc).unwrap_err(),
            ProgramError::IncorrectProgramId
        );
    }

    #[test]
    fn test_config_account() {
        let acc = mock_account_info(false, false, crate::ID, ConfigV1::LEN);
        assert!(ConfigAccount::check(&acc).is_ok());

        let acc = mock_account_info(false, false, crate::ID, ConfigV1::LEN + 1);
        assert_eq!(
            ConfigAccount::check(&acc).unwrap_err(),
            ProgramError::InvalidAccountData
        );

        let acc = mock_account_info(false, false, WRONG_PROGRAM_ID, ConfigV1::LEN);
        assert_eq!(
            ConfigAccount::check(&acc).unwrap_err(),
            ProgramError::InvalidAccountOwner
        );
    }

    #[test]
    fn test_minted_item_account() {
        let acc = mock_account_info(false, false, crate::ID, MintedItemV1::LEN);
        assert!(MintedItemAccount::check(&acc).is_ok());

        let acc = mock_account_info(false, false, crate::ID, MintedItemV1::LEN - 1);
        assert_eq!(
            MintedItemAccount::check(&acc).unwrap_err(),
            ProgramError::InvalidAccountData
        );

        let acc = mock_account_info(false, false, WRONG_PROGRAM_ID, MintedItemV1::LEN);
        assert_eq!(
            MintedItemAccount::check(&acc).unwrap_err(),
            ProgramError::InvalidAccountOwner
        );
    }
}
