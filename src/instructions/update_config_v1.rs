use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    states::{ConfigV1, UpdateConfigArgs},
    utils::{
        AccountCheck, ConfigAccount, Pda, ProcessInstruction, SignerAccount, WritableAccount,
        TRAIT_CATEGORY_COUNT,
    },
};

#[derive(Debug)]
pub struct UpdateConfigV1Accounts<'a, 'info> {
    /// The stored config admin. Must be a signer.
    pub admin: &'a AccountInfo<'info>,

    /// PDA: `[program_id, "config_v1", admin]`. Stores `ConfigV1`.
    /// Must be writable, owned by this program.
    pub config_pda: &'a AccountInfo<'info>,
}

impl<'a, 'info> TryFrom<&'a [AccountInfo<'info>]> for UpdateConfigV1Accounts<'a, 'info> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo<'info>]) -> Result<Self, Self::Error> {
        let [admin, config_pda] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        SignerAccount::check(admin)?;
        WritableAccount::check(config_pda)?;
        ConfigAccount::check(config_pda)?;

        Ok(Self { admin, config_pda })
    }
}

/// Wholesale replacement of the tunable configuration: trait counts, supply
/// cap and every collection string. Items minted before the update keep the
/// seeds they were derived with.
#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct UpdateConfigV1InstructionData {
    pub trait_counts: [u32; TRAIT_CATEGORY_COUNT],
    pub max_supply: u64,
    pub name_prefix: String,
    pub image_base_uri: String,
    pub description: String,
    pub external_url: String,
}

#[derive(Debug)]
pub struct UpdateConfigV1<'a, 'info> {
    pub accounts: UpdateConfigV1Accounts<'a, 'info>,
    pub instruction_data: UpdateConfigV1InstructionData,
    pub program_id: &'a Pubkey,
}

impl<'a, 'info>
    TryFrom<(
        &'a [AccountInfo<'info>],
        UpdateConfigV1InstructionData,
        &'a Pubkey,
    )> for UpdateConfigV1<'a, 'info>
{
    type Error = ProgramError;

    fn try_from(
        (accounts, instruction_data, program_id): (
            &'a [AccountInfo<'info>],
            UpdateConfigV1InstructionData,
            &'a Pubkey,
        ),
    ) -> Result<Self, Self::Error> {
        let accounts = UpdateConfigV1Accounts::try_from(accounts)?;

        Pda::validate(
            accounts.config_pda,
            &[ConfigV1::SEED, accounts.admin.key.as_ref()],
            program_id,
        )?;

        Ok(Self {
            accounts,
            instruction_data,
            program_id,
        })
    }
}

impl<'a, 'info> ProcessInstruction for UpdateConfigV1<'a, 'info> {
    fn process(self) -> ProgramResult {
        let mut data = self.accounts.config_pda.try_borrow_mut_data()?;
        let config = ConfigV1::load_mut(&mut data)?;

        if !config.is_admin(self.accounts.admin.key) {
            msg!("UpdateConfigV1: signer is not the config admin");
            return Err(ProgramError::IncorrectAuthority);
        }

        config.apply(UpdateConfigArgs {
            trait_counts: self.instruction_data.trait_counts,
            max_supply: self.instruction_data.max_supply,
            name_prefix: &self.instruction_data.name_prefix,
            image_base_uri: &self.instruction_data.image_base_uri,
            description: &self.instruction_data.description,
            external_url: &self.instruction_data.external_url,
        })
    }
}
