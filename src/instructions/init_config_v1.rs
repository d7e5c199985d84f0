use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, program_error::ProgramError,
    pubkey::Pubkey,
};

use crate::{
    states::{ConfigV1, InitConfigArgs},
    utils::{
        AccountCheck, InitPdaAccounts, InitPdaArgs, Pda, ProcessInstruction, SignerAccount,
        SystemAccount, UninitializedAccount, WritableAccount, TRAIT_CATEGORY_COUNT,
    },
};

#[derive(Debug)]
pub struct InitConfigV1Accounts<'a, 'info> {
    /// Authority that will control config updates. Pays for the PDA.
    /// Must be a signer.
    pub admin: &'a AccountInfo<'info>,

    /// PDA: `[program_id, "config_v1", admin]`. Stores `ConfigV1`.
    /// Must be uninitialized and writable.
    pub config_pda: &'a AccountInfo<'info>,

    /// System program, needed to create the PDA and fund rent.
    pub system_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> TryFrom<&'a [AccountInfo<'info>]> for InitConfigV1Accounts<'a, 'info> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo<'info>]) -> Result<Self, Self::Error> {
        let [admin, config_pda, system_program] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        SignerAccount::check(admin)?;
        WritableAccount::check(config_pda)?;
        UninitializedAccount::check(config_pda)?;
        SystemAccount::check(system_program)?;

        Ok(Self {
            admin,
            config_pda,
            system_program,
        })
    }
}

#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct InitConfigV1InstructionData {
    pub trait_counts: [u32; TRAIT_CATEGORY_COUNT],
    pub max_supply: u64,
    pub name_prefix: String,
    pub image_base_uri: String,
    pub description: String,
    pub external_url: String,
}

#[derive(Debug)]
pub struct InitConfigV1<'a, 'info> {
    pub accounts: InitConfigV1Accounts<'a, 'info>,
    pub instruction_data: InitConfigV1InstructionData,
    pub program_id: &'a Pubkey,
}

impl<'a, 'info>
    TryFrom<(
        &'a [AccountInfo<'info>],
        InitConfigV1InstructionData,
        &'a Pubkey,
    )> for InitConfigV1<'a, 'info>
{
    type Error = ProgramError;

    fn try_from(
        (accounts, instruction_data, program_id): (
            &'a [AccountInfo<'info>],
            InitConfigV1InstructionData,
            &'a Pubkey,
        ),
    ) -> Result<Self, Self::Error> {
        let accounts = InitConfigV1Accounts::try_from(accounts)?;

        Ok(Self {
            accounts,
            instruction_data,
            program_id,
        })
    }
}

impl<'a, 'info> ProcessInstruction for InitConfigV1<'a, 'info> {
    fn process(self) -> ProgramResult {
        let config = ConfigV1::try_new(InitConfigArgs {
            admin: *self.accounts.admin.key,
            trait_counts: self.instruction_data.trait_counts,
            max_supply: self.instruction_data.max_supply,
            name_prefix: &self.instruction_data.name_prefix,
            image_base_uri: &self.instruction_data.image_base_uri,
            description: &self.instruction_data.description,
            external_url: &self.instruction_data.external_url,
        })?;

        let seeds = &[ConfigV1::SEED.as_ref(), self.accounts.admin.key.as_ref()];

        Pda::new(
            InitPdaAccounts {
                payer: self.accounts.admin,
                pda: self.accounts.config_pda,
                system_program: self.accounts.system_program,
            },
            InitPdaArgs {
                seeds,
                space: ConfigV1::LEN,
                program_id: self.program_id,
            },
        )?
        .init()?;

        let mut data = self.accounts.config_pda.try_borrow_mut_data()?;
        ConfigV1::init(&mut data, &config)
    }
}
