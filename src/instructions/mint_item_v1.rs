use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::{
    account_info::AccountInfo, clock::Clock, entrypoint::ProgramResult, msg,
    program_error::ProgramError, pubkey::Pubkey, sysvar::Sysvar,
};

use crate::{
    states::{ConfigV1, MintedItemV1},
    utils::{
        derive_trait_seed, AccountCheck, ConfigAccount, InitPdaAccounts, InitPdaArgs, Pda,
        ProcessInstruction, SignerAccount, StreetmintError, SystemAccount, UninitializedAccount,
        WritableAccount,
    },
};

#[derive(Debug)]
pub struct MintItemV1Accounts<'a, 'info> {
    /// Wallet minting the item; its key enters the seed derivation.
    /// Must be a signer, pays for the item PDA.
    pub payer: &'a AccountInfo<'info>,

    /// PDA: `[program_id, "config_v1", admin]`. Stores `ConfigV1`.
    /// Must be writable (mint counter), owned by this program.
    pub config_pda: &'a AccountInfo<'info>,

    /// PDA: `[program_id, "minted_item_v1", config_pda, item_id]`. Stores
    /// `MintedItemV1`. Must be uninitialized and writable.
    pub item_pda: &'a AccountInfo<'info>,

    /// System program, needed to create the PDA and fund rent.
    pub system_program: &'a AccountInfo<'info>,
}

impl<'a, 'info> TryFrom<&'a [AccountInfo<'info>]> for MintItemV1Accounts<'a, 'info> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo<'info>]) -> Result<Self, Self::Error> {
        let [payer, config_pda, item_pda, system_program] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        SignerAccount::check(payer)?;
        WritableAccount::check(config_pda)?;
        WritableAccount::check(item_pda)?;
        UninitializedAccount::check(item_pda)?;
        ConfigAccount::check(config_pda)?;
        SystemAccount::check(system_program)?;

        Ok(Self {
            payer,
            config_pda,
            item_pda,
            system_program,
        })
    }
}

#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub struct MintItemV1InstructionData {
    /// The identifier the client expects for this mint. Must be exactly
    /// `config.minted + 1`; it is part of the item PDA seeds, so the client
    /// derives the PDA from it ahead of time.
    pub item_id: u64,

    /// Opaque entropy combined into the derivation digest. A deployment that
    /// needs front-running resistance should source this from a randomness
    /// beacon; the program only requires determinism given all inputs.
    pub entropy: [u8; 32],
}

#[derive(Debug)]
pub struct MintItemV1<'a, 'info> {
    pub accounts: MintItemV1Accounts<'a, 'info>,
    pub instruction_data: MintItemV1InstructionData,
    pub program_id: &'a Pubkey,
}

impl<'a, 'info>
    TryFrom<(
        &'a [AccountInfo<'info>],
        MintItemV1InstructionData,
        &'a Pubkey,
    )> for MintItemV1<'a, 'info>
{
    type Error = ProgramError;

    fn try_from(
        (accounts, instruction_data, program_id): (
            &'a [AccountInfo<'info>],
            MintItemV1InstructionData,
            &'a Pubkey,
        ),
    ) -> Result<Self, Self::Error> {
        let accounts = MintItemV1Accounts::try_from(accounts)?;

        Ok(Self {
            accounts,
            instruction_data,
            program_id,
        })
    }
}

impl<'a, 'info> MintItemV1<'a, 'info> {
    fn check_mint_eligibility(&self, config: &ConfigV1) -> ProgramResult {
        let max_supply = config.max_supply;
        let minted = config.minted;

        if !config.stock_available() {
            msg!(
                "All items are minted. Allowed supply: {}. Minted: {}",
                max_supply,
                minted
            );
            return Err(StreetmintError::SupplySoldOut.into());
        }

        let expected = config.next_item_id()?;
        if self.instruction_data.item_id != expected {
            msg!(
                "Expected item id {}, instruction carries {}",
                expected,
                self.instruction_data.item_id
            );
            return Err(StreetmintError::IdentifierMismatch.into());
        }

        Ok(())
    }

    fn persist_item(&self, item: &MintedItemV1) -> ProgramResult {
        let item_id_bytes = self.instruction_data.item_id.to_le_bytes();
        let seeds = &[
            MintedItemV1::SEED.as_ref(),
            self.accounts.config_pda.key.as_ref(),
            item_id_bytes.as_ref(),
        ];

        Pda::new(
            InitPdaAccounts {
                payer: self.accounts.payer,
                pda: self.accounts.item_pda,
                system_program: self.accounts.system_program,
            },
            InitPdaArgs {
                seeds,
                space: MintedItemV1::LEN,
                program_id: self.program_id,
            },
        )?
        .init()?;

        let mut data = self.accounts.item_pda.try_borrow_mut_data()?;
        MintedItemV1::init(&mut data, item)
    }
}

impl<'a, 'info> ProcessInstruction for MintItemV1<'a, 'info> {
    fn process(self) -> ProgramResult {
        let mut config_data = self.accounts.config_pda.try_borrow_mut_data()?;
        let config = ConfigV1::load_mut(&mut config_data)?;

        self.check_mint_eligibility(config)?;

        let counts = config.trait_counts;
        let now = Clock::get()?.unix_timestamp;

        let seed = derive_trait_seed(
            self.instruction_data.item_id,
            self.accounts.payer.key,
            &self.instruction_data.entropy,
            now,
            &counts,
        )?;

        let item = MintedItemV1::new(
            *self.accounts.payer.key,
            self.instruction_data.item_id,
            now,
            seed,
        );

        self.persist_item(&item)?;
        config.increment_minted()?;

        msg!(
            "MintItemV1: minted item {} for {}",
            self.instruction_data.item_id,
            self.accounts.payer.key
        );

        Ok(())
    }
}
