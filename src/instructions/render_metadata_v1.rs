use solana_program::{
    account_info::AccountInfo, entrypoint::ProgramResult, msg, program::set_return_data,
    program_error::ProgramError, pubkey::Pubkey,
};

use crate::{
    states::{ConfigV1, MintedItemV1},
    utils::{
        render_metadata, AccountCheck, CollectionText, ConfigAccount, MintedItemAccount, Pda,
        ProcessInstruction, StreetmintError,
    },
};

#[derive(Debug)]
pub struct RenderMetadataV1Accounts<'a, 'info> {
    /// PDA: `[program_id, "config_v1", admin]`. Read-only.
    pub config_pda: &'a AccountInfo<'info>,

    /// PDA: `[program_id, "minted_item_v1", config_pda, item_id]`. Read-only.
    /// An account that was never written by a mint is reported as not found
    /// before any rendering starts.
    pub item_pda: &'a AccountInfo<'info>,
}

impl<'a, 'info> TryFrom<&'a [AccountInfo<'info>]> for RenderMetadataV1Accounts<'a, 'info> {
    type Error = ProgramError;

    fn try_from(accounts: &'a [AccountInfo<'info>]) -> Result<Self, Self::Error> {
        let [config_pda, item_pda] = accounts else {
            return Err(ProgramError::NotEnoughAccountKeys);
        };

        ConfigAccount::check(config_pda)?;

        if item_pda.data_is_empty() {
            msg!("RenderMetadataV1: no item persisted at {}", item_pda.key);
            return Err(StreetmintError::ItemNotFound.into());
        }
        MintedItemAccount::check(item_pda)?;

        Ok(Self {
            config_pda,
            item_pda,
        })
    }
}

/// Read-only metadata render.
///
/// Produces the document fresh on every call and hands it back through
/// return data, so any number of readers can fetch it by simulation.
/// Identical stored state always yields an identical document.
#[derive(Debug)]
pub struct RenderMetadataV1<'a, 'info> {
    pub accounts: RenderMetadataV1Accounts<'a, 'info>,
    pub program_id: &'a Pubkey,
}

impl<'a, 'info> TryFrom<(&'a [AccountInfo<'info>], &'a Pubkey)> for RenderMetadataV1<'a, 'info> {
    type Error = ProgramError;

    fn try_from(
        (accounts, program_id): (&'a [AccountInfo<'info>], &'a Pubkey),
    ) -> Result<Self, Self::Error> {
        let accounts = RenderMetadataV1Accounts::try_from(accounts)?;

        Ok(Self {
            accounts,
            program_id,
        })
    }
}

impl<'a, 'info> ProcessInstruction for RenderMetadataV1<'a, 'info> {
    fn process(self) -> ProgramResult {
        let config_data = self.accounts.config_pda.try_borrow_data()?;
        let config = ConfigV1::load(&config_data)?;

        let item_data = self.accounts.item_pda.try_borrow_data()?;
        let item = MintedItemV1::load(&item_data)?;

        let item_id = item.item_id;
        let item_id_bytes = item_id.to_le_bytes();
        Pda::validate(
            self.accounts.item_pda,
            &[
                MintedItemV1::SEED,
                self.accounts.config_pda.key.as_ref(),
                item_id_bytes.as_ref(),
            ],
            self.program_id,
        )?;

        let name_prefix = config.name_prefix()?;
        let description = config.description()?;
        let external_url = config.external_url()?;
        let image_base_uri = config.image_base_uri()?;

        let document = render_metadata(
            item_id,
            &item.seed(),
            &CollectionText {
                name_prefix: &name_prefix,
                description: &description,
                external_url: &external_url,
                image_base_uri: &image_base_uri,
            },
        )?;

        set_return_data(document.as_bytes());
        msg!("RenderMetadataV1: {}", document);

        Ok(())
    }
}
