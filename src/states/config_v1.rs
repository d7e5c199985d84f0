use bytemuck::{Pod, Zeroable};
use shank::ShankAccount;
use solana_program::{msg, program_error::ProgramError, pubkey::Pubkey};

use crate::utils::{check_metadata_text, StreetmintError, TRAIT_CATEGORY_COUNT};

pub const MAX_NAME_PREFIX_LEN: usize = 32;
pub const MAX_URI_LEN: usize = 128;
pub const MAX_DESCRIPTION_LEN: usize = 255;

/// Global configuration account for the collection.
///
/// Initialized once via `init_config_v1` and replaced wholesale by
/// `update_config_v1`. It governs:
/// - The per-category trait variant counts used by seed derivation
/// - The supply cap and the running mint counter
/// - The collection strings framing every rendered metadata document
///
/// Seeds already persisted in `MintedItemV1` accounts are never touched by a
/// configuration change; the config is only read at derivation and render
/// time.
///
/// PDA seed: `[program_id, "config_v1", admin]`
#[repr(C, packed)]
#[derive(Debug, Clone, Copy, Pod, Zeroable, ShankAccount)]
pub struct ConfigV1 {
    /// The authority that controls configuration updates.
    ///
    /// - Must match the signer in `update_config_v1`.
    pub admin: Pubkey,

    /// Number of available variants per trait category, in category order.
    ///
    /// - Every entry must be >= 1; a 0 makes index derivation undefined and
    ///   is rejected at write time and again at derivation time.
    /// - A change affects only subsequent mints, never stored seeds.
    pub trait_counts: [u32; 7],

    /// The absolute cap on items that can ever be minted.
    pub max_supply: u64,

    /// Current number of minted items.
    ///
    /// - Incremented with checked arithmetic on each successful mint.
    /// - The next item id is always `minted + 1`.
    pub minted: u64,

    /// Item name prefix; the rendered name is `<prefix> #<id>`.
    pub name_prefix: [u8; 32],
    pub name_prefix_len: u8,

    /// Base URI for item images; the rendered image is `<base><id>.png`.
    pub image_base_uri: [u8; 128],
    pub image_base_uri_len: u8,

    /// Collection description, emitted verbatim into every document.
    pub description: [u8; 255],
    pub description_len: u8,

    /// Collection website, emitted as `external_url`.
    pub external_url: [u8; 128],
    pub external_url_len: u8,
}

impl ConfigV1 {
    pub const LEN: usize = size_of::<Self>();
    pub const SEED: &[u8; 9] = b"config_v1";

    pub fn try_new(args: InitConfigArgs) -> Result<Self, ProgramError> {
        let mut config = Self::zeroed();
        config.admin = args.admin;
        config.minted = 0;
        config.apply(UpdateConfigArgs {
            trait_counts: args.trait_counts,
            max_supply: args.max_supply,
            name_prefix: args.name_prefix,
            image_base_uri: args.image_base_uri,
            description: args.description,
            external_url: args.external_url,
        })?;

        Ok(config)
    }

    /// Replaces the tunable configuration wholesale. The admin and the mint
    /// counter survive updates.
    pub fn apply(&mut self, args: UpdateConfigArgs) -> Result<(), ProgramError> {
        Self::check_trait_counts(&args.trait_counts)?;

        let (name_prefix, name_prefix_len) = encode_text::<MAX_NAME_PREFIX_LEN>(args.name_prefix)?;
        let (image_base_uri, image_base_uri_len) = encode_text::<MAX_URI_LEN>(args.image_base_uri)?;
        let (description, description_len) = encode_text::<MAX_DESCRIPTION_LEN>(args.description)?;
        let (external_url, external_url_len) = encode_text::<MAX_URI_LEN>(args.external_url)?;

        self.trait_counts = args.trait_counts;
        self.max_supply = args.max_supply;
        self.name_prefix = name_prefix;
        self.name_prefix_len = name_prefix_len;
        self.image_base_uri = image_base_uri;
        self.image_base_uri_len = image_base_uri_len;
        self.description = description;
        self.description_len = description_len;
        self.external_url = external_url;
        self.external_url_len = external_url_len;

        Ok(())
    }

    #[inline(always)]
    pub fn load(data: &[u8]) -> Result<&Self, ProgramError> {
        if data.len() < Self::LEN {
            msg!("Load config account data length wrong");
            return Err(ProgramError::InvalidAccountData);
        }

        bytemuck::try_from_bytes(&data[..Self::LEN]).map_err(|_| ProgramError::InvalidAccountData)
    }

    #[inline(always)]
    pub fn load_mut(data: &mut [u8]) -> Result<&mut Self, ProgramError> {
        if data.len() < Self::LEN {
            msg!("Load mut config account data length wrong");
            return Err(ProgramError::InvalidAccountData);
        }

        bytemuck::try_from_bytes_mut(&mut data[..Self::LEN])
            .map_err(|_| ProgramError::InvalidAccountData)
    }

    #[inline(always)]
    pub fn init(data: &mut [u8], config: &Self) -> Result<(), ProgramError> {
        if data.len() < Self::LEN {
            return Err(ProgramError::InvalidAccountData);
        }
        data[..Self::LEN].copy_from_slice(bytemuck::bytes_of(config));
        Ok(())
    }

    #[inline(always)]
    pub fn to_bytes(&self) -> Vec<u8> {
        bytemuck::bytes_of(self).to_vec()
    }
}

impl ConfigV1 {
    #[inline(always)]
    pub fn is_admin(&self, key: &Pubkey) -> bool {
        self.admin == *key
    }

    #[inline(always)]
    pub fn stock_available(&self) -> bool {
        self.minted < self.max_supply
    }

    #[inline(always)]
    pub fn next_item_id(&self) -> Result<u64, ProgramError> {
        self.minted
            .checked_add(1)
            .ok_or(ProgramError::InvalidAccountData)
    }

    #[inline(always)]
    pub fn increment_minted(&mut self) -> Result<(), ProgramError> {
        self.minted = self
            .minted
            .checked_add(1)
            .ok_or(ProgramError::InvalidAccountData)
            .inspect_err(|_| msg!("Unable to increment config.minted"))?;
        Ok(())
    }

    pub fn check_trait_counts(counts: &[u32; TRAIT_CATEGORY_COUNT]) -> Result<(), ProgramError> {
        for (category, &count) in counts.iter().enumerate() {
            if count == 0 {
                msg!("Trait count for category index {} must be >= 1", category);
                return Err(StreetmintError::InvalidTraitCount.into());
            }
        }

        Ok(())
    }

    pub fn name_prefix(&self) -> Result<String, ProgramError> {
        decode_text(&{ self.name_prefix }, self.name_prefix_len)
    }

    pub fn image_base_uri(&self) -> Result<String, ProgramError> {
        decode_text(&{ self.image_base_uri }, self.image_base_uri_len)
    }

    pub fn description(&self) -> Result<String, ProgramError> {
        decode_text(&{ self.description }, self.description_len)
    }

    pub fn external_url(&self) -> Result<String, ProgramError> {
        decode_text(&{ self.external_url }, self.external_url_len)
    }
}

fn encode_text<const N: usize>(text: &str) -> Result<([u8; N], u8), ProgramError> {
    check_metadata_text(text, N)?;

    let mut buf = [0u8; N];
    buf[..text.len()].copy_from_slice(text.as_bytes());
    Ok((buf, text.len() as u8))
}

fn decode_text(buf: &[u8], len: u8) -> Result<String, ProgramError> {
    let bytes = buf
        .get(..len as usize)
        .ok_or(ProgramError::InvalidAccountData)?;

    String::from_utf8(bytes.to_vec()).map_err(|_| ProgramError::InvalidAccountData)
}

pub struct InitConfigArgs<'a> {
    pub admin: Pubkey,
    pub trait_counts: [u32; TRAIT_CATEGORY_COUNT],
    pub max_supply: u64,
    pub name_prefix: &'a str,
    pub image_base_uri: &'a str,
    pub description: &'a str,
    pub external_url: &'a str,
}

pub struct UpdateConfigArgs<'a> {
    pub trait_counts: [u32; TRAIT_CATEGORY_COUNT],
    pub max_supply: u64,
    pub name_prefix: &'a str,
    pub image_base_uri: &'a str,
    pub description: &'a str,
    pub external_url: &'a str,
}
