use solana_program::{msg, program_error::ProgramError};

use crate::utils::{base64, StreetmintError};

/// Number of trait categories on every item. Fixed: category order decides
/// both the digest window assignment during derivation and the attribute
/// order in the rendered document.
pub const TRAIT_CATEGORY_COUNT: usize = 7;

/// Entries per name table. Growing a category past this is a table version
/// change, not an in-place resize.
pub const TRAIT_NAME_TABLE_LEN: usize = 8;

/// Scheme marker prepended to the base64-wrapped document.
pub const DATA_URI_PREFIX: &str = "data:application/json;base64,";

/// The fixed, ordered set of visual trait slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraitCategory {
    Shoes,
    Pants,
    Shirt,
    Hoodie,
    Face,
    Hair,
    Accessory,
}

impl TraitCategory {
    pub const ALL: [TraitCategory; TRAIT_CATEGORY_COUNT] = [
        TraitCategory::Shoes,
        TraitCategory::Pants,
        TraitCategory::Shirt,
        TraitCategory::Hoodie,
        TraitCategory::Face,
        TraitCategory::Hair,
        TraitCategory::Accessory,
    ];

    /// The `trait_type` label emitted for this category.
    pub fn label(&self) -> &'static str {
        match self {
            TraitCategory::Shoes => "Shoes",
            TraitCategory::Pants => "Pants",
            TraitCategory::Shirt => "Shirt",
            TraitCategory::Hoodie => "Hoodie",
            TraitCategory::Face => "Face",
            TraitCategory::Hair => "Hair",
            TraitCategory::Accessory => "Accessory",
        }
    }

    /// Version 1 name table for this category.
    pub fn names(&self) -> &'static [&'static str; TRAIT_NAME_TABLE_LEN] {
        match self {
            TraitCategory::Shoes => &[
                "High Tops",
                "Low Tops",
                "Runners",
                "Chucks",
                "Slides",
                "Boots",
                "Loafers",
                "Barefoot",
            ],
            TraitCategory::Pants => &[
                "Cargos",
                "Joggers",
                "Ripped Jeans",
                "Chinos",
                "Track Pants",
                "Shorts",
                "Carpenters",
                "Sweatpants",
            ],
            TraitCategory::Shirt => &[
                "White Tee",
                "Black Tee",
                "Graphic Tee",
                "Flannel",
                "Jersey",
                "Polo",
                "Long Sleeve",
                "Tank Top",
            ],
            TraitCategory::Hoodie => &[
                "None",
                "Grey Zip",
                "Black Pullover",
                "Tie-Dye",
                "Oversize",
                "Cropped",
                "Windbreaker",
                "Varsity",
            ],
            TraitCategory::Face => &[
                "Neutral",
                "Grin",
                "Smirk",
                "Shades",
                "Stoic",
                "Wink",
                "Beard",
                "Ski Mask",
            ],
            TraitCategory::Hair => &[
                "Buzz Cut",
                "Afro",
                "Dreads",
                "Mullet",
                "Curly",
                "Slick Back",
                "Beanie",
                "Bald",
            ],
            TraitCategory::Accessory => &[
                "None",
                "Gold Chain",
                "Backpack",
                "Watch",
                "Snapback",
                "Headphones",
                "Ring",
                "Skateboard",
            ],
        }
    }

    /// Resolves a stored seed index to its human-readable name.
    ///
    /// An index past the table end fails explicitly; it is never wrapped or
    /// clamped. A seed derived under an older, larger count can hit this.
    pub fn name(&self, index: u32) -> Result<&'static str, ProgramError> {
        self.names()
            .get(index as usize)
            .copied()
            .ok_or_else(|| {
                msg!(
                    "Trait index {} out of range for category {} (table holds {})",
                    index,
                    self.label(),
                    TRAIT_NAME_TABLE_LEN
                );
                StreetmintError::TraitIndexOutOfRange.into()
            })
    }
}

/// Collection strings that frame the per-item fields in the document.
#[derive(Debug)]
pub struct CollectionText<'a> {
    pub name_prefix: &'a str,
    pub description: &'a str,
    pub external_url: &'a str,
    pub image_base_uri: &'a str,
}

/// Rejects strings the document format cannot carry verbatim.
///
/// The document is assembled by exact byte concatenation, so collection
/// strings are constrained at write time instead of escaped at render time:
/// printable ASCII only, no `"` and no `\`.
pub fn check_metadata_text(text: &str, max_len: usize) -> Result<(), ProgramError> {
    if text.len() > max_len {
        msg!("Metadata text too long: {} bytes, max {}", text.len(), max_len);
        return Err(StreetmintError::InvalidMetadataText.into());
    }

    for byte in text.bytes() {
        if !(0x20..0x7f).contains(&byte) || byte == b'"' || byte == b'\\' {
            msg!("Metadata text contains unsupported byte 0x{:02x}", byte);
            return Err(StreetmintError::InvalidMetadataText.into());
        }
    }

    Ok(())
}

/// Renders the self-contained metadata document for one item.
///
/// The output is `data:application/json;base64,<BASE64(json)>` where the JSON
/// object carries exactly the keys `name`, `description`, `external_url`,
/// `image` and `attributes`, in that order, with no extraneous whitespace.
/// Marketplaces and indexers parse this byte-for-byte, so the assembly below
/// is deliberately explicit.
pub fn render_metadata(
    item_id: u64,
    seed: &[u32; TRAIT_CATEGORY_COUNT],
    text: &CollectionText,
) -> Result<String, ProgramError> {
    let id = item_id.to_string();

    let mut json = String::with_capacity(512);
    json.push_str("{\"name\":\"");
    json.push_str(text.name_prefix);
    json.push_str(" #");
    json.push_str(&id);
    json.push_str("\",\"description\":\"");
    json.push_str(text.description);
    json.push_str("\",\"external_url\":\"");
    json.push_str(text.external_url);
    json.push_str("\",\"image\":\"");
    json.push_str(text.image_base_uri);
    json.push_str(&id);
    json.push_str(".png\",\"attributes\":[");

    for (index, category) in TraitCategory::ALL.iter().enumerate() {
        let value = category.name(seed[index])?;
        if index > 0 {
            json.push(',');
        }
        json.push_str("{\"trait_type\":\"");
        json.push_str(category.label());
        json.push_str("\",\"value\":\"");
        json.push_str(value);
        json.push_str("\"}");
    }

    json.push_str("]}");

    let mut document = String::with_capacity(DATA_URI_PREFIX.len() + json.len().div_ceil(3) * 4);
    document.push_str(DATA_URI_PREFIX);
    document.push_str(&base64::encode(json.as_bytes()));

    Ok(document)
}
