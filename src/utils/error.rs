use solana_program::program_error::ProgramError;

/// Program-specific failure codes surfaced as `ProgramError::Custom`.
///
/// Every condition here stems from invalid configuration or invalid stored
/// state, never from a transient fault, so callers are expected to fix their
/// inputs instead of retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreetmintError {
    /// Mint requested while `minted == max_supply`.
    SupplySoldOut = 0,

    /// A configured trait count is 0 at derivation time.
    InvalidTraitCount = 1,

    /// A stored trait index is past the end of its name table.
    TraitIndexOutOfRange = 2,

    /// Metadata requested for an item id with no persisted seed.
    ItemNotFound = 3,

    /// A collection string is too long or contains bytes the metadata
    /// document cannot carry verbatim.
    InvalidMetadataText = 4,

    /// Mint supplied an item id other than `minted + 1`.
    IdentifierMismatch = 5,
}

impl From<StreetmintError> for ProgramError {
    fn from(error: StreetmintError) -> Self {
        ProgramError::Custom(error as u32)
    }
}
