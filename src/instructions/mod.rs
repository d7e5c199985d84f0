mod init_config_v1;
mod mint_item_v1;
mod render_metadata_v1;
mod update_config_v1;

pub use init_config_v1::*;
pub use mint_item_v1::*;
pub use render_metadata_v1::*;
pub use update_config_v1::*;

use borsh::{BorshDeserialize, BorshSerialize};

#[derive(Debug, Clone, BorshSerialize, BorshDeserialize)]
pub enum StreetmintInstruction {
    InitConfigV1(InitConfigV1InstructionData),
    UpdateConfigV1(UpdateConfigV1InstructionData),
    MintItemV1(MintItemV1InstructionData),
    RenderMetadataV1,
}
