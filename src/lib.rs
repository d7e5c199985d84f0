use borsh::BorshDeserialize;
use solana_program::{
    account_info::AccountInfo, declare_id, entrypoint, entrypoint::ProgramResult, msg,
    program_error::ProgramError, pubkey::Pubkey,
};

use crate::{
    instructions::{
        InitConfigV1, MintItemV1, RenderMetadataV1, StreetmintInstruction, UpdateConfigV1,
    },
    utils::ProcessInstruction,
};

pub mod instructions;
pub mod states;
pub mod utils;

declare_id!("Hcn8Y6LE5XoCZXU2qBBzeJKLK2faebb8armBvVECskaa");

entrypoint!(process_instruction);

pub fn process_instruction(
    program_id: &Pubkey,
    accounts: &[AccountInfo],
    instruction_data: &[u8],
) -> ProgramResult {
    let instruction = StreetmintInstruction::try_from_slice(instruction_data)
        .map_err(|_| ProgramError::InvalidInstructionData)?;

    match instruction {
        StreetmintInstruction::InitConfigV1(data) => {
            msg!("Instruction: InitConfig");
            InitConfigV1::try_from((accounts, data, program_id))?.process()
        }
        StreetmintInstruction::UpdateConfigV1(data) => {
            msg!("Instruction: UpdateConfig");
            UpdateConfigV1::try_from((accounts, data, program_id))?.process()
        }
        StreetmintInstruction::MintItemV1(data) => {
            msg!("Instruction: MintItem");
            MintItemV1::try_from((accounts, data, program_id))?.process()
        }
        StreetmintInstruction::RenderMetadataV1 => {
            msg!("Instruction: RenderMetadata");
            RenderMetadataV1::try_from((accounts, program_id))?.process()
        }
    }
}
