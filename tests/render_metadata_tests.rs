use borsh::BorshSerialize;
use solana_program::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};
use solana_program_test::{processor, ProgramTest};
use solana_sdk::{
    account::Account,
    instruction::InstructionError,
    signature::Keypair,
    signer::Signer,
    transaction::{Transaction, TransactionError},
};
use streetmint::{
    instructions::{StreetmintInstruction, UpdateConfigV1InstructionData},
    process_instruction,
    states::{ConfigV1, InitConfigArgs, MintedItemV1},
    utils::{base64, StreetmintError, TraitCategory, DATA_URI_PREFIX},
};

const ITEM_ID: u64 = 42;
const ITEM_SEED: [u32; 7] = [0, 1, 2, 3, 4, 5, 6];

fn stored_config(admin: Pubkey) -> ConfigV1 {
    ConfigV1::try_new(InitConfigArgs {
        admin,
        trait_counts: [8, 8, 8, 8, 8, 8, 8],
        max_supply: 10_000,
        name_prefix: "Streetmint",
        image_base_uri: "https://img.streetmint.example/",
        description: "7 layers of deterministic streetwear.",
        external_url: "https://streetmint.example",
    })
    .expect("valid fixture config")
}

fn config_pda(admin: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(&[ConfigV1::SEED, admin.as_ref()], &streetmint::ID).0
}

fn item_pda(config_pda: &Pubkey, item_id: u64) -> Pubkey {
    Pubkey::find_program_address(
        &[
            MintedItemV1::SEED,
            config_pda.as_ref(),
            &item_id.to_le_bytes(),
        ],
        &streetmint::ID,
    )
    .0
}

fn program_test_with_item(
    admin: Pubkey,
    seed: [u32; 7],
) -> (ProgramTest, Pubkey, Pubkey) {
    let program_id = streetmint::ID;
    let config_pda = config_pda(&admin);
    let item_pda = item_pda(&config_pda, ITEM_ID);

    let mut program_test = ProgramTest::default();
    program_test.add_program("streetmint", program_id, processor!(process_instruction));

    let lamports = 1_000_000_000;

    program_test.add_account(
        config_pda,
        Account {
            lamports,
            data: stored_config(admin).to_bytes(),
            owner: program_id,
            executable: false,
            rent_epoch: 0,
        },
    );

    let item = MintedItemV1::new(Pubkey::new_unique(), ITEM_ID, 1_700_000_000, seed);
    program_test.add_account(
        item_pda,
        Account {
            lamports,
            data: item.to_bytes(),
            owner: program_id,
            executable: false,
            rent_epoch: 0,
        },
    );

    (program_test, config_pda, item_pda)
}

fn render_ix(config_pda: Pubkey, item_pda: Pubkey) -> Instruction {
    let data = StreetmintInstruction::RenderMetadataV1
        .try_to_vec()
        .expect("Failed to serialize ix data");

    Instruction {
        program_id: streetmint::ID,
        accounts: vec![
            AccountMeta::new_readonly(config_pda, false),
            AccountMeta::new_readonly(item_pda, false),
        ],
        data,
    }
}

#[tokio::test]
async fn test_render_metadata_document() {
    let admin = Pubkey::new_unique();
    let (program_test, config_pda, item_pda) = program_test_with_item(admin, ITEM_SEED);
    let (mut banks_client, bank_payer, recent_blockhash) = program_test.start().await;

    let tx = Transaction::new_signed_with_payer(
        &[render_ix(config_pda, item_pda)],
        Some(&bank_payer.pubkey()),
        &[&bank_payer],
        recent_blockhash,
    );

    let sim = banks_client
        .simulate_transaction(tx.clone())
        .await
        .expect("rpc failed");
    assert!(sim.result.expect("no result").is_ok(), "render failed");

    let details = sim.simulation_details.expect("no simulation details");
    let return_data = details.return_data.expect("no return data");
    assert_eq!(return_data.program_id, streetmint::ID);

    let document = String::from_utf8(return_data.data).expect("document is not utf-8");

    let encoded = document
        .strip_prefix(DATA_URI_PREFIX)
        .expect("missing data uri prefix");
    let json_bytes = base64::decode(encoded).expect("invalid base64 payload");
    let value: serde_json::Value =
        serde_json::from_slice(&json_bytes).expect("invalid json payload");

    let object = value.as_object().expect("not an object");
    assert_eq!(object.len(), 5);
    assert_eq!(object["name"], "Streetmint #42");
    assert_eq!(
        object["description"],
        "7 layers of deterministic streetwear."
    );
    assert_eq!(object["external_url"], "https://streetmint.example");
    assert_eq!(object["image"], "https://img.streetmint.example/42.png");

    let attributes = object["attributes"].as_array().expect("not an array");
    assert_eq!(attributes.len(), 7);
    for (index, category) in TraitCategory::ALL.iter().enumerate() {
        assert_eq!(attributes[index]["trait_type"], category.label());
        assert_eq!(
            attributes[index]["value"],
            category.names()[ITEM_SEED[index] as usize]
        );
    }

    // Rendering is idempotent: same stored state, same document.
    let again = banks_client
        .simulate_transaction(tx)
        .await
        .expect("rpc failed");
    let again_data = again
        .simulation_details
        .expect("no simulation details")
        .return_data
        .expect("no return data");
    assert_eq!(String::from_utf8(again_data.data).unwrap(), document);
}

#[tokio::test]
async fn test_render_metadata_not_found() {
    let admin = Pubkey::new_unique();
    let (program_test, config_pda, _) = program_test_with_item(admin, ITEM_SEED);
    let (mut banks_client, bank_payer, recent_blockhash) = program_test.start().await;

    // Item id 43 was never minted, so its PDA holds no data.
    let missing_item = item_pda(&config_pda, 43);

    let tx = Transaction::new_signed_with_payer(
        &[render_ix(config_pda, missing_item)],
        Some(&bank_payer.pubkey()),
        &[&bank_payer],
        recent_blockhash,
    );

    let err = banks_client.process_transaction(tx).await.unwrap_err();
    assert_eq!(
        err.unwrap(),
        TransactionError::InstructionError(
            0,
            InstructionError::Custom(StreetmintError::ItemNotFound as u32)
        )
    );
}

#[tokio::test]
async fn test_render_metadata_index_out_of_range() {
    let admin = Pubkey::new_unique();
    // Index 8 is one past the last valid name-table entry; a seed like this
    // can only exist if it was derived under an older, larger count.
    let mut seed = ITEM_SEED;
    seed[0] = 8;

    let (program_test, config_pda, item_pda) = program_test_with_item(admin, seed);
    let (mut banks_client, bank_payer, recent_blockhash) = program_test.start().await;

    let tx = Transaction::new_signed_with_payer(
        &[render_ix(config_pda, item_pda)],
        Some(&bank_payer.pubkey()),
        &[&bank_payer],
        recent_blockhash,
    );

    let err = banks_client.process_transaction(tx).await.unwrap_err();
    assert_eq!(
        err.unwrap(),
        TransactionError::InstructionError(
            0,
            InstructionError::Custom(StreetmintError::TraitIndexOutOfRange as u32)
        )
    );
}

#[tokio::test]
async fn test_config_update_never_rewrites_stored_seeds() {
    let program_id = streetmint::ID;

    let admin = Keypair::new();
    let admin_pubkey = admin.pubkey();

    let (mut program_test, config_pda, item_pda) =
        program_test_with_item(admin_pubkey, ITEM_SEED);

    program_test.add_account(
        admin_pubkey,
        Account {
            lamports: 1_000_000_000,
            data: vec![],
            owner: solana_program::system_program::id(),
            executable: false,
            rent_epoch: 0,
        },
    );

    let (mut banks_client, bank_payer, recent_blockhash) = program_test.start().await;

    let render_tx = Transaction::new_signed_with_payer(
        &[render_ix(config_pda, item_pda)],
        Some(&bank_payer.pubkey()),
        &[&bank_payer],
        recent_blockhash,
    );

    let before = banks_client
        .simulate_transaction(render_tx.clone())
        .await
        .expect("rpc failed")
        .simulation_details
        .expect("no simulation details")
        .return_data
        .expect("no return data")
        .data;

    // Shrink every trait count; the persisted seed must not change.
    let update = StreetmintInstruction::UpdateConfigV1(UpdateConfigV1InstructionData {
        trait_counts: [1, 1, 1, 1, 1, 1, 1],
        max_supply: 10_000,
        name_prefix: "Streetmint".to_string(),
        image_base_uri: "https://img.streetmint.example/".to_string(),
        description: "7 layers of deterministic streetwear.".to_string(),
        external_url: "https://streetmint.example".to_string(),
    })
    .try_to_vec()
    .expect("Failed to serialize ix data");

    let update_tx = Transaction::new_signed_with_payer(
        &[Instruction {
            program_id,
            accounts: vec![
                AccountMeta::new(admin_pubkey, true),
                AccountMeta::new(config_pda, false),
            ],
            data: update,
        }],
        Some(&admin_pubkey),
        &[&admin],
        recent_blockhash,
    );

    banks_client
        .process_transaction(update_tx)
        .await
        .expect("config update failed");

    let item_account = banks_client
        .get_account(item_pda)
        .await
        .expect("rpc failed")
        .expect("item account missing");
    let item = MintedItemV1::load(&item_account.data).expect("item does not parse");
    assert_eq!(item.seed(), ITEM_SEED);

    let after = banks_client
        .simulate_transaction(render_tx)
        .await
        .expect("rpc failed")
        .simulation_details
        .expect("no simulation details")
        .return_data
        .expect("no return data")
        .data;

    assert_eq!(before, after, "stored seed must render identically");
}
