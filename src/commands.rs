// Copyright (C) 2015-2025 The Neo Project.
//
// commands.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::args::{Cli, Command, MintArgs};
use anyhow::{Context, Result};
use neo_nft_config::ClientSettings;
use neo_nft_core::Contract;
use neo_nft_crypto::KeyPair;
use neo_nft_rpc_client::{ConfirmationPoller, MintError, NftApi, ResultDecoder, RpcClient};
use num_bigint::BigInt;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// Loads settings, connects to the node and runs the chosen command.
pub async fn run(cli: &Cli) -> Result<()> {
    let mut settings = ClientSettings::load(&cli.config)
        .with_context(|| format!("failed to load {}", cli.config.display()))?;
    cli.apply_overrides(&mut settings);
    settings.validate()?;

    let api = connect(&settings)?;
    info!(
        target: "neo",
        rpc = %settings.rpc.url,
        contract = %api.contract(),
        network = format!("{:#X}", settings.protocol.network),
        "client ready"
    );

    match &cli.command {
        Command::Mint(args) => mint(&api, args, settings.protocol.address_version).await,
        Command::Query { token_id } => print_properties(&api, token_id).await,
    }
}

fn connect(settings: &ClientSettings) -> Result<NftApi<RpcClient>> {
    let client = Arc::new(RpcClient::from_settings(settings)?);
    let poller =
        ConfirmationPoller::from_settings(client.clone(), &settings.poller, &settings.protocol);
    Ok(NftApi::new(
        client,
        settings.contract_hash()?,
        settings.protocol.clone(),
        poller,
    ))
}

async fn mint(api: &NftApi<RpcClient>, args: &MintArgs, address_version: u8) -> Result<()> {
    let key = KeyPair::from_wif(&args.wif).context("--wif is not a valid WIF key")?;
    let account = Contract::signature_script_hash(key.public_key());
    info!(target: "neo", account = %account.to_address(address_version), "minting");

    let ascii = read_ascii(&args.ascii_file)?;
    println!("{ascii}");

    let tx_hash = api.submit_mint(&key, &args.to_request(ascii)).await?;
    println!("Transaction {tx_hash} is broadcasted!");

    let receipt = api.confirm_mint(tx_hash).await?;
    println!("Transaction included in block {}", receipt.block_hash);
    println!("Minted nft #{}", receipt.token_id);

    print_properties(api, &receipt.token_id).await
}

async fn print_properties(api: &NftApi<RpcClient>, token_id: &BigInt) -> Result<()> {
    let entries = api.describe(token_id, &ResultDecoder::default()).await?;
    print!("{}", ResultDecoder::render(&entries));
    Ok(())
}

pub fn read_ascii(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// The line printed when a command fails. Pipeline failures name their stage.
pub fn diagnostic(err: &anyhow::Error) -> String {
    match err.downcast_ref::<MintError>() {
        Some(mint) => format!("{} failed: {mint}", mint.stage()),
        None => format!("error: {err:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use neo_nft_rpc_client::Stage;
    use std::io::Write;

    #[test]
    fn ascii_art_is_read_verbatim() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, " /\\_/\\\n( o.o )").unwrap();
        assert_eq!(read_ascii(file.path()).unwrap(), " /\\_/\\\n( o.o )");
    }

    #[test]
    fn missing_ascii_file_names_the_path() {
        let err = read_ascii(Path::new("does/not/exist.txt")).unwrap_err();
        assert!(diagnostic(&err).contains("does/not/exist.txt"));
    }

    #[test]
    fn pipeline_failures_carry_their_stage() {
        let err = anyhow::Error::new(MintError::ConfirmationTimeout { attempts: 3 });
        assert!(diagnostic(&err).starts_with("confirm failed: "));

        let err = anyhow::Error::new(MintError::RejectedByNode {
            stage: Stage::Broadcast,
            reason: "insufficient network fee".into(),
        });
        let line = diagnostic(&err);
        assert!(line.starts_with("broadcast failed: "));
        assert!(line.contains("insufficient network fee"));
    }
}
