// Copyright (C) 2015-2025 The Neo Project.
//
// args.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use clap::{Args, Parser, Subcommand};
use neo_nft_config::{ClientSettings, NetworkType, DEFAULT_CONFIG_FILE};
use neo_nft_primitives::UInt160;
use neo_nft_rpc_client::{MintRequest, NftMetadata};
use num_bigint::BigInt;
use std::path::PathBuf;

/// Command-line arguments of the ASCII NFT client
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ascii-nft",
    version = env!("CARGO_PKG_VERSION"),
    about = "Mint and inspect ASCII-art NFTs on a Neo N3 network"
)]
pub struct Cli {
    /// Path to the TOML settings file.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE, value_name = "PATH", global = true)]
    pub config: PathBuf,

    /// Overrides the configured RPC endpoint.
    #[arg(long, value_name = "URL", global = true)]
    pub rpc: Option<String>,

    /// Overrides the configured NFT contract hash.
    #[arg(long, value_name = "HASH", global = true)]
    pub contract: Option<UInt160>,

    /// Overrides the network magic (mainnet, testnet).
    #[arg(long, value_name = "NETWORK", global = true)]
    pub network: Option<NetworkType>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Mint a token carrying the ASCII art of a file.
    Mint(MintArgs),

    /// Print the properties of a token.
    Query {
        #[arg(long, value_name = "N")]
        token_id: BigInt,
    },
}

#[derive(Args, Debug, Clone)]
pub struct MintArgs {
    /// WIF private key of the paying and receiving account.
    #[arg(long, env = "NEO_WIF", hide_env_values = true, value_name = "WIF")]
    pub wif: String,

    #[arg(long, default_value = "some")]
    pub name: String,

    #[arg(long, default_value = "Test description")]
    pub description: String,

    #[arg(long, default_value = "ipfs://example_ipfs_hash")]
    pub image: String,

    #[arg(long, default_value = "")]
    pub token_uri: String,

    /// Locked content stored with the token.
    #[arg(long, default_value = "something")]
    pub locked: String,

    #[arg(long, default_value = "")]
    pub royalties: String,

    /// File holding the ASCII art.
    #[arg(long, default_value = "ascii_image.txt", value_name = "PATH")]
    pub ascii_file: PathBuf,
}

impl MintArgs {
    pub fn to_request(&self, ascii: String) -> MintRequest {
        let metadata = NftMetadata {
            name: self.name.clone(),
            description: self.description.clone(),
            image: self.image.clone(),
            token_uri: self.token_uri.clone(),
        };
        let mut request = MintRequest::new(metadata, ascii);
        request.locked_content = self.locked.as_bytes().to_vec();
        request.royalties = self.royalties.as_bytes().to_vec();
        request
    }
}

impl Cli {
    /// Applies command-line overrides on top of the loaded settings.
    pub fn apply_overrides(&self, settings: &mut ClientSettings) {
        if let Some(url) = &self.rpc {
            settings.rpc.url = url.clone();
        }
        if let Some(hash) = self.contract {
            settings.contract.hash = Some(hash);
        }
        if let Some(network) = self.network {
            settings.protocol.network = network.magic();
        }
    }
}
