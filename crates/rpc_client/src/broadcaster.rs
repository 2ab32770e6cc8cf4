// Copyright (C) 2015-2025 The Neo Project.
//
// broadcaster.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::ClientRpcError;
use crate::mint_error::{MintError, MintResult, Stage};
use crate::node_client::NodeClient;
use neo_nft_core::Transaction;
use neo_nft_io::SerializableExt;
use neo_nft_primitives::UInt256;
use std::sync::Arc;
use tracing::{info, warn};

/// Relays witnessed transactions. One attempt per call, no retries.
pub struct Broadcaster<C> {
    client: Arc<C>,
}

impl<C: NodeClient> Broadcaster<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Sends `tx` and returns its hash.
    ///
    /// The hash is computed locally from the transaction content, so
    /// sending the same transaction again yields the same hash.
    pub async fn broadcast(&self, tx: &Transaction) -> MintResult<UInt256> {
        if !tx.is_fully_witnessed() {
            return Err(MintError::MissingSignerKey(
                *tx.signers().sender().account(),
            ));
        }
        let hash = tx
            .hash()
            .map_err(|e| MintError::encoding(Stage::Broadcast, e))?;
        let bytes = tx
            .to_array()
            .map_err(|e| MintError::encoding(Stage::Broadcast, e))?;

        match self.client.send_raw_transaction(&bytes).await {
            Ok(reported) => {
                if reported != hash {
                    warn!(target: "neo", local = %hash, node = %reported, "node reported a different transaction hash");
                }
                info!(target: "neo", tx = %hash, size = bytes.len(), "transaction broadcasted");
                Ok(hash)
            }
            Err(ClientRpcError::Server { message, .. }) => Err(MintError::RejectedByNode {
                stage: Stage::Broadcast,
                reason: message,
            }),
            Err(err) => Err(MintError::TransmissionFailed(err)),
        }
    }
}
