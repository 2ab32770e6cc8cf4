// Copyright (C) 2015-2025 The Neo Project.
//
// confirmation_poller.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::ClientRpcError;
use crate::mint_error::{MintError, MintResult, Stage};
use crate::node_client::{InclusionStatus, NodeClient};
use neo_nft_config::{PollerSettings, ProtocolSettings};
use neo_nft_primitives::UInt256;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{sleep, Instant};
use tracing::{debug, info, warn};

/// Waits for a broadcast transaction to land in a block.
///
/// Attempts run one after another, each preceded by the interval, until the
/// attempt budget or the wall-clock timeout runs out. The last wait is cut
/// short so that no attempt starts after the deadline.
pub struct ConfirmationPoller<C> {
    client: Arc<C>,
    interval: Duration,
    max_attempts: u32,
    timeout: Duration,
}

impl<C: NodeClient> ConfirmationPoller<C> {
    pub fn new(client: Arc<C>, interval: Duration, max_attempts: u32, timeout: Duration) -> Self {
        Self {
            client,
            interval,
            max_attempts,
            timeout,
        }
    }

    pub fn from_settings(
        client: Arc<C>,
        poller: &PollerSettings,
        protocol: &ProtocolSettings,
    ) -> Self {
        Self::new(
            client,
            poller.interval(protocol),
            poller.max_attempts,
            poller.timeout(),
        )
    }

    /// Returns the hash of the block that includes `tx_hash`.
    pub async fn wait(&self, tx_hash: &UInt256) -> MintResult<UInt256> {
        let started = Instant::now();
        let mut attempts = 0;

        while attempts < self.max_attempts {
            let remaining = self.timeout.saturating_sub(started.elapsed());
            if remaining.is_zero() {
                break;
            }
            sleep(self.interval.min(remaining)).await;
            attempts += 1;

            match self.client.transaction_status(tx_hash).await {
                Ok(InclusionStatus::Included(block_hash)) => {
                    info!(target: "neo", tx = %tx_hash, block = %block_hash, attempts, "transaction confirmed");
                    return Ok(block_hash);
                }
                Ok(status) => {
                    debug!(target: "neo", tx = %tx_hash, attempt = attempts, ?status, "not yet included");
                }
                Err(err) if err.is_unknown_transaction() => {
                    debug!(target: "neo", tx = %tx_hash, attempt = attempts, "not yet known to the node");
                }
                Err(ClientRpcError::Server { message, .. }) => {
                    return Err(MintError::RejectedByNode {
                        stage: Stage::Confirm,
                        reason: message,
                    });
                }
                Err(err) => {
                    warn!(target: "neo", tx = %tx_hash, attempt = attempts, error = %err, "poll attempt failed");
                }
            }
        }

        Err(MintError::ConfirmationTimeout { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_node::TestNode;

    fn block() -> UInt256 {
        UInt256::from([0xB1; 32])
    }

    fn poller(node: &Arc<TestNode>, max_attempts: u32) -> ConfirmationPoller<TestNode> {
        ConfirmationPoller::new(
            node.clone(),
            Duration::from_secs(1),
            max_attempts,
            Duration::from_secs(3600),
        )
    }

    #[tokio::test(start_paused = true)]
    async fn returns_block_on_nth_attempt() {
        let node = Arc::new(TestNode::default());
        node.push_status(Ok(InclusionStatus::NotFound));
        node.push_status(Ok(InclusionStatus::Pending));
        node.push_status(Ok(InclusionStatus::NotFound));
        node.push_status(Ok(InclusionStatus::Included(block())));

        let found = poller(&node, 5).wait(&UInt256::zero()).await.unwrap();
        assert_eq!(found, block());
        assert_eq!(node.status_calls(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_after_exactly_max_attempts() {
        let node = Arc::new(TestNode::default());
        for _ in 0..5 {
            node.push_status(Ok(InclusionStatus::NotFound));
        }
        node.push_status(Ok(InclusionStatus::Included(block())));

        let err = poller(&node, 5).wait(&UInt256::zero()).await.unwrap_err();
        assert_eq!(err, MintError::ConfirmationTimeout { attempts: 5 });
        assert_eq!(node.status_calls(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn transient_errors_consume_attempts() {
        let node = Arc::new(TestNode::default());
        node.push_status(Err(ClientRpcError::Transport("refused".into())));
        node.push_status(Err(ClientRpcError::invalid_response("502 page")));
        node.push_status(Ok(InclusionStatus::Included(block())));

        assert_eq!(poller(&node, 3).wait(&UInt256::zero()).await.unwrap(), block());
        assert_eq!(node.status_calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn node_rejection_short_circuits() {
        let node = Arc::new(TestNode::default());
        node.push_status(Ok(InclusionStatus::Pending));
        node.push_status(Err(ClientRpcError::Server {
            code: -508,
            message: "Expired transaction".into(),
        }));
        node.push_status(Ok(InclusionStatus::Included(block())));

        let err = poller(&node, 10).wait(&UInt256::zero()).await.unwrap_err();
        assert_eq!(
            err,
            MintError::RejectedByNode {
                stage: Stage::Confirm,
                reason: "Expired transaction".into()
            }
        );
        assert_eq!(node.status_calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn wall_clock_timeout_wins_over_attempts() {
        let node = Arc::new(TestNode::default());
        let poller = ConfirmationPoller::new(
            node.clone(),
            Duration::from_secs(15),
            100,
            Duration::from_secs(70),
        );
        let started = Instant::now();
        let err = poller.wait(&UInt256::zero()).await.unwrap_err();
        assert_eq!(err, MintError::ConfirmationTimeout { attempts: 5 });
        assert_eq!(node.status_calls(), 5);
        assert!(started.elapsed() < Duration::from_secs(71));
    }

    #[tokio::test(start_paused = true)]
    async fn unknown_transaction_answers_keep_polling() {
        let node = Arc::new(TestNode::default());
        node.push_status(Err(ClientRpcError::Server {
            code: -103,
            message: "Unknown transaction".into(),
        }));
        node.push_status(Err(ClientRpcError::Server {
            code: -100,
            message: "Unknown transaction".into(),
        }));
        node.push_status(Ok(InclusionStatus::Included(block())));

        assert_eq!(poller(&node, 5).wait(&UInt256::zero()).await.unwrap(), block());
        assert_eq!(node.status_calls(), 3);
    }
}
