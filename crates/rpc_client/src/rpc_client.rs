// Copyright (C) 2015-2025 The Neo Project.
//
// rpc_client.rs file belongs to the neo project and is free
// software distributed under the MIT software license, see the
// accompanying file LICENSE in the main directory of the
// repository or http://www.opensource.org/licenses/mit-license.php
// for more details.
//
// Redistribution and use in source and binary forms with or without
// modifications are permitted.

use crate::error::{ClientRpcError, RpcResult};
use crate::models::{
    RpcApplicationLog, RpcInvokeResult, RpcRequest, RpcResponse, RpcTransaction,
};
use base64::{engine::general_purpose, Engine as _};
use neo_nft_config::ClientSettings;
use neo_nft_core::Signer;
use neo_nft_primitives::{UInt160, UInt256};
use neo_nft_vm::ContractParameter;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, trace};
use url::Url;

/// Builds an [`RpcClient`].
#[derive(Debug, Clone)]
pub struct RpcClientBuilder {
    url: Url,
    credentials: Option<(String, String)>,
    timeout: Option<Duration>,
}

impl RpcClientBuilder {
    pub fn basic_auth(mut self, user: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some((user.into(), password.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> RpcResult<RpcClient> {
        let mut headers = HeaderMap::new();
        if let Some((user, password)) = self.credentials {
            let encoded = general_purpose::STANDARD.encode(format!("{user}:{password}"));
            let value = HeaderValue::from_str(&format!("Basic {encoded}"))
                .map_err(|e| ClientRpcError::Transport(format!("invalid credentials: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(RpcClient {
            base_address: self.url,
            http_client: builder.build()?,
        })
    }
}

/// JSON-RPC client of a Neo N3 node.
#[derive(Debug, Clone)]
pub struct RpcClient {
    base_address: Url,
    http_client: Client,
}

impl RpcClient {
    pub fn builder(url: Url) -> RpcClientBuilder {
        RpcClientBuilder {
            url,
            credentials: None,
            timeout: None,
        }
    }

    /// Client for the endpoint, credentials and timeout in `settings`.
    pub fn from_settings(settings: &ClientSettings) -> RpcResult<Self> {
        let url = settings
            .rpc_url()
            .map_err(|e| ClientRpcError::Transport(e.to_string()))?;
        let mut builder = Self::builder(url).timeout(settings.rpc_timeout());
        if let Some(user) = &settings.rpc.user {
            builder = builder.basic_auth(user, settings.rpc.password.clone().unwrap_or_default());
        }
        builder.build()
    }

    pub fn url(&self) -> &Url {
        &self.base_address
    }

    fn as_rpc_response(content: &str) -> RpcResult<Value> {
        let response: RpcResponse = serde_json::from_str(content)
            .map_err(|e| ClientRpcError::invalid_response(format!("Parse error: {e}")))?;

        if let Some(error) = response.error {
            return Err(ClientRpcError::Server {
                code: error.code,
                message: error.message,
            });
        }

        response
            .result
            .ok_or_else(|| ClientRpcError::invalid_response("No result returned"))
    }

    /// Sends one request and returns its `result`.
    pub async fn rpc_send_async(&self, method: &str, params: Vec<Value>) -> RpcResult<Value> {
        let request = RpcRequest::new(method, params);
        debug!(target: "neo", method, url = %self.base_address, "rpc request");

        let response = self
            .http_client
            .post(self.base_address.clone())
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let content = response
            .text()
            .await
            .map_err(|e| ClientRpcError::Transport(format!("Failed to read response: {e}")))?;
        trace!(target: "neo", method, %status, body = %content, "rpc response");

        // Nodes answer JSON-RPC errors with 200; anything else that is not
        // a JSON-RPC body is a transport failure.
        match Self::as_rpc_response(&content) {
            Err(ClientRpcError::InvalidResponse(_)) if !status.is_success() => {
                Err(ClientRpcError::Transport(format!("HTTP status {status}")))
            }
            other => other,
        }
    }

    /// `invokescript`: runs a script read-only, optionally in the context of
    /// signers.
    pub async fn invoke_script(
        &self,
        script: &[u8],
        signers: &[Signer],
    ) -> RpcResult<RpcInvokeResult> {
        let mut params = vec![Value::String(general_purpose::STANDARD.encode(script))];
        if !signers.is_empty() {
            params.push(signers_json(signers));
        }
        let result = self.rpc_send_async("invokescript", params).await?;
        RpcInvokeResult::from_json(&result).map_err(ClientRpcError::InvalidResponse)
    }

    /// `invokefunction`: calls one contract method read-only.
    pub async fn invoke_function(
        &self,
        contract: &UInt160,
        method: &str,
        args: &[ContractParameter],
        signers: &[Signer],
    ) -> RpcResult<RpcInvokeResult> {
        let mut params = vec![
            Value::String(contract.to_string()),
            Value::String(method.to_string()),
            Value::Array(args.iter().map(ContractParameter::to_json).collect()),
        ];
        if !signers.is_empty() {
            params.push(signers_json(signers));
        }
        let result = self.rpc_send_async("invokefunction", params).await?;
        RpcInvokeResult::from_json(&result).map_err(ClientRpcError::InvalidResponse)
    }

    /// `getblockcount`: height of the tip plus one.
    pub async fn get_block_count(&self) -> RpcResult<u32> {
        let result = self.rpc_send_async("getblockcount", vec![]).await?;
        result
            .as_u64()
            .and_then(|count| u32::try_from(count).ok())
            .ok_or_else(|| {
                ClientRpcError::invalid_response(format!("invalid block count: {result}"))
            })
    }

    /// `sendrawtransaction`: relays serialized transaction bytes and returns
    /// the hash the node reports.
    pub async fn send_raw_transaction(&self, tx: &[u8]) -> RpcResult<UInt256> {
        let params = vec![Value::String(general_purpose::STANDARD.encode(tx))];
        let result = self.rpc_send_async("sendrawtransaction", params).await?;
        let hash = result
            .get("hash")
            .and_then(Value::as_str)
            .ok_or_else(|| ClientRpcError::invalid_response("sendrawtransaction missing 'hash'"))?;
        UInt256::parse(hash)
            .map_err(|e| ClientRpcError::invalid_response(format!("invalid hash '{hash}': {e}")))
    }

    /// Verbose `getrawtransaction`.
    pub async fn get_raw_transaction(&self, hash: &UInt256) -> RpcResult<RpcTransaction> {
        let params = vec![Value::String(hash.to_string()), Value::Bool(true)];
        let result = self.rpc_send_async("getrawtransaction", params).await?;
        RpcTransaction::from_json(&result).map_err(ClientRpcError::InvalidResponse)
    }

    /// `getapplicationlog` for the `Application` trigger.
    pub async fn get_application_log(&self, hash: &UInt256) -> RpcResult<RpcApplicationLog> {
        let params = vec![
            Value::String(hash.to_string()),
            Value::String("Application".to_string()),
        ];
        let result = self.rpc_send_async("getapplicationlog", params).await?;
        RpcApplicationLog::from_json(&result).map_err(ClientRpcError::InvalidResponse)
    }
}

fn signers_json(signers: &[Signer]) -> Value {
    Value::Array(signers.iter().map(Signer::to_json).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use serde_json::json;

    fn localhost_binding_permitted() -> bool {
        std::net::TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn rpc_response(result: Value) -> String {
        json!({"jsonrpc": "2.0", "id": 1, "result": result}).to_string()
    }

    fn rpc_error(code: i32, message: &str) -> String {
        json!({"jsonrpc": "2.0", "id": 1, "error": {"code": code, "message": message}})
            .to_string()
    }

    async fn client_for(server: &Server) -> RpcClient {
        let url = Url::parse(&server.url()).expect("parse server url");
        RpcClient::builder(url)
            .timeout(Duration::from_secs(5))
            .build()
            .expect("build client")
    }

    const TX_HASH: &str = "0x7da6ae7ff9d0b7af3d32f3a2feb2aa96c2a27ef8b651f9a132cfaad6ef20724c";

    #[tokio::test]
    async fn block_count_is_read() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method"\s*:\s*"getblockcount""#.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rpc_response(json!(1234)))
            .create_async()
            .await;

        let client = client_for(&server).await;
        assert_eq!(client.get_block_count().await.unwrap(), 1234);
    }

    #[tokio::test]
    async fn invoke_script_sends_base64_and_signers() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::AllOf(vec![
                Matcher::Regex(r#""method"\s*:\s*"invokescript""#.into()),
                Matcher::Regex(r#""QA==""#.into()),
                Matcher::Regex(r#""scopes"\s*:\s*"CalledByEntry""#.into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rpc_response(json!({
                "script": "QA==",
                "state": "HALT",
                "gasconsumed": "2028330",
                "stack": []
            })))
            .create_async()
            .await;

        let client = client_for(&server).await;
        let signer = Signer::called_by_entry(UInt160::zero());
        let result = client.invoke_script(&[0x40], &[signer]).await.unwrap();
        assert_eq!(result.gas_consumed, 2_028_330);
    }

    #[tokio::test]
    async fn json_rpc_error_is_a_server_error() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rpc_error(-500, "InsufficientFunds"))
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.send_raw_transaction(&[0u8; 4]).await.unwrap_err();
        assert_eq!(
            err,
            ClientRpcError::Server {
                code: -500,
                message: "InsufficientFunds".into()
            }
        );
    }

    #[tokio::test]
    async fn http_failure_is_transport() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .with_status(502)
            .with_body("<html>bad gateway</html>")
            .create_async()
            .await;

        let client = client_for(&server).await;
        let err = client.get_block_count().await.unwrap_err();
        assert!(matches!(err, ClientRpcError::Transport(_)));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn send_raw_transaction_returns_node_hash() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method"\s*:\s*"sendrawtransaction""#.into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rpc_response(json!({"hash": TX_HASH})))
            .create_async()
            .await;

        let client = client_for(&server).await;
        let hash = client.send_raw_transaction(&[1, 2, 3]).await.unwrap();
        assert_eq!(hash.to_string(), TX_HASH);
    }

    #[tokio::test]
    async fn basic_auth_header_is_sent() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .match_header("authorization", "Basic dXNlcjpwYXNz")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(rpc_response(json!(7)))
            .create_async()
            .await;

        let url = Url::parse(&server.url()).unwrap();
        let client = RpcClient::builder(url)
            .basic_auth("user", "pass")
            .build()
            .unwrap();
        assert_eq!(client.get_block_count().await.unwrap(), 7);
    }
}
