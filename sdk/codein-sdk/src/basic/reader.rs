use serde::de::DeserializeOwned;
use solana_client::nonblocking::rpc_client::RpcClient;

use crate::basic::{chain, head};
use crate::core::api::{ContractApi, HttpContractApi};
use crate::core::connection::{new_rpc_connection, SolConnection};
use crate::core::constants::{DEFAULT_API_HOST, DEFAULT_RPC_URL};
use crate::error::{CodeInError, Result};
use crate::types::{CodeInConfig, ReconstructedPayload};

/// Read-side entry point tying together the RPC connection and the contract
/// API.
///
/// The collaborators are generic so tests (or alternative transports) can
/// substitute their own implementations.
pub struct OnchainReader<C, A> {
    connection: C,
    api: A,
}

impl OnchainReader<RpcClient, HttpContractApi> {
    /// Build a reader with the default RPC and HTTP collaborators from
    /// `config`, falling back to the mainnet endpoints.
    pub fn from_config(config: &CodeInConfig) -> Self {
        let rpc_url = config.rpc_url.as_deref().unwrap_or(DEFAULT_RPC_URL);
        let api_host = config.api_host.as_deref().unwrap_or(DEFAULT_API_HOST);

        Self {
            connection: new_rpc_connection(rpc_url),
            api: HttpContractApi::new(api_host),
        }
    }
}

impl<C: SolConnection, A: ContractApi> OnchainReader<C, A> {
    pub fn new(connection: C, api: A) -> Self {
        Self { connection, api }
    }

    /// Locate the newest chain head for `wallet_address` and reassemble its
    /// payload.
    pub async fn read_payload(&self, wallet_address: &str) -> Result<ReconstructedPayload> {
        if wallet_address.is_empty() {
            return Err(CodeInError::MissingWalletAddress);
        }

        let head = head::find_chain_head(&self.connection, &self.api, wallet_address).await?;
        chain::reconstruct_chain(&self.api, &head.signature).await
    }

    /// Reconstructed JSON text for `wallet_address`, or `None` when the
    /// wallet has no valid inscription. Expected failures never escape as
    /// errors.
    pub async fn read_json(&self, wallet_address: &str) -> Option<String> {
        match self.read_payload(wallet_address).await {
            Ok(payload) => Some(payload.json_data),
            Err(err) => {
                tracing::error!("Cannot find onchain data in this wallet: {}", err);
                None
            }
        }
    }

    /// Reconstructed payload parsed into `T`. Parse failures yield `None`.
    pub async fn read_data<T: DeserializeOwned>(&self, wallet_address: &str) -> Option<T> {
        let json = self.read_json(wallet_address).await?;
        match serde_json::from_str(&json) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::error!("Error parsing on-chain JSON data: {}", err);
                None
            }
        }
    }
}

/// Retrieve the inscribed JSON document for the wallet in `config`.
pub async fn get_onchain_json(config: &CodeInConfig) -> Option<String> {
    bring_agent_with_wallet_address(config).await
}

/// Retrieve and parse the inscribed JSON document for the wallet in `config`.
/// No schema validation is performed beyond the serde parse into `T`.
pub async fn get_onchain_data<T: DeserializeOwned>(config: &CodeInConfig) -> Option<T> {
    OnchainReader::from_config(config)
        .read_data(&config.wallet_address)
        .await
}

/// Original entry point kept for backward compatibility; identical to
/// [`get_onchain_json`].
pub async fn bring_agent_with_wallet_address(config: &CodeInConfig) -> Option<String> {
    if config.wallet_address.is_empty() {
        tracing::error!("Wallet address not provided in config");
        return None;
    }

    OnchainReader::from_config(config)
        .read_json(&config.wallet_address)
        .await
}
