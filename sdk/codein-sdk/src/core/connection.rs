use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_client::rpc_client::GetConfirmedSignaturesForAddress2Config;
use solana_sdk::commitment_config::CommitmentConfig;
use solana_sdk::pubkey::Pubkey;
use std::error::Error;

/// Abstraction over the Solana RPC surface the SDK needs.
///
/// Only signature listing is required: the database account's history is the
/// index into the chunk chain, everything else goes through the contract API.
#[async_trait]
pub trait SolConnection: Send + Sync {
    /// List up to `limit` most recent transaction signatures for `address`,
    /// newest first.
    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<String>, Box<dyn Error + Send + Sync>>;
}

#[async_trait]
impl SolConnection for RpcClient {
    async fn get_signatures_for_address(
        &self,
        address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        let signatures = self
            .get_signatures_for_address_with_config(
                address,
                GetConfirmedSignaturesForAddress2Config {
                    before: None,
                    until: None,
                    limit: Some(limit),
                    commitment: Some(CommitmentConfig::confirmed()),
                },
            )
            .await?;

        Ok(signatures.into_iter().map(|sig| sig.signature).collect())
    }
}

/// Build the default nonblocking RPC client at confirmed commitment
pub fn new_rpc_connection(rpc_url: &str) -> RpcClient {
    RpcClient::new_with_commitment(rpc_url.to_string(), CommitmentConfig::confirmed())
}
