use async_trait::async_trait;
use reqwest::Client;
use std::error::Error;

use crate::types::{ArgData, DbpdaResponse, TransactionInfoResponse};

/// Read-only access to the hosted contract API that decodes inscription
/// transactions and derives database accounts.
///
/// This allows the SDK to work with:
/// 1. The hosted HTTP endpoints (production)
/// 2. In-memory fakes (tests)
#[async_trait]
pub trait ContractApi: Send + Sync {
    /// Decoded instruction payload for `tx_id`, or `None` when the
    /// transaction carries no payload.
    async fn get_transaction_info(
        &self,
        tx_id: &str,
    ) -> Result<Option<ArgData>, Box<dyn Error + Send + Sync>>;

    /// Database account address derived for `wallet_address`.
    async fn get_dbpda(
        &self,
        wallet_address: &str,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>>;
}

/// [`ContractApi`] implementation over the hosted HTTP endpoints
#[derive(Debug, Clone)]
pub struct HttpContractApi {
    client: Client,
    api_host: String,
}

impl HttpContractApi {
    pub fn new(api_host: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_host: api_host.into(),
        }
    }

    /// Returns the API host this client talks to.
    pub fn api_host(&self) -> &str {
        &self.api_host
    }
}

#[async_trait]
impl ContractApi for HttpContractApi {
    async fn get_transaction_info(
        &self,
        tx_id: &str,
    ) -> Result<Option<ArgData>, Box<dyn Error + Send + Sync>> {
        let url = format!("{}/get_transaction_info/{}", self.api_host, tx_id);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("HTTP error! status: {}", response.status()).into());
        }

        let body: TransactionInfoResponse = response.json().await?;
        Ok(body.arg_data)
    }

    async fn get_dbpda(
        &self,
        wallet_address: &str,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        let url = format!("{}/getDBPDA/{}", self.api_host, wallet_address);
        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(format!("HTTP error! status: {}", response.status()).into());
        }

        let body: DbpdaResponse = response.json().await?;
        Ok(body.dbpda)
    }
}
