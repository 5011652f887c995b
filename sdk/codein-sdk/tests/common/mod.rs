use async_trait::async_trait;
use codein_sdk::core::api::ContractApi;
use codein_sdk::core::connection::SolConnection;
use codein_sdk::types::ArgData;
use solana_sdk::pubkey::Pubkey;
use std::collections::HashMap;
use std::error::Error;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory stand-in for the contract API and the RPC connection.
///
/// Clones share the call counter, so a reader built from two clones of the
/// same `MockChain` still counts every network-shaped call in one place.
#[derive(Clone, Default)]
pub struct MockChain {
    pub dbpda: Option<String>,
    pub signatures: Vec<String>,
    pub transactions: HashMap<String, ArgData>,
    pub fail_signatures: bool,
    calls: Arc<AtomicUsize>,
}

impl MockChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dbpda(mut self, dbpda: impl Into<String>) -> Self {
        self.dbpda = Some(dbpda.into());
        self
    }

    pub fn with_signatures(mut self, signatures: &[&str]) -> Self {
        self.signatures = signatures.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_transaction(mut self, tx_id: impl Into<String>, info: ArgData) -> Self {
        self.transactions.insert(tx_id.into(), info);
        self
    }

    pub fn with_failing_signatures(mut self) -> Self {
        self.fail_signatures = true;
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContractApi for MockChain {
    async fn get_transaction_info(
        &self,
        tx_id: &str,
    ) -> Result<Option<ArgData>, Box<dyn Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.transactions.get(tx_id).cloned())
    }

    async fn get_dbpda(
        &self,
        _wallet_address: &str,
    ) -> Result<Option<String>, Box<dyn Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.dbpda.clone())
    }
}

#[async_trait]
impl SolConnection for MockChain {
    async fn get_signatures_for_address(
        &self,
        _address: &Pubkey,
        limit: usize,
    ) -> Result<Vec<String>, Box<dyn Error + Send + Sync>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_signatures {
            return Err("rpc unavailable".into());
        }
        Ok(self.signatures.iter().take(limit).cloned().collect())
    }
}

/// Head transaction payload carrying a commit marker and a tail pointer.
pub fn head_info(commit: &str, tail_tx: &str) -> ArgData {
    ArgData {
        type_field: Some("json".to_string()),
        offset: Some(format!("commit: {}", commit)),
        tail_tx: Some(tail_tx.to_string()),
        ..Default::default()
    }
}

/// Chunk transaction payload with a fragment and a backward pointer.
pub fn chunk_info(code: &str, before_tx: &str) -> ArgData {
    ArgData {
        code: Some(code.to_string()),
        method: Some("inscribe".to_string()),
        decode_break: Some(0),
        before_tx: Some(before_tx.to_string()),
        ..Default::default()
    }
}

/// A mock valid database account address for signature listing.
pub fn mock_dbpda() -> String {
    Pubkey::new_unique().to_string()
}
