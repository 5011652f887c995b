use solana_sdk::pubkey::Pubkey;

use crate::core::api::ContractApi;
use crate::core::connection::SolConnection;
use crate::core::constants::SIGNATURE_SCAN_LIMIT;
use crate::error::{CodeInError, Result};
use crate::types::ChainHead;
use crate::utils;

/// List recent signatures for the database account, normalising listing
/// failures to an empty list.
async fn fetch_recent_signatures(
    connection: &impl SolConnection,
    address: &Pubkey,
) -> Vec<String> {
    tracing::info!("Find Your Signature...");

    match connection
        .get_signatures_for_address(address, SIGNATURE_SCAN_LIMIT)
        .await
    {
        Ok(signatures) => signatures,
        Err(err) => {
            tracing::error!("Error fetching signatures: {}", err);
            Vec::new()
        }
    }
}

/// Locate the newest transaction that begins a valid inscription chain for
/// `wallet_address`.
///
/// Scans the database account's recent history newest-first and returns on
/// the first signature whose decoded payload carries a commit marker; older
/// valid heads are superseded by the newer one and ignored. The scan window
/// is capped at [`SIGNATURE_SCAN_LIMIT`] signatures.
pub async fn find_chain_head(
    connection: &impl SolConnection,
    api: &impl ContractApi,
    wallet_address: &str,
) -> Result<ChainHead> {
    let dbpda = utils::fetch_dbpda(api, wallet_address)
        .await
        .ok_or_else(|| CodeInError::Api("failed to fetch DBPDA".to_string()))?;
    let address: Pubkey = dbpda
        .parse()
        .map_err(|_| CodeInError::InvalidAccount(dbpda.clone()))?;

    let signatures = fetch_recent_signatures(connection, &address).await;
    if signatures.is_empty() {
        tracing::error!("No signatures found");
        return Err(CodeInError::HeadNotFound);
    }

    for signature in signatures {
        if let Some(info) = utils::fetch_transaction_info(api, &signature).await {
            if let Some(commit_message) = utils::extract_commit_message(&info) {
                return Ok(ChainHead {
                    signature,
                    commit_message,
                });
            }
        }
    }

    Err(CodeInError::HeadNotFound)
}
