use crate::core::api::ContractApi;
use crate::error::{CodeInError, Result};
use crate::types::{ChunkData, ChunkPointer, ReconstructedPayload};
use crate::utils;

/// Walk a chunk chain starting at `head_tx_id` and reassemble the inscribed
/// document.
///
/// The head transaction's `tail_tx` names the newest chunk; each chunk's
/// `before_tx` names the one written before it, until the Genesis sentinel.
/// Chunks are collected in traversal order (newest first) and reversed before
/// concatenation, restoring the original write order.
pub async fn reconstruct_chain(
    api: &impl ContractApi,
    head_tx_id: &str,
) -> Result<ReconstructedPayload> {
    let head = utils::fetch_transaction_info(api, head_tx_id)
        .await
        .ok_or_else(|| CodeInError::BrokenChain(format!("no payload for head {}", head_tx_id)))?;
    let tail_tx = head
        .tail_tx
        .as_deref()
        .ok_or(CodeInError::MissingTailPointer)?;

    let mut chunks: Vec<String> = Vec::new();
    let mut cursor = ChunkPointer::parse(tail_tx)?;

    while let ChunkPointer::Tx(tx_id) = cursor {
        tracing::info!("Chunks: {}", tx_id);

        let info = utils::fetch_transaction_info(api, &tx_id)
            .await
            .ok_or_else(|| CodeInError::BrokenChain(format!("no chunk found for {}", tx_id)))?;
        let chunk = ChunkData::try_from(info)?;

        chunks.push(chunk.code);
        cursor = chunk.before;
    }

    chunks.reverse();
    let json_data = utils::decode_code_points(&chunks.concat());

    Ok(ReconstructedPayload {
        json_data,
        commit_message: head.offset,
    })
}
