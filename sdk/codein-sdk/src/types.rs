use serde::Deserialize;

use crate::error::CodeInError;

/// Configuration for reading a wallet's inscribed data
#[derive(Debug, Clone, Default)]
pub struct CodeInConfig {
    /// Solana wallet address owning the inscription
    pub wallet_address: String,

    /// Solana RPC URL (defaults to mainnet)
    pub rpc_url: Option<String>,

    /// Contract API host
    pub api_host: Option<String>,
}

impl CodeInConfig {
    pub fn new(wallet_address: impl Into<String>) -> Self {
        Self {
            wallet_address: wallet_address.into(),
            rpc_url: None,
            api_host: None,
        }
    }

    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = Some(rpc_url.into());
        self
    }

    pub fn with_api_host(mut self, api_host: impl Into<String>) -> Self {
        self.api_host = Some(api_host.into());
        self
    }
}

/// Response envelope of the `get_transaction_info` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInfoResponse {
    #[serde(rename = "argData")]
    pub arg_data: Option<ArgData>,
}

/// Response envelope of the `getDBPDA` endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DbpdaResponse {
    #[serde(rename = "DBPDA")]
    pub dbpda: Option<String>,
}

/// Decoded instruction payload of a single transaction.
///
/// Head transactions populate `type_field`, `offset` and `tail_tx`; chunk
/// transactions populate `code`, `method`, `decode_break` and `before_tx`.
/// Everything is optional on the wire, validation happens at the use site.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArgData {
    #[serde(default)]
    pub type_field: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
    #[serde(default)]
    pub tail_tx: Option<String>,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub method: Option<String>,
    #[serde(default)]
    pub decode_break: Option<u32>,
    #[serde(default)]
    pub before_tx: Option<String>,
}

/// Pointer from a chunk transaction to the previous chunk in the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChunkPointer {
    /// The designated oldest end of a chain
    Genesis,
    /// Continue walking at this transaction id
    Tx(String),
}

impl ChunkPointer {
    const GENESIS_TX: &'static str = "Genesis";

    /// Parse a wire pointer. An empty pointer signals a broken chain.
    pub fn parse(raw: &str) -> Result<Self, CodeInError> {
        if raw.is_empty() {
            return Err(CodeInError::BrokenChain(
                "empty before_tx pointer".to_string(),
            ));
        }
        if raw == Self::GENESIS_TX {
            Ok(Self::Genesis)
        } else {
            Ok(Self::Tx(raw.to_string()))
        }
    }
}

/// Validated chunk fields extracted from a chunk transaction's [`ArgData`]
#[derive(Debug, Clone)]
pub struct ChunkData {
    /// One fragment of the inscribed document
    pub code: String,

    /// Inscription method metadata, opaque to the walk
    pub method: Option<String>,

    /// Decoder hint metadata, opaque to the walk
    pub decode_break: Option<u32>,

    /// Where the walk continues
    pub before: ChunkPointer,
}

impl TryFrom<ArgData> for ChunkData {
    type Error = CodeInError;

    fn try_from(info: ArgData) -> Result<Self, Self::Error> {
        let code = info
            .code
            .ok_or_else(|| CodeInError::MalformedChunk("missing code field".to_string()))?;
        let before_tx = info
            .before_tx
            .ok_or_else(|| CodeInError::MalformedChunk("missing before_tx pointer".to_string()))?;

        Ok(Self {
            code,
            method: info.method,
            decode_break: info.decode_break,
            before: ChunkPointer::parse(&before_tx)?,
        })
    }
}

/// A located chain head: the newest signature carrying a commit marker
#[derive(Debug, Clone)]
pub struct ChainHead {
    /// Signature of the head transaction
    pub signature: String,

    /// Commit message extracted from the head's offset metadata
    pub commit_message: String,
}

/// Result of a successful chain walk
#[derive(Debug, Clone)]
pub struct ReconstructedPayload {
    /// Reconstructed JSON text with escape sequences decoded
    pub json_data: String,

    /// Raw offset metadata of the head transaction, when present
    pub commit_message: Option<String>,
}
