use thiserror::Error;

/// SDK-specific error types for Code-In read operations
#[derive(Debug, Error)]
pub enum CodeInError {
    /// Wallet address missing from the config
    #[error("Wallet address not provided")]
    MissingWalletAddress,

    /// RPC connection or signature-listing error
    #[error("Connection error: {0}")]
    Connection(String),

    /// Contract API transport error or non-success response
    #[error("API error: {0}")]
    Api(String),

    /// DBPDA is not a valid account address
    #[error("Invalid database account: {0}")]
    InvalidAccount(String),

    /// No recent signature carries a valid chain head
    #[error("No chain head found in recent signatures")]
    HeadNotFound,

    /// Head transaction has no tail pointer into the chunk chain
    #[error("Head transaction has no tail pointer")]
    MissingTailPointer,

    /// Chain ended before reaching the Genesis sentinel
    #[error("Broken chunk chain: {0}")]
    BrokenChain(String),

    /// Chunk transaction is missing required fields
    #[error("Malformed chunk: {0}")]
    MalformedChunk(String),

    /// JSON deserialization error
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, CodeInError>;
