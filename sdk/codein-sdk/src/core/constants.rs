// Default endpoints for mainnet usage
pub const DEFAULT_RPC_URL: &str = "https://api.mainnet-beta.solana.com";
pub const DEFAULT_API_HOST: &str = "https://solanacontractapi.uc.r.appspot.com";

/// Number of recent database-account signatures scanned for a chain head.
/// A wallet with more writes than this since its last valid head will not
/// be found.
pub const SIGNATURE_SCAN_LIMIT: usize = 20;
