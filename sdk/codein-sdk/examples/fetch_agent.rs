// Example: Fetching inscribed JSON data for a wallet
//
// This example demonstrates how to:
// 1. Retrieve the raw JSON document inscribed by a wallet
// 2. Retrieve the same document parsed into a typed struct

use codein_sdk::{get_onchain_data, get_onchain_json, CodeInConfig};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct AgentProfile {
    name: String,
    #[serde(default)]
    description: Option<String>,
}

#[tokio::main]
async fn main() {
    // 1. Wallet that owns the inscription (replace with a real address)
    let config = CodeInConfig::new("YourSolanaWalletAddressHere");
    // Optional overrides:
    // let config = config
    //     .with_rpc_url("https://api.mainnet-beta.solana.com")
    //     .with_api_host("https://solanacontractapi.uc.r.appspot.com");

    // 2. Raw JSON string
    match get_onchain_json(&config).await {
        Some(json) => {
            println!("Successfully retrieved on-chain data:");
            println!("{}", json);
        }
        None => println!("No on-chain data found for this wallet address"),
    }

    // 3. Typed access
    match get_onchain_data::<AgentProfile>(&config).await {
        Some(profile) => {
            println!("Agent name: {}", profile.name);
            if let Some(description) = profile.description {
                println!("Description: {}", description);
            }
        }
        None => println!("No parseable on-chain data found for this wallet address"),
    }
}
