use crate::core::api::ContractApi;
use crate::types::ArgData;

//=============================================================================
// Escape Decoding
//=============================================================================

/// Decode `/uXXXX` escape sequences back into Unicode characters.
///
/// Each `/u` followed by 4 to 6 hexadecimal digits (longest match wins) is
/// replaced with the character at that code point. Malformed hex and code
/// points with no valid `char` are left in the text untouched.
pub fn decode_code_points(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut i = 0;

    while i < text.len() {
        let rest = &text[i..];
        if let Some(tail) = rest.strip_prefix("/u") {
            let digits = tail
                .bytes()
                .take(6)
                .take_while(|b| b.is_ascii_hexdigit())
                .count();
            if digits >= 4 {
                let decoded = u32::from_str_radix(&tail[..digits], 16)
                    .ok()
                    .and_then(char::from_u32);
                if let Some(ch) = decoded {
                    out.push(ch);
                    i += 2 + digits;
                    continue;
                }
            }
        }

        match rest.chars().next() {
            Some(ch) => {
                out.push(ch);
                i += ch.len_utf8();
            }
            None => break,
        }
    }

    out
}

//=============================================================================
// Head Candidate Inspection
//=============================================================================

/// Extract the commit message from a head candidate's decoded payload.
///
/// A valid head carries `type_field == "json"` and an `offset` containing the
/// `"commit: "` marker; the message is the text after the marker.
pub fn extract_commit_message(info: &ArgData) -> Option<String> {
    if info.type_field.as_deref() != Some("json") {
        return None;
    }
    let offset = info.offset.as_deref()?;
    let (_, message) = offset.split_once("commit: ")?;
    if message.is_empty() {
        return None;
    }
    Some(message.to_string())
}

//=============================================================================
// Gateway Helpers
//=============================================================================

/// Fetch a transaction's decoded payload, normalising every failure to `None`
pub async fn fetch_transaction_info(api: &impl ContractApi, tx_id: &str) -> Option<ArgData> {
    match api.get_transaction_info(tx_id).await {
        Ok(info) => info,
        Err(err) => {
            tracing::error!("Error fetching transaction info: {}", err);
            None
        }
    }
}

/// Resolve a wallet's database account address, normalising every failure to
/// `None`. An empty wallet address short-circuits without a network call.
pub async fn fetch_dbpda(api: &impl ContractApi, wallet_address: &str) -> Option<String> {
    if wallet_address.is_empty() {
        tracing::error!("Wallet address not provided");
        return None;
    }

    tracing::info!("Connecting to Solana...");
    tracing::info!("Your Address: {}", wallet_address);

    match api.get_dbpda(wallet_address).await {
        Ok(dbpda) => dbpda,
        Err(err) => {
            tracing::error!("Error fetching PDA: {}", err);
            None
        }
    }
}
