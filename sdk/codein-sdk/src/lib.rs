//! Code-In SDK
//!
//! A Solana-based utility for retrieving and processing on-chain data.
//! Applications inscribe JSON documents as chains of chunk transactions on a
//! wallet-derived database account; this crate locates the newest chain head
//! for a wallet and reassembles the inscribed document.

pub mod basic;
pub mod core;
pub mod error;
pub mod types;
pub mod utils;

pub use crate::basic::reader::{
    bring_agent_with_wallet_address, get_onchain_data, get_onchain_json, OnchainReader,
};
pub use crate::core::api::{ContractApi, HttpContractApi};
pub use crate::core::connection::SolConnection;
pub use crate::error::{CodeInError, Result};
pub use crate::types::{
    ArgData, ChainHead, ChunkData, ChunkPointer, CodeInConfig, ReconstructedPayload,
};
