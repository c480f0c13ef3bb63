//! Alchemy API integration
//!
//! JSON-RPC client for Abstract mainnet plus the wire types it speaks.
//! The client is transport only; balance reconstruction lives in the
//! `holders` module.

pub mod client;
pub mod types;

pub use client::{AlchemyClient, CHAIN_ID};
pub use types::{TokenBalancesResult, TokenMetadata, Transfer, TransferValue};
