use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("BLS verification failed: {reason}")]
    VerificationFailed { reason: String },

    #[error("invalid hex input: {field}")]
    InvalidHex { field: String },

    #[error("invalid pubkey length: expected 96 bytes, got {got}")]
    InvalidPubkeyLength { got: usize },

    #[error("unknown key hash {key_hash}")]
    InvalidKeyHash { key_hash: String },

    #[error("num_words {num_words} out of range (1..={max})")]
    InvalidNumWords { num_words: u32, max: u32 },

    #[error("callback gas limit {limit} exceeds maximum {max}")]
    GasLimitTooBig { limit: u64, max: u64 },

    #[error("request {request_id} not found")]
    RequestNotFound { request_id: u64 },

    #[error("request {request_id} needs block height {ready_height}, current {height}")]
    RequestNotConfirmed {
        request_id: u64,
        ready_height: u64,
        height: u64,
    },

    #[error("drand round {round} published at {published_at}, not after request time {requested_at}")]
    BeaconTooEarly {
        round: u64,
        published_at: u64,
        requested_at: u64,
    },
}
