use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{CoordinatorConfig, PendingRequest};

#[cw_serde]
pub struct InstantiateMsg {
    pub operators: Vec<String>,
    /// Hex-encoded quicknet public key (96 bytes = 192 hex chars)
    pub quicknet_pubkey_hex: String,
    pub chain_hash: String,
    pub genesis_time: u64,
    pub period_seconds: u64,
    pub max_num_words: u32,
    pub max_callback_gas_limit: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Request random words. The sender is the consumer that receives the
    /// `RawFulfillRandomWords` callback.
    RequestRandomWords {
        /// Must equal the configured drand chain hash.
        key_hash: String,
        request_confirmations: u64,
        callback_gas_limit: u64,
        num_words: u32,
    },
    /// Fulfill a pending request from a drand beacon. Operator only.
    FulfillRandomWords {
        request_id: u64,
        round: u64,
        /// Hex-encoded BLS signature (48 bytes = 96 hex chars)
        signature_hex: String,
    },
    /// Update operator list (admin only).
    UpdateOperators {
        add: Vec<String>,
        remove: Vec<String>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(CoordinatorConfig)]
    Config {},

    #[returns(Option<PendingRequest>)]
    Request { request_id: u64 },

    #[returns(u64)]
    NextRequestId {},
}

#[cw_serde]
pub struct MigrateMsg {}
