use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<CoordinatorConfig> = Item::new("config");
pub const NEXT_REQUEST_ID: Item<u64> = Item::new("next_request_id");
/// Outstanding requests. Removed once fulfilled.
pub const REQUESTS: Map<u64, PendingRequest> = Map::new("requests");

#[cw_serde]
pub struct CoordinatorConfig {
    pub admin: Addr,
    /// Accounts allowed to relay beacons into fulfillments
    pub operators: Vec<Addr>,
    /// Quicknet public key, 96 bytes (G2 point)
    pub quicknet_pubkey: Vec<u8>,
    /// Chain hash identifying the drand network. Consumers pass it as `key_hash`.
    pub chain_hash: String,
    /// Genesis time of the drand network (unix seconds)
    pub genesis_time: u64,
    /// Period between rounds in seconds (3 for quicknet)
    pub period_seconds: u64,
    pub max_num_words: u32,
    pub max_callback_gas_limit: u64,
}

#[cw_serde]
pub struct PendingRequest {
    pub request_id: u64,
    pub consumer: Addr,
    pub num_words: u32,
    pub callback_gas_limit: u64,
    pub request_confirmations: u64,
    pub requested_height: u64,
    pub requested_at: Timestamp,
}
