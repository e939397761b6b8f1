use chance_raffle_common::types::RafflePhase;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp, Uint128, Uint256};

use crate::state::{DrawRecord, RaffleConfig, Round};
use crate::upkeep::UpkeepStatus;

#[cw_serde]
pub struct InstantiateMsg {
    pub coordinator: String,
    pub entrance_fee: Uint128,
    pub denom: String,
    pub interval_seconds: u64,
    pub key_hash: String,
    pub request_confirmations: u64,
    pub callback_gas_limit: u64,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy one entry into the current round. Send at least the entrance fee.
    EnterRaffle {},
    /// Close the round and request randomness. Anyone can call once
    /// `CheckUpkeep` reports true.
    PerformUpkeep {},
    /// Randomness callback. Coordinator only.
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
    /// Update operational settings. Admin only.
    /// Entrance fee, denom and interval are fixed at instantiation.
    UpdateConfig {
        admin: Option<String>,
        coordinator: Option<String>,
        key_hash: Option<String>,
        request_confirmations: Option<u64>,
        callback_gas_limit: Option<u64>,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(RaffleConfig)]
    Config {},
    #[returns(Uint128)]
    EntranceFee {},
    #[returns(RafflePhase)]
    RaffleState {},
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(Round)]
    Round {},
    #[returns(Option<Addr>)]
    Player { index: u32 },
    #[returns(u32)]
    NumberOfPlayers {},
    #[returns(Timestamp)]
    LatestTimestamp {},
    #[returns(CheckUpkeepResponse)]
    CheckUpkeep {},
    #[returns(Option<DrawRecord>)]
    Draw { round_id: u64 },
    #[returns(DrawHistoryResponse)]
    DrawHistory {
        start_after: Option<u64>,
        limit: Option<u32>,
    },
}

#[cw_serde]
pub struct MigrateMsg {}

#[cw_serde]
pub struct CheckUpkeepResponse {
    pub upkeep_needed: bool,
    /// Always empty; PerformUpkeep takes no arguments.
    pub perform_data: Binary,
    pub conditions: UpkeepStatus,
}

#[cw_serde]
pub struct DrawHistoryResponse {
    pub draws: Vec<DrawRecord>,
}

/// Mutable subset of `RaffleConfig`.
pub struct UpdateConfigParams {
    pub admin: Option<String>,
    pub coordinator: Option<String>,
    pub key_hash: Option<String>,
    pub request_confirmations: Option<u64>,
    pub callback_gas_limit: Option<u64>,
}
