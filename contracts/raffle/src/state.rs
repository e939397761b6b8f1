use chance_raffle_common::types::RafflePhase;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128, Uint256};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<RaffleConfig> = Item::new("config");
pub const ROUND: Item<Round> = Item::new("round");
/// Completed draws, keyed by round id.
pub const DRAWS: Map<u64, DrawRecord> = Map::new("draws");

/// The raffle only ever asks for a single word.
pub const NUM_WORDS: u32 = 1;

#[cw_serde]
pub struct RaffleConfig {
    pub admin: Addr,
    /// Randomness coordinator; the only sender allowed to fulfill draws
    pub coordinator: Addr,
    /// Minimum amount of `denom` required per entry
    pub entrance_fee: Uint128,
    pub denom: String,
    /// Minimum time between the last reset and the next draw
    pub interval_seconds: u64,
    /// Beacon network identifier passed to the coordinator
    pub key_hash: String,
    pub request_confirmations: u64,
    pub callback_gas_limit: u64,
}

/// The single, perpetually recycled raffle round.
#[cw_serde]
pub struct Round {
    /// Sequence number of the round currently collecting (or drawing) entries
    pub round_id: u64,
    pub phase: RafflePhase,
    /// One slot per entry; the same address may appear more than once
    pub players: Vec<Addr>,
    pub pooled_stake: Uint128,
    pub last_draw_time: Timestamp,
    pub recent_winner: Option<Addr>,
    /// Correlation id of the outstanding randomness request.
    /// Set iff `phase == Calculating`.
    pub pending_request_id: Option<u64>,
}

#[cw_serde]
pub struct DrawRecord {
    pub round_id: u64,
    pub request_id: u64,
    pub winner: Addr,
    pub prize: Uint128,
    pub num_players: u32,
    pub random_word: Uint256,
    pub drawn_at: Timestamp,
}
