use chance_raffle_common::types::RafflePhase;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Timestamp;

use crate::state::Round;

/// The four conditions that must all hold before a draw may be requested.
#[cw_serde]
pub struct UpkeepStatus {
    pub time_passed: bool,
    pub is_open: bool,
    pub has_balance: bool,
    pub has_players: bool,
}

impl UpkeepStatus {
    pub fn needed(&self) -> bool {
        self.time_passed && self.is_open && self.has_balance && self.has_players
    }
}

/// Pure readiness check over the round and the current block time.
pub fn evaluate_upkeep(round: &Round, interval_seconds: u64, now: Timestamp) -> UpkeepStatus {
    let elapsed = now
        .seconds()
        .saturating_sub(round.last_draw_time.seconds());

    UpkeepStatus {
        time_passed: elapsed >= interval_seconds,
        is_open: round.phase == RafflePhase::Open,
        has_balance: !round.pooled_stake.is_zero(),
        has_players: !round.players.is_empty(),
    }
}
