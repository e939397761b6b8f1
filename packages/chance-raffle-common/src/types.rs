use std::fmt;

use cosmwasm_schema::cw_serde;

/// Lifecycle phase of the raffle round.
///
/// `Open` accepts entries. `Calculating` means a draw was requested and the
/// player set is frozen until the randomness callback arrives.
#[cw_serde]
#[derive(Copy, Default)]
pub enum RafflePhase {
    #[default]
    Open,
    Calculating,
}

impl fmt::Display for RafflePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RafflePhase::Open => write!(f, "open"),
            RafflePhase::Calculating => write!(f, "calculating"),
        }
    }
}

/// Parameters a consumer attaches to a randomness request.
#[cw_serde]
pub struct RandomnessRequest {
    /// Identifies the beacon network / key the consumer expects.
    pub key_hash: String,
    /// Blocks the coordinator must wait before it may fulfill.
    pub request_confirmations: u64,
    /// Gas budget for the consumer callback.
    pub callback_gas_limit: u64,
    pub num_words: u32,
}
