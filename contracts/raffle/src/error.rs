use chance_raffle_common::types::RafflePhase;
use cosmwasm_std::{Addr, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: {reason}")]
    Unauthorized { reason: String },

    #[error("invalid config: {reason}")]
    InvalidConfig { reason: String },

    #[error("insufficient payment: sent {sent}, entrance fee is {required}")]
    InsufficientPayment { sent: Uint128, required: Uint128 },

    #[error("must send {expected}, got {denom}")]
    WrongDenom { denom: String, expected: String },

    #[error("raffle round is not open")]
    RoundNotOpen,

    #[error("upkeep not needed (balance: {balance}, players: {num_players}, phase: {phase})")]
    UpkeepNotNeeded {
        balance: Uint128,
        num_players: u32,
        phase: RafflePhase,
    },

    #[error("only coordinator can fulfill: have {have}, want {want}")]
    OnlyCoordinatorCanFulfill { have: Addr, want: Addr },

    #[error("no outstanding randomness request with id {request_id}")]
    UnknownRequest { request_id: u64 },

    #[error("randomness callback carried no words")]
    NoRandomWords,

    #[error("payout of {amount} to {winner} failed: {reason}")]
    PayoutTransferFailed {
        winner: String,
        amount: Uint128,
        reason: String,
    },

    #[error("unknown reply id {id}")]
    UnknownReplyId { id: u64 },
}
