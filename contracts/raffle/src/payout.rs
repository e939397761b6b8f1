use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, from_json, to_json_binary, Addr, BankMsg, Event, Reply, Response, StdResult, SubMsg,
    SubMsgResult, Uint128,
};

use crate::error::ContractError;

pub const PAYOUT_REPLY_ID: u64 = 1;

/// Carried through the payout submessage so the reply knows what was sent.
#[cw_serde]
pub struct PayoutPayload {
    pub winner: Addr,
    pub amount: Uint128,
}

/// Result of a payout transfer, as a value rather than an error.
#[derive(Debug, PartialEq)]
pub enum PayoutOutcome {
    Paid,
    Failed(String),
}

impl From<&SubMsgResult> for PayoutOutcome {
    fn from(result: &SubMsgResult) -> Self {
        match result {
            SubMsgResult::Ok(_) => PayoutOutcome::Paid,
            SubMsgResult::Err(reason) => PayoutOutcome::Failed(reason.clone()),
        }
    }
}

/// Build the prize transfer. Both outcomes are routed back through `reply`.
pub fn payout_msg(winner: &Addr, amount: Uint128, denom: &str) -> StdResult<SubMsg> {
    let send = BankMsg::Send {
        to_address: winner.to_string(),
        amount: coins(amount.u128(), denom),
    };
    let payload = PayoutPayload {
        winner: winner.clone(),
        amount,
    };
    Ok(SubMsg::reply_always(send, PAYOUT_REPLY_ID).with_payload(to_json_binary(&payload)?))
}

/// Decide what a finished payout means for the fulfillment that issued it.
///
/// A failed transfer is turned into `PayoutTransferFailed`. Returning an error
/// from `reply` aborts the enclosing fulfillment, so every round effect it
/// committed (winner, reset, draw record) is discarded along with it.
pub fn handle_payout_reply(reply: Reply) -> Result<Response, ContractError> {
    let payload: PayoutPayload = from_json(&reply.payload)?;

    match PayoutOutcome::from(&reply.result) {
        PayoutOutcome::Paid => Ok(Response::new()
            .add_attribute("action", "payout")
            .add_attribute("winner", payload.winner.to_string())
            .add_attribute("amount", payload.amount.to_string())
            .add_event(
                Event::new("chance_raffle_payout")
                    .add_attribute("winner", payload.winner.to_string())
                    .add_attribute("amount", payload.amount.to_string()),
            )),
        PayoutOutcome::Failed(reason) => Err(ContractError::PayoutTransferFailed {
            winner: payload.winner.to_string(),
            amount: payload.amount,
            reason,
        }),
    }
}
