use chance_raffle_common::msg::{CoordinatorExecuteMsg, CoordinatorQueryMsg};
use chance_raffle_common::types::RafflePhase;
use chance_raffle_common::words::word_index;
use cosmwasm_std::{
    to_json_binary, DepsMut, Env, Event, MessageInfo, Response, StdError, Uint128, Uint256,
    WasmMsg,
};

use crate::error::ContractError;
use crate::msg::UpdateConfigParams;
use crate::payout::payout_msg;
use crate::state::{DrawRecord, CONFIG, DRAWS, NUM_WORDS, ROUND};
use crate::upkeep::evaluate_upkeep;

/// Enter the current round. Send at least the entrance fee in the raffle denom.
/// Everything sent is added to the pool; the same address may enter repeatedly.
pub fn enter_raffle(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if let Some(foreign) = info.funds.iter().find(|c| c.denom != config.denom) {
        return Err(ContractError::WrongDenom {
            denom: foreign.denom.clone(),
            expected: config.denom,
        });
    }

    let sent = info
        .funds
        .iter()
        .filter(|c| c.denom == config.denom)
        .map(|c| c.amount)
        .try_fold(Uint128::zero(), |acc, amount| acc.checked_add(amount))
        .map_err(StdError::from)?;

    if sent < config.entrance_fee {
        return Err(ContractError::InsufficientPayment {
            sent,
            required: config.entrance_fee,
        });
    }

    let mut round = ROUND.load(deps.storage)?;
    if round.phase != RafflePhase::Open {
        return Err(ContractError::RoundNotOpen);
    }

    round.players.push(info.sender.clone());
    round.pooled_stake = round
        .pooled_stake
        .checked_add(sent)
        .map_err(StdError::from)?;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_attribute("action", "enter_raffle")
        .add_attribute("player", info.sender.to_string())
        .add_attribute("amount", sent.to_string())
        .add_event(
            Event::new("chance_raffle_enter")
                .add_attribute("player", info.sender.to_string())
                .add_attribute("round_id", round.round_id.to_string())
                .add_attribute("amount", sent.to_string())
                .add_attribute("num_players", round.players.len().to_string())
                .add_attribute("pooled_stake", round.pooled_stake.to_string()),
        ))
}

/// Close the round and request a random word from the coordinator.
///
/// Anyone may call. The phase flips to `Calculating` and is saved before the
/// request message is emitted, so nothing the coordinator does in response
/// can add players or trigger a second request.
pub fn perform_upkeep(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    let status = evaluate_upkeep(&round, config.interval_seconds, env.block.time);
    if !status.needed() {
        return Err(ContractError::UpkeepNotNeeded {
            balance: round.pooled_stake,
            num_players: round.players.len() as u32,
            phase: round.phase,
        });
    }

    // The coordinator numbers requests sequentially, so the id our request
    // will receive is known before it is sent.
    let request_id: u64 = deps
        .querier
        .query_wasm_smart(config.coordinator.to_string(), &CoordinatorQueryMsg::NextRequestId {})?;

    round.phase = RafflePhase::Calculating;
    round.pending_request_id = Some(request_id);
    ROUND.save(deps.storage, &round)?;

    let request_msg = WasmMsg::Execute {
        contract_addr: config.coordinator.to_string(),
        msg: to_json_binary(&CoordinatorExecuteMsg::RequestRandomWords {
            key_hash: config.key_hash,
            request_confirmations: config.request_confirmations,
            callback_gas_limit: config.callback_gas_limit,
            num_words: NUM_WORDS,
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(request_msg)
        .set_data(to_json_binary(&request_id)?)
        .add_attribute("action", "perform_upkeep")
        .add_attribute("request_id", request_id.to_string())
        .add_event(
            Event::new("chance_raffle_requested_winner")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("round_id", round.round_id.to_string())
                .add_attribute("num_players", round.players.len().to_string())
                .add_attribute("pooled_stake", round.pooled_stake.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Randomness callback. Coordinator only.
///
/// 1. Check the callback matches the outstanding request
/// 2. Pick `players[random_words[0] % players.len()]`
/// 3. Reset the round and record the draw
/// 4. Send the whole pool to the winner
///
/// Steps 2 and 3 are saved before the transfer is emitted. A reentrant entry
/// made while the winner is being paid lands in the fresh, empty round. If
/// the transfer fails, `reply` errors and the whole callback is reverted.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    random_words: Vec<Uint256>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.coordinator {
        return Err(ContractError::OnlyCoordinatorCanFulfill {
            have: info.sender,
            want: config.coordinator,
        });
    }

    let mut round = ROUND.load(deps.storage)?;
    if round.phase != RafflePhase::Calculating || round.pending_request_id != Some(request_id) {
        return Err(ContractError::UnknownRequest { request_id });
    }

    let random_word = *random_words.first().ok_or(ContractError::NoRandomWords)?;

    // Players cannot change while Calculating and upkeep required at least one
    let num_players = round.players.len();
    let winner_index = word_index(&random_word, num_players)
        .ok_or_else(|| StdError::generic_err("calculating round has no players"))?;
    let winner = round.players[winner_index].clone();
    let prize = round.pooled_stake;
    let drawn_round_id = round.round_id;

    // Effects
    round.recent_winner = Some(winner.clone());
    round.phase = RafflePhase::Open;
    round.players.clear();
    round.last_draw_time = env.block.time;
    round.pooled_stake = Uint128::zero();
    round.pending_request_id = None;
    round.round_id += 1;
    ROUND.save(deps.storage, &round)?;

    DRAWS.save(
        deps.storage,
        drawn_round_id,
        &DrawRecord {
            round_id: drawn_round_id,
            request_id,
            winner: winner.clone(),
            prize,
            num_players: num_players as u32,
            random_word,
            drawn_at: env.block.time,
        },
    )?;

    // Interactions
    let payout = payout_msg(&winner, prize, &config.denom)?;

    Ok(Response::new()
        .add_submessage(payout)
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("winner", winner.to_string())
        .add_attribute("prize", prize.to_string())
        .add_event(
            Event::new("chance_raffle_winner_picked")
                .add_attribute("winner", winner.to_string())
                .add_attribute("round_id", drawn_round_id.to_string())
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("winner_index", winner_index.to_string())
                .add_attribute("num_players", num_players.to_string())
                .add_attribute("prize", prize.to_string())
                .add_attribute("prize_denom", config.denom)
                .add_attribute("random_word", random_word.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Update configuration. Admin only.
///
/// The coordinator can only be swapped while no request is outstanding,
/// otherwise the pending callback would be rejected.
pub fn update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    params: UpdateConfigParams,
) -> Result<Response, ContractError> {
    let UpdateConfigParams {
        admin,
        coordinator,
        key_hash,
        request_confirmations,
        callback_gas_limit,
    } = params;

    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update config".to_string(),
        });
    }

    if let Some(admin) = admin {
        config.admin = deps.api.addr_validate(&admin)?;
    }
    if let Some(coordinator) = coordinator {
        let round = ROUND.load(deps.storage)?;
        if round.phase != RafflePhase::Open {
            return Err(ContractError::RoundNotOpen);
        }
        config.coordinator = deps.api.addr_validate(&coordinator)?;
    }
    if let Some(key_hash) = key_hash {
        config.key_hash = key_hash;
    }
    if let Some(confirmations) = request_confirmations {
        config.request_confirmations = confirmations;
    }
    if let Some(gas_limit) = callback_gas_limit {
        validate_callback_gas_limit(gas_limit)?;
        config.callback_gas_limit = gas_limit;
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("action", "update_config"))
}

pub fn validate_callback_gas_limit(gas_limit: u64) -> Result<(), ContractError> {
    if gas_limit == 0 {
        return Err(ContractError::InvalidConfig {
            reason: "callback_gas_limit must be greater than zero".to_string(),
        });
    }
    Ok(())
}
