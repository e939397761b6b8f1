use chance_raffle_common::msg::ConsumerExecuteMsg;
use chance_raffle_common::types::RandomnessRequest;
use chance_raffle_common::words::expand_random_words;
use cosmwasm_std::{to_json_binary, DepsMut, Env, Event, MessageInfo, Response, SubMsg, WasmMsg};

use crate::beacon::{round_published_at, verify_beacon};
use crate::error::ContractError;
use crate::state::{PendingRequest, CONFIG, NEXT_REQUEST_ID, REQUESTS};

/// Register a randomness request for the calling contract.
/// Request ids are sequential and start at 1.
pub fn request_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request: RandomnessRequest,
) -> Result<Response, ContractError> {
    let RandomnessRequest {
        key_hash,
        request_confirmations,
        callback_gas_limit,
        num_words,
    } = request;

    let config = CONFIG.load(deps.storage)?;

    if key_hash != config.chain_hash {
        return Err(ContractError::InvalidKeyHash { key_hash });
    }
    if num_words == 0 || num_words > config.max_num_words {
        return Err(ContractError::InvalidNumWords {
            num_words,
            max: config.max_num_words,
        });
    }
    if callback_gas_limit > config.max_callback_gas_limit {
        return Err(ContractError::GasLimitTooBig {
            limit: callback_gas_limit,
            max: config.max_callback_gas_limit,
        });
    }

    let request_id = NEXT_REQUEST_ID.may_load(deps.storage)?.unwrap_or(1);
    NEXT_REQUEST_ID.save(deps.storage, &(request_id + 1))?;

    let pending = PendingRequest {
        request_id,
        consumer: info.sender.clone(),
        num_words,
        callback_gas_limit,
        request_confirmations,
        requested_height: env.block.height,
        requested_at: env.block.time,
    };
    REQUESTS.save(deps.storage, request_id, &pending)?;

    Ok(Response::new()
        .set_data(to_json_binary(&request_id)?)
        .add_attribute("action", "request_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("consumer", info.sender.to_string())
        .add_event(
            Event::new("chance_random_words_requested")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("consumer", info.sender.to_string())
                .add_attribute("num_words", num_words.to_string())
                .add_attribute("request_confirmations", request_confirmations.to_string())
                .add_attribute("callback_gas_limit", callback_gas_limit.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Fulfill a pending request with a drand beacon. Only operators can call this.
///
/// The beacon is BLS-verified and must have been published after the request
/// was made, so nobody could know the words when the request went out. The
/// request is removed before the consumer callback is dispatched; if the
/// callback fails the whole fulfillment reverts and can be retried.
pub fn fulfill_random_words(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    request_id: u64,
    round: u64,
    signature_hex: String,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if !config.operators.contains(&info.sender) {
        return Err(ContractError::Unauthorized {
            reason: "only operators can fulfill requests".to_string(),
        });
    }

    let request = REQUESTS
        .may_load(deps.storage, request_id)?
        .ok_or(ContractError::RequestNotFound { request_id })?;

    let ready_height = request
        .requested_height
        .saturating_add(request.request_confirmations);
    if env.block.height < ready_height {
        return Err(ContractError::RequestNotConfirmed {
            request_id,
            ready_height,
            height: env.block.height,
        });
    }

    let published_at = round_published_at(config.genesis_time, config.period_seconds, round);
    if published_at <= request.requested_at.seconds() {
        return Err(ContractError::BeaconTooEarly {
            round,
            published_at,
            requested_at: request.requested_at.seconds(),
        });
    }

    let signature = hex::decode(&signature_hex).map_err(|_| ContractError::InvalidHex {
        field: "signature_hex".to_string(),
    })?;

    let randomness = verify_beacon(&config.quicknet_pubkey, round, &signature).map_err(|e| {
        ContractError::VerificationFailed {
            reason: e.to_string(),
        }
    })?;

    let random_words = expand_random_words(&randomness, request_id, request.num_words);

    REQUESTS.remove(deps.storage, request_id);

    let callback = SubMsg::new(WasmMsg::Execute {
        contract_addr: request.consumer.to_string(),
        msg: to_json_binary(&ConsumerExecuteMsg::RawFulfillRandomWords {
            request_id,
            random_words,
        })?,
        funds: vec![],
    })
    .with_gas_limit(request.callback_gas_limit);

    Ok(Response::new()
        .add_submessage(callback)
        .add_attribute("action", "fulfill_random_words")
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("round", round.to_string())
        .add_event(
            Event::new("chance_random_words_fulfilled")
                .add_attribute("request_id", request_id.to_string())
                .add_attribute("consumer", request.consumer.to_string())
                .add_attribute("round", round.to_string())
                .add_attribute("randomness", hex::encode(randomness))
                .add_attribute("fulfilled_by", info.sender.to_string())
                .add_attribute("timestamp", env.block.time.seconds().to_string()),
        ))
}

/// Update the operator list. Admin only.
pub fn update_operators(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    add: Vec<String>,
    remove: Vec<String>,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    if info.sender != config.admin {
        return Err(ContractError::Unauthorized {
            reason: "only admin can update operators".to_string(),
        });
    }

    for addr_str in &remove {
        let addr = deps.api.addr_validate(addr_str)?;
        config.operators.retain(|a| a != &addr);
    }

    for addr_str in &add {
        let addr = deps.api.addr_validate(addr_str)?;
        if !config.operators.contains(&addr) {
            config.operators.push(addr);
        }
    }

    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_operators")
        .add_attribute("added", add.join(","))
        .add_attribute("removed", remove.join(",")))
}
