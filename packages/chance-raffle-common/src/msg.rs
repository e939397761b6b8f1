use cosmwasm_schema::cw_serde;
use cosmwasm_std::Uint256;

/// Coordinator messages a consumer contract sends.
///
/// Serializes identically to the matching variant of the coordinator's own
/// `ExecuteMsg`, so consumers don't need to depend on the coordinator crate.
#[cw_serde]
pub enum CoordinatorExecuteMsg {
    RequestRandomWords {
        key_hash: String,
        request_confirmations: u64,
        callback_gas_limit: u64,
        num_words: u32,
    },
}

/// Coordinator queries a consumer relies on.
#[cw_serde]
pub enum CoordinatorQueryMsg {
    /// Id that the next `RequestRandomWords` will be assigned.
    NextRequestId {},
}

/// Callback the coordinator delivers to the requesting consumer.
#[cw_serde]
pub enum ConsumerExecuteMsg {
    RawFulfillRandomWords {
        request_id: u64,
        random_words: Vec<Uint256>,
    },
}
