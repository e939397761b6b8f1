pub mod msg;
pub mod types;
pub mod words;

pub use msg::{ConsumerExecuteMsg, CoordinatorExecuteMsg, CoordinatorQueryMsg};
pub use types::{RafflePhase, RandomnessRequest};
pub use words::{expand_random_words, word_index};
