use cosmwasm_std::Uint256;
use sha2::{Digest, Sha256};

/// Expand a 32-byte beacon output into `num_words` independent words.
///
/// `word_i = sha256( randomness || request_id_u64_be || i_u32_be )`, read as a
/// big-endian 256-bit integer. Binding the request id keeps two requests that
/// are fulfilled from the same beacon from receiving identical words.
pub fn expand_random_words(randomness: &[u8; 32], request_id: u64, num_words: u32) -> Vec<Uint256> {
    (0..num_words)
        .map(|i| {
            let mut hasher = Sha256::new();
            hasher.update(randomness);
            hasher.update(request_id.to_be_bytes());
            hasher.update(i.to_be_bytes());
            let digest: [u8; 32] = hasher.finalize().into();
            Uint256::from_be_bytes(digest)
        })
        .collect()
}

/// Reduce a random word to an index in `0..len`.
///
/// Returns `None` when `len` is zero.
pub fn word_index(word: &Uint256, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let remainder = *word % Uint256::from(len as u64);
    // remainder < len <= u64::MAX, so only the low 8 bytes can be set
    let bytes = remainder.to_be_bytes();
    let index = bytes[24..]
        .iter()
        .fold(0u64, |acc, b| (acc << 8) | u64::from(*b));
    Some(index as usize)
}
