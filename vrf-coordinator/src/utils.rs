use near_sdk::env;

use common::types::{RandomWord, RequestId};

pub mod storage_keys{
    use near_sdk::BorshStorageKey;
    use near_sdk::borsh::{self, BorshSerialize};

    #[derive(BorshStorageKey, BorshSerialize)]
    pub enum StorageKeys {
        Subscriptions,
        Requests,
    }
}

pub mod gas{
    use near_sdk::Gas;

    pub const ON_RANDOM_WORDS_DELIVERED: Gas = Gas(10_000_000_000_000);
}

/// Deterministic word for a request: the delivered randomness is a pure
/// function of the request id and word index, so a redelivered request
/// yields the same words.
pub(crate) fn derive_word(request_id: RequestId, index: u32) -> RandomWord {
    let seed = [&request_id.to_le_bytes()[..], &index.to_le_bytes()[..]].concat();
    return RandomWord::from_little_endian(&env::keccak256_array(&seed));
}
