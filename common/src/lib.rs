pub mod types;

pub mod selection{
    use crate::types::U256;

    /// Index of the winning entry for a pool of `len` participants.
    /// The pool must be non-empty by the time a word is delivered.
    pub fn winning_index(word: &U256, len: u64) -> u64 {
        assert!(len > 0, "cannot pick a winner from an empty pool");

        return (*word % U256::from(len)).as_u64();
    }
}
