use anchor_lang::prelude::*;

/// Seed of the single raffle PDA. One raffle per deployed program.
#[constant]
pub const RAFFLE_SEED: &[u8] = b"raffle";

/// Upper bound on entries per round. Must match `#[max_len]` on `Raffle::players`.
pub const MAX_PLAYERS: usize = 100;

/// Random words consumed per resolution.
#[constant]
pub const NUM_WORDS: u32 = 1;

/// Size of a revealed Switchboard value.
pub const RANDOMNESS_LEN: usize = 32;
