use anchor_lang::prelude::*;

/// A player bought one entry into the current round.
#[event]
pub struct RaffleEntered {
    pub round: u64,
    pub player: Pubkey,
    pub amount: u64,
    pub num_players: u64,
}

/// Entries closed; the round waits on `request` to be revealed.
#[event]
pub struct WinnerRequested {
    pub round: u64,
    /// Randomness account committed for this round.
    pub request: Pubkey,
    pub request_slot: u64,
    pub num_words: u32,
    /// Compute budget the settling transaction should request.
    pub callback_compute_units: u32,
    pub request_confirmations: u64,
}

#[event]
pub struct WinnerPicked {
    pub round: u64,
    pub request: Pubkey,
    pub winner: Pubkey,
    pub prize: u64,
}
