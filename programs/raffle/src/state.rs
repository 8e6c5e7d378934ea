use anchor_lang::prelude::*;

use crate::constants::{MAX_PLAYERS, NUM_WORDS};
use crate::error::RaffleError;

/// Lifecycle of a round. `Open` takes entries, `Calculating` waits on the oracle.
#[derive(
    AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Default, Debug,
)]
pub enum RaffleState {
    #[default]
    Open,
    Calculating,
}

/// Parameters fixed at initialization.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace, Debug)]
pub struct RaffleConfig {
    /// Minimum payment (in lamports) for one entry.
    pub entrance_fee: u64,

    /// Seconds that must pass between round start and resolution.
    pub interval: i64,

    /// Program that owns randomness accounts (the Switchboard on-demand program).
    pub oracle_program: Pubkey,

    /// Switchboard queue every committed randomness account must belong to.
    pub oracle_queue: Pubkey,

    /// Compute units the settling transaction is expected to request.
    pub callback_compute_units: u32,

    /// Slots the reveal must trail the commit by.
    pub request_confirmations: u64,
}

impl RaffleConfig {
    pub fn validate(&self) -> std::result::Result<(), RaffleError> {
        let numbers_set = self.entrance_fee > 0
            && self.interval > 0
            && self.callback_compute_units > 0
            && self.request_confirmations > 0;
        let keys_set =
            self.oracle_program != Pubkey::default() && self.oracle_queue != Pubkey::default();

        if numbers_set && keys_set {
            Ok(())
        } else {
            Err(RaffleError::InvalidConfig)
        }
    }
}

#[account]
#[derive(InitSpace, Debug, PartialEq)]
pub struct Raffle {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// The account that created the raffle and paid for its space. Informational only.
    pub authority: Pubkey,

    pub config: RaffleConfig,

    pub state: RaffleState,

    /// One slot per entry, in entry order. A player may appear many times.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// Lamports collected this round. The PDA holds these on top of its rent reserve.
    pub balance: u64,

    /// UNIX timestamp of the round start or of the last payout.
    pub last_timestamp: i64,

    /// Randomness account committed for the resolution in flight.
    pub pending_request: Option<Pubkey>,

    /// Slot the pending randomness was committed at.
    pub request_slot: u64,

    /// Winner of the last settled round.
    pub recent_winner: Option<Pubkey>,

    /// Number of settled rounds.
    pub round: u64,
}

/// Result of `Raffle::check_upkeep`. A `false` verdict means "try later".
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
    pub elapsed: i64,
    pub num_players: u64,
    pub balance: u64,
    pub state: RaffleState,
}

/// Read-only view returned by the `get_raffle` instruction.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct RaffleSnapshot {
    pub authority: Pubkey,
    pub entrance_fee: u64,
    pub interval: i64,
    pub state: RaffleState,
    pub num_players: u64,
    pub balance: u64,
    pub last_timestamp: i64,
    pub pending_request: Option<Pubkey>,
    pub recent_winner: Option<Pubkey>,
    pub round: u64,
    pub num_words: u32,
    pub request_confirmations: u64,
    pub callback_compute_units: u32,
}

/// Outcome of a settled round.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Settlement {
    pub round: u64,
    pub request: Pubkey,
    pub winner: Pubkey,
    pub prize: u64,
}

/// Index of the winning entry. Modulo bias is accepted.
pub fn winner_index(random_value: u64, num_players: usize) -> Option<usize> {
    if num_players == 0 {
        return None;
    }
    Some((random_value % num_players as u64) as usize)
}

impl Raffle {
    pub fn new(
        config: RaffleConfig,
        authority: Pubkey,
        bump: u8,
        now: i64,
    ) -> std::result::Result<Self, RaffleError> {
        config.validate()?;

        Ok(Self {
            bump,
            authority,
            config,
            state: RaffleState::Open,
            players: Vec::new(),
            balance: 0,
            last_timestamp: now,
            pending_request: None,
            request_slot: 0,
            recent_winner: None,
            round: 0,
        })
    }

    pub fn num_players(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn player(&self, index: u64) -> std::result::Result<Pubkey, RaffleError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.players.get(i))
            .copied()
            .ok_or(RaffleError::PlayerIndexOutOfRange)
    }

    /// Records one entry for `player` paying `paid` lamports.
    ///
    /// Moving the lamports is the caller's job; this only updates the books,
    /// and only once every check has passed. Returns the new player count.
    pub fn enter(&mut self, player: Pubkey, paid: u64) -> std::result::Result<u64, RaffleError> {
        if paid < self.config.entrance_fee {
            return Err(RaffleError::InsufficientPayment);
        }
        if self.state != RaffleState::Open {
            return Err(RaffleError::RoundNotOpen);
        }
        if self.players.len() >= MAX_PLAYERS {
            return Err(RaffleError::RaffleFull);
        }
        let balance = self
            .balance
            .checked_add(paid)
            .ok_or(RaffleError::MathOverflow)?;

        self.players.push(player);
        self.balance = balance;

        Ok(self.num_players())
    }

    pub fn check_upkeep(&self, now: i64) -> UpkeepStatus {
        let elapsed = now.saturating_sub(self.last_timestamp);
        let is_open = self.state == RaffleState::Open;
        let time_passed = elapsed >= self.config.interval;
        let has_players = !self.players.is_empty();
        let has_balance = self.balance > 0;

        UpkeepStatus {
            upkeep_needed: is_open && time_passed && has_players && has_balance,
            is_open,
            time_passed,
            has_players,
            has_balance,
            elapsed,
            num_players: self.num_players(),
            balance: self.balance,
            state: self.state,
        }
    }

    /// Closes entries and binds the round to `request`.
    ///
    /// The state flips to `Calculating` here, so a second trigger before the
    /// result arrives fails `ResolutionNotDue`.
    pub fn begin_resolution(
        &mut self,
        request: Pubkey,
        request_slot: u64,
        now: i64,
    ) -> std::result::Result<u64, RaffleError> {
        if !self.check_upkeep(now).upkeep_needed {
            return Err(RaffleError::ResolutionNotDue);
        }

        self.state = RaffleState::Calculating;
        self.pending_request = Some(request);
        self.request_slot = request_slot;

        Ok(self.round)
    }

    pub fn ensure_pending(&self, request: &Pubkey) -> std::result::Result<(), RaffleError> {
        match self.pending_request {
            Some(pending) if self.state == RaffleState::Calculating && pending == *request => {
                Ok(())
            }
            _ => Err(RaffleError::UnknownRequest),
        }
    }

    /// Accepts a Switchboard commit for a new request: it must sit on the
    /// configured queue and have been made in the previous slot.
    pub fn check_commit(
        &self,
        queue: &Pubkey,
        seed_slot: u64,
        current_slot: u64,
    ) -> std::result::Result<(), RaffleError> {
        if *queue != self.config.oracle_queue {
            return Err(RaffleError::InvalidOracleQueue);
        }
        if seed_slot != current_slot.saturating_sub(1) {
            return Err(RaffleError::RandomnessAlreadyRevealed);
        }
        Ok(())
    }

    /// Accepts the reveal of the pending request.
    ///
    /// The account's commit must still be the one recorded by `begin_resolution`,
    /// otherwise the same account could be re-committed until the draw suits
    /// the caller.
    pub fn check_reveal(
        &self,
        request: &Pubkey,
        seed_slot: u64,
        current_slot: u64,
    ) -> std::result::Result<(), RaffleError> {
        self.ensure_pending(request)?;
        if seed_slot != self.request_slot {
            return Err(RaffleError::RandomnessRecommitted);
        }
        let confirmed_at = self
            .request_slot
            .saturating_add(self.config.request_confirmations);
        if current_slot < confirmed_at {
            return Err(RaffleError::RandomnessNotResolved);
        }
        Ok(())
    }

    /// Settles the pending request with `random_value`.
    ///
    /// `payout` receives the winner and the full balance and must move the
    /// lamports. It runs before any field is written: if it fails the raffle is
    /// left exactly as it was, still `Calculating`, and the same request can be
    /// settled again.
    pub fn complete_resolution<F>(
        &mut self,
        request: Pubkey,
        random_value: u64,
        now: i64,
        payout: F,
    ) -> std::result::Result<Settlement, RaffleError>
    where
        F: FnOnce(Pubkey, u64) -> Result<()>,
    {
        self.ensure_pending(&request)?;

        let index =
            winner_index(random_value, self.players.len()).ok_or(RaffleError::PayoutFailed)?;
        let winner = self.players[index];
        let prize = self.balance;
        let settled_round = self.round;
        let next_round = settled_round
            .checked_add(1)
            .ok_or(RaffleError::MathOverflow)?;

        if let Err(err) = payout(winner, prize) {
            msg!("Payout of {} lamports to {} failed: {}", prize, winner, err);
            return Err(RaffleError::PayoutFailed);
        }

        self.recent_winner = Some(winner);
        self.players.clear();
        self.balance = 0;
        self.last_timestamp = now;
        self.pending_request = None;
        self.request_slot = 0;
        self.state = RaffleState::Open;
        self.round = next_round;

        Ok(Settlement {
            round: settled_round,
            request,
            winner,
            prize,
        })
    }

    pub fn snapshot(&self) -> RaffleSnapshot {
        RaffleSnapshot {
            authority: self.authority,
            entrance_fee: self.config.entrance_fee,
            interval: self.config.interval,
            state: self.state,
            num_players: self.num_players(),
            balance: self.balance,
            last_timestamp: self.last_timestamp,
            pending_request: self.pending_request,
            recent_winner: self.recent_winner,
            round: self.round,
            num_words: NUM_WORDS,
            request_confirmations: self.config.request_confirmations,
            callback_compute_units: self.config.callback_compute_units,
        }
    }
}
