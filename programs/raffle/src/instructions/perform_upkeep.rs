use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{NUM_WORDS, RAFFLE_SEED};
use crate::error::RaffleError;
use crate::events::WinnerRequested;
use crate::state::Raffle;

/// Accounts required to close entries and bind the round to a randomness request.
///
/// Callable by anyone (normally the automation agent). The request is a
/// Switchboard randomness account committed in the previous slot.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// The account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// Randomness account from Switchboard.
    /// CHECK: Owner is constrained here; data is validated manually within the handler.
    #[account(owner = raffle.config.oracle_program @ RaffleError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;
    let raffle = &mut ctx.accounts.raffle;

    let status = raffle.check_upkeep(clock.unix_timestamp);
    if !status.upkeep_needed {
        msg!(
            "Upkeep not needed: balance={}, players={}, state={:?}, elapsed={}s",
            status.balance,
            status.num_players,
            status.state,
            status.elapsed
        );
        return Err(RaffleError::ResolutionNotDue.into());
    }

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

    msg!("Seed slot: {}", randomness_data.seed_slot);
    msg!("Current slot: {}", clock.slot);
    raffle.check_commit(&randomness_data.queue, randomness_data.seed_slot, clock.slot)?;

    let request = ctx.accounts.randomness_account_data.key();
    let request_slot = randomness_data.seed_slot;
    let round = raffle.begin_resolution(request, request_slot, clock.unix_timestamp)?;

    msg!("Round {} calculating, request {}", round, request);

    emit!(WinnerRequested {
        round,
        request,
        request_slot,
        num_words: NUM_WORDS,
        callback_compute_units: raffle.config.callback_compute_units,
        request_confirmations: raffle.config.request_confirmations,
    });

    Ok(())
}
