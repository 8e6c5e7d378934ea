use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::{NUM_WORDS, RAFFLE_SEED, RANDOMNESS_LEN};
use crate::error::RaffleError;
use crate::events::WinnerPicked;
use crate::state::Raffle;

/// Accounts required to settle the pending request and pay the winner.
///
/// Ensures:
/// 1. The randomness account is the one committed by `perform_upkeep`.
/// 2. Its value has been revealed at least `request_confirmations` slots after the commit.
/// 3. The `winner` account is the drawn player.
#[derive(Accounts)]
pub struct FulfillRandomness<'info> {
    /// The account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [RAFFLE_SEED],
        bump = raffle.bump,
    )]
    pub raffle: Account<'info, Raffle>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: Owner is constrained here; data is validated manually within the handler.
    #[account(owner = raffle.config.oracle_program @ RaffleError::InvalidRandomnessAccount)]
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Receives the pot.
    /// CHECK: Compared against the drawn player before any lamports move.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Splits a revealed value into little-endian u64 words.
pub fn random_words(value: &[u8; RANDOMNESS_LEN]) -> [u64; NUM_WORDS as usize] {
    let mut words = [0u64; NUM_WORDS as usize];
    for (word, chunk) in words.iter_mut().zip(value.chunks_exact(8)) {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(chunk);
        *word = u64::from_le_bytes(bytes);
    }
    words
}

/// Moves `prize` lamports from the raffle PDA to `recipient`, keeping the PDA rent exempt.
fn transfer_prize(
    vault: &AccountInfo,
    recipient: &AccountInfo,
    winner: Pubkey,
    prize: u64,
    rent_reserve: u64,
) -> Result<()> {
    require_keys_eq!(*recipient.key, winner, RaffleError::PayoutFailed);

    let remaining = vault
        .lamports()
        .checked_sub(prize)
        .ok_or(RaffleError::PayoutFailed)?;
    require_gte!(remaining, rent_reserve, RaffleError::PayoutFailed);
    let credited = recipient
        .lamports()
        .checked_add(prize)
        .ok_or(RaffleError::MathOverflow)?;

    **vault.try_borrow_mut_lamports()? = remaining;
    **recipient.try_borrow_mut_lamports()? = credited;

    Ok(())
}

/// Settles the round with the revealed randomness.
///
/// Steps:
/// 1. Reject anything but the pending request, committed at the recorded slot.
/// 2. Read the revealed value and take its first word.
/// 3. Pay the full pot to `players[word % players.len()]`, then reset the round.
///
/// A failed payout aborts the whole settlement; the round stays calculating.
pub fn process_fulfill_randomness(ctx: Context<FulfillRandomness>) -> Result<()> {
    let clock = Clock::get()?;
    let request = ctx.accounts.randomness_account_data.key();
    ctx.accounts.raffle.ensure_pending(&request)?;

    let random_value = {
        let randomness_data =
            RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
                .map_err(|_| RaffleError::InvalidRandomnessAccount)?;

        msg!("Seed slot: {}", randomness_data.seed_slot);
        msg!("Request slot: {}", ctx.accounts.raffle.request_slot);
        ctx.accounts
            .raffle
            .check_reveal(&request, randomness_data.seed_slot, clock.slot)?;

        let revealed = randomness_data
            .get_value(&clock)
            .map_err(|_| RaffleError::RandomnessNotResolved)?;
        random_words(&revealed)[0]
    };

    msg!("Randomness result: {}", random_value);
    msg!("Player count: {}", ctx.accounts.raffle.num_players());

    let raffle_info = ctx.accounts.raffle.to_account_info();
    let winner_info = ctx.accounts.winner.to_account_info();
    let rent_reserve = Rent::get()?.minimum_balance(raffle_info.data_len());

    let settlement = ctx.accounts.raffle.complete_resolution(
        request,
        random_value,
        clock.unix_timestamp,
        |winner, prize| transfer_prize(&raffle_info, &winner_info, winner, prize, rent_reserve),
    )?;

    msg!(
        "Winner of round {}: {} ({} lamports)",
        settlement.round,
        settlement.winner,
        settlement.prize
    );

    emit!(WinnerPicked {
        round: settlement.round,
        request: settlement.request,
        winner: settlement.winner,
        prize: settlement.prize,
    });

    Ok(())
}
