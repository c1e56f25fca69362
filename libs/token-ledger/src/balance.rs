use crate::storage::{read_balance, read_total_supply, write_balance, write_total_supply};
use soroban_sdk::{log, Address, Env};
use token_types::TokenError;

/// Reject negative amounts at the boundary. Zero is a valid amount.
pub fn check_nonnegative_amount(amount: i128) -> Result<(), TokenError> {
    if amount < 0 {
        return Err(TokenError::InvalidAmount);
    }
    Ok(())
}

/// Amount a clamped transfer actually moves: `min(requested, available)`.
///
/// Never negative, even when `available` is.
pub fn clamp_to_available(requested: i128, available: i128) -> i128 {
    requested.min(available).max(0)
}

/// Create `amount` new units in `to`'s balance
pub fn mint(env: &Env, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;

    let new_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;
    let new_supply = read_total_supply(env)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    write_balance(env, to, new_balance);
    write_total_supply(env, new_supply);

    log!(env, "mint", to.clone(), amount, new_supply);
    Ok(())
}

/// Destroy `amount` units from `from`'s balance.
///
/// Burning more than the balance fails; nothing is clamped.
pub fn burn(env: &Env, from: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;

    let balance = read_balance(env, from);
    if balance < amount {
        return Err(TokenError::InsufficientBalance);
    }
    let new_supply = read_total_supply(env)
        .checked_sub(amount)
        .ok_or(TokenError::InsufficientBalance)?;

    write_balance(env, from, balance - amount);
    write_total_supply(env, new_supply);

    log!(env, "burn", from.clone(), amount, new_supply);
    Ok(())
}

/// Move `amount` from `from` to `to`. Total supply is unchanged.
pub fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;

    let from_balance = read_balance(env, from);
    if from_balance < amount {
        return Err(TokenError::InsufficientBalance);
    }

    // Self-transfer: balance check only
    if from == to {
        return Ok(());
    }

    let to_balance = read_balance(env, to)
        .checked_add(amount)
        .ok_or(TokenError::Overflow)?;

    write_balance(env, from, from_balance - amount);
    write_balance(env, to, to_balance);

    log!(env, "transfer", from.clone(), to.clone(), amount);
    Ok(())
}
