use crate::balance::{check_nonnegative_amount, move_balance};
use crate::storage::{read_allowance, write_allowance};
use soroban_sdk::{Address, Env};
use token_types::TokenError;

/// Set the allowance `owner` grants `spender`, replacing any previous value
pub fn approve(env: &Env, owner: &Address, spender: &Address, amount: i128) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;
    write_allowance(env, owner, spender, amount);
    Ok(())
}

/// Move `amount` from `from` to `to` on behalf of `spender`, consuming allowance.
///
/// Both the allowance and the balance are checked before anything is written.
pub fn spend_allowance(
    env: &Env,
    spender: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TokenError> {
    check_nonnegative_amount(amount)?;

    let allowance = read_allowance(env, from, spender);
    if allowance < amount {
        return Err(TokenError::InsufficientAllowance);
    }

    move_balance(env, from, to, amount)?;
    write_allowance(env, from, spender, allowance - amount);
    Ok(())
}
