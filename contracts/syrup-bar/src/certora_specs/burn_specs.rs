// ============================================================================
// BURN SPECIFICATIONS
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume};

#[cfg(feature = "certora")]
use crate::SyrupBar;

#[cfg(feature = "certora")]
use token_ledger::invariants::{burn_accounted, supply_covers_balance};

/// RULE: Burning within balance removes exactly `amount` from balance and supply
#[cfg(feature = "certora")]
#[rule]
pub fn burn_decreases_balance_and_supply(
    env: Env,
    minter: Address,
    guitar: Address,
    holder: Address,
    mint_amount: i128,
    burn_amount: i128,
) {
    cvlr_assume!(mint_amount >= 0);
    cvlr_assume!(burn_amount >= 0 && burn_amount <= mint_amount);

    SyrupBar::__constructor(env.clone(), minter.clone(), guitar);
    let minted = SyrupBar::mint(env.clone(), minter.clone(), holder.clone(), mint_amount);
    cvlr_assume!(minted.is_ok());

    let balance_before = SyrupBar::balance_of(env.clone(), holder.clone());
    let supply_before = SyrupBar::total_supply(env.clone());

    let result = SyrupBar::burn(env.clone(), minter, holder.clone(), burn_amount);
    cvlr_assert!(result.is_ok());

    let balance_after = SyrupBar::balance_of(env.clone(), holder);
    let supply_after = SyrupBar::total_supply(env);

    cvlr_assert!(burn_accounted(
        balance_before,
        balance_after,
        supply_before,
        supply_after,
        burn_amount
    ));
    cvlr_assert!(supply_covers_balance(supply_after, balance_after));
}

/// RULE: Burning more than the balance fails and changes nothing
#[cfg(feature = "certora")]
#[rule]
pub fn burn_over_balance_fails(env: Env, minter: Address, guitar: Address, holder: Address, amount: i128) {
    SyrupBar::__constructor(env.clone(), minter.clone(), guitar);

    let balance_before = SyrupBar::balance_of(env.clone(), holder.clone());
    cvlr_assume!(amount > balance_before);

    let result = SyrupBar::burn(env.clone(), minter, holder.clone(), amount);

    cvlr_assert!(result.is_err());
    cvlr_assert!(SyrupBar::balance_of(env, holder) == balance_before);
}

/// RULE: Only the minter can burn
#[cfg(feature = "certora")]
#[rule]
pub fn burn_rejects_non_minter(
    env: Env,
    minter: Address,
    guitar: Address,
    caller: Address,
    holder: Address,
    amount: i128,
) {
    cvlr_assume!(caller != minter);

    SyrupBar::__constructor(env.clone(), minter, guitar);

    let supply_before = SyrupBar::total_supply(env.clone());
    let result = SyrupBar::burn(env.clone(), caller, holder, amount);

    cvlr_assert!(result.is_err());
    cvlr_assert!(SyrupBar::total_supply(env) == supply_before);
}

// ============================================================================
// UNIT TESTS
// ============================================================================
