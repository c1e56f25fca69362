// ============================================================================
// SUPPLY SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. mint_for by the minter raises balance and supply by exactly the amount
// 2. mint_for by anyone else fails and changes nothing
// 3. transfer conserves the sum of the two balances and the supply
//
// ============================================================================

#[cfg(feature = "certora")]
use soroban_sdk::{Address, Env};

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use crate::GuitarToken;

#[cfg(feature = "certora")]
use token_ledger::invariants::{mint_accounted, transfer_conserves};

/// RULE: Minting by the minter adds exactly `amount` to balance and supply
#[cfg(feature = "certora")]
#[rule]
pub fn mint_for_increases_balance_and_supply(env: Env, minter: Address, to: Address, amount: i128) {
    cvlr_assume!(amount >= 0);

    GuitarToken::__constructor(env.clone(), minter.clone());

    let balance_before = GuitarToken::balance_of(env.clone(), to.clone());
    let supply_before = GuitarToken::total_supply(env.clone());
    cvlr_assume!(supply_before <= i128::MAX - amount);

    let result = GuitarToken::mint_for(env.clone(), minter, to.clone(), amount);
    cvlr_assert!(result.is_ok());

    let balance_after = GuitarToken::balance_of(env.clone(), to);
    let supply_after = GuitarToken::total_supply(env);

    cvlr_assert!(mint_accounted(
        balance_before,
        balance_after,
        supply_before,
        supply_after,
        amount
    ));
}

/// RULE: Only the minter can mint
#[cfg(feature = "certora")]
#[rule]
pub fn mint_for_rejects_non_minter(env: Env, minter: Address, caller: Address, to: Address, amount: i128) {
    cvlr_assume!(caller != minter);

    GuitarToken::__constructor(env.clone(), minter);

    let supply_before = GuitarToken::total_supply(env.clone());
    let result = GuitarToken::mint_for(env.clone(), caller, to, amount);

    cvlr_assert!(result.is_err());
    cvlr_assert!(GuitarToken::total_supply(env) == supply_before);
}

/// RULE: Transfer conserves the pair sum and leaves supply alone
#[cfg(feature = "certora")]
#[rule]
pub fn transfer_conserves_supply(env: Env, minter: Address, from: Address, to: Address, amount: i128) {
    cvlr_assume!(from != to);

    GuitarToken::__constructor(env.clone(), minter);

    let from_before = GuitarToken::balance_of(env.clone(), from.clone());
    let to_before = GuitarToken::balance_of(env.clone(), to.clone());
    let supply_before = GuitarToken::total_supply(env.clone());

    let result = GuitarToken::transfer(env.clone(), from.clone(), to.clone(), amount);
    cvlr_satisfy!(result.is_ok());

    let from_after = GuitarToken::balance_of(env.clone(), from);
    let to_after = GuitarToken::balance_of(env.clone(), to);

    cvlr_assert!(transfer_conserves(from_before, to_before, from_after, to_after));
    cvlr_assert!(GuitarToken::total_supply(env) == supply_before);
}

// ============================================================================
// UNIT TESTS
// ============================================================================
