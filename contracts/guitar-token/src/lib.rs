#![no_std]

mod certora_specs;

use soroban_sdk::{contract, contractimpl, Address, Env, String};
use token_ledger::storage::{read_allowance, read_balance, read_metadata, read_minter, read_total_supply};
use token_types::{TokenError, TokenMetadata, GUITAR_NAME, GUITAR_SYMBOL, TOKEN_DECIMALS};

/// The primary token. Only the minter fixed at construction can issue supply.
#[contract]
pub struct GuitarToken;

#[contractimpl]
impl GuitarToken {
    /// Deploy the token with its minter
    pub fn __constructor(env: Env, minter: Address) {
        let metadata = TokenMetadata::new(&env, GUITAR_NAME, GUITAR_SYMBOL, TOKEN_DECIMALS);
        token_ledger::initialize(&env, &minter, &metadata);
    }

    /// Issue `amount` new tokens to `to`
    ///
    /// # Errors
    /// * `Unauthorized` - `caller` is not the minter
    /// * `InvalidAmount` - `amount` is negative
    /// * `Overflow` - balance or supply would exceed i128
    pub fn mint_for(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        token_ledger::require_minter(&env, &caller)?;
        token_ledger::mint(&env, &to, amount)
    }

    /// Move `amount` from `from` to `to`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        token_ledger::move_balance(&env, &from, &to, amount)
    }

    /// Let `spender` move up to `amount` of `owner`'s balance
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), TokenError> {
        owner.require_auth();
        token_ledger::approve(&env, &owner, &spender, amount)
    }

    /// Move `amount` from `from` to `to` using `spender`'s allowance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), TokenError> {
        spender.require_auth();
        token_ledger::spend_allowance(&env, &spender, &from, &to, amount)
    }

    // === View Functions ===

    pub fn balance_of(env: Env, id: Address) -> i128 {
        read_balance(&env, &id)
    }

    pub fn total_supply(env: Env) -> i128 {
        read_total_supply(&env)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        read_allowance(&env, &owner, &spender)
    }

    pub fn minter(env: Env) -> Address {
        read_minter(&env)
    }

    pub fn name(env: Env) -> String {
        read_metadata(&env).name
    }

    pub fn symbol(env: Env) -> String {
        read_metadata(&env).symbol
    }

    pub fn decimals(env: Env) -> u32 {
        read_metadata(&env).decimals
    }
}
