#![no_std]

mod certora_specs;
mod guitar;
mod storage;

use guitar::{guitar_balance, guitar_transfer};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String};
use storage::{get_guitar, set_guitar};
use token_ledger::storage::{read_allowance, read_balance, read_metadata, read_minter, read_total_supply};
use token_types::{TokenError, TokenMetadata, SYRUP_NAME, SYRUP_SYMBOL, TOKEN_DECIMALS};

/// Syrup bar: a minter-gated token that also holds primary tokens and pays
/// them out with a clamped transfer.
#[contract]
pub struct SyrupBar;

#[contractimpl]
impl SyrupBar {
    /// Deploy the syrup bar with its minter and the primary token it pays out
    pub fn __constructor(env: Env, minter: Address, guitar: Address) {
        let metadata = TokenMetadata::new(&env, SYRUP_NAME, SYRUP_SYMBOL, TOKEN_DECIMALS);
        token_ledger::initialize(&env, &minter, &metadata);
        set_guitar(&env, &guitar);
    }

    /// Issue `amount` syrup to `to`
    pub fn mint(env: Env, caller: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        token_ledger::require_minter(&env, &caller)?;
        token_ledger::mint(&env, &to, amount)
    }

    /// Destroy `amount` syrup held by `from`
    ///
    /// # Errors
    /// * `Unauthorized` - `caller` is not the minter
    /// * `InvalidAmount` - `amount` is negative
    /// * `InsufficientBalance` - `from` holds less than `amount`
    pub fn burn(env: Env, caller: Address, from: Address, amount: i128) -> Result<(), TokenError> {
        token_ledger::require_minter(&env, &caller)?;
        token_ledger::burn(&env, &from, amount)
    }

    /// Pay out up to `amount` primary tokens held by this contract to `to`
    ///
    /// Moves `min(amount, held)`; asking for more than is held never fails.
    ///
    /// # Returns
    /// The amount actually moved
    pub fn safe_guitar_transfer(env: Env, caller: Address, to: Address, amount: i128) -> Result<i128, TokenError> {
        token_ledger::require_minter(&env, &caller)?;
        token_ledger::check_nonnegative_amount(amount)?;

        let guitar = get_guitar(&env);
        let this = env.current_contract_address();

        let held = guitar_balance(&env, &guitar, &this);
        let moved = token_ledger::clamp_to_available(amount, held);

        if moved > 0 {
            guitar_transfer(&env, &guitar, &this, &to, moved);
        }

        log!(&env, "safe_guitar_transfer", to, amount, moved);
        Ok(moved)
    }

    /// Move `amount` syrup from `from` to `to`
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), TokenError> {
        from.require_auth();
        token_ledger::move_balance(&env, &from, &to, amount)
    }

    /// Let `spender` move up to `amount` of `owner`'s syrup
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), TokenError> {
        owner.require_auth();
        token_ledger::approve(&env, &owner, &spender, amount)
    }

    /// Move `amount` syrup from `from` to `to` using `spender`'s allowance
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

    /// Primary token address
    pub fn guitar(env: Env) -> Address {
        get_guitar(&env)
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

#[cfg(test)]
mod tests {
    use super::*;
    use guitar_token::{GuitarToken, GuitarTokenClient};
    use soroban_sdk::testutils::{Address as _, MockAuth, MockAuthInvoke};
    use soroban_sdk::{Address, Env, IntoVal, String};

    /// Deploy the primary token and a syrup bar pointing at it, same minter
    fn setup_pair(env: &Env) -> (Address, Address, Address) {
        let minter = Address::generate(env);
        let guitar_id = env.register(GuitarToken, (minter.clone(),));
        let syrup_id = env.register(SyrupBar, (minter.clone(), guitar_id.clone()));
        (minter, guitar_id, syrup_id)
    }

    // === Construction Tests ===

    #[test]
    fn test_constructor() {
        let env = Env::default();
        let (minter, guitar_id, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);

        assert_eq!(syrup.minter(), minter);
        assert_eq!(syrup.guitar(), guitar_id);
        assert_eq!(syrup.name(), String::from_str(&env, "Guitar SyrupBar Token"));
        assert_eq!(syrup.symbol(), String::from_str(&env, "GSYRUP"));
        assert_eq!(syrup.decimals(), 18);
        assert_eq!(syrup.total_supply(), 0);
    }

    // === Mint / Burn Tests ===

    #[test]
    fn test_mint() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, _, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);

        syrup.mint(&minter, &alice, &1000);

        assert_eq!(syrup.balance_of(&alice), 1000);
        assert_eq!(syrup.total_supply(), 1000);
    }

    #[test]
    fn test_burn() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, _, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);

        syrup.mint(&minter, &alice, &1000);
        syrup.mint(&minter, &bob, &1000);
        assert_eq!(syrup.total_supply(), 2000);

        syrup.burn(&minter, &alice, &200);

        assert_eq!(syrup.balance_of(&alice), 800);
        assert_eq!(syrup.balance_of(&bob), 1000);
        assert_eq!(syrup.total_supply(), 1800);
    }

    #[test]
    fn test_burn_entire_balance() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, _, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);

        syrup.mint(&minter, &alice, &1000);
        syrup.burn(&minter, &alice, &1000);

        assert_eq!(syrup.balance_of(&alice), 0);
        assert_eq!(syrup.total_supply(), 0);
    }

    #[test]
    fn test_burn_over_balance_fails() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, _, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);

        syrup.mint(&minter, &alice, &1000);

        let result = syrup.try_burn(&minter, &alice, &1001);
        assert_eq!(result, Err(Ok(TokenError::InsufficientBalance)));
        assert_eq!(syrup.balance_of(&alice), 1000);
        assert_eq!(syrup.total_supply(), 1000);
    }

    #[test]
    fn test_mint_and_burn_unauthorized() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, _, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);
        let carol = Address::generate(&env);

        syrup.mint(&minter, &alice, &1000);

        assert_eq!(
            syrup.try_mint(&carol, &carol, &500),
            Err(Ok(TokenError::Unauthorized))
        );
        assert_eq!(
            syrup.try_burn(&carol, &alice, &500),
            Err(Ok(TokenError::Unauthorized))
        );

        assert_eq!(syrup.balance_of(&alice), 1000);
        assert_eq!(syrup.balance_of(&carol), 0);
        assert_eq!(syrup.total_supply(), 1000);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, _, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);

        assert_eq!(
            syrup.try_mint(&minter, &alice, &-10),
            Err(Ok(TokenError::InvalidAmount))
        );
        assert_eq!(
            syrup.try_burn(&minter, &alice, &-10),
            Err(Ok(TokenError::InvalidAmount))
        );
        assert_eq!(
            syrup.try_safe_guitar_transfer(&minter, &alice, &-10),
            Err(Ok(TokenError::InvalidAmount))
        );
    }

    // === Safe Transfer Tests ===

    #[test]
    fn test_safe_guitar_transfer() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, guitar_id, syrup_id) = setup_pair(&env);
        let guitar = GuitarTokenClient::new(&env, &guitar_id);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let bob = Address::generate(&env);

        assert_eq!(guitar.balance_of(&syrup_id), 0);

        guitar.mint_for(&minter, &syrup_id, &1000);

        let moved = syrup.safe_guitar_transfer(&minter, &bob, &200);
        assert_eq!(moved, 200);
        assert_eq!(guitar.balance_of(&bob), 200);
        assert_eq!(guitar.balance_of(&syrup_id), 800);

        // Only the remaining 800 can move
        let moved = syrup.safe_guitar_transfer(&minter, &bob, &2000);
        assert_eq!(moved, 800);
        assert_eq!(guitar.balance_of(&bob), 1000);
        assert_eq!(guitar.balance_of(&syrup_id), 0);

        // Transfers never touch primary supply
        assert_eq!(guitar.total_supply(), 1000);
    }

    #[test]
    fn test_safe_guitar_transfer_with_nothing_held() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, guitar_id, syrup_id) = setup_pair(&env);
        let guitar = GuitarTokenClient::new(&env, &guitar_id);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let bob = Address::generate(&env);

        let moved = syrup.safe_guitar_transfer(&minter, &bob, &500);

        assert_eq!(moved, 0);
        assert_eq!(guitar.balance_of(&bob), 0);
        assert_eq!(guitar.total_supply(), 0);
    }

    #[test]
    fn test_safe_guitar_transfer_exact_balance() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, guitar_id, syrup_id) = setup_pair(&env);
        let guitar = GuitarTokenClient::new(&env, &guitar_id);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let bob = Address::generate(&env);

        guitar.mint_for(&minter, &syrup_id, &300);

        let moved = syrup.safe_guitar_transfer(&minter, &bob, &300);
        assert_eq!(moved, 300);
        assert_eq!(guitar.balance_of(&bob), 300);
        assert_eq!(guitar.balance_of(&syrup_id), 0);
    }

    #[test]
    fn test_safe_guitar_transfer_unauthorized() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, guitar_id, syrup_id) = setup_pair(&env);
        let guitar = GuitarTokenClient::new(&env, &guitar_id);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let carol = Address::generate(&env);

        guitar.mint_for(&minter, &syrup_id, &1000);

        let result = syrup.try_safe_guitar_transfer(&carol, &carol, &1000);
        assert_eq!(result, Err(Ok(TokenError::Unauthorized)));

        assert_eq!(guitar.balance_of(&carol), 0);
        assert_eq!(guitar.balance_of(&syrup_id), 1000);
    }

    #[test]
    fn test_safe_guitar_transfer_needs_only_minter_signature() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, guitar_id, syrup_id) = setup_pair(&env);
        let guitar = GuitarTokenClient::new(&env, &guitar_id);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let bob = Address::generate(&env);

        guitar.mint_for(&minter, &syrup_id, &1000);

        // The nested primary-token transfer is authorized by the syrup bar itself
        env.mock_auths(&[MockAuth {
            address: &minter,
            invoke: &MockAuthInvoke {
                contract: &syrup_id,
                fn_name: "safe_guitar_transfer",
                args: (&minter, &bob, 400_i128).into_val(&env),
                sub_invokes: &[],
            },
        }]);
        syrup.safe_guitar_transfer(&minter, &bob, &400);

        assert_eq!(guitar.balance_of(&bob), 400);
        assert_eq!(guitar.balance_of(&syrup_id), 600);
    }

    #[test]
    fn test_syrup_and_guitar_balances_are_separate() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, guitar_id, syrup_id) = setup_pair(&env);
        let guitar = GuitarTokenClient::new(&env, &guitar_id);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);

        syrup.mint(&minter, &alice, &1000);

        assert_eq!(syrup.balance_of(&alice), 1000);
        assert_eq!(guitar.balance_of(&alice), 0);
        assert_eq!(guitar.total_supply(), 0);
    }

    // === Transfer Tests ===

    #[test]
    fn test_transfer_and_transfer_from() {
        let env = Env::default();
        env.mock_all_auths();

        let (minter, _, syrup_id) = setup_pair(&env);
        let syrup = SyrupBarClient::new(&env, &syrup_id);
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        let carol = Address::generate(&env);

        syrup.mint(&minter, &alice, &1000);
        syrup.transfer(&alice, &bob, &300);

        syrup.approve(&bob, &carol, &100);
        syrup.transfer_from(&carol, &bob, &carol, &100);

        assert_eq!(syrup.balance_of(&alice), 700);
        assert_eq!(syrup.balance_of(&bob), 200);
        assert_eq!(syrup.balance_of(&carol), 100);
        assert_eq!(syrup.allowance(&bob, &carol), 0);
        assert_eq!(syrup.total_supply(), 1000);
    }
}
