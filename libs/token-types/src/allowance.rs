use soroban_sdk::{contracttype, Address};

/// Key for an allowance entry: `owner` lets `spender` move its balance
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}
