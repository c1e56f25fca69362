use soroban_sdk::contracterror;

/// Errors surfaced by both token contracts.
///
/// Codes are stable: clients match on the numeric value.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    /// Caller is not the ledger's minter
    Unauthorized = 1,
    /// Amount argument is negative
    InvalidAmount = 2,
    /// Holder balance is below the requested debit
    InsufficientBalance = 3,
    /// Spender allowance is below the requested debit
    InsufficientAllowance = 4,
    /// Credit would overflow i128
    Overflow = 5,
}
