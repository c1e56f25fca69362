use soroban_sdk::{contracttype, Env, String};

/// Descriptive token data - written once at construction
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    /// Human-readable name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Decimal places used by display layers
    pub decimals: u32,
}

impl TokenMetadata {
    pub fn new(env: &Env, name: &str, symbol: &str, decimals: u32) -> Self {
        Self {
            name: String::from_str(env, name),
            symbol: String::from_str(env, symbol),
            decimals,
        }
    }
}
