use soroban_sdk::{contracttype, Address, Env};
use token_types::{AllowanceKey, TokenMetadata};

// ============================================================================
// SOROBAN RESOURCE LIMITS - constraints relevant to the token ledgers:
// ============================================================================
// - Read entries per tx: 100 entries / 200 KB
// - Write entries per tx: 50 entries / 132 KB
//
// Storage design:
// - Minter, metadata and total supply sit in Instance storage (read on
//   almost every call, tiny)
// - Each balance and each allowance is its own Persistent entry, so the
//   ledger never keeps an unbounded map in one entry
// - Zero balances and zero allowances are removed rather than stored
// - Worst case per call (transfer_from): instance + 2 balances + 1 allowance
// ============================================================================

/// Storage keys shared by both token contracts
#[contracttype]
#[derive(Clone)]
pub enum LedgerKey {
    /// Minter address (Instance storage)
    Minter,
    /// Token metadata (Instance storage)
    Metadata,
    /// Aggregate supply (Instance storage)
    TotalSupply,
    /// Account -> balance (Persistent storage)
    Balance(Address),
    /// (owner, spender) -> allowance (Persistent storage)
    Allowance(AllowanceKey),
}

// TTL constants
const INSTANCE_TTL_THRESHOLD: u32 = 17280; // ~1 day
const INSTANCE_TTL_EXTEND: u32 = 518400; // ~30 days
const PERSISTENT_TTL_THRESHOLD: u32 = 17280;
const PERSISTENT_TTL_EXTEND: u32 = 518400;

/// Extend instance storage TTL
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND);
}

/// Extend persistent storage TTL for a key
pub fn extend_persistent_ttl(env: &Env, key: &LedgerKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_EXTEND);
}

// === Minter ===

pub fn has_minter(env: &Env) -> bool {
    env.storage().instance().has(&LedgerKey::Minter)
}

pub fn read_minter(env: &Env) -> Address {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&LedgerKey::Minter)
        .expect("Not initialized")
}

pub fn write_minter(env: &Env, minter: &Address) {
    env.storage().instance().set(&LedgerKey::Minter, minter);
    extend_instance_ttl(env);
}

// === Metadata ===

pub fn read_metadata(env: &Env) -> TokenMetadata {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&LedgerKey::Metadata)
        .expect("Not initialized")
}

pub fn write_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&LedgerKey::Metadata, metadata);
    extend_instance_ttl(env);
}

// === Total supply ===

pub fn read_total_supply(env: &Env) -> i128 {
    extend_instance_ttl(env);
    env.storage()
        .instance()
        .get(&LedgerKey::TotalSupply)
        .unwrap_or(0)
}

pub fn write_total_supply(env: &Env, supply: i128) {
    env.storage().instance().set(&LedgerKey::TotalSupply, &supply);
    extend_instance_ttl(env);
}

// === Balance ===

pub fn read_balance(env: &Env, id: &Address) -> i128 {
    let key = LedgerKey::Balance(id.clone());
    match env.storage().persistent().get::<LedgerKey, i128>(&key) {
        Some(balance) => {
            extend_persistent_ttl(env, &key);
            balance
        }
        None => 0,
    }
}

pub fn write_balance(env: &Env, id: &Address, balance: i128) {
    let key = LedgerKey::Balance(id.clone());
    if balance == 0 {
        // Remove empty balance
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &balance);
        extend_persistent_ttl(env, &key);
    }
}

pub fn has_balance(env: &Env, id: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&LedgerKey::Balance(id.clone()))
}

// === Allowance ===

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    let key = LedgerKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    match env.storage().persistent().get::<LedgerKey, i128>(&key) {
        Some(allowance) => {
            extend_persistent_ttl(env, &key);
            allowance
        }
        None => 0,
    }
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, allowance: i128) {
    let key = LedgerKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    if allowance == 0 {
        env.storage().persistent().remove(&key);
    } else {
        env.storage().persistent().set(&key, &allowance);
        extend_persistent_ttl(env, &key);
    }
}
