// ============================================================================
// LEDGER INVARIANTS - predicates for tests and formal verification
// ============================================================================
//
// 1. BALANCE INVARIANTS
//    - Balances and supply are never negative
//    - No single balance exceeds the total supply
//
// 2. SUPPLY INVARIANTS
//    - Mint raises balance and supply by exactly the amount
//    - Burn lowers balance and supply by exactly the amount
//    - Transfers leave supply untouched and conserve the pair sum
//
// 3. CLAMP INVARIANTS
//    - A clamped transfer moves min(requested, available)
//
// ============================================================================

// ============================================================================
// BALANCE INVARIANTS
// ============================================================================

/// Property: balance >= 0
pub fn balance_non_negative(balance: i128) -> bool {
    balance >= 0
}

/// Property: 0 <= balance <= total_supply
pub fn supply_covers_balance(total_supply: i128, balance: i128) -> bool {
    balance_non_negative(balance) && balance <= total_supply
}

// ============================================================================
// SUPPLY INVARIANTS
// ============================================================================

/// Property:
///   balance_after == balance_before + amount
///   supply_after == supply_before + amount
pub fn mint_accounted(
    balance_before: i128,
    balance_after: i128,
    supply_before: i128,
    supply_after: i128,
    amount: i128,
) -> bool {
    balance_after - balance_before == amount && supply_after - supply_before == amount
}

/// Property:
///   balance_before - balance_after == amount
///   supply_before - supply_after == amount
pub fn burn_accounted(
    balance_before: i128,
    balance_after: i128,
    supply_before: i128,
    supply_after: i128,
    amount: i128,
) -> bool {
    balance_before - balance_after == amount && supply_before - supply_after == amount
}

/// Property: from_before + to_before == from_after + to_after
pub fn transfer_conserves(from_before: i128, to_before: i128, from_after: i128, to_after: i128) -> bool {
    from_before + to_before == from_after + to_after
}

// ============================================================================
// CLAMP INVARIANTS
// ============================================================================

/// Property:
///   moved == min(requested, available)   for requested, available >= 0
pub fn clamp_exact(requested: i128, available: i128, moved: i128) -> bool {
    moved <= requested && moved <= available && (moved == requested || moved == available)
}
