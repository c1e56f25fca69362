// ============================================================================
// PAYOUT (SAFE TRANSFER) SPECIFICATIONS
// ============================================================================
//
// KEY PROPERTIES:
// 1. The moved amount is min(requested, held)
// 2. The moved amount never exceeds what is held, so the payout cannot fail
//    for lack of funds
// 3. Nothing held means nothing moved
//
// ============================================================================

#[cfg(feature = "certora")]
use cvlr_soroban_derive::rule;

#[cfg(feature = "certora")]
use cvlr::asserts::{cvlr_assert, cvlr_assume, cvlr_satisfy};

#[cfg(feature = "certora")]
use token_ledger::{clamp_to_available, invariants::clamp_exact};

/// RULE: Clamp moves exactly min(requested, held)
#[cfg(feature = "certora")]
#[rule]
pub fn payout_is_min_of_request_and_held(requested: i128, held: i128) {
    cvlr_assume!(requested >= 0);
    cvlr_assume!(held >= 0);

    let moved = clamp_to_available(requested, held);

    cvlr_assert!(clamp_exact(requested, held, moved));
}

/// RULE: Clamp never exceeds the held balance
#[cfg(feature = "certora")]
#[rule]
pub fn payout_never_exceeds_held(requested: i128, held: i128) {
    cvlr_assume!(requested >= 0);

    let moved = clamp_to_available(requested, held);

    cvlr_assert!(moved <= held || moved == 0);
    cvlr_assert!(moved >= 0);
}

/// RULE: Over-requests are reachable and clamp to the held balance
#[cfg(feature = "certora")]
#[rule]
pub fn payout_over_request_clamps(requested: i128, held: i128) {
    cvlr_assume!(held >= 0);
    cvlr_assume!(requested > held);

    let moved = clamp_to_available(requested, held);

    cvlr_assert!(moved == held);
    cvlr_satisfy!(held > 0);
}

// ============================================================================
// UNIT TESTS
// ============================================================================
