// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the syrup bar's burn accounting, minter gate and payout clamp.
//
// - burn_specs.rs   : mint/burn accounting, minter gate
// - payout_specs.rs : safe_guitar_transfer clamp policy
//
// The primary token is an external contract here; payout rules verify the
// clamp policy on its own rather than through a cross-contract model.
//
// USAGE:
// - Unit tests: cargo test -p syrup-bar
// - Certora build: cargo build --features certora -p syrup-bar
// - Verification: certoraSorobanProver syrup_bar.conf
//
// ============================================================================

pub mod burn_specs;
pub mod payout_specs;
