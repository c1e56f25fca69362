// ============================================================================
// CERTORA SUNBEAM FORMAL VERIFICATION SPECIFICATIONS
// ============================================================================
//
// Rules for the primary token's supply accounting and minter gate.
//
// - supply_specs.rs : mint_for / transfer accounting, minter gate
//
// USAGE:
// - Unit tests: cargo test -p guitar-token
// - Certora build: cargo build --features certora -p guitar-token
// - Verification: certoraSorobanProver guitar_token.conf
//
// ============================================================================

pub mod supply_specs;
