use crate::storage::{has_minter, read_minter, write_metadata, write_minter, write_total_supply};
use soroban_sdk::{Address, Env};
use token_types::{TokenError, TokenMetadata};

/// Write the construction-time ledger state: minter, metadata, zero supply.
///
/// The minter is never rewritten afterwards; no setter exists.
pub fn initialize(env: &Env, minter: &Address, metadata: &TokenMetadata) {
    if has_minter(env) {
        panic!("Already initialized");
    }

    write_minter(env, minter);
    write_metadata(env, metadata);
    write_total_supply(env, 0);
}

/// Authorize `caller` and check it is the ledger's minter.
///
/// A missing signature traps in the host; a valid signature from any other
/// identity returns `Unauthorized`.
pub fn require_minter(env: &Env, caller: &Address) -> Result<(), TokenError> {
    caller.require_auth();

    if *caller != read_minter(env) {
        return Err(TokenError::Unauthorized);
    }
    Ok(())
}
