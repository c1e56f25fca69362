#![no_std]

pub mod allowance;
pub mod auth;
pub mod balance;
pub mod invariants;
pub mod storage;

pub use allowance::{approve, spend_allowance};
pub use auth::{initialize, require_minter};
pub use balance::{burn, check_nonnegative_amount, clamp_to_available, mint, move_balance};
