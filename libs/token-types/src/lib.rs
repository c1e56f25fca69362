#![no_std]

mod allowance;
mod error;
mod metadata;

pub use allowance::*;
pub use error::*;
pub use metadata::*;

/// Decimal places shared by both tokens (matches the 18-decimal BEP20 convention)
pub const TOKEN_DECIMALS: u32 = 18;

/// Primary token display name
pub const GUITAR_NAME: &str = "Guitar Token";

/// Primary token ticker
pub const GUITAR_SYMBOL: &str = "GUITAR";

/// Syrup bar token display name
pub const SYRUP_NAME: &str = "Guitar SyrupBar Token";

/// Syrup bar token ticker
pub const SYRUP_SYMBOL: &str = "GSYRUP";
