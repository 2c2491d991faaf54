//! Exit codes for `pkgname`. Scripts gate publishing on them.

pub const SUCCESS: i32 = 0;
pub const REJECTED: i32 = 1; // At least one name failed the selected policy
pub const CONFIG_ERROR: i32 = 2; // Bad arguments, unreadable rules or input
