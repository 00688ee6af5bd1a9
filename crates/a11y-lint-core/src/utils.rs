//! Utility functions shared by the linter and rule implementations.

pub mod allowance;

#[doc(inline)]
pub use allowance::{find_allow_directive, parse_allow_directive, AllowCheck, AllowDirective};
