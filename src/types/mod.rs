//! Typed pieces of the clearinghouse state, used for the account summary.

mod common;
mod positions;

pub use common::*;
pub use positions::*;
