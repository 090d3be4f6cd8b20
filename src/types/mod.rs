//! Core type definitions.
//!
//! Range expressions are parsed once into [`AddressRange`] and classification
//! results are a closed [`Classification`] enum, so invalid states cannot be
//! represented.

mod range;
mod target;

pub use range::{AddressRange, RangeError};
pub use target::{Classification, Target, TargetError, Verdict, OUT_OF_SCOPE_SOURCE};
