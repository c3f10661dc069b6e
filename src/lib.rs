//! A 128-bit unsigned integer built from two 64-bit limbs.
//!
//! Addition, subtraction, multiplication, shifts, bitwise operations and
//! comparisons run on the limbs directly, with no native 128-bit type
//! involved. Division, modulus, decimal formatting and float conversions go
//! through [`num_bigint`] so the exact value is used end to end.

pub mod bigint;
pub mod numeric;

pub use bigint::u128::{TryFromU128Error, U128};
pub use numeric::{CastFrom, CastInto, Numeric, UnsignedNumeric};
