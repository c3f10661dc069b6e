use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::ShlAssign;

use num_bigint::{BigInt, BigUint};
use num_traits::ToPrimitive;

use crate::numeric::{CastFrom, Numeric, UnsignedNumeric};

/// Unsigned 128-bit integer stored as two 64-bit limbs, in little endian
/// order.
///
/// The represented value is `high * 2^64 + low`; every `(high, low)` pair is
/// a valid, normalized representation. Arithmetic wraps modulo 2^128 and is
/// never signaled, like the native fixed-width unsigned types. Division,
/// modulus, decimal formatting and float conversions are delegated to
/// [`BigInt`]/[`BigUint`] so the exact value is used.
///
/// All operations consume their inputs and produce a new value; nothing
/// mutates a shared instance, so values can be used from any number of
/// threads without synchronization.
#[derive(Default, Copy, Clone, Debug)]
#[repr(transparent)]
pub struct U128(pub(crate) [u64; 2]);

impl U128 {
    pub const BITS: u32 = 128;
    pub const MAX: Self = Self([u64::MAX; 2]);
    pub const MIN: Self = Self([0; 2]);
    pub const ZERO: Self = Self([0; 2]);
    pub const ONE: Self = Self([1, 0]);
    pub const TWO: Self = Self([2, 0]);

    /// Builds the value `high * 2^64 + low`. Total, never fails.
    pub const fn new(high: u64, low: u64) -> Self {
        Self([low, high])
    }

    #[inline]
    pub const fn low(self) -> u64 {
        self.0[0]
    }

    #[inline]
    pub const fn high(self) -> u64 {
        self.0[1]
    }

    /// Replaces the current value by interpreting the bytes in big endian order
    pub fn copy_from_be_byte_slice(&mut self, bytes: &[u8]) {
        super::algorithms::copy_from_be_byte_slice(self.0.as_mut_slice(), bytes);
    }

    /// Replaces the current value by interpreting the bytes in little endian order
    pub fn copy_from_le_byte_slice(&mut self, bytes: &[u8]) {
        super::algorithms::copy_from_le_byte_slice(self.0.as_mut_slice(), bytes);
    }

    pub fn copy_to_le_byte_slice(self, bytes: &mut [u8]) {
        super::algorithms::copy_to_le_byte_slice(self.0.as_slice(), bytes);
    }

    pub fn copy_to_be_byte_slice(self, bytes: &mut [u8]) {
        super::algorithms::copy_to_be_byte_slice(self.0.as_slice(), bytes);
    }

    pub fn is_power_of_two(self) -> bool {
        if self == Self::ZERO {
            return false;
        }
        (self & (self - Self::ONE)) == Self::ZERO
    }

    pub fn leading_zeros(self) -> u32 {
        super::algorithms::leading_zeros(self.0.as_slice())
    }

    pub fn ilog2(self) -> u32 {
        // Rust has the same assert
        assert!(
            self > Self::ZERO,
            "argument of integer logarithm must be positive"
        );
        (self.0.len() as u32 * u64::BITS) - self.leading_zeros() - 1
    }

    pub fn ceil_ilog2(self) -> u32 {
        self.ilog2() + u32::from(!self.is_power_of_two())
    }

    /// Returns the value plus one, wrapping to zero past [`Self::MAX`].
    #[must_use]
    pub fn wrapping_inc(mut self) -> Self {
        let (low, carry) = self.0[0].overflowing_add(1);
        self.0[0] = low;
        self.0[1] = self.0[1].wrapping_add(u64::from(carry));
        self
    }

    /// Returns the value minus one, wrapping to [`Self::MAX`] below zero.
    #[must_use]
    pub fn wrapping_dec(mut self) -> Self {
        let (low, borrow) = self.0[0].overflowing_sub(1);
        self.0[0] = low;
        self.0[1] = self.0[1].wrapping_sub(u64::from(borrow));
        self
    }
}

#[cfg(test)]
impl rand::distributions::Distribution<U128> for rand::distributions::Standard {
    fn sample<R: rand::Rng + ?Sized>(&self, rng: &mut R) -> U128 {
        let mut s = U128::ZERO;
        rng.fill(s.0.as_mut_slice());
        s
    }
}

impl std::cmp::Ord for U128 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        super::algorithms::compare(&self.0, &other.0)
    }
}

impl std::cmp::PartialOrd for U128 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for U128 {
    fn eq(&self, other: &Self) -> bool {
        // Branchless: zero iff no bit differs in either limb.
        ((self.0[1] ^ other.0[1]) | (self.0[0] ^ other.0[0])) == 0
    }
}

impl Eq for U128 {}

impl Hash for U128 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Representation is unique, hashing the limbs is consistent with eq.
        self.0.hash(state);
    }
}

impl std::ops::Add<Self> for U128 {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        self += rhs;
        self
    }
}

impl std::ops::AddAssign<Self> for U128 {
    fn add_assign(&mut self, rhs: Self) {
        super::algorithms::add_assign_words(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::Sub<Self> for U128 {
    type Output = Self;

    fn sub(mut self, rhs: Self) -> Self::Output {
        self -= rhs;
        self
    }
}

impl std::ops::SubAssign<Self> for U128 {
    fn sub_assign(&mut self, rhs: Self) {
        super::algorithms::sub_assign_words(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::MulAssign<Self> for U128 {
    fn mul_assign(&mut self, rhs: Self) {
        if rhs.is_power_of_two() {
            self.shl_assign(rhs.ilog2());
            return;
        }
        super::algorithms::schoolbook_mul_assign(self.0.as_mut_slice(), rhs.0.as_slice());
    }
}

impl std::ops::Mul<Self> for U128 {
    type Output = Self;

    fn mul(mut self, rhs: Self) -> Self::Output {
        self *= rhs;
        self
    }
}

impl std::ops::DivAssign<Self> for U128 {
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl std::ops::Div<Self> for U128 {
    type Output = Self;

    /// Delegated to the arbitrary-precision engine. Division by zero panics
    /// with that engine's own divide-by-zero error.
    fn div(self, rhs: Self) -> Self::Output {
        Self::cast_from(BigInt::from(self) / BigInt::from(rhs))
    }
}

impl std::ops::RemAssign<Self> for U128 {
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl std::ops::Rem<Self> for U128 {
    type Output = Self;

    /// Delegated to the arbitrary-precision engine, like [`std::ops::Div`].
    fn rem(self, rhs: Self) -> Self::Output {
        Self::cast_from(BigInt::from(self) % BigInt::from(rhs))
    }
}

impl std::ops::ShlAssign<u32> for U128 {
    fn shl_assign(&mut self, shift: u32) {
        super::algorithms::shl_assign(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shl<u32> for U128 {
    type Output = Self;

    fn shl(mut self, rhs: u32) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<u32> for U128 {
    fn shr_assign(&mut self, shift: u32) {
        super::algorithms::shr_assign(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shr<u32> for U128 {
    type Output = Self;

    fn shr(mut self, rhs: u32) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::ShlAssign<usize> for U128 {
    fn shl_assign(&mut self, shift: usize) {
        // Amounts above u32::MAX must still clear the value, not wrap mod 2^32.
        let shift = u32::try_from(shift).unwrap_or(u32::MAX);
        super::algorithms::shl_assign(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shl<usize> for U128 {
    type Output = Self;

    fn shl(mut self, rhs: usize) -> Self::Output {
        self <<= rhs;
        self
    }
}

impl std::ops::ShrAssign<usize> for U128 {
    fn shr_assign(&mut self, shift: usize) {
        let shift = u32::try_from(shift).unwrap_or(u32::MAX);
        super::algorithms::shr_assign(self.0.as_mut_slice(), shift);
    }
}

impl std::ops::Shr<usize> for U128 {
    type Output = Self;

    fn shr(mut self, rhs: usize) -> Self::Output {
        self >>= rhs;
        self
    }
}

impl std::ops::Not for U128 {
    type Output = Self;

    fn not(mut self) -> Self::Output {
        super::algorithms::bitnot_assign(self.0.as_mut_slice());
        self
    }
}

impl std::ops::BitAndAssign<Self> for U128 {
    fn bitand_assign(&mut self, rhs: Self) {
        super::algorithms::bitand_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitAnd<Self> for U128 {
    type Output = Self;

    fn bitand(mut self, rhs: Self) -> Self::Output {
        self &= rhs;
        self
    }
}

impl std::ops::BitOrAssign<Self> for U128 {
    fn bitor_assign(&mut self, rhs: Self) {
        super::algorithms::bitor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitOr<Self> for U128 {
    type Output = Self;

    fn bitor(mut self, rhs: Self) -> Self::Output {
        self |= rhs;
        self
    }
}

impl std::ops::BitXorAssign<Self> for U128 {
    fn bitxor_assign(&mut self, rhs: Self) {
        super::algorithms::bitxor_assign(self.0.as_mut_slice(), rhs.0.as_slice())
    }
}

impl std::ops::BitXor<Self> for U128 {
    type Output = Self;

    fn bitxor(mut self, rhs: Self) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl From<(u64, u64)> for U128 {
    /// Limb order: `(low, high)`, like the backing array.
    fn from(value: (u64, u64)) -> Self {
        Self([value.0, value.1])
    }
}

impl From<u64> for U128 {
    fn from(value: u64) -> Self {
        Self([value, 0])
    }
}

impl From<u8> for U128 {
    fn from(value: u8) -> Self {
        Self::from(value as u64)
    }
}

impl From<u16> for U128 {
    fn from(value: u16) -> Self {
        Self::from(value as u64)
    }
}

impl From<u32> for U128 {
    fn from(value: u32) -> Self {
        Self::from(value as u64)
    }
}

impl From<bool> for U128 {
    fn from(value: bool) -> Self {
        Self::from(if value { 1u64 } else { 0u64 })
    }
}

// Signed sources are reinterpreted as their unsigned bit pattern and then
// zero extended, never sign extended.
impl From<i8> for U128 {
    fn from(value: i8) -> Self {
        Self::from(value as u8)
    }
}

impl From<i16> for U128 {
    fn from(value: i16) -> Self {
        Self::from(value as u16)
    }
}

impl From<i32> for U128 {
    fn from(value: i32) -> Self {
        Self::from(value as u32)
    }
}

impl From<i64> for U128 {
    fn from(value: i64) -> Self {
        Self::from(value as u64)
    }
}

impl CastFrom<u8> for U128 {
    fn cast_from(input: u8) -> Self {
        Self::from(input)
    }
}

impl CastFrom<u16> for U128 {
    fn cast_from(input: u16) -> Self {
        Self::from(input)
    }
}

impl CastFrom<u32> for U128 {
    fn cast_from(input: u32) -> Self {
        Self::from(input)
    }
}

impl CastFrom<u64> for U128 {
    fn cast_from(input: u64) -> Self {
        Self::from(input)
    }
}

impl CastFrom<U128> for u64 {
    fn cast_from(input: U128) -> Self {
        input.0[0]
    }
}

impl CastFrom<U128> for u32 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as u32
    }
}

impl CastFrom<U128> for u16 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as u16
    }
}

impl CastFrom<U128> for u8 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as u8
    }
}

impl CastFrom<U128> for i64 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as i64
    }
}

impl CastFrom<U128> for i32 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as i32
    }
}

impl CastFrom<U128> for i16 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as i16
    }
}

impl CastFrom<U128> for i8 {
    fn cast_from(input: U128) -> Self {
        input.0[0] as i8
    }
}

impl CastFrom<U128> for f64 {
    /// Goes through the exact arbitrary-precision value, so the usual
    /// round-to-nearest conversion applies to all 128 bits, not to a
    /// truncated limb.
    fn cast_from(input: U128) -> Self {
        BigUint::from(input).to_f64().unwrap_or(f64::INFINITY)
    }
}

impl CastFrom<U128> for f32 {
    fn cast_from(input: U128) -> Self {
        BigUint::from(input).to_f32().unwrap_or(f32::INFINITY)
    }
}

impl From<U128> for BigUint {
    fn from(value: U128) -> Self {
        BigUint::from(value.low()) | (BigUint::from(value.high()) << 64)
    }
}

impl From<U128> for BigInt {
    fn from(value: U128) -> Self {
        BigInt::from(value.low()) + (BigInt::from(value.high()) << 64)
    }
}

impl CastFrom<BigInt> for U128 {
    /// Keeps the low 128 bits of the value's little endian two's-complement
    /// byte representation, zero padded to 16 bytes.
    ///
    /// Inputs in `[0, 2^128)` round trip exactly. Negative inputs and inputs
    /// of 2^128 or more are truncated this way; callers that need exactness
    /// must check the range first.
    fn cast_from(input: BigInt) -> Self {
        let bytes = input.to_signed_bytes_le();
        let mut padded = [0u8; 16];
        let kept = bytes.len().min(padded.len());
        padded[..kept].copy_from_slice(&bytes[..kept]);

        let mut result = Self::ZERO;
        result.copy_from_le_byte_slice(padded.as_slice());
        result
    }
}

impl CastFrom<BigUint> for U128 {
    fn cast_from(input: BigUint) -> Self {
        Self::cast_from(BigInt::from(input))
    }
}

/// Error returned when a checked conversion out of [`U128`] does not fit the
/// target type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryFromU128Error(pub(crate) ());

impl fmt::Display for TryFromU128Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "out of range conversion from U128 attempted")
    }
}

impl std::error::Error for TryFromU128Error {}

impl TryFrom<U128> for u64 {
    type Error = TryFromU128Error;

    fn try_from(value: U128) -> Result<Self, Self::Error> {
        if value.high() != 0 {
            return Err(TryFromU128Error(()));
        }
        Ok(value.low())
    }
}

impl TryFrom<U128> for i64 {
    type Error = TryFromU128Error;

    fn try_from(value: U128) -> Result<Self, Self::Error> {
        if value.high() != 0 || value.low() > i64::MAX as u64 {
            return Err(TryFromU128Error(()));
        }
        Ok(value.low() as i64)
    }
}

impl fmt::UpperHex for U128 {
    /// 32 hex digits, high limb first, each limb zero padded to 16 digits.
    /// The `#` flag adds the `0x` prefix.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:016X}{:016X}", self.high(), self.low())
    }
}

impl fmt::LowerHex for U128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0x")?;
        }
        write!(f, "{:016x}{:016x}", self.high(), self.low())
    }
}

impl fmt::Binary for U128 {
    /// 128 binary digits, high limb first, each limb zero padded to 64
    /// digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            f.write_str("0b")?;
        }
        write!(f, "{:064b}{:064b}", self.high(), self.low())
    }
}

impl fmt::Display for U128 {
    /// Exact decimal, produced by the arbitrary-precision value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&BigUint::from(*self), f)
    }
}

// SAFETY
//
// U128 is allowed to be all zeros
unsafe impl bytemuck::Zeroable for U128 {}

// SAFETY
//
// u64 impl bytemuck::Pod,
// [T; N] impl bytemuck::Pod if T: bytemuck::Pod
//
// https://docs.rs/bytemuck/latest/bytemuck/trait.Pod.html#foreign-impls
//
// Thus U128 can safely be considered Pod
unsafe impl bytemuck::Pod for U128 {}

impl Numeric for U128 {
    const BITS: usize = Self::BITS as usize;

    const ZERO: Self = Self::ZERO;

    const ONE: Self = Self::ONE;

    const TWO: Self = Self::TWO;

    const MAX: Self = Self::MAX;
}

impl UnsignedNumeric for U128 {}
