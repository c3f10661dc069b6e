//! Small trait surface shared by the numeric value types of this crate.

/// Values with the usual integer constants.
pub trait Numeric: Sized + Copy + PartialEq + PartialOrd + Send + Sync + 'static {
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    const TWO: Self;
    const MAX: Self;
}

/// Marker for unsigned [`Numeric`] types.
pub trait UnsignedNumeric: Numeric {}

/// Lossy value cast, in the spirit of an `as` cast between primitive
/// integers: bits that do not fit the target are discarded, never signaled.
pub trait CastFrom<Input>: Sized {
    fn cast_from(input: Input) -> Self;
}

/// Reciprocal of [`CastFrom`], blanket implemented.
pub trait CastInto<Output>: Sized {
    fn cast_into(self) -> Output;
}

impl<Input, Output> CastInto<Output> for Input
where
    Output: CastFrom<Input>,
{
    fn cast_into(self) -> Output {
        Output::cast_from(self)
    }
}
