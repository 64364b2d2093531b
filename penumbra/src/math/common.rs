use num::traits::{Float, FloatConst};
use std::{
    fmt::Debug,
    ops::{AddAssign, DivAssign, MulAssign, SubAssign},
};

/// Float types that can be stored in the math containers
pub trait FloatValueType:
    Float + FloatConst + AddAssign + SubAssign + MulAssign + DivAssign + Debug + Send + Sync + 'static
{
}

// Impl for all matching types
impl<T> FloatValueType for T where
    T: Float
        + FloatConst
        + AddAssign
        + SubAssign
        + MulAssign
        + DivAssign
        + Debug
        + Send
        + Sync
        + 'static
{
}
