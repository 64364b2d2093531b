use super::common::FloatValueType;

// Based on Physically Based Rendering 3rd ed.
// https://www.pbr-book.org/3ed-2018/Color_and_Radiometry/Spectral_Representation

/// A spectral power distribution stored as RGB
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Spectrum<T>
where
    T: FloatValueType,
{
    /// The r component of the spd
    pub r: T,
    /// The g component of the spd
    pub g: T,
    /// The b component of the spd
    pub b: T,
}

impl_container!(Spectrum { r: 0, g: 1, b: 2 });
impl_op!(Add add Spectrum + Spectrum = Spectrum { r, g, b });
impl_op!(Sub sub Spectrum - Spectrum = Spectrum { r, g, b });
impl_op!(Mul mul Spectrum * Spectrum = Spectrum { r, g, b });
impl_assign_op!(AddAssign add_assign Spectrum += Spectrum { r, g, b });
impl_assign_op!(MulAssign mul_assign Spectrum *= Spectrum { r, g, b });

impl<T> Spectrum<T>
where
    T: FloatValueType,
{
    /// Checks if all channels are zero.
    #[inline]
    pub fn is_black(&self) -> bool {
        self.r == T::zero() && self.g == T::zero() && self.b == T::zero()
    }

    /// Returns the sum of the channels.
    #[inline]
    pub fn sum(&self) -> T {
        self.r + self.g + self.b
    }

    /// Clamps every channel into `[lo, hi]`.
    #[inline]
    pub fn clamped(&self, lo: T, hi: T) -> Self {
        Self {
            r: self.r.max(lo).min(hi),
            g: self.g.max(lo).min(hi),
            b: self.b.max(lo).min(hi),
        }
    }
}
