// Generators for the component-wise boilerplate shared by the math containers.
// Components are listed with their index, e.g. `impl_container!(Vec3 { x: 0, y: 1, z: 2 })`.

macro_rules! impl_container {
    ($name:ident { $($c:ident : $i:literal),+ }) => {
        impl<T> $name<T>
        where
            T: FloatValueType,
        {
            #[doc = concat!("Creates a new `", stringify!($name), "`.")]
            ///
            /// Has a debug assert that checks for NaNs.
            #[inline]
            pub fn new($($c: T),+) -> Self {
                let ret = Self { $($c),+ };
                debug_assert!(!ret.has_nans());
                ret
            }

            #[doc = concat!("Creates a new `", stringify!($name), "` with all components set to zero.")]
            #[inline]
            pub fn zeros() -> Self {
                Self { $($c: T::zero()),+ }
            }

            #[doc = concat!("Creates a new `", stringify!($name), "` with all components set to one.")]
            #[inline]
            pub fn ones() -> Self {
                Self { $($c: T::one()),+ }
            }

            /// Checks if any of the components is NaN.
            #[inline]
            pub fn has_nans(&self) -> bool {
                false $(|| self.$c.is_nan())+
            }

            /// Returns the component-wise minimum.
            #[inline]
            pub fn min(&self, other: Self) -> Self {
                Self { $($c: self.$c.min(other.$c)),+ }
            }

            /// Returns the component-wise maximum.
            #[inline]
            pub fn max(&self, other: Self) -> Self {
                Self { $($c: self.$c.max(other.$c)),+ }
            }

            /// Finds the value of the minimum component.
            #[inline]
            pub fn min_comp(&self) -> T {
                let mut ret = T::infinity();
                $(ret = ret.min(self.$c);)+
                ret
            }

            /// Finds the value of the maximum component.
            #[inline]
            pub fn max_comp(&self) -> T {
                let mut ret = T::neg_infinity();
                $(ret = ret.max(self.$c);)+
                ret
            }
        }

        impl<T> From<T> for $name<T>
        where
            T: FloatValueType,
        {
            fn from(v: T) -> Self {
                Self { $($c: v),+ }
            }
        }

        impl<T> std::ops::Index<usize> for $name<T>
        where
            T: FloatValueType,
        {
            type Output = T;

            fn index(&self, component: usize) -> &T {
                match component {
                    $($i => &self.$c,)+
                    _ => panic!(
                        "Out of bounds {} access with component {}",
                        stringify!($name),
                        component
                    ),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $name<T>
        where
            T: FloatValueType,
        {
            fn index_mut(&mut self, component: usize) -> &mut T {
                match component {
                    $($i => &mut self.$c,)+
                    _ => panic!(
                        "Out of bounds {} access with component {}",
                        stringify!($name),
                        component
                    ),
                }
            }
        }

        impl<T> std::ops::Mul<T> for $name<T>
        where
            T: FloatValueType,
        {
            type Output = Self;

            fn mul(self, s: T) -> Self {
                Self { $($c: self.$c * s),+ }
            }
        }

        impl<T> std::ops::Div<T> for $name<T>
        where
            T: FloatValueType,
        {
            type Output = Self;

            fn div(self, s: T) -> Self {
                debug_assert!(s != T::zero());
                let inv = T::one() / s;
                Self { $($c: self.$c * inv),+ }
            }
        }

        impl<T> std::ops::MulAssign<T> for $name<T>
        where
            T: FloatValueType,
        {
            fn mul_assign(&mut self, s: T) {
                $(self.$c *= s;)+
            }
        }

        impl<T> std::ops::DivAssign<T> for $name<T>
        where
            T: FloatValueType,
        {
            fn div_assign(&mut self, s: T) {
                debug_assert!(s != T::zero());
                let inv = T::one() / s;
                $(self.$c *= inv;)+
            }
        }

        impl<T> approx::AbsDiffEq for $name<T>
        where
            T: FloatValueType + approx::AbsDiffEq<Epsilon = T>,
        {
            type Epsilon = T;

            fn default_epsilon() -> T {
                T::default_epsilon()
            }

            fn abs_diff_eq(&self, other: &Self, epsilon: T) -> bool {
                true $(&& self.$c.abs_diff_eq(&other.$c, epsilon))+
            }
        }

        impl<T> approx::RelativeEq for $name<T>
        where
            T: FloatValueType + approx::RelativeEq<Epsilon = T>,
        {
            fn default_max_relative() -> T {
                T::default_max_relative()
            }

            fn relative_eq(&self, other: &Self, epsilon: T, max_relative: T) -> bool {
                true $(&& self.$c.relative_eq(&other.$c, epsilon, max_relative))+
            }
        }
    };
}

// `impl_op!(Add add Point3 + Vec3 = Point3 { x, y, z })`
macro_rules! impl_op {
    ($op:ident $fn:ident $lhs:ident $sym:tt $rhs:ident = $out:ident { $($c:ident),+ }) => {
        impl<T> std::ops::$op<$rhs<T>> for $lhs<T>
        where
            T: FloatValueType,
        {
            type Output = $out<T>;

            fn $fn(self, other: $rhs<T>) -> $out<T> {
                $out { $($c: self.$c $sym other.$c),+ }
            }
        }
    };
}

// `impl_assign_op!(AddAssign add_assign Point3 += Vec3 { x, y, z })`
macro_rules! impl_assign_op {
    ($op:ident $fn:ident $lhs:ident $sym:tt $rhs:ident { $($c:ident),+ }) => {
        impl<T> std::ops::$op<$rhs<T>> for $lhs<T>
        where
            T: FloatValueType,
        {
            fn $fn(&mut self, other: $rhs<T>) {
                $(self.$c $sym other.$c;)+
            }
        }
    };
}

macro_rules! impl_neg {
    ($name:ident { $($c:ident),+ }) => {
        impl<T> std::ops::Neg for $name<T>
        where
            T: FloatValueType,
        {
            type Output = Self;

            fn neg(self) -> Self {
                Self { $($c: -self.$c),+ }
            }
        }
    };
}
