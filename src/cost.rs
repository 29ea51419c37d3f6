/// A numeric type usable as an entry of a cost matrix.
pub trait Cost:
    nalgebra::Scalar
    + Copy
    + PartialOrd
    + num_traits::Num
    + num_traits::NumCast
    + std::ops::AddAssign
    + std::ops::SubAssign
    + std::fmt::Display
{
    /// Whether this value is a usable cost. Always true for integers.
    fn is_finite_cost(&self) -> bool;

    /// Addition that reports overflow as `None`.
    fn checked_add_cost(self, rhs: Self) -> Option<Self>;

    /// Subtraction that reports overflow as `None`.
    fn checked_sub_cost(self, rhs: Self) -> Option<Self>;

    /// Multiplication that reports overflow as `None`.
    fn checked_mul_cost(self, rhs: Self) -> Option<Self>;
}

macro_rules! impl_integer_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                #[inline(always)]
                fn is_finite_cost(&self) -> bool {
                    true
                }

                #[inline(always)]
                fn checked_add_cost(self, rhs: Self) -> Option<Self> {
                    self.checked_add(rhs)
                }

                #[inline(always)]
                fn checked_sub_cost(self, rhs: Self) -> Option<Self> {
                    self.checked_sub(rhs)
                }

                #[inline(always)]
                fn checked_mul_cost(self, rhs: Self) -> Option<Self> {
                    self.checked_mul(rhs)
                }
            }
        )*
    };
}

macro_rules! impl_float_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                #[inline(always)]
                fn is_finite_cost(&self) -> bool {
                    self.is_finite()
                }

                #[inline(always)]
                fn checked_add_cost(self, rhs: Self) -> Option<Self> {
                    let sum = self + rhs;
                    sum.is_finite().then_some(sum)
                }

                #[inline(always)]
                fn checked_sub_cost(self, rhs: Self) -> Option<Self> {
                    let difference = self - rhs;
                    difference.is_finite().then_some(difference)
                }

                #[inline(always)]
                fn checked_mul_cost(self, rhs: Self) -> Option<Self> {
                    let product = self * rhs;
                    product.is_finite().then_some(product)
                }
            }
        )*
    };
}

impl_integer_cost!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_cost!(f32, f64);

/// Smallest element of an iterator under `PartialOrd`, or `None` when empty.
///
/// Inputs are validated before reaching the solver, so incomparable values
/// never show up here.
pub(crate) fn min_of<T, I>(values: I) -> Option<T>
where
    T: Cost,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .fold(None, |acc, v| match acc {
            Some(m) if m <= v => Some(m),
            _ => Some(v),
        })
}

/// Largest element of an iterator under `PartialOrd`, or `None` when empty.
pub(crate) fn max_of<T, I>(values: I) -> Option<T>
where
    T: Cost,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .fold(None, |acc, v| match acc {
            Some(m) if m >= v => Some(m),
            _ => Some(v),
        })
}
