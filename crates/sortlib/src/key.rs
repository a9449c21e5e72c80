/// Element types whose values embed into `u64` while keeping their order.
///
/// Counting, radix and bucket sort operate on these keys instead of on comparisons.
/// Implementations must satisfy, for all `a` and `b`:
///
/// - `a.cmp(&b) == a.to_key().cmp(&b.to_key())`
/// - `Self::from_key(a.to_key()) == a`
pub trait DiscreteKey: Ord + Copy {
    fn to_key(self) -> u64;
    fn from_key(key: u64) -> Self;
}

macro_rules! impl_unsigned_key {
    ($($t:ty),* $(,)?) => {
        $(
            impl DiscreteKey for $t {
                #[inline]
                fn to_key(self) -> u64 {
                    self as u64
                }

                #[inline]
                fn from_key(key: u64) -> Self {
                    key as $t
                }
            }
        )*
    };
}

// Flipping the sign bit maps MIN..=MAX onto 0..=unsigned MAX monotonically.
macro_rules! impl_signed_key {
    ($($t:ty => $u:ty),* $(,)?) => {
        $(
            impl DiscreteKey for $t {
                #[inline]
                fn to_key(self) -> u64 {
                    const SIGN: $u = 1 << (<$u>::BITS - 1);
                    ((self as $u) ^ SIGN) as u64
                }

                #[inline]
                fn from_key(key: u64) -> Self {
                    const SIGN: $u = 1 << (<$u>::BITS - 1);
                    ((key as $u) ^ SIGN) as $t
                }
            }
        )*
    };
}

impl_unsigned_key!(u8, u16, u32, u64, usize);
impl_signed_key!(i8 => u8, i16 => u16, i32 => u32, i64 => u64, isize => usize);

impl DiscreteKey for bool {
    #[inline]
    fn to_key(self) -> u64 {
        self as u64
    }

    #[inline]
    fn from_key(key: u64) -> Self {
        key != 0
    }
}
