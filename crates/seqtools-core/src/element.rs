//! Element-level capabilities the combinators bound on.

/// Value handed back by a filtering step once its sequence is exhausted.
///
/// Numeric types use their minimum, text uses the empty string. Callers are
/// expected to check the exhaustion flag before trusting the value, so the
/// sentinel only has to be a cheap, well-known placeholder.
pub trait Sentinel {
    fn sentinel() -> Self;
}

macro_rules! min_sentinel {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sentinel for $t {
                #[inline]
                fn sentinel() -> Self {
                    <$t>::MIN
                }
            }
        )*
    };
}

min_sentinel!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

impl Sentinel for bool {
    fn sentinel() -> Self {
        false
    }
}

impl Sentinel for char {
    fn sentinel() -> Self {
        '\0'
    }
}

impl Sentinel for String {
    fn sentinel() -> Self {
        String::new()
    }
}

impl<T> Sentinel for Option<T> {
    fn sentinel() -> Self {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_sentinels_are_minimums() {
        assert_eq!(i16::sentinel(), -32768);
        assert_eq!(u8::sentinel(), 0);
        assert_eq!(i64::sentinel(), i64::MIN);
        assert_eq!(f64::sentinel(), -1.797_693_134_862_315_7e308);
        assert_eq!(f32::sentinel(), -3.402_823_5e38);
    }

    #[test]
    fn test_text_and_option_sentinels() {
        assert_eq!(String::sentinel(), "");
        assert_eq!(Option::<u32>::sentinel(), None);
        assert!(!bool::sentinel());
    }
}
