/// Boolean interpretation of values that are not strictly `bool`.
///
/// Predicates in this crate may return any `Truthiness` type. Zero numbers,
/// `NaN`, empty strings, `()`, and `None` are falsy; everything else follows
/// the value it wraps or is truthy.
pub trait Truthiness {
    fn is_truthy(&self) -> bool;
}

impl Truthiness for bool {
    fn is_truthy(&self) -> bool {
        *self
    }
}

macro_rules! impl_truthiness_for_integers {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Truthiness for $ty {
                fn is_truthy(&self) -> bool {
                    *self != 0
                }
            }
        )*
    };
}

impl_truthiness_for_integers!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Truthiness for f32 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for f64 {
    fn is_truthy(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl Truthiness for char {
    fn is_truthy(&self) -> bool {
        true
    }
}

impl Truthiness for str {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for String {
    fn is_truthy(&self) -> bool {
        !self.is_empty()
    }
}

impl Truthiness for () {
    fn is_truthy(&self) -> bool {
        false
    }
}

impl<T: Truthiness> Truthiness for Option<T> {
    fn is_truthy(&self) -> bool {
        self.as_ref().is_some_and(Truthiness::is_truthy)
    }
}

impl<T: Truthiness + ?Sized> Truthiness for &T {
    fn is_truthy(&self) -> bool {
        (**self).is_truthy()
    }
}

/// Returns `true` if a value is present.
pub fn existy<T>(value: &Option<T>) -> bool {
    value.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers() {
        assert!(1_i32.is_truthy());
        assert!((-3_i64).is_truthy());
        assert!(!0_u8.is_truthy());
        assert!(0.5_f64.is_truthy());
        assert!(!0.0_f64.is_truthy());
        assert!(!(-0.0_f32).is_truthy());
        assert!(!f64::NAN.is_truthy());
    }

    #[test]
    fn strings() {
        assert!("x".is_truthy());
        assert!(!"".is_truthy());
        assert!(String::from("0").is_truthy());
        assert!(!String::new().is_truthy());
    }

    #[test]
    fn options_follow_their_contents() {
        assert!(Some(true).is_truthy());
        assert!(!Some(false).is_truthy());
        assert!(!Some(0_i32).is_truthy());
        assert!(!None::<i32>.is_truthy());
    }

    #[test]
    fn unit_is_falsy() {
        assert!(!().is_truthy());
    }

    #[test]
    fn existy_only_checks_presence() {
        assert!(existy(&Some(0)));
        assert!(existy(&Some(false)));
        assert!(!existy(&None::<()>));
    }
}
