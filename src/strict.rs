//! Strict equality.
//!
//! Scalars and strings compare by type and value. Shared composite values
//! (`Rc<T>`, `Arc<T>`) compare by identity: two allocations holding equal
//! contents are still different values. Composite types that are not behind a
//! shared pointer do not implement [`StrictEq`] at all, so they cannot be
//! compared structurally by accident.
//!
//! `Option<T>` stands in for null: `None` only equals `None` and renders as
//! `null`. The unit type renders as `undefined`.

use std::rc::Rc;
use std::sync::Arc;

pub trait StrictEq {
    fn strict_eq(&self, other: &Self) -> bool;

    /// Text used for this value in assertion messages.
    fn render(&self) -> String;
}

macro_rules! strict_by_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl StrictEq for $ty {
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn render(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

strict_by_value!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool, char, String, str,
);

// Float rendering follows number formatting in the exercises: `1.5`, `2`, `NaN`.
macro_rules! strict_float {
    ($($ty:ty),*) => {
        $(
            impl StrictEq for $ty {
                fn strict_eq(&self, other: &Self) -> bool {
                    self == other
                }

                fn render(&self) -> String {
                    if self.is_nan() {
                        "NaN".to_string()
                    } else if *self == <$ty>::INFINITY {
                        "Infinity".to_string()
                    } else if *self == <$ty>::NEG_INFINITY {
                        "-Infinity".to_string()
                    } else {
                        format!("{}", self)
                    }
                }
            }
        )*
    };
}

strict_float!(f32, f64);

impl<T: StrictEq + ?Sized> StrictEq for &T {
    fn strict_eq(&self, other: &Self) -> bool {
        (**self).strict_eq(*other)
    }

    fn render(&self) -> String {
        (**self).render()
    }
}

impl<T: StrictEq> StrictEq for Option<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Some(a), Some(b)) => a.strict_eq(b),
            (None, None) => true,
            _ => false,
        }
    }

    fn render(&self) -> String {
        match self {
            Some(v) => v.render(),
            None => "null".to_string(),
        }
    }
}

impl StrictEq for () {
    fn strict_eq(&self, _other: &Self) -> bool {
        true
    }

    fn render(&self) -> String {
        "undefined".to_string()
    }
}

impl<T: std::fmt::Debug + ?Sized> StrictEq for Rc<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }

    fn render(&self) -> String {
        format!("{:?}", self)
    }
}

impl<T: std::fmt::Debug + ?Sized> StrictEq for Arc<T> {
    fn strict_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }

    fn render(&self) -> String {
        format!("{:?}", self)
    }
}
