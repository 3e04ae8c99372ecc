//! Optional request fields and was-set inference
//!
//! An optional wire field is a [`Specified<T>`]: the value plus a flag telling
//! whether the caller assigned it. Only specified fields are serialised, so
//! "not set" stays distinguishable from "set to zero". Callers who write the
//! value directly (through `DerefMut`) do not have to manage the flag:
//! [`Specified::infer`] raises it for any value that differs from its type's
//! zero value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::ops::{Deref, DerefMut};

/// Zero-value test used by field inference
pub trait ZeroValue {
    /// Whether this value is the zero/default value of its type
    fn is_zero(&self) -> bool;

    /// Raise was-set flags on nested optional fields
    ///
    /// Scalars have nothing to do; records generated by
    /// [`optional_fields!`](crate::optional_fields) visit each optional field.
    fn infer_specified(&mut self) {}
}

/// An optional field with a companion was-set flag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Specified<T> {
    value: T,
    specified: bool,
}

impl<T> Specified<T> {
    /// A value explicitly set by the caller
    pub fn new(value: T) -> Self {
        Self {
            value,
            specified: true,
        }
    }

    /// Assign a value and mark the field as set
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.specified = true;
    }

    /// Mark the field as explicitly set without changing its value
    ///
    /// This is how a caller sends a zero value on purpose.
    pub fn mark_specified(&mut self) {
        self.specified = true;
    }

    pub fn is_specified(&self) -> bool {
        self.specified
    }

    pub fn is_unspecified(&self) -> bool {
        !self.specified
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// The value if it was set
    pub fn get(&self) -> Option<&T> {
        self.specified.then_some(&self.value)
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

impl<T: Default> Specified<T> {
    /// Reset to the unset zero value
    pub fn clear(&mut self) {
        self.value = T::default();
        self.specified = false;
    }
}

impl<T: ZeroValue> Specified<T> {
    /// Raise the flag if the value differs from its zero value
    ///
    /// Never lowers an already raised flag, so repeated calls are stable.
    /// Returns the resulting flag.
    pub fn infer(&mut self) -> bool {
        self.value.infer_specified();
        if !self.specified && !self.value.is_zero() {
            self.specified = true;
        }
        self.specified
    }
}

impl<T> From<T> for Specified<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T> Deref for Specified<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.value
    }
}

impl<T> DerefMut for Specified<T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut self.value
    }
}

impl<T: ZeroValue> ZeroValue for Specified<T> {
    fn is_zero(&self) -> bool {
        !self.specified && self.value.is_zero()
    }

    fn infer_specified(&mut self) {
        self.infer();
    }
}

impl<T: Serialize> Serialize for Specified<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Specified<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl ZeroValue for String {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl ZeroValue for bool {
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl<T: ZeroValue> ZeroValue for Vec<T> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn infer_specified(&mut self) {
        for item in self.iter_mut() {
            item.infer_specified();
        }
    }
}

impl<T: ZeroValue> ZeroValue for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }

    fn infer_specified(&mut self) {
        if let Some(inner) = self {
            inner.infer_specified();
        }
    }
}

/// Both the minimum date and the epoch (chrono's `Default`) count as unset
impl ZeroValue for DateTime<Utc> {
    fn is_zero(&self) -> bool {
        *self == DateTime::<Utc>::MIN_UTC || *self == DateTime::<Utc>::default()
    }
}

macro_rules! zero_value_numeric {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ZeroValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == 0 as $ty
                }
            }
        )*
    };
}

zero_value_numeric!(u8, u16, u32, u64, i8, i16, i32, i64, usize, isize, f32, f64);

/// Implement [`ZeroValue`] for an enum whose `#[default]` is its first variant
#[macro_export]
macro_rules! zero_value_enum {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::core::marshal::ZeroValue for $ty {
                fn is_zero(&self) -> bool {
                    *self == <$ty as ::std::default::Default>::default()
                }
            }
        )*
    };
}

/// Implement [`ZeroValue`] for a record from its list of optional fields
///
/// The record is zero when every listed field is zero, and inference visits
/// every listed field.
#[macro_export]
macro_rules! optional_fields {
    ($ty:ty { $($field:ident),* $(,)? }) => {
        impl $crate::core::marshal::ZeroValue for $ty {
            fn is_zero(&self) -> bool {
                true $(&& $crate::core::marshal::ZeroValue::is_zero(&self.$field))*
            }

            fn infer_specified(&mut self) {
                $($crate::core::marshal::ZeroValue::infer_specified(&mut self.$field);)*
            }
        }
    };
}
