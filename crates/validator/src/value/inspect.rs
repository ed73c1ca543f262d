//! [`Inspect`] implementations for standard library and chrono types.

use super::{FieldValue, Inspect};
use chrono::{DateTime, TimeDelta, TimeZone};
use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// SCALARS
// ============================================================================

macro_rules! inspect_via_from {
    ($variant:ident($target:ty): $($ty:ty),* $(,)?) => {
        $(
            impl Inspect for $ty {
                #[inline]
                fn field_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(<$target>::from(*self))
                }
            }
        )*
    };
}

inspect_via_from!(Unsigned(u64): u8, u16, u32, u64);
inspect_via_from!(Signed(i64): i8, i16, i32, i64);
inspect_via_from!(Float(f64): f32, f64);
inspect_via_from!(Bool(bool): bool);

// Pointer-width integers are at most 64 bits on every supported target.
impl Inspect for usize {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Unsigned(*self as u64)
    }
}

impl Inspect for isize {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Signed(*self as i64)
    }
}

impl Inspect for str {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::String(self)
    }
}

impl Inspect for String {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::String(self.as_str())
    }
}

impl Inspect for Cow<'_, str> {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::String(self.as_ref())
    }
}

// ============================================================================
// TIME
// ============================================================================

impl Inspect for Duration {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Duration(i128::try_from(self.as_nanos()).unwrap_or(i128::MAX))
    }
}

impl Inspect for TimeDelta {
    fn field_value(&self) -> FieldValue<'_> {
        let nanos =
            i128::from(self.num_seconds()) * 1_000_000_000 + i128::from(self.subsec_nanos());
        FieldValue::Duration(nanos)
    }
}

impl<Tz: TimeZone> Inspect for DateTime<Tz> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Timestamp(self.fixed_offset())
    }
}

// ============================================================================
// WRAPPERS
// ============================================================================

macro_rules! inspect_transparent {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<T: Inspect + ?Sized> Inspect for $wrapper<T> {
                #[inline]
                fn field_value(&self) -> FieldValue<'_> {
                    (**self).field_value()
                }
            }
        )*
    };
}

inspect_transparent!(Box, Rc, Arc);

impl<T: Inspect + ?Sized> Inspect for &T {
    #[inline]
    fn field_value(&self) -> FieldValue<'_> {
        (**self).field_value()
    }
}

impl<T: Inspect> Inspect for Option<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Nullable(self.as_ref().map(|value| value as &dyn Inspect))
    }
}

// ============================================================================
// COLLECTIONS
// ============================================================================

impl<T> Inspect for [T] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> Inspect for Vec<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> Inspect for VecDeque<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T, S> Inspect for HashSet<T, S> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<T> Inspect for BTreeSet<T> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence(self.len())
    }
}

impl<K, V, S> Inspect for HashMap<K, V, S> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<K, V> Inspect for BTreeMap<K, V> {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Map(self.len())
    }
}

impl<T: Inspect, const N: usize> Inspect for [T; N] {
    fn field_value(&self) -> FieldValue<'_> {
        FieldValue::Array {
            len: N,
            zero: self.iter().all(|item| item.field_value().is_zero()),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
