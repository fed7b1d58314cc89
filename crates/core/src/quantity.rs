//! Stock quantities and integer coercion.
//!
//! Quantities arrive from several places (typed callers, CLI arguments,
//! persisted JSON). Everything funnels through [`IntoQuantity`] so the same
//! coercion rules apply everywhere.

use serde_json::Value as JsonValue;

use crate::error::InventoryError;

/// A signed stock quantity.
///
/// Negative and zero values are representable; whether they survive in the
/// store is decided by the store's policy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Quantity(i64);

impl Quantity {
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> i64 {
        self.0
    }

    /// `true` when the quantity is zero or below.
    pub const fn is_depleted(self) -> bool {
        self.0 <= 0
    }

    pub fn checked_add(self, other: Quantity) -> Result<Quantity, InventoryError> {
        self.0
            .checked_add(other.0)
            .map(Quantity)
            .ok_or_else(|| InventoryError::invalid_argument("quantity overflow"))
    }

    pub fn checked_sub(self, other: Quantity) -> Result<Quantity, InventoryError> {
        self.0
            .checked_sub(other.0)
            .map(Quantity)
            .ok_or_else(|| InventoryError::invalid_argument("quantity overflow"))
    }
}

impl core::fmt::Display for Quantity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<Quantity> for i64 {
    fn from(value: Quantity) -> Self {
        value.0
    }
}

/// Conversion into a [`Quantity`] with integer coercion.
///
/// Accepted inputs: integers that fit in `i64`, finite floats (truncated toward
/// zero), booleans (`1`/`0`), strings holding an integer (surrounding whitespace
/// ignored) and JSON values carrying any of those.
pub trait IntoQuantity {
    fn into_quantity(self) -> Result<Quantity, InventoryError>;
}

fn not_an_integer(detail: impl core::fmt::Display) -> InventoryError {
    InventoryError::invalid_argument(format!("qty must be an integer (got {detail})"))
}

impl IntoQuantity for Quantity {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        Ok(self)
    }
}

macro_rules! impl_lossless_int {
    ($($t:ty),*) => {
        $(
            impl IntoQuantity for $t {
                fn into_quantity(self) -> Result<Quantity, InventoryError> {
                    Ok(Quantity(i64::from(self)))
                }
            }
        )*
    };
}

macro_rules! impl_checked_int {
    ($($t:ty),*) => {
        $(
            impl IntoQuantity for $t {
                fn into_quantity(self) -> Result<Quantity, InventoryError> {
                    i64::try_from(self).map(Quantity).map_err(|_| not_an_integer(self))
                }
            }
        )*
    };
}

impl_lossless_int!(i8, i16, i32, i64, u8, u16, u32);
impl_checked_int!(u64, i128, u128, isize, usize);

impl IntoQuantity for bool {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        Ok(Quantity(i64::from(self)))
    }
}

impl IntoQuantity for f64 {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
        if !self.is_finite() || self < i64::MIN as f64 || self >= i64::MAX as f64 {
            return Err(not_an_integer(self));
        }
        Ok(Quantity(self.trunc() as i64))
    }
}

impl IntoQuantity for f32 {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        f64::from(self).into_quantity()
    }
}

impl IntoQuantity for &str {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        self.trim()
            .parse::<i64>()
            .map(Quantity)
            .map_err(|_| not_an_integer(format!("{self:?}")))
    }
}

impl IntoQuantity for String {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        self.as_str().into_quantity()
    }
}

impl IntoQuantity for &String {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        self.as_str().into_quantity()
    }
}

impl IntoQuantity for &JsonValue {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        match self {
            JsonValue::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Quantity(v))
                } else if let Some(v) = n.as_u64() {
                    v.into_quantity()
                } else {
                    n.as_f64().ok_or_else(|| not_an_integer(n))?.into_quantity()
                }
            }
            JsonValue::String(s) => s.as_str().into_quantity(),
            JsonValue::Bool(b) => b.into_quantity(),
            other => Err(not_an_integer(other)),
        }
    }
}

impl IntoQuantity for JsonValue {
    fn into_quantity(self) -> Result<Quantity, InventoryError> {
        (&self).into_quantity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn coerce(v: impl IntoQuantity) -> Option<i64> {
        v.into_quantity().ok().map(Quantity::value)
    }

    #[test]
    fn integers_pass_through() {
        assert_eq!(coerce(10i32), Some(10));
        assert_eq!(coerce(-2i64), Some(-2));
        assert_eq!(coerce(7u8), Some(7));
        assert_eq!(coerce(u64::MAX), None);
    }

    #[test]
    fn strings_are_parsed_after_trimming() {
        assert_eq!(coerce(" 12 "), Some(12));
        assert_eq!(coerce("+3"), Some(3));
        assert_eq!(coerce("-4".to_string()), Some(-4));
        assert_eq!(coerce("ten"), None);
        assert_eq!(coerce("3.5"), None);
        assert_eq!(coerce(""), None);
    }

    #[test]
    fn floats_truncate_toward_zero() {
        assert_eq!(coerce(3.9f64), Some(3));
        assert_eq!(coerce(-3.9f64), Some(-3));
        assert_eq!(coerce(f64::NAN), None);
        assert_eq!(coerce(f64::INFINITY), None);
        assert_eq!(coerce(1e300f64), None);
    }

    #[test]
    fn booleans_count_as_one_and_zero() {
        assert_eq!(coerce(true), Some(1));
        assert_eq!(coerce(false), Some(0));
    }

    #[test]
    fn json_values_coerce_like_their_contents() {
        assert_eq!(coerce(json!(5)), Some(5));
        assert_eq!(coerce(json!("6")), Some(6));
        assert_eq!(coerce(json!(2.5)), Some(2));
        assert_eq!(coerce(json!(true)), Some(1));
        assert_eq!(coerce(json!(null)), None);
        assert_eq!(coerce(json!([1])), None);
        assert_eq!(coerce(json!({"n": 1})), None);
    }

    #[test]
    fn checked_arithmetic_reports_overflow() {
        let max = Quantity::new(i64::MAX);
        assert!(matches!(
            max.checked_add(Quantity::new(1)),
            Err(InventoryError::InvalidArgument(_))
        ));
        assert_eq!(
            Quantity::new(10).checked_sub(Quantity::new(3)).unwrap(),
            Quantity::new(7)
        );
    }

    proptest! {
        #[test]
        fn any_i64_survives_string_coercion(n in any::<i64>()) {
            prop_assert_eq!(coerce(n.to_string()), Some(n));
        }
    }
}
