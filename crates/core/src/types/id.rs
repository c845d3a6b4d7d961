//! Newtype IDs for type-safe entity references.
//!
//! Use the `define_id!` macro to create type-safe ID wrappers that prevent
//! accidentally mixing IDs from different entity types. Product IDs come from
//! the catalog and may be strings or numbers, see [`ProductId`].

use core::fmt;

use serde::{Deserialize, Serialize};

/// Macro to define a type-safe, string-backed ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`
/// - `generate()` producing a fresh UUID v4
/// - Conversion methods: `new()`, `as_str()`, `into_inner()`
/// - `From<String>`, `From<&str>` and `AsRef<str>` implementations
///
/// Equality is exact string equality; no normalization is applied.
///
/// # Example
///
/// ```rust
/// # use minishop_core::define_id;
/// define_id!(UserId);
/// define_id!(OrderId);
///
/// let user_id = UserId::new("u-1");
/// let order_id = OrderId::new("u-1");
///
/// // These are different types, so this won't compile:
/// // let _: UserId = order_id;
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an ID from an existing value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Generate a fresh, random (UUID v4) ID.
            #[must_use]
            pub fn generate() -> Self {
                Self(::uuid::Uuid::new_v4().to_string())
            }

            /// Get the ID as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the ID and return the inner string.
            #[must_use]
            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

// Define standard entity IDs
define_id!(UserId);
define_id!(CartId);
define_id!(OrderId);

/// A catalog product identifier.
///
/// Catalog files may use either JSON strings or JSON numbers as product IDs,
/// while route parameters always arrive as text. [`ProductId::matches`]
/// bridges the two with a coercing comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProductId {
    /// A numeric ID, e.g. `42`.
    Number(serde_json::Number),
    /// A textual ID, e.g. `"P1"`.
    Text(String),
}

impl ProductId {
    /// Check whether a route parameter refers to this product.
    ///
    /// Text IDs must match exactly. Numeric IDs match any parameter whose
    /// trimmed text parses to the same finite number, so `7` matches `"7"`,
    /// `"7.0"` and `" 7 "`. A blank parameter counts as zero.
    #[must_use]
    #[allow(clippy::float_cmp)] // exact numeric equality is the intent
    pub fn matches(&self, param: &str) -> bool {
        match self {
            Self::Text(id) => id == param,
            Self::Number(id) => match (id.as_f64(), coerce_number(param)) {
                (Some(id), Some(param)) => id == param,
                _ => false,
            },
        }
    }
}

/// Coerce route text to a number the way a loosely typed comparison would.
///
/// Surrounding whitespace (including a byte-order mark) is ignored, blank
/// text is zero, and unsigned `0x`, `0o` and `0b` literals are accepted.
fn coerce_number(param: &str) -> Option<f64> {
    let trimmed = param.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if trimmed.is_empty() {
        return Some(0.0);
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return trimmed.get(2..).and_then(|digits| parse_radix(digits, radix));
    }

    // `f64::from_str` also accepts "inf" and "nan" spellings, which never
    // compare equal to a catalog number.
    let numeric = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'+' | b'-' | b'e' | b'E'));
    if !numeric {
        return None;
    }

    trimmed.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse the digits of a prefixed integer literal.
fn parse_radix(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }

    digits
        .chars()
        .try_fold(0.0_f64, |acc, c| {
            c.to_digit(radix)
                .map(|digit| acc.mul_add(f64::from(radix), f64::from(digit)))
        })
        .filter(|value| value.is_finite())
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::Number(id.into())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = UserId::generate();
        let b = UserId::generate();
        assert_ne!(a, b);
        assert_eq!(a.as_str().len(), 36);
    }

    #[test]
    fn test_user_id_equality_is_exact() {
        let id = UserId::new("abc-123");
        assert_eq!(id, UserId::from("abc-123"));
        assert_ne!(id, UserId::from("ABC-123"));
        assert_ne!(id, UserId::from(" abc-123"));
    }

    #[test]
    fn test_id_serializes_transparently() {
        let id = OrderId::new("order-1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"order-1\"");
    }

    #[test]
    fn test_text_product_id_matches_exactly() {
        let id = ProductId::from("P1");
        assert!(id.matches("P1"));
        assert!(!id.matches("p1"));
        assert!(!id.matches(" P1"));
    }

    #[test]
    fn test_numeric_product_id_coerces_param() {
        let id = ProductId::from(7_i64);
        assert!(id.matches("7"));
        assert!(id.matches("7.0"));
        assert!(id.matches(" 7 "));
        assert!(id.matches("7e0"));
        assert!(!id.matches("8"));
        assert!(!id.matches("seven"));
    }

    #[test]
    fn test_numeric_product_id_accepts_prefixed_literals() {
        let id = ProductId::from(16_i64);
        assert!(id.matches("0x10"));
        assert!(id.matches("0X10"));
        assert!(id.matches("0o20"));
        assert!(id.matches("0b10000"));
        assert!(id.matches(" 0x10 "));
        assert!(!id.matches("0x"));
        assert!(!id.matches("0x1g"));
        assert!(!id.matches("-0x10"));
        assert!(!id.matches("0b102"));
    }

    #[test]
    fn test_numeric_product_id_ignores_byte_order_mark() {
        let id = ProductId::from(1_i64);
        assert!(id.matches("\u{feff}1"));
        assert!(id.matches("1\u{feff}"));
        assert!(ProductId::from(0_i64).matches("\u{feff}"));
    }

    #[test]
    fn test_zero_matches_blank_param() {
        let id = ProductId::from(0_i64);
        assert!(id.matches(""));
        assert!(id.matches("   "));
        assert!(!ProductId::from(1_i64).matches(""));
    }

    #[test]
    fn test_non_finite_spellings_never_match() {
        let id = ProductId::from(1_i64);
        assert!(!id.matches("inf"));
        assert!(!id.matches("NaN"));
    }

    #[test]
    fn test_product_id_deserializes_both_shapes() {
        let number: ProductId = serde_json::from_str("12").unwrap();
        assert_eq!(number, ProductId::from(12_i64));

        let text: ProductId = serde_json::from_str("\"12\"").unwrap();
        assert_eq!(text, ProductId::from("12"));
        assert_ne!(number, text);
    }

    #[test]
    fn test_product_id_display() {
        assert_eq!(ProductId::from(3_i64).to_string(), "3");
        assert_eq!(ProductId::from("P3").to_string(), "P3");
    }
}
