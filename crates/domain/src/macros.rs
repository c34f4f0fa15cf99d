//! Macro for implementing Display and FromStr for label enums
//!
//! Movement statuses and severity buckets travel over the wire and through
//! logs as capitalized labels ("Escalated", "Critical"). This macro keeps the
//! label table in one place and gives case-insensitive parsing for free.
//!
//! # Example
//!
//! ```rust
//! use tappal_domain::impl_label_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Priority {
//!     Low,
//!     High,
//! }
//!
//! impl_label_conversions!(Priority {
//!     Low => "Low",
//!     High => "High",
//! });
//!
//! assert_eq!(Priority::High.to_string(), "High");
//! assert_eq!("low".parse::<Priority>().unwrap(), Priority::Low);
//! ```

/// Implements Display and FromStr traits for label enums
///
/// This macro generates:
/// - Display trait: writes the label exactly as declared
/// - FromStr trait: parses case-insensitive, whitespace-trimmed labels
///
/// # Arguments
///
/// * `$enum_name` - The name of the enum type
/// * `$variant => $label` - Mapping of enum variants to their labels
#[macro_export]
macro_rules! impl_label_conversions {
    ($enum_name:ident { $($variant:ident => $label:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($label),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let trimmed = s.trim();
                $(
                    if trimmed.eq_ignore_ascii_case($label) {
                        return Ok(Self::$variant);
                    }
                )+
                Err(format!("Invalid {}: {}", stringify!($enum_name), s))
            }
        }
    };
}
