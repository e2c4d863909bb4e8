//! Macro for implementing Display and FromStr for selector enums
//!
//! Selector enums map one-to-one onto the path segments the API expects.
//! Parsing is case-insensitive and an unknown selector is a configuration
//! error, raised before any validation or network call.
//!
//! # Example
//!
//! ```rust
//! use dinero_domain::impl_selector_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Ledger {
//!     Sales,
//!     Purchase,
//! }
//!
//! impl_selector_conversions!(Ledger {
//!     Sales => "sales",
//!     Purchase => "purchase",
//! });
//!
//! assert_eq!(Ledger::Sales.to_string(), "sales");
//! assert!("SALES".parse::<Ledger>().is_ok());
//! ```

/// Implements `as_str`, Display and FromStr for selector enums
///
/// This macro generates:
/// - `as_str()`: the path segment for the variant
/// - Display trait: writes the path segment
/// - FromStr trait: parses case-insensitive strings, failing with
///   `DineroError::Config`
#[macro_export]
macro_rules! impl_selector_conversions {
    ($enum_name:ident { $($variant:ident => $str:literal),+ $(,)? }) => {
        impl $enum_name {
            /// Path segment used by the remote API.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $str,)+
                }
            }
        }

        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = $crate::errors::DineroError;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err($crate::errors::DineroError::Config(format!(
                        "Invalid {}: {}",
                        stringify!($enum_name),
                        s
                    ))),
                }
            }
        }
    };
}
