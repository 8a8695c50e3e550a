//! Macro for implementing Display and FromStr for configuration enums
//!
//! Several small enums (orphan policy, entity kind) are read from environment
//! variables and written to logs. This macro provides both conversions from a
//! single variant-to-string table with case-insensitive parsing.
//!
//! # Example
//!
//! ```rust
//! use pitchsync_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Mode {
//!     Strict,
//!     Lenient,
//! }
//!
//! impl_domain_status_conversions!(Mode {
//!     Strict => "strict",
//!     Lenient => "lenient",
//! });
//! ```

/// Implements Display and FromStr traits for simple enums
///
/// This macro generates:
/// - Display trait: converts enum variants to their lowercase strings
/// - FromStr trait: parses case-insensitive strings to enum variants
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum TestMode {
        Strict,
        Lenient,
    }

    impl_domain_status_conversions!(TestMode {
        Strict => "strict",
        Lenient => "lenient",
    });

    #[test]
    fn test_display_conversion() {
        assert_eq!(TestMode::Strict.to_string(), "strict");
        assert_eq!(TestMode::Lenient.to_string(), "lenient");
    }

    #[test]
    fn test_fromstr_is_case_insensitive() {
        assert_eq!(TestMode::from_str("STRICT").unwrap(), TestMode::Strict);
        assert_eq!(TestMode::from_str("Lenient").unwrap(), TestMode::Lenient);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = TestMode::from_str("loose");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid TestMode: loose"));
    }
}
