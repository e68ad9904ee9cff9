use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::validation::ValidationError;

static TWO_LETTER_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}$").expect("invalid regex"));

macro_rules! code {
    ($name:ident, $doc:expr) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Parses a code, upper-casing ASCII letters first.
            ///
            /// The result is always two upper-case ASCII letters.
            pub fn parse(value: impl Into<String>) -> Result<Self, ValidationError> {
                let s: String = value.into();
                let s = s.trim().to_ascii_uppercase();
                if !TWO_LETTER_CODE.is_match(&s) {
                    return Err(ValidationError::PatternMismatch {
                        field: stringify!($name),
                        value: s,
                    });
                }
                Ok(Self(s))
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::parse(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

code!(
    ProvinceCode,
    "Two-letter province or state code (e.g. `ON`, `MI`)."
);
code!(
    CountryCode,
    "Two-letter country code owning a province (e.g. `CA`, `US`)."
);
