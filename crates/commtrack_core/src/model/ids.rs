//! Opaque identifiers for domain records.
//!
//! Ids are plain strings on the wire. Generated ids are UUID v4 text, but
//! any caller-supplied value (for example `"c1"` from an import) is valid.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a caller-provided id without validation.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Creates a fresh random id.
            pub fn generate() -> Self {
                Self(Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

opaque_id!(
    /// Identifier of a [`crate::Company`].
    CompanyId
);
opaque_id!(
    /// Identifier of a [`crate::Communication`].
    CommunicationId
);
opaque_id!(
    /// Identifier of a [`crate::CommunicationMethod`] catalog entry.
    MethodId
);
