//! Newtype identifiers.
//!
//! Product ids come from the storefront API and slugs from the URL; keeping
//! them as distinct types stops a slug being passed where an id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_string())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(
    /// Storefront product identifier (`id` / `_id` on the wire).
    ProductId
);
define_id!(
    /// URL slug identifying which product page to show.
    ProductSlug
);

impl ProductId {
    /// The trailing `n` characters, used for generated SKUs.
    pub fn tail(&self, n: usize) -> &str {
        if n == 0 {
            return "";
        }
        let start = self
            .0
            .char_indices()
            .rev()
            .nth(n - 1)
            .map(|(idx, _)| idx)
            .unwrap_or(0);
        &self.0[start..]
    }
}
