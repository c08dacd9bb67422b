//! Validated Spanish IBAN value

use crate::types::LedgerError;
use crate::validation::iban::validate_iban;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Spanish IBAN (`ES` + 22 digits) whose check digits have been verified
///
/// Only obtainable through [`validate_iban`] (or `FromStr`), or by loading an
/// already-persisted record from a store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Iban(String);

impl Iban {
    pub(crate) fn new_unchecked(value: String) -> Self {
        Iban(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Iban {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_iban(s)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Iban {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
