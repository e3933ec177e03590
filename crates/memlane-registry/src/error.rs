//! Registry error types.

use std::error::Error;
use std::fmt;

use memlane_core::{Address, Domain};

/// Errors that can occur during registry mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegistryError {
    /// A base address was registered while a record for it is still live.
    ///
    /// The allocation provider is required to unregister before a base
    /// address can be reused, so this indicates a provider bug (double
    /// register, or a free that skipped unregister).
    DuplicateAllocation {
        /// The registry domain the collision occurred in.
        domain: Domain,
        /// The conflicting base address.
        base: Address,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAllocation { domain, base } => {
                write!(f, "duplicate allocation in {domain} registry at base {base}")
            }
        }
    }
}

impl Error for RegistryError {}
