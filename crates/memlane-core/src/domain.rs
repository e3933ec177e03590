//! Execution domain tags.

use std::fmt;

/// The execution domain a memory allocation belongs to.
///
/// Host and device allocations are tracked in separate registries. Code
/// paths may differ between the two domains while sharing source; the tag
/// selects which registry a query consults, never how it executes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Domain {
    /// General-purpose CPU execution; memory reachable by ordinary loads.
    Host,
    /// Accelerator execution; memory owned by the device-side allocator
    /// and not dereferenceable from host code.
    Device,
}

impl Domain {
    /// Both domains, in probe order (host first).
    pub const ALL: [Domain; 2] = [Domain::Host, Domain::Device];
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Device => write!(f, "device"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names() {
        assert_eq!(Domain::Host.to_string(), "host");
        assert_eq!(Domain::Device.to_string(), "device");
    }

    #[test]
    fn all_probes_host_first() {
        assert_eq!(Domain::ALL, [Domain::Host, Domain::Device]);
    }
}
