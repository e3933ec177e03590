//! Registry configuration parameters.

/// Configuration for a domain's allocation registry.
///
/// Applied when a registry is first materialized via
/// [`crate::global::init`]; ignored if that domain's registry already
/// exists. All values are immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Number of record slots reserved up front.
    ///
    /// Default: 1024. Reserving ahead of the provider's working set keeps
    /// rehashing out of the register/unregister critical section; the
    /// table still grows past this on demand.
    pub initial_capacity: usize,
}

impl RegistryConfig {
    /// Default reserved record slots.
    pub const DEFAULT_INITIAL_CAPACITY: usize = 1024;

    /// Create a config reserving `initial_capacity` record slots.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self { initial_capacity }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::with_capacity(Self::DEFAULT_INITIAL_CAPACITY)
    }
}
