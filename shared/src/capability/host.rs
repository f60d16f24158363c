use std::sync::Arc;

use super::{capability::CapabilityBinding, error::DiscoveryError};

/// Host-side view of the optional stamina subsystem.
///
/// The host decides whether the subsystem is loaded at all and where its
/// entry points live. Nothing else is assumed about how it got there.
///
/// Lookups run while the [`CapabilityResolver`](crate::CapabilityResolver)
/// holds the lock for the role being resolved. Neither this trait nor
/// [`EntryPoint`] may call back into `resolve` for that role, or the calling
/// thread deadlocks.
pub trait CapabilityHost<E>: Send + Sync {
    /// Whether the optional stamina subsystem is enabled in this process.
    /// Checked before any other interaction.
    fn is_enabled(&self) -> bool;

    /// Locates the entry point registered under `name`
    fn find_entry_point(&self, name: &str) -> Result<Arc<dyn EntryPoint<E>>, DiscoveryError>;
}

/// A registered entry point of the stamina subsystem, exposing one accessor
/// per process role
pub trait EntryPoint<E>: Send + Sync {
    fn name(&self) -> &str;

    /// Reads the current value of the accessor called `accessor`
    fn read_accessor(&self, accessor: &str) -> Result<CapabilityBinding<E>, DiscoveryError>;
}
