use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, RwLock,
    },
};

use crate::ProcessRole;

use super::{
    capability::CapabilityBinding,
    error::DiscoveryError,
    host::{CapabilityHost, EntryPoint},
};

/// Name-keyed table of stamina entry points, populated by the host while the
/// optional subsystem loads
pub struct CapabilityRegistry<E> {
    enabled: AtomicBool,
    entry_points: RwLock<HashMap<String, Arc<dyn EntryPoint<E>>>>,
}

impl<E> CapabilityRegistry<E> {
    /// Creates an empty registry with the subsystem disabled
    pub fn new() -> Self {
        Self {
            enabled: AtomicBool::new(false),
            entry_points: RwLock::new(HashMap::new()),
        }
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::SeqCst);
    }

    /// Registers `entry_point` under its own name, replacing any previous
    /// entry point with that name
    pub fn register(&self, entry_point: Arc<dyn EntryPoint<E>>) -> Result<(), DiscoveryError> {
        let mut entry_points = self.entry_points.write().map_err(|_| poisoned())?;
        entry_points.insert(entry_point.name().to_string(), entry_point);
        Ok(())
    }

    pub fn unregister(&self, name: &str) -> Result<(), DiscoveryError> {
        let mut entry_points = self.entry_points.write().map_err(|_| poisoned())?;
        entry_points.remove(name);
        Ok(())
    }
}

impl<E> Default for CapabilityRegistry<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CapabilityHost<E> for CapabilityRegistry<E> {
    fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::SeqCst)
    }

    fn find_entry_point(&self, name: &str) -> Result<Arc<dyn EntryPoint<E>>, DiscoveryError> {
        let entry_points = self.entry_points.read().map_err(|_| poisoned())?;
        entry_points
            .get(name)
            .cloned()
            .ok_or_else(|| DiscoveryError::EntryPointMissing {
                name: name.to_string(),
            })
    }
}

fn poisoned() -> DiscoveryError {
    DiscoveryError::LookupFailed {
        detail: "entry point table lock poisoned".to_string(),
    }
}

// StaminaEntryPoint

/// An entry point whose accessors are filled in by the stamina subsystem.
/// An accessor can be declared before it holds a binding.
pub struct StaminaEntryPoint<E> {
    name: String,
    accessors: RwLock<HashMap<String, Option<CapabilityBinding<E>>>>,
}

impl<E> StaminaEntryPoint<E> {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            accessors: RwLock::new(HashMap::new()),
        }
    }

    /// Builder-style: binds `binding` to the accessor for `role`
    pub fn with_role(self, role: ProcessRole, binding: CapabilityBinding<E>) -> Self {
        if let Ok(mut accessors) = self.accessors.write() {
            accessors.insert(role.accessor_name().to_string(), Some(binding));
        }
        self
    }

    /// Declares an accessor without giving it a value
    pub fn declare_accessor(&self, accessor: &str) -> Result<(), DiscoveryError> {
        let mut accessors = self.accessors.write().map_err(|_| poisoned())?;
        accessors.entry(accessor.to_string()).or_insert(None);
        Ok(())
    }

    pub fn set_accessor(
        &self,
        accessor: &str,
        binding: CapabilityBinding<E>,
    ) -> Result<(), DiscoveryError> {
        let mut accessors = self.accessors.write().map_err(|_| poisoned())?;
        accessors.insert(accessor.to_string(), Some(binding));
        Ok(())
    }
}

impl<E> EntryPoint<E> for StaminaEntryPoint<E> {
    fn name(&self) -> &str {
        &self.name
    }

    fn read_accessor(&self, accessor: &str) -> Result<CapabilityBinding<E>, DiscoveryError> {
        let accessors = self.accessors.read().map_err(|_| poisoned())?;
        match accessors.get(accessor) {
            None => Err(DiscoveryError::AccessorMissing {
                entry_point: self.name.clone(),
                accessor: accessor.to_string(),
            }),
            Some(None) => Err(DiscoveryError::AccessorEmpty {
                entry_point: self.name.clone(),
                accessor: accessor.to_string(),
            }),
            Some(Some(binding)) => Ok(binding.clone()),
        }
    }
}
