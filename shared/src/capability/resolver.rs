use std::{
    panic::{catch_unwind, AssertUnwindSafe},
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use log::{error, info, warn};

use crate::ProcessRole;

use super::{
    capability::CapabilityBinding, error::DiscoveryError, host::CapabilityHost,
    invoke::panic_detail,
};

/// Contains Config properties used by the [`CapabilityResolver`]
#[derive(Clone, Debug)]
pub struct ResolverConfig {
    /// Name the stamina subsystem registers its entry point under
    pub entry_point: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            entry_point: "stamina".to_string(),
        }
    }
}

/// Per-role resolution progress
pub enum ResolutionState<E> {
    NotAttempted,
    /// Discovery failed at least once. The failure was logged, later failures
    /// are silent.
    AttemptedOnce,
    Cached(CapabilityBinding<E>),
}

/// Binding-free snapshot of a [`ResolutionState`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResolutionStatus {
    NotAttempted,
    AttemptedOnce,
    Cached,
}

/// Lazily locates the optional stamina capability and caches one binding
/// per [`ProcessRole`] for the rest of the process lifetime.
///
/// Each role has its own mutex, held across the whole discover-and-cache
/// sequence, so concurrent first calls neither race the cache write nor
/// duplicate the one-time log.
pub struct CapabilityResolver<E> {
    host: Arc<dyn CapabilityHost<E>>,
    config: ResolverConfig,
    states: [Mutex<ResolutionState<E>>; 3],
}

impl<E> CapabilityResolver<E> {
    pub fn new(host: Arc<dyn CapabilityHost<E>>, config: ResolverConfig) -> Self {
        Self {
            host,
            config,
            states: [
                Mutex::new(ResolutionState::NotAttempted),
                Mutex::new(ResolutionState::NotAttempted),
                Mutex::new(ResolutionState::NotAttempted),
            ],
        }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Returns the capability binding for `role`, or `None` when the
    /// subsystem is disabled or cannot be found yet
    pub fn resolve(&self, role: ProcessRole) -> Option<CapabilityBinding<E>> {
        if !self.host.is_enabled() {
            return None;
        }

        let mut state = self.lock(role);

        if let ResolutionState::Cached(binding) = &*state {
            return Some(binding.clone());
        }

        match self.discover(role) {
            Ok(binding) => {
                info!(
                    "Stamina capability bound for {} role via {}.{}",
                    role,
                    self.config.entry_point,
                    role.accessor_name()
                );
                *state = ResolutionState::Cached(binding.clone());
                Some(binding)
            }
            Err(err) => {
                if let ResolutionState::NotAttempted = &*state {
                    if err.is_expected() {
                        warn!(
                            "Stamina capability unavailable for {} role, actions will be allowed: {}",
                            role, err
                        );
                    } else {
                        error!(
                            "Stamina capability lookup for {} role raised an error, actions will be allowed: {}",
                            role, err
                        );
                    }
                    *state = ResolutionState::AttemptedOnce;
                }
                None
            }
        }
    }

    /// Whether the optional subsystem is enabled, without attempting discovery
    pub fn is_enabled(&self) -> bool {
        self.host.is_enabled()
    }

    pub fn status(&self, role: ProcessRole) -> ResolutionStatus {
        match &*self.lock(role) {
            ResolutionState::NotAttempted => ResolutionStatus::NotAttempted,
            ResolutionState::AttemptedOnce => ResolutionStatus::AttemptedOnce,
            ResolutionState::Cached(_) => ResolutionStatus::Cached,
        }
    }

    fn discover(&self, role: ProcessRole) -> Result<CapabilityBinding<E>, DiscoveryError> {
        let lookup = || {
            let entry_point = self.host.find_entry_point(&self.config.entry_point)?;
            entry_point.read_accessor(role.accessor_name())
        };

        match catch_unwind(AssertUnwindSafe(lookup)) {
            Ok(result) => result,
            Err(payload) => Err(DiscoveryError::LookupFailed {
                detail: panic_detail(payload.as_ref()),
            }),
        }
    }

    fn lock(&self, role: ProcessRole) -> MutexGuard<'_, ResolutionState<E>> {
        // the state is only ever replaced wholesale, so a poisoned value is still coherent
        self.states[role.index()]
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}
