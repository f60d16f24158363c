use std::sync::Arc;

use crate::{
    capability::{invoke::guarded_call, resolver::CapabilityResolver},
    fatigue::FatigueSource,
    ProcessRole,
};

/// Returned by stamina value queries when no capability can answer
pub const UNKNOWN_STAMINA: f32 = -1.0;

/// Side-agnostic stamina entry points for game code.
///
/// Every operation fails open: when the optional stamina subsystem is
/// missing or misbehaves, actions are permitted and queries return
/// [`UNKNOWN_STAMINA`] / `false`. Nothing here panics or returns an error.
pub trait StaminaFacade<E> {
    fn role(&self) -> ProcessRole;

    /// Spends `amount` stamina. Only a server-side facade can ever return
    /// `false`.
    fn consume_stamina(&self, player: &E, amount: f32) -> bool;

    fn consume_for(&self, player: &E, source: &FatigueSource) -> bool {
        self.consume_stamina(player, source.cost)
    }

    /// Starts the drain session `action_id`. Repeated starts are forwarded.
    fn start_drain(&self, player: &E, action_id: &str, amount_per_second: f32) -> bool;

    /// Stops the drain session `action_id`, whether or not it was started
    fn stop_drain(&self, player: &E, action_id: &str);

    /// Drains a single step of `amount_per_second * delta_time`
    fn drain(&self, player: &E, amount_per_second: f32, delta_time: f32) -> bool;

    fn can_perform_action(&self, player: &E) -> bool;

    fn current_stamina(&self, player: &E) -> f32;

    fn max_stamina(&self, player: &E) -> f32;

    fn is_exhausted(&self, player: &E) -> bool;
}

/// Prefixes `action_id` with the issuing subsystem's namespace
pub fn namespace_action_id(namespace: &str, action_id: &str) -> String {
    if namespace.is_empty() {
        action_id.to_string()
    } else {
        format!("{}:{}", namespace, action_id)
    }
}

/// Read-side capability calls made in-process against the binding for one
/// role, shared by the client & server facades
pub struct StaminaQueries<E> {
    resolver: Arc<CapabilityResolver<E>>,
    role: ProcessRole,
}

impl<E> StaminaQueries<E> {
    pub fn new(resolver: Arc<CapabilityResolver<E>>, role: ProcessRole) -> Self {
        Self { resolver, role }
    }

    pub fn role(&self) -> ProcessRole {
        self.role
    }

    pub fn resolver(&self) -> &Arc<CapabilityResolver<E>> {
        &self.resolver
    }

    pub fn drain(&self, player: &E, amount_per_second: f32, delta_time: f32) -> bool {
        let Some(capability) = self.resolver.resolve(self.role) else {
            return true;
        };
        guarded_call("drain_stamina", || {
            capability.drain_stamina(player, amount_per_second, delta_time)
        })
        .unwrap_or(true)
    }

    pub fn can_perform_action(&self, player: &E) -> bool {
        let Some(capability) = self.resolver.resolve(self.role) else {
            return true;
        };
        guarded_call("can_perform_stamina_action", || {
            capability.can_perform_stamina_action(player)
        })
        .unwrap_or(true)
    }

    pub fn current_stamina(&self, player: &E) -> f32 {
        let Some(capability) = self.resolver.resolve(self.role) else {
            return UNKNOWN_STAMINA;
        };
        guarded_call("current_stamina", || capability.current_stamina(player))
            .unwrap_or(UNKNOWN_STAMINA)
    }

    pub fn max_stamina(&self, player: &E) -> f32 {
        let Some(capability) = self.resolver.resolve(self.role) else {
            return UNKNOWN_STAMINA;
        };
        guarded_call("max_stamina", || capability.max_stamina(player)).unwrap_or(UNKNOWN_STAMINA)
    }

    pub fn is_exhausted(&self, player: &E) -> bool {
        let Some(capability) = self.resolver.resolve(self.role) else {
            return false;
        };
        guarded_call("is_exhausted", || capability.is_exhausted(player)).unwrap_or(false)
    }
}
