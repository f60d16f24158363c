use std::sync::Arc;

use super::error::CapabilityError;

/// The callable surface of the optional stamina subsystem.
///
/// `E` is the host's player entity handle. Implementations own all stamina
/// accounting, including drain sessions keyed by (player, action id).
pub trait StaminaCapability<E>: Send + Sync {
    /// Deducts `amount` from the player's stamina. With `dry_run` set, only
    /// reports whether the deduction would succeed.
    fn consume_stamina(&self, player: &E, amount: f32, dry_run: bool)
        -> Result<bool, CapabilityError>;

    /// Begins a continuous drain session identified by `action_id`
    fn start_stamina_drain(
        &self,
        player: &E,
        action_id: &str,
        amount_per_second: f32,
    ) -> Result<bool, CapabilityError>;

    /// Ends the drain session identified by `action_id`, if one is active
    fn stop_stamina_drain(&self, player: &E, action_id: &str) -> Result<(), CapabilityError>;

    /// Drains `amount_per_second * delta_time` in a single step
    fn drain_stamina(
        &self,
        player: &E,
        amount_per_second: f32,
        delta_time: f32,
    ) -> Result<bool, CapabilityError>;

    fn current_stamina(&self, player: &E) -> Result<f32, CapabilityError>;

    fn max_stamina(&self, player: &E) -> Result<f32, CapabilityError>;

    fn is_exhausted(&self, player: &E) -> Result<bool, CapabilityError>;

    fn can_perform_stamina_action(&self, player: &E) -> Result<bool, CapabilityError>;
}

/// A resolved, shareable handle to the stamina capability
pub type CapabilityBinding<E> = Arc<dyn StaminaCapability<E>>;
