use std::sync::Arc;

use log::{debug, info};

use stamina_shared::{
    guarded_call, sanitize_amount, CapabilityBinding, CapabilityResolver, ConsumptionRequest,
    DrainDirective, ProcessRole,
};

use crate::user::{PlayerResolver, UserKey};

/// What became of an inbound [`DrainDirective`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectiveOutcome {
    /// Handed to the stamina capability
    Forwarded,
    /// The sending user has no live player entity
    PlayerUnresolved,
    /// No stamina capability is bound, nothing to start or stop
    CapabilityAbsent,
}

/// The only place a real stamina deduction is authorized.
///
/// Inbound client requests and the server-side facade both end up here. All
/// capability failures are logged and swallowed: a missing or misbehaving
/// stamina subsystem degrades to "action allowed".
pub struct ServerAuthority<E> {
    resolver: Arc<CapabilityResolver<E>>,
    players: Arc<dyn PlayerResolver<E>>,
}

impl<E> ServerAuthority<E> {
    pub fn new(resolver: Arc<CapabilityResolver<E>>, players: Arc<dyn PlayerResolver<E>>) -> Self {
        Self { resolver, players }
    }

    pub fn resolver(&self) -> &Arc<CapabilityResolver<E>> {
        &self.resolver
    }

    fn capability(&self) -> Option<CapabilityBinding<E>> {
        self.resolver.resolve(ProcessRole::Server)
    }

    // Direct calls, for code already running on the server

    /// Deducts `amount` from `player`, returning the capability's verdict.
    /// `true` when no capability is bound or the call fails.
    pub fn consume(&self, player: &E, amount: f32) -> bool {
        match self.capability() {
            Some(capability) => consume_with(&capability, player, amount),
            None => true,
        }
    }

    pub fn start_drain(&self, player: &E, action_id: &str, amount_per_second: f32) -> bool {
        let Some(capability) = self.capability() else {
            return true;
        };
        let started = guarded_call("start_stamina_drain", || {
            capability.start_stamina_drain(player, action_id, amount_per_second)
        })
        .unwrap_or(true);
        debug!(
            "Drain session {:?} at {}/s started: {}",
            action_id, amount_per_second, started
        );
        started
    }

    pub fn stop_drain(&self, player: &E, action_id: &str) {
        let Some(capability) = self.capability() else {
            return;
        };
        if guarded_call("stop_stamina_drain", || {
            capability.stop_stamina_drain(player, action_id)
        })
        .is_ok()
        {
            debug!("Drain session {:?} stopped", action_id);
        }
    }

    // Inbound client messages

    /// Applies a client's [`ConsumptionRequest`]. Returns the verdict, or
    /// `None` when the user has no live player and the request was dropped.
    pub fn on_consumption_request(
        &self,
        user_key: &UserKey,
        request: &ConsumptionRequest,
    ) -> Option<bool> {
        let Some(capability) = self.capability() else {
            return Some(true);
        };
        let Some(player) = self.players.player_entity(user_key) else {
            debug!(
                "Dropping consumption request from {:?}: no live player",
                user_key
            );
            return None;
        };

        let allowed = consume_with(&capability, &player, request.amount);
        if allowed {
            debug!(
                "Consumed {} stamina for {:?}",
                request.amount, user_key
            );
        } else {
            info!(
                "Denied consumption of {} stamina for {:?}",
                request.amount, user_key
            );
        }
        Some(allowed)
    }

    /// Applies a client's [`DrainDirective`]. Every directive is forwarded as
    /// is; repeated starts or stops are left to the capability.
    pub fn on_drain_directive(&self, user_key: &UserKey, directive: &DrainDirective) -> DirectiveOutcome {
        let Some(player) = self.players.player_entity(user_key) else {
            debug!(
                "Dropping drain directive {:?} from {:?}: no live player",
                directive.action_id, user_key
            );
            return DirectiveOutcome::PlayerUnresolved;
        };
        if self.capability().is_none() {
            return DirectiveOutcome::CapabilityAbsent;
        }

        if directive.starting {
            self.start_drain(&player, &directive.action_id, directive.amount_per_second);
        } else {
            self.stop_drain(&player, &directive.action_id);
        }
        DirectiveOutcome::Forwarded
    }
}

fn consume_with<E>(capability: &CapabilityBinding<E>, player: &E, amount: f32) -> bool {
    let amount = sanitize_amount(amount);
    guarded_call("consume_stamina", || {
        capability.consume_stamina(player, amount, false)
    })
    .unwrap_or(true)
}
