use std::sync::Arc;

use stamina_shared::{namespace_action_id, ProcessRole, StaminaFacade, StaminaQueries};

use crate::authority::ServerAuthority;

/// [`StaminaFacade`] for code running inside the server process. Every call
/// goes straight to the [`ServerAuthority`], so consumption returns the real
/// verdict.
pub struct ServerFacade<E> {
    authority: Arc<ServerAuthority<E>>,
    queries: StaminaQueries<E>,
    namespace: String,
}

impl<E> ServerFacade<E> {
    pub fn new(authority: Arc<ServerAuthority<E>>, namespace: &str) -> Self {
        let queries = StaminaQueries::new(authority.resolver().clone(), ProcessRole::Server);
        Self {
            authority,
            queries,
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl<E> StaminaFacade<E> for ServerFacade<E> {
    fn role(&self) -> ProcessRole {
        ProcessRole::Server
    }

    fn consume_stamina(&self, player: &E, amount: f32) -> bool {
        self.authority.consume(player, amount)
    }

    fn start_drain(&self, player: &E, action_id: &str, amount_per_second: f32) -> bool {
        let action_id = namespace_action_id(&self.namespace, action_id);
        self.authority.start_drain(player, &action_id, amount_per_second)
    }

    fn stop_drain(&self, player: &E, action_id: &str) {
        let action_id = namespace_action_id(&self.namespace, action_id);
        self.authority.stop_drain(player, &action_id);
    }

    fn drain(&self, player: &E, amount_per_second: f32, delta_time: f32) -> bool {
        self.queries.drain(player, amount_per_second, delta_time)
    }

    fn can_perform_action(&self, player: &E) -> bool {
        self.queries.can_perform_action(player)
    }

    fn current_stamina(&self, player: &E) -> f32 {
        self.queries.current_stamina(player)
    }

    fn max_stamina(&self, player: &E) -> f32 {
        self.queries.max_stamina(player)
    }

    fn is_exhausted(&self, player: &E) -> bool {
        self.queries.is_exhausted(player)
    }
}
