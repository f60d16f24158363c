use std::sync::Arc;

use stamina_shared::{ProcessRole, StaminaFacade, StaminaQueries};

use crate::proxy::ClientRequestProxy;

/// [`StaminaFacade`] for code running in a client process.
///
/// Consumption and drain sessions are forwarded to the server and always
/// report success. Queries are answered by the client's own binding, for
/// display only. Per-tick drains deduct stamina, which only the server may
/// do, so they are a no-op here.
pub struct ClientFacade<E> {
    proxy: Arc<ClientRequestProxy<E>>,
    queries: StaminaQueries<E>,
    namespace: String,
}

impl<E> ClientFacade<E> {
    pub fn new(proxy: Arc<ClientRequestProxy<E>>, namespace: &str) -> Self {
        let queries = StaminaQueries::new(proxy.resolver().clone(), ProcessRole::Client);
        Self {
            proxy,
            queries,
            namespace: namespace.to_string(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl<E> StaminaFacade<E> for ClientFacade<E> {
    fn role(&self) -> ProcessRole {
        ProcessRole::Client
    }

    fn consume_stamina(&self, player: &E, amount: f32) -> bool {
        self.proxy.request_consumption(player, amount)
    }

    fn start_drain(&self, player: &E, action_id: &str, amount_per_second: f32) -> bool {
        self.proxy
            .request_drain_start(player, &self.namespace, action_id, amount_per_second)
    }

    fn stop_drain(&self, player: &E, action_id: &str) {
        self.proxy.request_drain_stop(player, &self.namespace, action_id);
    }

    fn drain(&self, _player: &E, _amount_per_second: f32, _delta_time: f32) -> bool {
        true
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
