use std::default::Default;

/// Contains Config properties which will be used by the Server
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Whether to reply to every handled consumption request with a
    /// `ConsumptionAck` carrying the authoritative verdict. Clients never
    /// depend on the reply; their facade has already returned `true`.
    pub acknowledge_consumption: bool,
    /// Prefix applied to drain action ids issued through the server facade
    pub action_namespace: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            acknowledge_consumption: false,
            action_namespace: "stamina_bridge".to_string(),
        }
    }
}
