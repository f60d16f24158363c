use std::{
    default::Default,
    net::{Ipv4Addr, SocketAddr},
};

/// Contains Config properties which will be used by a Client
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Where stamina requests are sent
    pub server_address: SocketAddr,
    /// Prefix applied to drain action ids issued through the client facade
    pub action_namespace: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_address: SocketAddr::from((Ipv4Addr::LOCALHOST, 14191)),
            action_namespace: "stamina_bridge".to_string(),
        }
    }
}
