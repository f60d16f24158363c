//! # Stamina Client
//! The requesting side of stamina-bridge. Game code calls the
//! [`ClientFacade`]; consumption and drain requests travel to the server,
//! which alone decides whether stamina is actually spent.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use stamina_shared::{
        namespace_action_id, stamina_protocol, CapabilityHost, CapabilityRegistry,
        CapabilityResolver, ProcessRole, Protocol, ResolverConfig, StaminaCapability,
        StaminaEntryPoint, StaminaFacade,
    };
}

mod client;
mod client_config;
mod error;
mod events;
mod facade;
mod proxy;

pub use client::Client;
pub use client_config::ClientConfig;
pub use error::StaminaClientError;
pub use events::{ConsumptionAckEvent, ErrorEvent, Event, Events};
pub use facade::ClientFacade;
pub use proxy::ClientRequestProxy;
