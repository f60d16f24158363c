//! # Stamina Server
//! The authoritative side of stamina-bridge. Receives consumption requests
//! and drain directives from clients, resolves the optional stamina
//! capability, and applies them. When the capability is missing or fails,
//! actions are allowed.

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

mod authority;
mod error;
mod events;
mod facade;
mod server;
mod user;

pub use authority::{DirectiveOutcome, ServerAuthority};
pub use error::StaminaServerError;
pub use events::{ConsumptionEvent, DrainEvent, ErrorEvent, Event, Events};
pub use facade::ServerFacade;
pub use server::{Server, ServerConfig};
pub use user::{PlayerResolver, User, UserKey};
