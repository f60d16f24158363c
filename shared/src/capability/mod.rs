pub mod capability;
pub mod error;
pub mod host;
pub mod invoke;
pub mod registry;
pub mod resolver;
