//! Session state, startup bootstrap, and the login/logout service.

pub mod bootstrap;
pub mod service;
pub mod state;

#[cfg(test)]
pub(crate) mod testing;

pub use bootstrap::SessionBootstrap;
pub use service::SessionService;
pub use state::{BootstrapState, SessionSnapshot};
