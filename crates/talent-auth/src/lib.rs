//! # talent-auth
//!
//! Session lifecycle for the Talent client.
//!
//! ## Modules
//!
//! - `api` : the `AuthApi` seam over the authentication endpoints
//! - `session` : startup bootstrap (refresh-then-retry) and login/signup/logout
//! - `guard` : route access levels and the pure guard decision

pub mod api;
pub mod guard;
pub mod session;

pub use api::AuthApi;
pub use guard::{Access, Dashboard, GuardDecision, Route, dashboard_for, guard, require};
pub use session::{BootstrapState, SessionBootstrap, SessionService, SessionSnapshot};
