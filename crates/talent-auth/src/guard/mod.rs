//! Route access control.
//!
//! Guards are pure functions of the session snapshot: they never fetch data
//! and never mutate the session.

pub mod policy;
pub mod route;

pub use policy::{GuardDecision, guard, require};
pub use route::{Access, Dashboard, Route, dashboard_for};
