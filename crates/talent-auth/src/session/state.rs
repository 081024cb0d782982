//! Bootstrap states and the snapshot guards read.

use talent_entity::user::CurrentUser;

/// Lifecycle of the session on startup.
///
/// `NoSession` is the state before bootstrap runs, `Loading` while it runs.
/// `Authenticated` and `Anonymous` are terminal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BootstrapState {
    #[default]
    NoSession,
    Loading,
    Authenticated(CurrentUser),
    Anonymous,
}

impl BootstrapState {
    /// Whether bootstrap has finished.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated(_) | Self::Anonymous)
    }

    /// The resolved user, if any.
    pub fn user(&self) -> Option<&CurrentUser> {
        match self {
            Self::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    /// Collapse into the loading flag plus optional user.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            loading: !self.is_terminal(),
            user: self.user().cloned(),
        }
    }
}

/// What the rest of the client sees of the session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    /// True until bootstrap reaches a terminal state.
    pub loading: bool,
    /// The authenticated user once resolved.
    pub user: Option<CurrentUser>,
}

impl SessionSnapshot {
    /// A resolved, anonymous snapshot.
    pub fn anonymous() -> Self {
        Self {
            loading: false,
            user: None,
        }
    }

    /// A resolved snapshot for `user`.
    pub fn authenticated(user: CurrentUser) -> Self {
        Self {
            loading: false,
            user: Some(user),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}
