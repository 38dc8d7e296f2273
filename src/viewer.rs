// SPDX-License-Identifier: Apache-2.0
// Copyright 2024-2026 CAB Ingénierie / Christophe ABOULICAM
use serde::{Deserialize, Serialize};

/// Who is looking at the page, as reported by the host's session layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewerIdentity {
    /// No authenticated session
    #[default]
    Anonymous,
    /// Logged-in viewer and the email on their account
    Authenticated { email: String },
}

impl ViewerIdentity {
    /// Create an anonymous viewer
    pub fn anonymous() -> Self {
        Self::Anonymous
    }

    /// Create a logged-in viewer with the given email
    pub fn authenticated(email: impl Into<String>) -> Self {
        Self::Authenticated {
            email: email.into(),
        }
    }

    /// Build an identity from the host's two-part query.
    ///
    /// A logged-in viewer without an email on record becomes an authenticated
    /// viewer with an empty email. The email is ignored when not logged in.
    pub fn from_parts(is_logged_in: bool, email: Option<String>) -> Self {
        if is_logged_in {
            Self::Authenticated {
                email: email.unwrap_or_default(),
            }
        } else {
            Self::Anonymous
        }
    }

    /// Check if the viewer has an authenticated session
    pub fn is_logged_in(&self) -> bool {
        matches!(self, Self::Authenticated { .. })
    }

    /// Email of a logged-in viewer
    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Anonymous => None,
            Self::Authenticated { email } => Some(email),
        }
    }
}

/// Identity lookup supplied by the host for the current request
pub trait IdentityProvider {
    /// The viewer of the page being rendered
    fn current_viewer(&self) -> ViewerIdentity;
}

impl IdentityProvider for ViewerIdentity {
    fn current_viewer(&self) -> ViewerIdentity {
        self.clone()
    }
}

impl<F> IdentityProvider for F
where
    F: Fn() -> ViewerIdentity,
{
    fn current_viewer(&self) -> ViewerIdentity {
        self()
    }
}
