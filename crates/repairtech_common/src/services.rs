// --- File: crates/repairtech_common/src/services.rs ---
//! Service abstractions for external collaborators.
//!
//! This module provides trait definitions for the external services used by
//! the application. These traits allow for dependency injection and easier
//! testing by decoupling the application logic from specific implementations.

use serde::{Deserialize, Serialize};
use std::error::Error as StdError;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

/// Type alias for a boxed future that returns a Result
pub type BoxFuture<'a, T, E> = Pin<Box<dyn Future<Output = Result<T, E>> + Send + 'a>>;

/// A wrapper error type that implements std::error::Error for Box<dyn std::error::Error + Send + Sync>
#[derive(Debug)]
pub struct BoxedError(pub Box<dyn StdError + Send + Sync>);

impl fmt::Display for BoxedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl StdError for BoxedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.0.source()
    }
}

impl From<Box<dyn StdError + Send + Sync>> for BoxedError {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        BoxedError(err)
    }
}

/// A trait for outbound transactional email.
///
/// The implementation talks to the email provider; callers only see the
/// rendered message and the provider's acknowledgement.
pub trait MailService: Send + Sync {
    /// Error type returned by mail operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Send a single email with a pre-rendered HTML body.
    fn send_email(
        &self,
        to: &str,
        subject: &str,
        html_body: &str,
    ) -> BoxFuture<'_, MailResult, Self::Error>;
}

/// A trait for resolving a session token to the account behind it.
///
/// Credential storage, hashing and token issuance live entirely in the
/// external auth collaborator; this trait only asks "who is this?".
pub trait SessionService: Send + Sync {
    /// Error type returned by session operations.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Resolve the current user for a session access token.
    fn current_user(&self, access_token: &str) -> BoxFuture<'_, SessionUser, Self::Error>;
}

/// A factory for creating service instances.
///
/// This trait provides methods for creating instances of various services.
/// It's used by the application to get access to the services it needs.
pub trait ServiceFactory: Send + Sync {
    /// Get a mail service instance.
    fn mail_service(&self) -> Option<Arc<dyn MailService<Error = BoxedError>>>;

    /// Get a session service instance.
    fn session_service(&self) -> Option<Arc<dyn SessionService<Error = BoxedError>>>;
}

/// Represents the result of a mail send operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailResult {
    /// Provider-assigned id of the message.
    pub id: String,
    /// The status of the send, as reported by the provider.
    pub status: String,
}

/// The authenticated account behind a session token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionUser {
    /// Opaque account id issued by the auth collaborator.
    pub id: String,
    /// Account email. Profiles read it from here, never the other way round.
    pub email: String,
    /// When the email was confirmed, if it has been.
    pub confirmed_at: Option<String>,
}
