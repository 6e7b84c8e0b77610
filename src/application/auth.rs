//! Access gate in front of the main application screens.
//!
//! The gate only answers yes or no. Everything about what happens next
//! (switching screens, showing a rejection) belongs to the caller.

use crate::infra::app_config::LoginConfig;

/// Decides whether a username/password pair is accepted.
pub trait CredentialVerifier: Send + Sync {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Accepts exactly one configured pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedCredentialVerifier {
    username: String,
    password: String,
}

impl FixedCredentialVerifier {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl Default for FixedCredentialVerifier {
    fn default() -> Self {
        Self::from(&LoginConfig::default())
    }
}

impl From<&LoginConfig> for FixedCredentialVerifier {
    fn from(login: &LoginConfig) -> Self {
        Self::new(login.username.clone(), login.password.clone())
    }
}

impl CredentialVerifier for FixedCredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool {
        username == self.username && password == self.password
    }
}

pub struct AccessGate {
    verifier: Box<dyn CredentialVerifier>,
}

impl AccessGate {
    pub fn new(verifier: impl CredentialVerifier + 'static) -> Self {
        Self {
            verifier: Box::new(verifier),
        }
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        let accepted = self.verifier.verify(username, password);
        if accepted {
            log::info!("login accepted for '{}'", username);
        } else {
            log::warn!("login rejected for '{}'", username);
        }
        accepted
    }
}

impl Default for AccessGate {
    fn default() -> Self {
        Self::new(FixedCredentialVerifier::default())
    }
}
