//! Host-runtime capability trait.
//!
//! Mirrors the action primitives the mini-app runtime exposes: readiness
//! signalling, the identity context, URL opening, install prompts and haptic
//! feedback. The bridge treats all of them as fallible and absorbs failures
//! at the call site.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors surfaced by host capability calls.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// The host rejected or failed the action.
    #[error("host action failed: {0}")]
    ActionFailed(String),
    /// The host has no identity context for this session.
    #[error("host identity unavailable")]
    IdentityUnavailable,
}

/// The user object inside the host context.
///
/// Every field is optional; the bridge degrades field by field.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HostUser {
    /// Numeric account identifier.
    pub fid: Option<u64>,
    /// Display name.
    pub username: Option<String>,
    /// Avatar URL.
    #[serde(rename = "pfpUrl")]
    pub pfp_url: Option<String>,
}

/// The context object the host resolves after `ready()`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct HostContext {
    /// Current user, absent for anonymous sessions.
    pub user: Option<HostUser>,
}

/// Intensity levels for haptic impact feedback.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HapticIntensity {
    /// Light tap.
    Light,
    /// Standard tap.
    #[default]
    Medium,
    /// Strong tap.
    Heavy,
    /// Soft, dampened tap.
    Soft,
    /// Sharp, rigid tap.
    Rigid,
}

impl HapticIntensity {
    /// Host-side name of this intensity.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
            Self::Soft => "soft",
            Self::Rigid => "rigid",
        }
    }

    /// Parses an intensity name; unknown names yield `None`.
    #[must_use]
    pub fn from_wire(name: &str) -> Option<Self> {
        match name {
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "heavy" => Some(Self::Heavy),
            "soft" => Some(Self::Soft),
            "rigid" => Some(Self::Rigid),
            _ => None,
        }
    }
}

/// Action primitives of the surrounding mini-app runtime.
///
/// Implementations wrap the real host SDK; tests use in-memory doubles that
/// record calls.
#[async_trait]
pub trait HostActions: Send + Sync {
    /// Signals that the bridge finished loading and the splash can dismiss.
    async fn ready(&self) -> Result<(), HostError>;

    /// Fetches the identity context for this session.
    async fn context(&self) -> Result<HostContext, HostError>;

    /// Opens an external URL in the host's browser surface.
    async fn open_url(&self, url: &str) -> Result<(), HostError>;

    /// Prompts the user to add the mini app to their client.
    async fn add_mini_app(&self) -> Result<(), HostError>;

    /// Triggers haptic impact feedback.
    async fn haptic_impact(&self, intensity: HapticIntensity) -> Result<(), HostError>;
}
