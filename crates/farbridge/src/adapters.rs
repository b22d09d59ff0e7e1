//! Dispatch-target adapters.
//!
//! Thin translators from inbound actions to host capabilities: compose a
//! share cast, deliver a push notification, open an external URL. All of
//! them absorb failures locally; nothing here reports back into the game.

use std::sync::Arc;

use tracing::{debug, warn};
use url::{form_urlencoded, Url};

use farbridge_host::{HapticIntensity, HostActions, Notifier, NotifyRequest, NotifyStatus};
use farbridge_shared::constants::{
    COMPOSE_URL, NOTIFICATION_TITLE, SHARE_GAME_TEXT, SHARE_SCORE_TEMPLATE,
};
use farbridge_shared::UserIdentity;

/// Sharing, notification, and navigation targets for the dispatcher.
pub struct Adapters {
    host: Arc<dyn HostActions>,
    notifier: Arc<dyn Notifier>,
    app_url: String,
}

impl Adapters {
    /// Creates the adapter set.
    #[must_use]
    pub fn new(host: Arc<dyn HostActions>, notifier: Arc<dyn Notifier>, app_url: String) -> Self {
        Self {
            host,
            notifier,
            app_url,
        }
    }

    /// Opens a compose surface with the fixed promotional text.
    pub async fn share_game(&self) {
        self.open_compose(SHARE_GAME_TEXT).await;
    }

    /// Opens a compose surface with the score interpolated verbatim.
    ///
    /// The score originates inside the embedded game, not the network, so it
    /// travels untouched.
    pub async fn share_score(&self, score: &str) {
        let text = SHARE_SCORE_TEMPLATE.replace("{score}", score);
        self.open_compose(&text).await;
    }

    /// Delivers a push notification to the session user.
    ///
    /// Dropped with a log when the session has no account; no error reaches
    /// the game either way.
    pub async fn send_notification(&self, identity: &UserIdentity, message: &str) {
        if !identity.has_account() {
            warn!("cannot notify, fid missing; dropping notification");
            return;
        }
        let request = NotifyRequest {
            fid: identity.account_id.clone(),
            title: NOTIFICATION_TITLE.to_string(),
            body: message.to_string(),
        };
        match self.notifier.send(&request).await {
            Ok(NotifyStatus::Delivered) => debug!(fid = %request.fid, "notification delivered"),
            Ok(NotifyStatus::RateLimited) => warn!(fid = %request.fid, "notification rate-limited"),
            Ok(NotifyStatus::Error(body)) => warn!(fid = %request.fid, %body, "notification rejected"),
            Err(error) => warn!(%error, "notification transport failed"),
        }
    }

    /// Opens an external URL, http(s) schemes only.
    ///
    /// Anything else (including `javascript:`) is silently dropped.
    pub async fn open_url(&self, raw: &str) {
        let Ok(parsed) = Url::parse(raw) else {
            warn!(url = raw, "dropping malformed open-url request");
            return;
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            warn!(url = raw, scheme = parsed.scheme(), "dropping non-http open-url request");
            return;
        }
        if let Err(error) = self.host.open_url(parsed.as_str()).await {
            warn!(%error, "host failed to open url");
        }
    }

    /// Prompts the user to add the mini app to their client.
    pub async fn add_mini_app(&self) {
        if let Err(error) = self.host.add_mini_app().await {
            warn!(%error, "host rejected the install prompt");
        }
    }

    /// Triggers haptic feedback; unknown intensity names use the host default.
    pub async fn haptic_impact(&self, intensity: Option<&str>) {
        let intensity = intensity
            .and_then(HapticIntensity::from_wire)
            .unwrap_or_default();
        if let Err(error) = self.host.haptic_impact(intensity).await {
            warn!(%error, "host failed haptic feedback");
        }
    }

    async fn open_compose(&self, text: &str) {
        let url = compose_url(text, &self.app_url);
        if let Err(error) = self.host.open_url(&url).await {
            warn!(%error, "host failed to open compose surface");
        }
    }
}

/// Builds the compose URL with the cast text and the app embed.
fn compose_url(text: &str, app_url: &str) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("text", text)
        .append_pair("embeds[]", app_url)
        .finish();
    format!("{COMPOSE_URL}?{query}")
}
