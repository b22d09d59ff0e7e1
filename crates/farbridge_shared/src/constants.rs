//! Fixed product constants baked into the bridge.
//!
//! Values that change per deployment belong in [`crate::config::BridgeConfig`];
//! this module only holds defaults and templates both sides agree on.

/// Public URL of the hosting mini app, embedded in share casts.
pub const DEFAULT_APP_URL: &str = "https://fargo-sable.vercel.app/";

/// Compose endpoint of the social client used for share actions.
pub const COMPOSE_URL: &str = "https://warpcast.com/~/compose";

/// Fixed promotional text for the `share-game` action.
pub const SHARE_GAME_TEXT: &str = "\u{1f3ae} Try this awesome game!";

/// Template for the `share-score` action; `{score}` is replaced verbatim.
pub const SHARE_SCORE_TEMPLATE: &str = "\u{1f3c6} I scored {score} points! Can you beat me?";

/// Title attached to every push notification the bridge delivers.
pub const NOTIFICATION_TITLE: &str = "\u{1f3af} Farcaster Ping!";

/// Default notification-delivery endpoint.
pub const DEFAULT_NOTIFY_ENDPOINT: &str = "https://fargo-sable.vercel.app/api/send-notification";

/// Token amount used when a payment request carries none.
pub const DEFAULT_PAYMENT_AMOUNT: &str = "2";

/// Username reported to the game when the host has no identity.
pub const GUEST_USERNAME: &str = "Guest";
