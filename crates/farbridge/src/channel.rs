//! The embedded game channel seam.
//!
//! Posting is fire-and-forget: the game never acknowledges and applies no
//! backpressure, so the trait is synchronous and infallible. Implementations
//! address the single known embedded frame with an explicit target origin
//! rather than a wildcard recipient.

use farbridge_shared::OutboundMessage;

/// Write side of the cross-frame channel into the embedded game.
pub trait GameChannel: Send + Sync {
    /// Posts one message into the game. Delivery is best-effort.
    fn post(&self, message: OutboundMessage);
}
