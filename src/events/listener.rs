use async_trait::async_trait;

use super::SessionEvent;

/// Trait for handling session events asynchronously.
///
/// Implement this trait to create custom event listeners. Listeners can
/// perform any async operation: logging, sending notifications, updating
/// metrics, etc.
///
/// # Example
///
/// ```rust,ignore
/// use mediboard::events::{SessionEvent, Listener};
/// use async_trait::async_trait;
///
/// struct AuditTrailListener {
///     sink: String,
/// }
///
/// #[async_trait]
/// impl Listener for AuditTrailListener {
///     async fn handle(&self, event: &SessionEvent) {
///         if let SessionEvent::LoginFailed { role, reason, .. } = event {
///             // append to the audit trail
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Listener: Send + Sync + 'static {
    /// Handle a session event.
    ///
    /// This method is called for every event dispatched. Filter by matching
    /// on the event variant to handle specific events.
    async fn handle(&self, event: &SessionEvent);
}
