//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (submitted queries, key presses)
/// - System events (catalog responses, timers)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
