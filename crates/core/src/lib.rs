//! ob-core: Core library for the Order Bell notification service
//!
//! This crate provides:
//! - An in-memory event bus with one bounded channel per audience
//! - Time- and size-based retention enforced on every publication
//! - Stateless read-side filtering for polling clients
//! - A clock abstraction so retention is testable with simulated time
//!
//! Events are ephemeral by design: nothing is persisted and a restart
//! starts empty. Readers poll; nothing is pushed.

pub mod clock;
pub mod error;

// Vocabulary types (order matters for dependencies)
pub mod audience;
pub mod event;
pub mod retention;

// The bus and its read side
pub mod bus;
pub mod query;

mod channel;

// Re-exports
pub use audience::{Audience, Role, UserId};
pub use bus::{EventBus, Receipt, SweepStats};
pub use clock::{Clock, FakeClock, SystemClock};
pub use error::ParseError;
pub use event::{Event, EventId, EventKind, Payload};
pub use query::{CountSummary, EventQuery, Since, DEFAULT_QUERY_LIMIT};
pub use retention::{
    RetentionPolicy, DEFAULT_QUERY_WINDOW_MINUTES, MAX_EVENTS_PER_CHANNEL, MAX_EVENT_AGE_MINUTES,
};
