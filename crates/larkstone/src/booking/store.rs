use std::fmt;

use uuid::Uuid;

use super::domain::BookingEnquiry;

/// Identifier for one browsing session, carried by the session cookie.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a cookie value. Anything that is not a UUID is treated as no
    /// session rather than an error.
    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value).ok().map(Self)
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Single-slot storage for the most recent submitted enquiry per session.
///
/// `put` overwrites any prior value for the session; there is no history
/// and no multi-booking. Implementations decide how "session end" is
/// realized (the in-memory store expires slots after a TTL).
pub trait BookingStore: Send + Sync {
    fn put(&self, session: SessionId, enquiry: BookingEnquiry);
    fn get(&self, session: &SessionId) -> Option<BookingEnquiry>;
}
