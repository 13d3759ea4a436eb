//! The reified panic value.
//!
//! [`CapturedPanic`] owns the raw payload an unwinding panic carried, with
//! no copy and no rewriting. The conventional string payloads produced by
//! `panic!` surface through [`reason`](CapturedPanic::reason); anything else
//! stays reachable through the payload accessors.

use std::any::Any;
use std::fmt;

/// Fallback shown by `Display` when the payload is not a string.
const OPAQUE_REASON: &str = "non-string panic payload";

/// The value form of an unwinding panic.
///
/// Produced only by [`catch_panic`](crate::catch_panic) /
/// [`try_catch`](crate::try_catch) when the wrapped work panicked. The
/// payload is exactly what the unwind carried; this type never synthesizes
/// or rewrites content. It has no lifecycle beyond the hand-off: the library
/// does not store or retain it.
pub struct CapturedPanic {
    payload: Box<dyn Any + Send + 'static>,
}

impl CapturedPanic {
    /// Wrap a raw unwind payload.
    ///
    /// Only the capture operations construct these; the payload must be the
    /// unmodified value returned by `std::panic::catch_unwind`.
    pub(crate) fn from_payload(payload: Box<dyn Any + Send + 'static>) -> Self {
        Self { payload }
    }

    /// The human-readable panic message, if there is one.
    ///
    /// `panic!("...")` and `panic!("{}", x)` carry `&'static str` and
    /// `String` payloads respectively; both surface here verbatim. Payloads
    /// of any other type (`std::panic::panic_any`) return `None` - the
    /// reason is nullable, the payload is not.
    pub fn reason(&self) -> Option<&str> {
        let payload = self.payload.as_ref();
        if let Some(s) = payload.downcast_ref::<&'static str>() {
            Some(s)
        } else if let Some(s) = payload.downcast_ref::<String>() {
            Some(s.as_str())
        } else {
            None
        }
    }

    /// Borrow the raw payload for inspection or downcasting.
    pub fn payload(&self) -> &(dyn Any + Send + 'static) {
        self.payload.as_ref()
    }

    /// Consume the capture and take ownership of the raw payload.
    pub fn into_payload(self) -> Box<dyn Any + Send + 'static> {
        self.payload
    }

    /// Re-raise the panic with its original payload.
    ///
    /// For callers that inspected the fault and decided not to absorb it.
    /// The unwind continues exactly as if it had never been caught.
    pub fn resume(self) -> ! {
        std::panic::resume_unwind(self.payload)
    }
}

impl fmt::Display for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panic: {}", self.reason().unwrap_or(OPAQUE_REASON))
    }
}

// Manual Debug: the payload is `dyn Any` and carries no Debug impl, so we
// show the reason (or the opaque marker) instead of the payload itself.
impl fmt::Debug for CapturedPanic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapturedPanic")
            .field("reason", &self.reason())
            .finish()
    }
}

// Error by hand for the same reason Debug is: thiserror's derive cannot
// format through a `dyn Any` field.
impl std::error::Error for CapturedPanic {}
