//! The capture operations.
//!
//! A single guarded call: run the unit of work, and if it unwinds, hand the
//! panic back by value. No loops, no retries, no state - each invocation is
//! independent and reentrant, and the guard covers exactly the one call on
//! the current thread's stack.

use crate::captured::CapturedPanic;
use std::panic::{self, UnwindSafe};

/// Run `work` and capture an unwinding panic as a value.
///
/// Returns `None` when the work completes normally - any value it produces
/// is discarded; this is the side-effecting form of the boundary. Returns
/// `Some(CapturedPanic)` when the work panics, carrying the panic's payload
/// unmodified.
///
/// Closures over interior mutability opt in explicitly with
/// [`std::panic::AssertUnwindSafe`]; the bound is deliberate, not a
/// limitation of the boundary.
pub fn catch_panic<F>(work: F) -> Option<CapturedPanic>
where
    F: FnOnce() + UnwindSafe,
{
    match panic::catch_unwind(work) {
        Ok(()) => None,
        Err(payload) => Some(CapturedPanic::from_payload(payload)),
    }
}

/// Run `work` and keep its result, capturing an unwinding panic as the
/// error.
///
/// The value-preserving form of [`catch_panic`], for callers that need the
/// work's output when it completes.
pub fn try_catch<F, T>(work: F) -> Result<T, CapturedPanic>
where
    F: FnOnce() -> T + UnwindSafe,
{
    panic::catch_unwind(work).map_err(CapturedPanic::from_payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::AssertUnwindSafe;

    // --- Normal completion ---

    #[test]
    fn completing_work_returns_none() {
        assert!(catch_panic(|| {}).is_none());
    }

    #[test]
    fn produced_values_are_discarded() {
        // The work computes something; catch_panic still returns None.
        let result = catch_panic(|| {
            let _sum: u64 = (1..=100).sum();
        });
        assert!(result.is_none());
    }

    #[test]
    fn try_catch_preserves_the_value() {
        let value = try_catch(|| 7 * 6).unwrap();
        assert_eq!(value, 42);
    }

    // --- Panic capture ---

    #[test]
    fn panic_reason_round_trips_exactly() {
        let captured = catch_panic(|| panic!("R")).unwrap();
        assert_eq!(captured.reason(), Some("R"));
    }

    #[test]
    fn formatted_panic_reason_round_trips_exactly() {
        let captured = catch_panic(|| panic!("failed at step {}", 3)).unwrap();
        assert_eq!(captured.reason(), Some("failed at step 3"));
    }

    #[test]
    fn panic_any_payload_is_captured_without_reason() {
        let captured = catch_panic(|| std::panic::panic_any(42u32)).unwrap();
        assert_eq!(captured.reason(), None);
        assert_eq!(captured.payload().downcast_ref::<u32>(), Some(&42));
    }

    #[test]
    fn try_catch_maps_panic_to_err() {
        let err = try_catch(|| -> u32 { panic!("no value") }).unwrap_err();
        assert_eq!(err.reason(), Some("no value"));
    }

    // --- Independence between invocations ---

    #[test]
    fn consecutive_calls_do_not_share_state() {
        let first = catch_panic(|| panic!("first"));
        let second = catch_panic(|| {});
        assert_eq!(first.unwrap().reason(), Some("first"));
        assert!(second.is_none());
    }

    #[test]
    fn capture_works_with_assert_unwind_safe() {
        let mut hits = 0;
        let captured = catch_panic(AssertUnwindSafe(|| {
            hits += 1;
            panic!("after mutation");
        }));
        assert_eq!(captured.unwrap().reason(), Some("after mutation"));
        assert_eq!(hits, 1);
    }

    // --- Scoping ---

    #[test]
    fn panic_on_another_thread_is_not_captured_here() {
        // The guard covers the calling thread's stack only. A panic on a
        // spawned thread stays on that thread (observable via join), and
        // the boundary here sees normal completion.
        let result = catch_panic(|| {
            let handle = std::thread::spawn(|| panic!("elsewhere"));
            assert!(handle.join().is_err());
        });
        assert!(result.is_none());
    }

    #[test]
    fn resume_re_raises_the_original_payload() {
        let captured = catch_panic(|| std::panic::panic_any(9000u64)).unwrap();
        let re_raised = panic::catch_unwind(AssertUnwindSafe(|| captured.resume()));
        let payload = re_raised.unwrap_err();
        assert_eq!(payload.downcast_ref::<u64>(), Some(&9000));
    }
}
