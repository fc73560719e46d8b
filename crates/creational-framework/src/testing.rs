//! # Test Support
//!
//! Instrumented constructors for exercising the slot protocol in tests,
//! without reaching into slot internals.
//!
//! The central correctness property of a [`SingletonSlot`](crate::singleton::SingletonSlot)
//! is "the constructor ran exactly once". That is a property of the
//! *constructor*, so the cleanest way to assert it is to hand the slot a
//! constructor that counts itself:
//!
//! ```rust
//! use creational_framework::testing::CallCounter;
//! use creational_framework::{BoxError, SingletonSlot};
//!
//! let calls = CallCounter::new();
//! let slot = SingletonSlot::new("config", {
//!     let calls = calls.clone();
//!     move || {
//!         calls.bump();
//!         Ok::<_, BoxError>(42u32)
//!     }
//! });
//!
//! slot.get_instance().unwrap();
//! slot.get_instance().unwrap();
//! assert_eq!(calls.count(), 1);
//! ```
//!
//! [`FlakyConstructor`] covers the failure-capture half of the protocol: it
//! fails a fixed number of times before succeeding, which is exactly the
//! shape needed to verify that a failed initialization rolls the slot back
//! and re-offers construction to the next caller.

use crate::error::BoxError;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Shared invocation counter. Clones observe the same count.
#[derive(Clone, Debug, Default)]
pub struct CallCounter(Arc<AtomicUsize>);

impl CallCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one invocation.
    pub fn bump(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    /// Number of invocations recorded so far.
    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Builds constructors that fail the first `failures` invocations, then
/// succeed. Every invocation, failing or not, is counted.
pub struct FlakyConstructor<T> {
    remaining_failures: Arc<AtomicUsize>,
    calls: CallCounter,
    make: Arc<dyn Fn() -> T + Send + Sync>,
}

impl<T: 'static> FlakyConstructor<T> {
    pub fn new(failures: usize, make: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            remaining_failures: Arc::new(AtomicUsize::new(failures)),
            calls: CallCounter::new(),
            make: Arc::new(make),
        }
    }

    /// Handle to the invocation counter.
    pub fn calls(&self) -> CallCounter {
        self.calls.clone()
    }

    /// The constructor closure to hand to a slot.
    pub fn constructor(&self) -> impl Fn() -> Result<T, BoxError> + Send + Sync + 'static {
        let remaining = Arc::clone(&self.remaining_failures);
        let calls = self.calls.clone();
        let make = Arc::clone(&self.make);
        move || {
            calls.bump();
            // Atomically claim one of the remaining failures, if any.
            let claimed_failure = remaining
                .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
                .is_ok();
            if claimed_failure {
                Err("injected constructor failure".into())
            } else {
                Ok(make())
            }
        }
    }
}
