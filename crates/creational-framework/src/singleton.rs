//! # Singleton Lifecycle Manager
//!
//! This module defines the [`SingletonSlot`], the one-time, race-free
//! construction point for a process-wide shared instance.
//!
//! # Architecture Note
//! A slot is an explicit, constructible object rather than implicit
//! module-level state. Tests instantiate as many independent slots as they
//! like; applications typically hold one per shared resource and share it
//! behind an `Arc`.
//!
//! # The Protocol
//! Each slot runs the state machine `Uninitialized → Initializing → Ready`.
//! The forward transitions are monotonic and happen at most once per slot;
//! the single sanctioned backward edge is `Initializing → Uninitialized` when
//! the user constructor itself fails, which re-offers construction to the
//! next caller instead of wedging the slot.
//!
//! The naive guard — check a flag, then construct — is broken the moment a
//! second caller is preempted between the check and the set, and both run the
//! constructor. Here the `Uninitialized → Initializing` transition happens
//! under a mutex, so exactly one caller ever becomes the initializer; everyone
//! else either waits on a condvar until `Ready` or, once the instance is
//! published, takes a lock-free fast path. That two-phase shape is the
//! classic double-checked design: the synchronization cost is paid on exactly
//! one slow path per slot lifetime.
//!
//! The constructor runs with the slot lock *released*. A slow constructor
//! delays its waiters, never the whole process, and a constructor that calls
//! back into unrelated slots cannot deadlock on this one's lock.

use crate::error::{BoxError, FrameworkError};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, OnceLock, PoisonError};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Observable initialization status of a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// No caller has started construction yet.
    Uninitialized,
    /// Exactly one caller is running the constructor right now.
    Initializing,
    /// The instance is published. Terminal: there is no teardown transition;
    /// a process that needs a reset creates a fresh slot.
    Ready,
}

enum SlotState<T> {
    Uninitialized,
    Initializing,
    Ready(Arc<T>),
}

type Constructor<T> = Box<dyn Fn() -> Result<T, BoxError> + Send + Sync>;

/// Holds at most one instance of `T`, constructed exactly once no matter how
/// many threads race on first access.
///
/// # Example
///
/// ```rust
/// use creational_framework::SingletonSlot;
/// use std::sync::Arc;
///
/// let slot: Arc<SingletonSlot<String>> = Arc::new(SingletonSlot::new("greeting", || {
///     Ok::<_, creational_framework::BoxError>("hello".to_string())
/// }));
///
/// let a = slot.get_instance().unwrap();
/// let b = slot.get_instance().unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
pub struct SingletonSlot<T> {
    name: String,
    constructor: Constructor<T>,
    state: Mutex<SlotState<T>>,
    changed: Condvar,
    // Published once on success; the lock-free fast path for every call
    // after initialization.
    fast: OnceLock<Arc<T>>,
}

impl<T> SingletonSlot<T> {
    /// Creates a lazy slot. `constructor` runs on first access, exactly once
    /// per successful initialization.
    pub fn new<F, E>(name: impl Into<String>, constructor: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: Into<BoxError>,
    {
        Self {
            name: name.into(),
            constructor: Box::new(move || constructor().map_err(Into::into)),
            state: Mutex::new(SlotState::Uninitialized),
            changed: Condvar::new(),
            fast: OnceLock::new(),
        }
    }

    /// Creates an eager slot, born `Ready`. Trades construction at setup time
    /// for zero runtime synchronization: every `get_instance` call takes the
    /// fast path.
    pub fn eager(name: impl Into<String>, instance: T) -> Self {
        let handle = Arc::new(instance);
        let fast = OnceLock::new();
        let _ = fast.set(Arc::clone(&handle));
        Self {
            name: name.into(),
            // Ready is terminal, so this constructor can never run.
            constructor: Box::new(|| Err("eager slot has no constructor".into())),
            state: Mutex::new(SlotState::Ready(handle)),
            changed: Condvar::new(),
            fast,
        }
    }

    /// The slot id used in logs and timeout errors.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Snapshot of the slot's status. Useful for observability and tests;
    /// by the time the caller looks at it, an `Initializing` slot may
    /// already be `Ready`.
    pub fn status(&self) -> SlotStatus {
        if self.fast.get().is_some() {
            return SlotStatus::Ready;
        }
        match *self.lock_state() {
            SlotState::Uninitialized => SlotStatus::Uninitialized,
            SlotState::Initializing => SlotStatus::Initializing,
            SlotState::Ready(_) => SlotStatus::Ready,
        }
    }

    /// Returns the shared instance, constructing it on first access.
    ///
    /// Concurrent callers during construction block until the slot is
    /// `Ready`. Fails only when the constructor itself fails, in which case
    /// the slot rolls back to `Uninitialized` and the next caller re-runs
    /// the constructor.
    pub fn get_instance(&self) -> Result<Arc<T>, FrameworkError> {
        self.get_instance_inner(None)
    }

    /// Like [`get_instance`](Self::get_instance), but a caller stuck waiting
    /// on another caller's construction gives up after `timeout` with
    /// [`FrameworkError::InitializationTimeout`].
    ///
    /// A timeout says nothing about the initialization itself — the
    /// initializer keeps running and the slot may well become `Ready` moments
    /// later. The slot state is untouched and the caller may simply retry.
    pub fn get_instance_timeout(&self, timeout: Duration) -> Result<Arc<T>, FrameworkError> {
        self.get_instance_inner(Some(timeout))
    }

    fn get_instance_inner(&self, timeout: Option<Duration>) -> Result<Arc<T>, FrameworkError> {
        // Fast path: once published, no lock is ever taken again.
        if let Some(handle) = self.fast.get() {
            return Ok(Arc::clone(handle));
        }

        let deadline = timeout.map(|t| Instant::now() + t);
        let mut state = self.lock_state();
        loop {
            match &*state {
                SlotState::Ready(handle) => return Ok(Arc::clone(handle)),
                SlotState::Uninitialized => {
                    // This caller won the race and becomes the initializer.
                    *state = SlotState::Initializing;
                    drop(state);
                    debug!(slot = %self.name, "Initializing slot");
                    let built = (self.constructor)();
                    state = self.lock_state();
                    match built {
                        Ok(instance) => {
                            let handle = Arc::new(instance);
                            let _ = self.fast.set(Arc::clone(&handle));
                            *state = SlotState::Ready(Arc::clone(&handle));
                            self.changed.notify_all();
                            info!(slot = %self.name, "Slot ready");
                            return Ok(handle);
                        }
                        Err(cause) => {
                            // Roll back so the next caller re-runs the
                            // constructor instead of finding a wedged slot.
                            *state = SlotState::Uninitialized;
                            self.changed.notify_all();
                            warn!(slot = %self.name, error = %cause, "Slot constructor failed");
                            return Err(FrameworkError::InitializationFailed {
                                slot: self.name.clone(),
                                cause,
                            });
                        }
                    }
                }
                SlotState::Initializing => {
                    state = match deadline {
                        None => self
                            .changed
                            .wait(state)
                            .unwrap_or_else(PoisonError::into_inner),
                        Some(deadline) => {
                            let now = Instant::now();
                            if now >= deadline {
                                return Err(FrameworkError::InitializationTimeout {
                                    slot: self.name.clone(),
                                });
                            }
                            let (guard, wait) = self
                                .changed
                                .wait_timeout(state, deadline - now)
                                .unwrap_or_else(PoisonError::into_inner);
                            if wait.timed_out() && matches!(*guard, SlotState::Initializing) {
                                return Err(FrameworkError::InitializationTimeout {
                                    slot: self.name.clone(),
                                });
                            }
                            guard
                        }
                    };
                }
            }
        }
    }

    // A panic inside our critical sections is impossible (they only assign
    // enum variants), so a poisoned lock can only mean a panicking observer;
    // the state itself is still coherent.
    fn lock_state(&self) -> MutexGuard<'_, SlotState<T>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
