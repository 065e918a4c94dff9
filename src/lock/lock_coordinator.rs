use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

use crate::error::SessionError;
use crate::models::LockState;
use crate::traits::LockSink;

/// State owned exclusively by the coordinator. The mutex is never held
/// across an await; the sink is always invoked with the lock released.
struct Inner {
    timeout_ms: i64,
    state: LockState,
    backgrounded: bool,
    last_background: Option<DateTime<Utc>>,
    timer: Option<JoinHandle<()>>,
    generation: u64,
    disposed: bool,
}

/// Auto-lock state machine for one wallet session.
///
/// Arms a single-shot timer on background, cancels it on foreground, and
/// invokes the lock sink exactly once when the timer elapses. A timeout of
/// zero or less disables auto-locking. All methods are no-ops after
/// `dispose()`.
pub struct LockCoordinator {
    sink: Arc<dyn LockSink>,
    inner: Arc<Mutex<Inner>>,
}

impl LockCoordinator {
    /// Create a coordinator, initially unlocked with no timer armed
    pub fn new(timeout_ms: i64, sink: Arc<dyn LockSink>) -> Self {
        Self {
            sink,
            inner: Arc::new(Mutex::new(Inner {
                timeout_ms,
                state: LockState::Unlocked,
                backgrounded: false,
                last_background: None,
                timer: None,
                generation: 0,
                disposed: false,
            })),
        }
    }

    /// The app moved to the background: arm the auto-lock countdown.
    /// No-op when auto-lock is disabled, the session is already locked,
    /// or a timer is already armed (no double-arming).
    pub fn on_background(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.disposed {
            return;
        }
        inner.backgrounded = true;
        inner.last_background = Some(Utc::now());
        if inner.timeout_ms <= 0 || inner.state.is_locked() || inner.timer.is_some() {
            return;
        }
        self.arm(&mut inner);
    }

    /// The app returned to the foreground: cancel any armed timer before
    /// anything else. An already-locked session stays locked; unlocking
    /// belongs to the external authentication collaborator.
    pub fn on_foreground(&self) {
        let stale = {
            let mut inner = self.inner.lock().unwrap();
            if inner.disposed {
                return;
            }
            inner.backgrounded = false;
            inner.generation = inner.generation.wrapping_add(1);
            inner.timer.take()
        };
        if let Some(handle) = stale {
            handle.abort();
            debug!("auto-lock countdown canceled on foreground");
        }
    }

    /// Reconfigure the timeout at runtime. An in-flight countdown is
    /// replaced atomically: under a single lock acquisition the old timer is
    /// invalidated and, if the session is backgrounded and not yet locked,
    /// a fresh countdown is armed measured from now.
    pub fn update_timeout(&self, timeout_ms: i64) {
        let stale = {
            let mut inner = self.inner.lock().unwrap();
            if inner.disposed || inner.timeout_ms == timeout_ms {
                return;
            }
            inner.timeout_ms = timeout_ms;
            inner.generation = inner.generation.wrapping_add(1);
            let stale = inner.timer.take();
            if inner.backgrounded && !inner.state.is_locked() && timeout_ms > 0 {
                self.arm(&mut inner);
            }
            stale
        };
        if let Some(handle) = stale {
            handle.abort();
        }
    }

    /// The external authentication collaborator completed an unlock
    pub fn mark_unlocked(&self) {
        let mut inner = self.inner.lock().unwrap();
        if inner.disposed {
            return;
        }
        inner.state = LockState::Unlocked;
    }

    /// Tear down the coordinator. Cancels any armed timer; every later call
    /// and any late timer fire is a no-op, never an error.
    pub fn dispose(&self) {
        let stale = {
            let mut inner = self.inner.lock().unwrap();
            if inner.disposed {
                return;
            }
            inner.disposed = true;
            inner.generation = inner.generation.wrapping_add(1);
            inner.timer.take()
        };
        if let Some(handle) = stale {
            handle.abort();
        }
    }

    /// Current lock state
    pub fn state(&self) -> LockState {
        self.inner.lock().unwrap().state
    }

    /// Configured timeout in milliseconds
    pub fn timeout_ms(&self) -> i64 {
        self.inner.lock().unwrap().timeout_ms
    }

    /// When the app last moved to the background
    pub fn last_background(&self) -> Option<DateTime<Utc>> {
        self.inner.lock().unwrap().last_background
    }

    /// Arm the single-shot timer. Caller holds the state lock; the spawned
    /// task re-checks the generation on wake so a canceled countdown that
    /// lost the abort race can never lock the session.
    fn arm(&self, inner: &mut Inner) {
        inner.generation = inner.generation.wrapping_add(1);
        let generation = inner.generation;
        let timeout = Duration::from_millis(inner.timeout_ms as u64);
        let sink = Arc::clone(&self.sink);
        let shared = Arc::clone(&self.inner);

        let handle = tokio::spawn(async move {
            tokio::time::sleep(timeout).await;
            let fire = {
                let mut inner = shared.lock().unwrap();
                if inner.disposed || generation != inner.generation {
                    false
                } else {
                    inner.timer = None;
                    inner.state = LockState::Locked;
                    true
                }
            };
            if fire {
                info!("auto-lock timeout elapsed, locking wallet session");
                if let Err(e) = sink.lock_wallet().await {
                    // fail closed: the session counts as locked even when
                    // presenting the lock UI failed
                    error!("{}", SessionError::LockSinkFailure(e));
                }
            }
        });
        inner.timer = Some(handle);
    }
}

impl Drop for LockCoordinator {
    fn drop(&mut self) {
        self.dispose();
    }
}
