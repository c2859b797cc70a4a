//! # Resources – live-object accounting
//!
//! Counts observers that are alive right now. Intended for tests and leak
//! hunting: production code only pays for it when a tracker is injected.
//!
//! ## Behavior
//! - [`Resources::track`] increments the live total and returns a [`ResourceGuard`].
//! - Dropping the guard decrements the live total.
//! - [`Resources::acquired`] only ever grows (lifetime count).
//! - [`Resources::reset`] with live guards is tolerated, warn.
//!
//! ## Internal scheme
//! ```text
//! ObserverBase::with_tracker(sink, res)
//!   └─► res.track() ──► total += 1, acquired += 1
//!                 ...
//! drop(observer)
//!   └─► drop(ResourceGuard) ──► total -= 1
//! ```
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use rxcore::{just, AnonymousObserver, Event, ObservableExt, Resources};
//!
//! let res = Arc::new(Resources::new());
//! just(1).subscribe(AnonymousObserver::with_tracker(|_ev: Event<i32>| {}, &res));
//!
//! assert_eq!(res.total(), 0);
//! assert_eq!(res.acquired(), 1);
//! ```

use std::sync::atomic::{AtomicI64, AtomicU64, Ordering};
use std::sync::Arc;

/// Shared counter of live tracked objects.
#[derive(Debug, Default)]
pub struct Resources {
    total: AtomicI64,
    acquired: AtomicU64,
}

impl Resources {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one live object; it stays counted until the guard drops.
    #[must_use]
    pub fn track(self: &Arc<Self>) -> ResourceGuard {
        self.total.fetch_add(1, Ordering::AcqRel);
        self.acquired.fetch_add(1, Ordering::Relaxed);
        ResourceGuard {
            owner: Arc::clone(self),
        }
    }

    /// Number of tracked objects currently alive.
    pub fn total(&self) -> i64 {
        self.total.load(Ordering::Acquire)
    }

    /// Number of objects ever tracked.
    pub fn acquired(&self) -> u64 {
        self.acquired.load(Ordering::Relaxed)
    }

    /// Zeroes both counters.
    ///
    /// Guards that are still alive keep decrementing afterwards, so the live
    /// total may go negative; a warning is printed when that is about to happen.
    pub fn reset(&self) {
        let live = self.total.swap(0, Ordering::AcqRel);
        self.acquired.store(0, Ordering::Relaxed);
        if live != 0 {
            eprintln!("[rxcore] Resources: reset with {} live object(s)", live);
        }
    }
}

/// Keeps one object counted in its [`Resources`] until dropped.
#[derive(Debug)]
pub struct ResourceGuard {
    owner: Arc<Resources>,
}

impl Drop for ResourceGuard {
    fn drop(&mut self) {
        self.owner.total.fetch_sub(1, Ordering::AcqRel);
    }
}
