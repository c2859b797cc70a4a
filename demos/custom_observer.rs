//! # Example: custom_observer
//!
//! Demonstrates how to build a custom producer and a custom sink.
//!
//! Shows how to:
//! - Implement [`Producer`] for a source that may fail.
//! - Implement [`Sink`] and wrap it in [`ObserverBase`] to get the terminal-event guarantee.
//! - Share one observer between threads that race to terminate it.
//!
//! ## Run
//! ```bash
//! cargo run --example custom_observer
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

use rxcore::{Event, ObservableExt, Observer, ObserverBase, Producer, Sink, StreamError};

/// Emits `1..=limit`, failing on the first multiple of `poison`.
struct Numbers {
    limit: u64,
    poison: Option<u64>,
}

impl Producer<u64> for Numbers {
    fn run(&self, observer: &dyn Observer<u64>) {
        for n in 1..=self.limit {
            if self.poison.is_some_and(|p| n % p == 0) {
                observer.on(Event::Error(StreamError::fail(format!("poisoned at {n}"))));
                return;
            }
            observer.on(Event::Next(n));
        }
        observer.on(Event::Completed);
    }
}

#[derive(Default)]
struct Stats {
    sum: AtomicU64,
    items: AtomicU64,
    terminals: AtomicU64,
}

impl Stats {
    fn print(&self, title: &str) {
        println!("{title}");
        println!(" ├─► Items:     {}", self.items.load(Ordering::Relaxed));
        println!(" ├─► Sum:       {}", self.sum.load(Ordering::Relaxed));
        println!(" └─► Terminals: {}", self.terminals.load(Ordering::Relaxed));
    }
}

impl Sink<u64> for Stats {
    fn on_core(&self, event: Event<u64>) {
        match event {
            Event::Next(v) => {
                self.items.fetch_add(1, Ordering::Relaxed);
                self.sum.fetch_add(v, Ordering::Relaxed);
            }
            Event::Error(e) => {
                println!("[error] label={} msg={}", e.as_label(), e.as_message());
                self.terminals.fetch_add(1, Ordering::Relaxed);
            }
            Event::Completed => {
                self.terminals.fetch_add(1, Ordering::Relaxed);
            }
        }
    }
}

fn main() {
    let clean = ObserverBase::new(Stats::default());
    Numbers {
        limit: 10,
        poison: None,
    }
    .subscribe(&clean);
    clean.sink().print("clean run:");

    let failing = ObserverBase::new(Stats::default());
    Numbers {
        limit: 10,
        poison: Some(4),
    }
    .subscribe(&failing);
    failing.sink().print("failing run:");

    // Eight threads race to terminate the same observer; only one wins.
    let shared = Arc::new(ObserverBase::new(Stats::default()));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let obs = Arc::clone(&shared);
            thread::spawn(move || {
                if i % 2 == 0 {
                    obs.on(Event::Completed);
                } else {
                    obs.on(Event::Error(StreamError::fail(format!("thread {i}"))));
                }
            })
        })
        .collect();
    for h in handles {
        if h.join().is_err() {
            eprintln!("[custom_observer] worker thread panicked");
        }
    }
    shared.sink().print("racing terminals:");
}
