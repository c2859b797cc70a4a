//! # Example: demo
//!
//! Subscribes a print callback to the two built-in producers.
//!
//! ## Flow
//! ```text
//! just(1)  ──► subscribe_fn(print) ──► Next(1), Completed
//! empty()  ──► subscribe_fn(print) ──► Completed
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example demo
//! ```

use rxcore::{empty, just, Event, ObservableExt};

fn print(ev: Event<i32>) {
    match ev {
        Event::Next(v) => println!("[next] value={v}"),
        Event::Error(e) => println!("[error] {}", e.as_message()),
        Event::Completed => println!("[completed]"),
    }
}

fn main() {
    println!("just(1):");
    just(1).subscribe_fn(print);

    println!("empty():");
    empty::<i32>().subscribe_fn(print);
}
