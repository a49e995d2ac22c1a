//! Leptos Debounce Utilities
//!
//! Reschedulable one-shot timer for Leptos components.
//! Every `schedule` supersedes the previous one; only the latest fires.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Debounce handle. Copy it freely into event handlers.
#[derive(Clone, Copy)]
pub struct Debouncer {
    /// Bumped on every schedule/cancel; a sleeping task only fires if it
    /// still holds the latest value
    generation: StoredValue<u64>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: StoredValue::new(0),
            delay_ms,
        }
    }

    fn bump(&self) -> Option<u64> {
        self.generation.try_update_value(|generation| {
            *generation += 1;
            *generation
        })
    }

    /// Run `f` after the delay unless another schedule or a cancel comes first
    pub fn schedule<F>(&self, f: F)
    where
        F: FnOnce() + 'static,
    {
        let Some(ticket) = self.bump() else {
            log::debug!("Debouncer disposed; dropping scheduled call");
            return;
        };
        let generation = self.generation;
        let delay_ms = self.delay_ms;

        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if generation.try_get_value() == Some(ticket) {
                f();
            }
        });
    }

    /// Drop whatever is scheduled
    pub fn cancel(&self) {
        self.bump();
    }
}

/// Debouncer that is cancelled when the owning component unmounts
pub fn use_debouncer(delay_ms: u32) -> Debouncer {
    let debouncer = Debouncer::new(delay_ms);
    on_cleanup(move || debouncer.cancel());
    debouncer
}
