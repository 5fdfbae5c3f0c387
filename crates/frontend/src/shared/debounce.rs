use super::request_slot::Generation;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Откладывает действие до паузы во вводе: каждый новый `call` отменяет
/// предыдущий, ещё не сработавший
#[derive(Clone, Copy)]
pub struct Debouncer {
    generation: StoredValue<Generation>,
    delay_ms: u32,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            generation: StoredValue::new(Generation::default()),
            delay_ms,
        }
    }

    pub fn call(&self, action: impl FnOnce() + 'static) {
        let Some(ticket) = self.generation.try_update_value(|g| g.begin()) else {
            return;
        };
        let generation = self.generation;
        let delay = self.delay_ms;
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            if generation
                .try_with_value(|g| g.is_current(ticket))
                .unwrap_or(false)
            {
                action();
            }
        });
    }

    pub fn cancel(&self) {
        self.generation.try_update_value(|g| g.invalidate());
    }
}
