//! Слот для одного «живого» запроса.
//!
//! Каждый новый `begin()` отменяет предыдущий fetch через `AbortController`
//! и сдвигает поколение. Результат применяется только если поколение билета
//! всё ещё текущее, так что ответ устаревшего запроса никогда не попадёт на
//! экран и не сбросит флаг загрузки нового.

use leptos::prelude::*;
use web_sys::{AbortController, AbortSignal};

/// Счётчик поколений запросов
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Generation {
    current: u64,
}

impl Generation {
    pub fn begin(&mut self) -> u64 {
        self.current = self.current.wrapping_add(1);
        self.current
    }

    pub fn is_current(&self, ticket: u64) -> bool {
        self.current == ticket
    }

    /// Делает все выданные билеты устаревшими
    pub fn invalidate(&mut self) {
        self.current = self.current.wrapping_add(1);
    }
}

#[derive(Debug, Clone)]
pub struct RequestTicket {
    pub generation: u64,
    pub signal: Option<AbortSignal>,
}

#[derive(Clone, Copy)]
pub struct RequestSlot {
    generation: StoredValue<Generation>,
    controller: StoredValue<Option<AbortController>, LocalStorage>,
}

impl RequestSlot {
    pub fn new() -> Self {
        Self {
            generation: StoredValue::new(Generation::default()),
            controller: StoredValue::new_local(None),
        }
    }

    pub fn begin(&self) -> RequestTicket {
        let controller = AbortController::new().ok();
        let signal = controller.as_ref().map(|c| c.signal());
        if let Some(Some(previous)) = self
            .controller
            .try_update_value(|slot| std::mem::replace(slot, controller))
        {
            previous.abort();
        }
        let generation = self
            .generation
            .try_update_value(|g| g.begin())
            .unwrap_or_default();
        RequestTicket { generation, signal }
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.generation
            .try_with_value(|g| g.is_current(ticket.generation))
            .unwrap_or(false)
    }

    /// Завершает запрос. `true`, если билет текущий и результат надо применить
    pub fn finish(&self, ticket: &RequestTicket) -> bool {
        let current = self.is_current(ticket);
        if current {
            self.controller.try_set_value(None);
        }
        current
    }

    /// Отменяет запрос в полёте (смена страницы, размонтирование)
    pub fn cancel(&self) {
        if let Some(Some(controller)) = self.controller.try_update_value(|slot| slot.take()) {
            controller.abort();
        }
        self.generation.try_update_value(|g| g.invalidate());
    }
}

impl Default for RequestSlot {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newer_request_supersedes_older() {
        let mut g = Generation::default();
        let first = g.begin();
        let second = g.begin();
        assert!(!g.is_current(first));
        assert!(g.is_current(second));
    }

    #[test]
    fn test_invalidate_drops_in_flight_ticket() {
        let mut g = Generation::default();
        let ticket = g.begin();
        g.invalidate();
        assert!(!g.is_current(ticket));
        let next = g.begin();
        assert!(g.is_current(next));
    }

    #[test]
    fn test_fresh_counter_starts_at_zero() {
        let g = Generation::default();
        assert!(g.is_current(0));
        assert!(!g.is_current(1));
    }
}
