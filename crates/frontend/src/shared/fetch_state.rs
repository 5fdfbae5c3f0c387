//! Состояние одной загрузки: данные, флаг загрузки, ошибка для баннера.
//!
//! Все хуки каталога (`use_brands`, `use_products`, ...) построены на нём.

use super::api::ApiError;
use super::request_slot::RequestSlot;
use contracts::shared::fetch_status::FetchStatus;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use web_sys::AbortSignal;

pub struct FetchState<T: Send + Sync + 'static> {
    pub data: RwSignal<T>,
    pub loading: RwSignal<bool>,
    /// Хотя бы один запрос завершился
    pub loaded: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    slot: RequestSlot,
}

impl<T: Send + Sync + 'static> Clone for FetchState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FetchState<T> {}

impl<T: Clone + Default + Send + Sync + 'static> FetchState<T> {
    pub fn new() -> Self {
        let slot = RequestSlot::new();
        on_cleanup(move || slot.cancel());
        Self {
            data: RwSignal::new(T::default()),
            loading: RwSignal::new(false),
            loaded: RwSignal::new(false),
            error: RwSignal::new(None),
            slot,
        }
    }

    /// Запускает запрос, отменяя предыдущий.
    ///
    /// `request` получает `AbortSignal` нового запроса. Ответ применяется,
    /// только если за это время не стартовал более новый запрос.
    pub fn run<F, Fut>(&self, what: &'static str, request: F)
    where
        F: FnOnce(Option<AbortSignal>) -> Fut,
        Fut: Future<Output = Result<T, ApiError>> + 'static,
    {
        let ticket = self.slot.begin();
        log::debug!("{}: request #{}", what, ticket.generation);
        self.loading.set(true);
        self.error.set(None);

        let this = *self;
        let future = request(ticket.signal.clone());
        spawn_local(async move {
            let result = future.await;
            let is_current = this.slot.finish(&ticket);
            match outcome(is_current, result) {
                Outcome::Discard => {
                    log::debug!("{}: response #{} superseded", what, ticket.generation);
                }
                Outcome::Aborted => {
                    log::debug!("{}: aborted", what);
                    this.loading.try_set(false);
                }
                Outcome::Apply(data) => {
                    this.data.try_set(data);
                    this.loading.try_set(false);
                    this.loaded.try_set(true);
                }
                Outcome::Fail(message) => {
                    log::error!("{}: {}", what, message);
                    this.data.try_set(T::default());
                    this.error.try_set(Some(message));
                    this.loading.try_set(false);
                    this.loaded.try_set(true);
                }
            }
        });
    }

    pub fn cancel(&self) {
        self.slot.cancel();
        self.loading.set(false);
    }

    /// Отменяет запрос и возвращает состояние к начальному
    pub fn reset(&self) {
        self.cancel();
        self.data.set(T::default());
        self.error.set(None);
        self.loaded.set(false);
    }

    pub fn status(&self, len: impl Fn(&T) -> usize) -> FetchStatus {
        FetchStatus::from_parts(
            self.loading.get(),
            self.loaded.get(),
            self.data.with(|d| len(d)),
        )
    }
}

/// Что делать с ответом, когда он пришёл
#[derive(Debug, PartialEq)]
enum Outcome<T> {
    /// Уже стартовал более новый запрос: ответ выбрасывается целиком
    Discard,
    /// Отменён: данные остаются прежними, снимается только флаг загрузки
    Aborted,
    Apply(T),
    /// Текст для баннера, данные сбрасываются
    Fail(String),
}

fn outcome<T>(is_current: bool, result: Result<T, ApiError>) -> Outcome<T> {
    if !is_current {
        return Outcome::Discard;
    }
    match result {
        Ok(data) => Outcome::Apply(data),
        Err(e) if e.is_aborted() => Outcome::Aborted,
        Err(e) => Outcome::Fail(e.user_message()),
    }
}

impl<T: Clone + Default + Send + Sync + 'static> Default for FetchState<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::request_slot::Generation;

    #[test]
    fn test_stale_response_is_discarded_even_when_ok() {
        assert_eq!(outcome(false, Ok(vec![1, 2])), Outcome::Discard);
        assert_eq!(outcome::<Vec<i32>>(false, Err(ApiError::Http(500))), Outcome::Discard);
        assert_eq!(outcome::<Vec<i32>>(false, Err(ApiError::Aborted)), Outcome::Discard);
    }

    #[test]
    fn test_current_response_is_applied() {
        assert_eq!(outcome(true, Ok(vec![1, 2])), Outcome::Apply(vec![1, 2]));
    }

    #[test]
    fn test_abort_keeps_data() {
        assert_eq!(outcome::<Vec<i32>>(true, Err(ApiError::Aborted)), Outcome::Aborted);
    }

    #[test]
    fn test_error_carries_banner_text() {
        assert_eq!(
            outcome::<Vec<i32>>(true, Err(ApiError::Http(502))),
            Outcome::Fail(ApiError::Http(502).user_message())
        );
        assert_eq!(
            outcome::<Vec<i32>>(true, Err(ApiError::NotFound)),
            Outcome::Fail("No encontrado".to_string())
        );
    }

    #[test]
    fn test_out_of_order_responses_keep_latest() {
        let mut generation = Generation::default();
        let first = generation.begin();
        let second = generation.begin();

        // второй ответ пришёл раньше первого
        let late_second = outcome(generation.is_current(second), Ok("second"));
        let late_first = outcome(generation.is_current(first), Ok("first"));
        assert_eq!(late_second, Outcome::Apply("second"));
        assert_eq!(late_first, Outcome::Discard);
    }
}
