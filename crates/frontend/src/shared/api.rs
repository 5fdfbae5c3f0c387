//! HTTP-клиент каталога поверх `gloo-net`.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use thiserror::Error;
use web_sys::AbortSignal;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Запрос отменён более новым запросом или уходом со страницы
    #[error("request aborted")]
    Aborted,
    #[error("not found")]
    NotFound,
    #[error("HTTP error: {0}")]
    Http(u16),
    #[error("Request failed: {0}")]
    Network(String),
    #[error("Failed to parse response: {0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, Self::Aborted)
    }

    /// Текст для баннера ошибки
    pub fn user_message(&self) -> String {
        match self {
            Self::Aborted => String::new(),
            Self::NotFound => "No encontrado".to_string(),
            Self::Http(status) => format!("Error del servidor ({})", status),
            Self::Network(e) => format!("Error de red: {}", e),
            Self::Parse(e) => format!("Respuesta inválida: {}", e),
        }
    }
}

fn from_js_error(name: &str, message: &str) -> ApiError {
    if name == "AbortError" {
        ApiError::Aborted
    } else {
        ApiError::Network(message.to_string())
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(e: gloo_net::Error) -> Self {
        match e {
            gloo_net::Error::JsError(js) => from_js_error(&js.name, &js.message),
            gloo_net::Error::SerdeError(e) => ApiError::Parse(e.to_string()),
            other => ApiError::Network(other.to_string()),
        }
    }
}

fn from_status(status: u16) -> Option<ApiError> {
    match status {
        200..=299 => None,
        404 => Some(ApiError::NotFound),
        _ => Some(ApiError::Http(status)),
    }
}

/// GET + JSON. `signal` привязывает запрос к `AbortController` вызывающего
pub async fn get_json<T: DeserializeOwned>(
    url: &str,
    signal: Option<&AbortSignal>,
) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url).abort_signal(signal).send().await?;

    if let Some(err) = from_status(response.status()) {
        return Err(err);
    }

    let data = response.json::<T>().await?;
    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abort_error_is_recognized() {
        assert_eq!(
            from_js_error("AbortError", "The user aborted a request."),
            ApiError::Aborted
        );
        assert!(from_js_error("AbortError", "").is_aborted());
        assert_eq!(
            from_js_error("TypeError", "Failed to fetch"),
            ApiError::Network("Failed to fetch".to_string())
        );
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(from_status(200), None);
        assert_eq!(from_status(204), None);
        assert_eq!(from_status(404), Some(ApiError::NotFound));
        assert_eq!(from_status(500), Some(ApiError::Http(500)));
    }

    #[test]
    fn test_serde_error_is_parse() {
        let serde_err = serde_json::from_str::<u32>("\"x\"").unwrap_err();
        let err: ApiError = gloo_net::Error::SerdeError(serde_err).into();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn test_user_message() {
        assert_eq!(ApiError::Http(502).user_message(), "Error del servidor (502)");
        assert!(ApiError::Aborted.user_message().is_empty());
    }
}
