use tracing::debug;

use crate::api::{ApiError, TranslateResponse};
use crate::utils::url::construct_api_url;

/// Translates `text` into `target` with the v2 translation API.
///
/// The key travels as a query parameter and the text as a form body.
pub async fn translate_text(
    client: &reqwest::Client,
    base_url: &str,
    api_key: &str,
    text: &str,
    target: &str,
) -> Result<String, ApiError> {
    let url = construct_api_url(base_url, "language/translate/v2");
    debug!(%url, target, "requesting translation");

    let response = client
        .post(url)
        .query(&[("key", api_key)])
        .form(&[("q", text), ("target", target)])
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "<no body>".to_string());
        return Err(ApiError::Status { status, body });
    }

    let body = response.text().await?;
    let parsed: TranslateResponse = serde_json::from_str(&body)?;
    parsed
        .data
        .and_then(|data| data.translations.into_iter().next())
        .and_then(|translation| translation.translated_text)
        .ok_or(ApiError::Missing("data.translations[0].translatedText"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{spawn_json_server, CannedResponse};

    #[tokio::test]
    async fn translate_posts_form_body_with_key_in_query() {
        let (base_url, requests) = spawn_json_server(vec![CannedResponse::ok(
            r#"{"data":{"translations":[{"translatedText":"Hello! How can I help you today?"}]}}"#,
        )])
        .await;
        let client = reqwest::Client::new();

        let translated = translate_text(
            &client,
            &base_url,
            "YOUR_API_KEY",
            "Olá! Como posso ajudar você hoje?",
            "en",
        )
        .await
        .expect("translation should succeed");

        assert_eq!(translated, "Hello! How can I help you today?");
        let captured = requests.lock().await;
        let request = &captured[0];
        assert_eq!(
            request.request_line,
            "POST /language/translate/v2?key=YOUR_API_KEY HTTP/1.1"
        );
        assert_eq!(
            request.header("content-type"),
            Some("application/x-www-form-urlencoded")
        );
        assert_eq!(
            request.body,
            "q=Ol%C3%A1%21+Como+posso+ajudar+voc%C3%AA+hoje%3F&target=en"
        );
    }

    #[tokio::test]
    async fn translate_rejects_non_success_status() {
        let (base_url, _requests) = spawn_json_server(vec![CannedResponse::status(
            400,
            r#"{"error":{"message":"API key not valid"}}"#,
        )])
        .await;
        let client = reqwest::Client::new();

        let result = translate_text(&client, &base_url, "bad", "oi", "en").await;
        assert!(matches!(result, Err(ApiError::Status { .. })));
    }

    #[tokio::test]
    async fn translate_requires_translated_text() {
        let (base_url, _requests) =
            spawn_json_server(vec![CannedResponse::ok(r#"{"data":{"translations":[]}}"#)]).await;
        let client = reqwest::Client::new();

        let result = translate_text(&client, &base_url, "k", "oi", "en").await;
        assert!(matches!(result, Err(ApiError::Missing(_))));
    }
}
