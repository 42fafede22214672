use tracing::debug;

use crate::api::{ApiError, InstantAnswerResponse};
use crate::utils::url::construct_api_url;

impl InstantAnswerResponse {
    /// The abstract when there is one, otherwise the first related topic.
    pub fn best_text(&self) -> Option<&str> {
        self.abstract_text
            .as_deref()
            .filter(|text| !text.is_empty())
            .or_else(|| {
                // A missing or empty topic list means no answer, not a failure.
                self.related_topics
                    .first()
                    .and_then(|topic| topic.text.as_deref())
                    .filter(|text| !text.is_empty())
            })
    }
}

/// Runs an instant-answer query. `Ok(None)` means the service had nothing useful.
pub async fn instant_answer(
    client: &reqwest::Client,
    base_url: &str,
    query: &str,
) -> Result<Option<String>, ApiError> {
    let url = construct_api_url(base_url, "");
    debug!(%url, query, "running web search");

    let response = client
        .get(url)
        .query(&[("q", query), ("format", "json")])
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
    let answer: InstantAnswerResponse = serde_json::from_str(&body)?;
    Ok(answer.best_text().map(str::to_owned))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::test_server::{spawn_json_server, unreachable_base_url, CannedResponse};

    #[test]
    fn best_text_prefers_abstract_then_first_topic() {
        let both: InstantAnswerResponse = serde_json::from_str(
            r#"{"AbstractText":"Quantum tunnelling is...","RelatedTopics":[{"Text":"Other"}]}"#,
        )
        .unwrap();
        assert_eq!(both.best_text(), Some("Quantum tunnelling is..."));

        let topic_only: InstantAnswerResponse = serde_json::from_str(
            r#"{"AbstractText":"","RelatedTopics":[{"Text":"First topic"},{"Text":"Second"}]}"#,
        )
        .unwrap();
        assert_eq!(topic_only.best_text(), Some("First topic"));

        let grouped: InstantAnswerResponse = serde_json::from_str(
            r#"{"AbstractText":"","RelatedTopics":[{"Name":"Group","Topics":[]}]}"#,
        )
        .unwrap();
        assert_eq!(grouped.best_text(), None);

        assert_eq!(InstantAnswerResponse::default().best_text(), None);
    }

    #[tokio::test]
    async fn instant_answer_encodes_query() {
        let (base_url, requests) = spawn_json_server(vec![CannedResponse::ok(
            r#"{"AbstractText":"A result","RelatedTopics":[]}"#,
        )])
        .await;
        let client = reqwest::Client::new();

        let answer = instant_answer(&client, &base_url, "what is quantum tunneling")
            .await
            .expect("search should succeed");

        assert_eq!(answer.as_deref(), Some("A result"));
        let captured = requests.lock().await;
        assert_eq!(
            captured[0].request_line,
            "GET /?q=what+is+quantum+tunneling&format=json HTTP/1.1"
        );
    }

    #[tokio::test]
    async fn instant_answer_surfaces_http_errors() {
        let (base_url, _requests) =
            spawn_json_server(vec![CannedResponse::status(500, "oops")]).await;
        let client = reqwest::Client::new();

        let result = instant_answer(&client, &base_url, "anything").await;
        match result {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status.as_u16(), 500);
                assert_eq!(body, "oops");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn instant_answer_reports_transport_failures() {
        let base_url = unreachable_base_url().await;
        let client = reqwest::Client::new();

        let result = instant_answer(&client, &base_url, "anything").await;
        assert!(matches!(result, Err(ApiError::Transport(_))));
    }
}
