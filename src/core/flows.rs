use tokio::task::JoinHandle;
use tracing::warn;

use crate::api::pubchem::{fetch_compound, CompoundQuery};
use crate::api::search::instant_answer;
use crate::api::translate::translate_text;
use crate::core::config::Endpoints;
use crate::core::constants::{
    COMPOUND_FAILED, COMPOUND_INVALID_QUERY, COMPOUND_NOT_FOUND, SEARCH_FAILED,
    SEARCH_NO_ANSWER, TRANSLATE_FAILED,
};
use crate::core::message::{Message, MessageSink};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationSettings {
    pub api_key: String,
    pub target_language: String,
}

/// Spawns the background lookups.
///
/// Each flow is an independent task that renders exactly one entry when it
/// finishes, success or apology. Nothing reports back to the caller and
/// nothing is cancelled when a newer turn starts.
#[derive(Clone, Debug)]
pub struct FlowService {
    client: reqwest::Client,
    endpoints: Endpoints,
    sink: MessageSink,
}

impl FlowService {
    pub fn new(client: reqwest::Client, endpoints: Endpoints, sink: MessageSink) -> Self {
        Self {
            client,
            endpoints,
            sink,
        }
    }

    /// Starts a compound lookup for the raw user message.
    ///
    /// A message without an identifier or name is answered immediately and
    /// no request is made.
    pub fn spawn_compound_lookup(&self, message: &str) -> Option<JoinHandle<()>> {
        let Some(query) = CompoundQuery::parse(message) else {
            self.sink.render(Message::bot(COMPOUND_INVALID_QUERY));
            return None;
        };
        let service = self.clone();
        Some(tokio::spawn(async move {
            let reply = service.compound_lookup(&query).await;
            service.sink.render(reply);
        }))
    }

    pub fn spawn_web_search(&self, query: &str) -> JoinHandle<()> {
        let service = self.clone();
        let query = query.to_string();
        tokio::spawn(async move {
            let reply = service.web_search(&query).await;
            service.sink.render(reply);
        })
    }

    pub fn spawn_translation(&self, text: &str, settings: &TranslationSettings) -> JoinHandle<()> {
        let service = self.clone();
        let text = text.to_string();
        let settings = settings.clone();
        tokio::spawn(async move {
            let reply = service.translation(&text, &settings).await;
            service.sink.render(reply);
        })
    }

    pub async fn compound_lookup(&self, query: &CompoundQuery) -> Message {
        match fetch_compound(&self.client, self.endpoints.pubchem(), query).await {
            Ok(Some(summary)) => Message::bot(summary.render()),
            Ok(None) => Message::bot(COMPOUND_NOT_FOUND),
            Err(err) => {
                warn!(error = %err, %query, "PubChem lookup failed");
                Message::bot(COMPOUND_FAILED)
            }
        }
    }

    pub async fn web_search(&self, query: &str) -> Message {
        match instant_answer(&self.client, self.endpoints.search(), query).await {
            Ok(Some(text)) => Message::bot(text),
            Ok(None) => Message::bot(SEARCH_NO_ANSWER),
            Err(err) => {
                warn!(error = %err, query, "web search failed");
                Message::bot(SEARCH_FAILED)
            }
        }
    }

    pub async fn translation(&self, text: &str, settings: &TranslationSettings) -> Message {
        match translate_text(
            &self.client,
            self.endpoints.translate(),
            &settings.api_key,
            text,
            &settings.target_language,
        )
        .await
        {
            Ok(translated) => Message::translated(translated),
            Err(err) => {
                warn!(error = %err, "translation failed");
                Message::translated(TRANSLATE_FAILED)
            }
        }
    }
}
