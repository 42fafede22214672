use std::error::Error;

use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, warn};

use crate::core::answers::AnswerStore;
use crate::core::config::Config;
use crate::core::credentials::{CredentialStore, KeySource};
use crate::core::dispatcher::Dispatcher;
use crate::core::flows::{FlowService, TranslationSettings};
use crate::core::message::{Message, MessageSink, Transcript};
use crate::utils::logging::LoggingState;

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub log_file: Option<String>,
    pub target_language: Option<String>,
    pub no_translate: bool,
    pub no_learn: bool,
    /// Accept every learning prompt without asking.
    pub auto_accept: bool,
    pub env_only: bool,
}

/// Everything shown so far, plus the transcript file it is mirrored to.
pub struct SessionRecord {
    pub logging: LoggingState,
    pub transcript: Transcript,
    /// Label for translated entries.
    pub language: String,
}

impl SessionRecord {
    pub fn new(logging: LoggingState, language: impl Into<String>) -> Self {
        Self {
            logging,
            transcript: Transcript::default(),
            language: language.into(),
        }
    }

    pub fn record(&mut self, message: &Message) {
        if let Err(err) = self.logging.log_message(message, &self.language) {
            warn!(error = %err, "failed to write transcript log");
        }
        self.transcript.push(message.clone());
    }
}

pub struct ChatSession {
    pub dispatcher: Dispatcher,
    pub sink: MessageSink,
    pub record: SessionRecord,
    pub auto_accept: bool,
    /// Where the translation key came from; `None` when translation is off.
    pub key_source: Option<KeySource>,
}

impl ChatSession {
    /// Queues an informational entry for the front-end.
    pub fn notify(&self, content: impl Into<String>) {
        self.sink.render(Message::app_info(content));
    }

    pub fn notify_error(&self, content: impl Into<String>) {
        self.sink.render(Message::app_error(content));
    }
}

/// Wires the answer store, HTTP client, flows and dispatcher together.
///
/// The returned receiver yields every entry the session renders, in order.
pub fn bootstrap_session(
    config: &Config,
    options: SessionOptions,
) -> Result<(ChatSession, UnboundedReceiver<Message>), Box<dyn Error>> {
    let mut client = reqwest::Client::builder();
    if let Some(timeout) = config.request_timeout() {
        client = client.timeout(timeout);
    }
    let client = client.build()?;

    let (sink, rx) = MessageSink::new();
    let flows = FlowService::new(client, config.endpoints.clone(), sink.clone());

    let mut store = AnswerStore::seeded();
    store.extend_seeds(&config.answers);

    let language = options
        .target_language
        .map(|language| language.to_lowercase())
        .unwrap_or_else(|| config.target_language().to_lowercase());

    let (translation, key_source) = if config.translate_enabled() && !options.no_translate {
        let (api_key, source) =
            CredentialStore::new(!options.env_only).resolve_translate_key(config);
        debug!(?source, language = %language, "translation enabled");
        let settings = TranslationSettings {
            api_key,
            target_language: language.clone(),
        };
        (Some(settings), Some(source))
    } else {
        (None, None)
    };

    let dispatcher = Dispatcher::new(store, flows, sink.clone())
        .with_translation(translation)
        .with_learning(config.learn_enabled() && !options.no_learn);
    let record = SessionRecord::new(LoggingState::new(options.log_file)?, language);

    Ok((
        ChatSession {
            dispatcher,
            sink,
            record,
            auto_accept: options.auto_accept,
            key_source,
        },
        rx,
    ))
}
