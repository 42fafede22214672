//! Turn handling: pick a reply, show it, and kick off whatever follows.

use tokio::task::JoinHandle;
use tracing::debug;

use crate::core::answers::AnswerStore;
use crate::core::confirm::Confirm;
use crate::core::constants::{
    math_failure, math_result, web_search_pending, COMPOUND_KEYWORD, COMPOUND_PENDING, LEARN_ACK,
    LEARN_PROMPT,
};
use crate::core::flows::{FlowService, TranslationSettings};
use crate::core::math::{self, MathError};
use crate::core::message::{Message, MessageSink};

/// How a turn is answered. Follow-up work is chosen from the variant, never
/// from the reply text.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Answer(String),
    NeedsCompoundLookup,
    NeedsWebSearch { query: String },
    MathResult { expression: String, value: f64 },
    MathError { expression: String, error: MathError },
}

impl Reply {
    pub fn text(&self) -> String {
        match self {
            Reply::Answer(answer) => answer.clone(),
            Reply::NeedsCompoundLookup => COMPOUND_PENDING.to_string(),
            Reply::NeedsWebSearch { query } => web_search_pending(query),
            Reply::MathResult { expression, value } => {
                math_result(expression, &math::format_number(*value))
            }
            Reply::MathError { expression, .. } => math_failure(expression),
        }
    }
}

/// Chooses the reply for `message`.
///
/// The compound keyword beats everything, stored answers beat arithmetic,
/// and anything left over goes to the web.
pub fn decide(store: &AnswerStore, message: &str) -> Reply {
    let question = message.to_lowercase();

    if question.contains(COMPOUND_KEYWORD) {
        return Reply::NeedsCompoundLookup;
    }

    if let Some(answer) = store.lookup(&question) {
        return Reply::Answer(answer.to_string());
    }

    if math::is_math_expression(&question) {
        return match math::evaluate(&question) {
            Ok(value) => Reply::MathResult {
                expression: question,
                value,
            },
            Err(error) => Reply::MathError {
                expression: question,
                error,
            },
        };
    }

    Reply::NeedsWebSearch {
        query: message.to_string(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowKind {
    CompoundLookup,
    WebSearch,
    Translation,
}

/// What a turn did, for callers that want to wait on its flows.
#[derive(Debug)]
pub struct TurnOutcome {
    pub reply: Reply,
    pub flows: Vec<(FlowKind, JoinHandle<()>)>,
    pub learned: bool,
}

impl TurnOutcome {
    pub fn flow_kinds(&self) -> Vec<FlowKind> {
        self.flows.iter().map(|(kind, _)| *kind).collect()
    }

    pub async fn join(self) {
        for (kind, handle) in self.flows {
            if let Err(err) = handle.await {
                debug!(?kind, error = %err, "flow task ended abnormally");
            }
        }
    }
}

pub struct Dispatcher {
    store: AnswerStore,
    flows: FlowService,
    sink: MessageSink,
    translation: Option<TranslationSettings>,
    learning: bool,
}

impl Dispatcher {
    pub fn new(store: AnswerStore, flows: FlowService, sink: MessageSink) -> Self {
        Self {
            store,
            flows,
            sink,
            translation: None,
            learning: true,
        }
    }

    pub fn with_translation(mut self, translation: Option<TranslationSettings>) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_learning(mut self, learning: bool) -> Self {
        self.learning = learning;
        self
    }

    pub fn store(&self) -> &AnswerStore {
        &self.store
    }

    pub fn translation(&self) -> Option<&TranslationSettings> {
        self.translation.as_ref()
    }

    /// Changes the translation target for later turns. Returns false when
    /// translation is off.
    pub fn set_target_language(&mut self, language: &str) -> bool {
        match self.translation.as_mut() {
            Some(settings) => {
                settings.target_language = language.to_lowercase();
                true
            }
            None => false,
        }
    }

    pub async fn process_turn(&mut self, message: &str, confirm: &mut dyn Confirm) -> TurnOutcome {
        self.sink.render(Message::user(message));

        let reply = decide(&self.store, message);
        let text = reply.text();
        debug!(?reply, "decided reply");
        self.sink.render(Message::bot(text.clone()));

        let mut flows = Vec::new();
        let mut learned = false;
        match &reply {
            Reply::NeedsCompoundLookup => {
                if let Some(handle) = self.flows.spawn_compound_lookup(message) {
                    flows.push((FlowKind::CompoundLookup, handle));
                }
            }
            Reply::NeedsWebSearch { query } => {
                flows.push((FlowKind::WebSearch, self.flows.spawn_web_search(query)));
            }
            _ if self.learning => {
                learned = self.learn(message, &text, confirm).await;
            }
            _ => {}
        }

        // Placeholder replies are translated too.
        if let Some(settings) = &self.translation {
            flows.push((
                FlowKind::Translation,
                self.flows.spawn_translation(&text, settings),
            ));
        }

        TurnOutcome {
            reply,
            flows,
            learned,
        }
    }

    /// Asks whether `answer` was useful and remembers it if so.
    pub async fn learn(&mut self, question: &str, answer: &str, confirm: &mut dyn Confirm) -> bool {
        if !confirm.confirm(LEARN_PROMPT).await {
            return false;
        }
        self.store.learn(question, answer);
        confirm.acknowledge(LEARN_ACK).await;
        self.sink.render(Message::app_info(LEARN_ACK));
        true
    }
}
