//! Wire payloads and request helpers for the three external services.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! responses is ignored.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

pub mod pubchem;
pub mod search;
pub mod translate;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("API request failed with status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("response is missing {0}")]
    Missing(&'static str),
}

#[derive(Debug, Deserialize)]
pub struct CompoundResponse {
    #[serde(rename = "PC_Compounds")]
    pub compounds: Option<Vec<CompoundRecord>>,
}

#[derive(Debug, Deserialize)]
pub struct CompoundRecord {
    #[serde(default)]
    pub id: Option<CompoundId>,
    #[serde(default)]
    pub cid: Option<u64>,
    #[serde(default)]
    pub props: Vec<CompoundProp>,
}

#[derive(Debug, Deserialize)]
pub struct CompoundId {
    pub id: Option<CompoundIdInner>,
}

#[derive(Debug, Deserialize)]
pub struct CompoundIdInner {
    pub cid: Option<u64>,
}

#[derive(Debug, Deserialize)]
pub struct CompoundProp {
    pub urn: Option<PropUrn>,
    pub name: Option<String>,
    pub value: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct PropUrn {
    pub label: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct InstantAnswerResponse {
    #[serde(rename = "AbstractText", default)]
    pub abstract_text: Option<String>,
    #[serde(rename = "RelatedTopics", default)]
    pub related_topics: Vec<RelatedTopic>,
}

#[derive(Debug, Deserialize)]
pub struct RelatedTopic {
    #[serde(rename = "Text")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    pub data: Option<TranslateData>,
}

#[derive(Debug, Deserialize)]
pub struct TranslateData {
    #[serde(default)]
    pub translations: Vec<Translation>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Translation {
    pub translated_text: Option<String>,
}

#[cfg(test)]
pub(crate) mod test_server;
