use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::api::{ApiError, CompoundProp, CompoundRecord, CompoundResponse};
use crate::core::constants::FIELD_UNAVAILABLE;
use crate::utils::url::construct_api_url;

static CID_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)cid\s*(\d+)").expect("valid CID pattern"));
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)nome\s*([a-zA-Z]+)").expect("valid name pattern"));

/// What to look up, extracted from the raw user message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompoundQuery {
    Cid(String),
    Name(String),
}

impl CompoundQuery {
    /// An identifier (`cid 2244`) wins over a name (`nome aspirin`).
    pub fn parse(message: &str) -> Option<Self> {
        if let Some(captures) = CID_PATTERN.captures(message) {
            return Some(CompoundQuery::Cid(captures[1].to_string()));
        }
        NAME_PATTERN
            .captures(message)
            .map(|captures| CompoundQuery::Name(captures[1].to_string()))
    }

    pub fn endpoint(&self) -> String {
        match self {
            CompoundQuery::Cid(cid) => format!("compound/CID/{cid}/JSON"),
            CompoundQuery::Name(name) => format!("compound/name/{name}/JSON"),
        }
    }
}

impl fmt::Display for CompoundQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompoundQuery::Cid(cid) => write!(f, "CID {cid}"),
            CompoundQuery::Name(name) => write!(f, "name {name}"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompoundSummary {
    pub iupac_name: Option<String>,
    pub cid: Option<u64>,
    pub formula: Option<String>,
}

impl CompoundSummary {
    pub fn from_record(record: &CompoundRecord) -> Self {
        let cid = record
            .id
            .as_ref()
            .and_then(|id| id.id.as_ref())
            .and_then(|inner| inner.cid)
            .or(record.cid);
        Self {
            iupac_name: prop_value(&record.props, "IUPAC Name"),
            cid,
            formula: prop_value(&record.props, "Molecular Formula"),
        }
    }

    pub fn render(&self) -> String {
        let name = self.iupac_name.as_deref().unwrap_or(FIELD_UNAVAILABLE);
        let cid = self
            .cid
            .map(|cid| cid.to_string())
            .unwrap_or_else(|| FIELD_UNAVAILABLE.to_string());
        let formula = self.formula.as_deref().unwrap_or(FIELD_UNAVAILABLE);
        format!("Informações do composto:\n\nNome: {name}\nCID: {cid}\nFórmula: {formula}")
    }
}

/// First property carrying `label`, matched on `urn.label` (the PUG REST
/// shape) or a flat `name`. Values may be `{"sval": ...}` or a bare string.
fn prop_value(props: &[CompoundProp], label: &str) -> Option<String> {
    props
        .iter()
        .filter(|prop| {
            prop.urn
                .as_ref()
                .and_then(|urn| urn.label.as_deref())
                .or(prop.name.as_deref())
                == Some(label)
        })
        .find_map(|prop| match prop.value.as_ref()? {
            serde_json::Value::String(text) => Some(text.clone()),
            serde_json::Value::Object(map) => map
                .get("sval")
                .and_then(|sval| sval.as_str())
                .map(str::to_owned),
            _ => None,
        })
        .filter(|text| !text.is_empty())
}

/// Fetches the first compound record for `query`.
///
/// `Ok(None)` means the service answered but reported no compound (PubChem
/// answers unknown names with a fault body and no `PC_Compounds`).
pub async fn fetch_compound(
    client: &reqwest::Client,
    base_url: &str,
    query: &CompoundQuery,
) -> Result<Option<CompoundSummary>, ApiError> {
    let url = construct_api_url(base_url, &query.endpoint());
    debug!(%url, %query, "fetching compound");

    let body = client.get(url).send().await?.text().await?;
    let response: CompoundResponse = serde_json::from_str(&body)?;

    // An empty compound list reads as not found, like the fault body does.
    Ok(response
        .compounds
        .as_deref()
        .and_then(<[CompoundRecord]>::first)
        .map(CompoundSummary::from_record))
}
