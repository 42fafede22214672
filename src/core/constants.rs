//! User-visible reply strings and service defaults.

/// Substring of the lowercased message that routes a turn to PubChem.
pub const COMPOUND_KEYWORD: &str = "pubchem";

pub const COMPOUND_PENDING: &str = "Coletando dados do PubChem...";
pub const COMPOUND_INVALID_QUERY: &str = "Por favor, forneça um CID ou nome válido.";
pub const COMPOUND_NOT_FOUND: &str = "Não consegui encontrar informações para esse CID ou nome.";
pub const COMPOUND_FAILED: &str =
    "Não consegui buscar dados do PubChem. Verifique a conexão com a internet e tente novamente.";
pub const FIELD_UNAVAILABLE: &str = "Não disponível";

pub const SEARCH_NO_ANSWER: &str = "Não encontrei uma resposta adequada.";
pub const SEARCH_FAILED: &str =
    "Não consegui buscar a resposta. Verifique a conexão com a internet e tente novamente.";

pub const TRANSLATE_FAILED: &str =
    "Não consegui traduzir a resposta. Verifique a conexão com a internet e tente novamente.";

pub const LEARN_PROMPT: &str = "Essa resposta foi útil?";
pub const LEARN_ACK: &str = "Resposta aprendida pelo bot.";

pub const DEFAULT_PUBCHEM_BASE_URL: &str = "https://pubchem.ncbi.nlm.nih.gov/rest/pug";
pub const DEFAULT_SEARCH_BASE_URL: &str = "https://api.duckduckgo.com";
pub const DEFAULT_TRANSLATE_BASE_URL: &str = "https://translation.googleapis.com";
pub const DEFAULT_TARGET_LANGUAGE: &str = "en";

/// Sent when no translation key is configured; the service rejects it.
pub const PLACEHOLDER_API_KEY: &str = "YOUR_API_KEY";
pub const TRANSLATE_KEY_ENV: &str = "PAPAGAIO_TRANSLATE_KEY";

pub const SEED_ANSWERS: &[(&str, &str)] = &[
    ("ola", "Olá! Como posso ajudar você hoje?"),
    ("como se chama", "Eu sou um bot test 05 pasta 2"),
    (
        "o que voce faz",
        "Eu ajudo a responder perguntas. Se não souber, posso buscar na web.",
    ),
];

pub fn web_search_pending(message: &str) -> String {
    format!("Não tenho certeza da resposta para \"{message}\". Pesquisando na web...")
}

pub fn math_result(expression: &str, value: &str) -> String {
    format!("O resultado de \"{expression}\" é {value}.")
}

pub fn math_failure(expression: &str) -> String {
    format!("Não consegui calcular \"{expression}\". Verifique a expressão e tente novamente.")
}
