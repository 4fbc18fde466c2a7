//! Keyword-weighted e-mail classification.
//!
//! Pure substring matching over the lowercased text: no tokenization, no
//! normalization of accents. Short keywords can therefore match inside longer
//! words ("conta" in "contato"); that behaviour is kept on purpose so the
//! fallback scores stay comparable across releases.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::normalizer::normalize;

/// Terms that signal an e-mail needing action.
const PRODUCTIVE_KEYWORDS: &[&str] = &[
    // technical problems
    "problema", "erro", "bug", "falha", "defeito", "não funciona", "nao funciona",
    "travando", "travado", "quebrado", "instável", "lentidão", "indisponível",
    "fora do ar", "inconsistência",
    // support requests
    "suporte", "ajuda", "assistência", "dúvida", "duvida", "pergunta", "solicitação",
    "solicitacao", "solicito", "pedido", "requisição", "requisicao", "chamado", "ticket",
    "preciso", "gostaria de saber", "poderiam", "favor verificar", "orientação",
    // urgency
    "urgente", "urgência", "prazo", "importante", "prioridade", "imediato", "imediata",
    "o quanto antes", "asap",
    // financial transactions
    "pagamento", "boleto", "fatura", "cobrança", "reembolso", "estorno", "transferência",
    "depósito", "saldo", "extrato", "conta", "cartão", "crédito", "débito", "empréstimo",
    "financiamento", "investimento", "tarifa", "juros", "pix", "nota fiscal",
    // systems and access
    "sistema", "acesso", "senha", "login", "bloqueado", "bloqueio", "cadastro",
    "configuração", "instalação", "implementação", "atualização", "aplicativo",
    "plataforma", "integração",
    // documents and reports
    "relatório", "documento", "contrato", "comprovante", "anexo", "planilha", "proposta",
    "certificado", "declaração",
    // status
    "status", "andamento", "situação", "retorno", "previsão", "acompanhamento",
    "pendente", "pendência", "aprovação",
];

/// High-signal productive terms that count twice.
const PRIORITY_KEYWORDS: &[&str] = &[
    "problema", "erro", "falha", "não funciona", "nao funciona", "quebrado", "urgente",
    "suporte",
];

/// Terms that signal an e-mail needing no action.
const UNPRODUCTIVE_KEYWORDS: &[&str] = &[
    // gratitude
    "obrigado", "obrigada", "agradeço", "agradeco", "agradecemos", "agradecimento",
    "grato", "grata",
    // congratulations
    "parabéns", "parabens", "felicitações", "felicidades", "excelente trabalho",
    "ótimo trabalho",
    // social greetings
    "bom dia", "boa tarde", "boa noite", "cumprimentos", "saudações", "abraço",
    // personal and events
    "feliz", "natal", "ano novo", "festas", "aniversário", "casamento", "férias",
    "confraternização", "happy hour", "convite", "churrasco",
    // automated and marketing
    "newsletter", "promoção", "oferta", "desconto", "sorteio", "mensagem automática",
    "não responda", "descadastrar",
];

/// Reason carried by the conservative result of an unprocessable document
pub const PROCESSING_ERROR_REASON: &str = "processing error — default classification";

/// Confidence reported when nothing matched
const DEFAULT_CONFIDENCE: f32 = 0.5;
/// Upper bound of keyword-based confidence
const MAX_CONFIDENCE: f32 = 0.8;
/// Confidence gained per matched indicator
const CONFIDENCE_STEP: f32 = 0.1;

/// The two e-mail categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Requires an action or a specific answer
    #[serde(rename = "Produtivo")]
    Productive,
    /// Needs no immediate action
    #[serde(rename = "Improdutivo")]
    Unproductive,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl Category {
    /// Stable wire label
    pub fn label(&self) -> &'static str {
        match self {
            Category::Productive => "Produtivo",
            Category::Unproductive => "Improdutivo",
        }
    }

    /// Parse a wire label, ignoring case, accents and surrounding whitespace.
    pub fn from_label(label: &str) -> Option<Self> {
        match normalize(label.trim()).as_str() {
            "produtivo" => Some(Category::Productive),
            "improdutivo" => Some(Category::Unproductive),
            _ => None,
        }
    }
}

/// Result of keyword classification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    /// Heuristic confidence in [0.0, 1.0]
    pub confidence: f32,
    pub reason: String,
    pub productive_count: u32,
    pub unproductive_count: u32,
    /// Keywords that matched, productive ones first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_keywords: Vec<String>,
}

impl ClassificationResult {
    /// The conservative result used when a document could not be processed.
    pub fn processing_error() -> Self {
        Self {
            category: Category::Productive,
            confidence: DEFAULT_CONFIDENCE,
            reason: PROCESSING_ERROR_REASON.to_string(),
            productive_count: 0,
            unproductive_count: 0,
            matched_keywords: vec![],
        }
    }
}

/// Keyword-weighted classifier over the two closed keyword sets
#[derive(Debug, Clone, Copy)]
pub struct KeywordClassifier {
    productive: &'static [&'static str],
    priority: &'static [&'static str],
    unproductive: &'static [&'static str],
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self {
            productive: PRODUCTIVE_KEYWORDS,
            priority: PRIORITY_KEYWORDS,
            unproductive: UNPRODUCTIVE_KEYWORDS,
        }
    }

    /// Classify raw text.
    pub fn classify(&self, text: &str) -> ClassificationResult {
        let text_lower = text.to_lowercase();
        let mut matched_keywords = Vec::new();

        let mut productive_count = 0u32;
        for keyword in self.productive {
            if text_lower.contains(keyword) {
                productive_count += if self.priority.contains(keyword) { 2 } else { 1 };
                matched_keywords.push(keyword.to_string());
            }
        }

        let mut unproductive_count = 0u32;
        for keyword in self.unproductive {
            if text_lower.contains(keyword) {
                unproductive_count += 1;
                matched_keywords.push(keyword.to_string());
            }
        }

        let (category, confidence, reason) =
            if productive_count > 0 && productive_count >= unproductive_count {
                (
                    Category::Productive,
                    scaled_confidence(productive_count),
                    format!(
                        "keyword match: {} productive indicator(s) against {} unproductive",
                        productive_count, unproductive_count
                    ),
                )
            } else if unproductive_count > productive_count {
                (
                    Category::Unproductive,
                    scaled_confidence(unproductive_count),
                    format!(
                        "keyword match: {} unproductive indicator(s) against {} productive",
                        unproductive_count, productive_count
                    ),
                )
            } else {
                (
                    Category::Productive,
                    DEFAULT_CONFIDENCE,
                    "no keyword matched: treated as requiring action".to_string(),
                )
            };

        ClassificationResult {
            category,
            confidence,
            reason,
            productive_count,
            unproductive_count,
            matched_keywords,
        }
    }
}

fn scaled_confidence(winning_count: u32) -> f32 {
    (DEFAULT_CONFIDENCE + CONFIDENCE_STEP * winning_count as f32).min(MAX_CONFIDENCE)
}

/// Classify with the default keyword sets.
pub fn classify(text: &str) -> ClassificationResult {
    KeywordClassifier::new().classify(text)
}
