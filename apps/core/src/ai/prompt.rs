//! Prompt construction for the AI classifier.

use crate::ai::traits::CompletionRequest;
use crate::config::AiSettings;

/// Keyword hints included in the prompt
pub const MAX_PROMPT_KEYWORDS: usize = 5;

pub const SYSTEM_PROMPT: &str = "Você é um assistente especializado em análise e classificação \
de emails corporativos. Responda sempre em formato JSON válido.";

/// Cut `text` to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Build the user prompt: task description, reply guidelines, the e-mail and its keywords.
pub fn build_prompt(email_text: &str, keywords: &[String], max_chars: usize) -> String {
    let email = truncate_chars(email_text, max_chars);
    let hints = if keywords.is_empty() {
        "(nenhuma)".to_string()
    } else {
        keywords
            .iter()
            .take(MAX_PROMPT_KEYWORDS)
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        r#"Você classifica emails corporativos do setor financeiro.

TAREFA 1 - CLASSIFICAÇÃO
Classifique o email em uma das categorias:
- "Produtivo": requer ação ou resposta específica (solicitações, dúvidas técnicas, problemas, atualizações de status, pedidos de suporte)
- "Improdutivo": não requer ação imediata (felicitações, agradecimentos genéricos, mensagens sociais)

TAREFA 2 - RESPOSTA
Escreva uma resposta automática profissional, cordial e objetiva em português brasileiro.
Produtivo: confirme o recebimento, diga que a solicitação será tratada e informe o prazo estimado de 24 a 48 horas úteis.
Improdutivo: agradeça com gentileza, seja breve e informe que nenhuma ação adicional é necessária.

PALAVRAS-CHAVE DETECTADAS: {hints}

EMAIL:
{email}

Responda apenas com um objeto JSON no formato:
{{
  "categoria": "Produtivo" ou "Improdutivo",
  "confianca": número entre 0.0 e 1.0,
  "motivo": "justificativa breve",
  "resposta_sugerida": "texto da resposta"
}}"#
    )
}

/// Assemble the full completion request for one e-mail.
pub fn classification_request(email_text: &str, keywords: &[String], settings: &AiSettings) -> CompletionRequest {
    CompletionRequest {
        system_prompt: SYSTEM_PROMPT.to_string(),
        prompt: build_prompt(email_text, keywords, settings.max_prompt_chars),
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
        json_response: true,
    }
}
