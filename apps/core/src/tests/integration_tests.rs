//! Integration Tests
//!
//! Realistic e-mails through the full offline analysis.

use crate::ai::{ClassificationOrchestrator, FALLBACK_REASON};
use crate::models::ClassificationSource;
use crate::nlp::Category;

const SUPPORT_EMAIL: &str = "Olá equipe,

Estou com um problema no acesso ao sistema desde ontem. A senha não é aceita
e preciso emitir o boleto da fatura de março com urgência.

Segue o link do erro: https://portal.exemplo.com.br/erro?id=123
Meu telefone: (11) 98765-4321

Atenciosamente,
Maria
maria@cliente.com.br";

const GREETING_EMAIL: &str = "Bom dia a todos!

Queria desejar um feliz natal e boas festas para toda a equipe.
Parabéns pelo excelente trabalho neste ano!

-----
Abraços";

#[tokio::test]
async fn test_support_request_is_productive() {
    let analysis = ClassificationOrchestrator::offline().analyze(SUPPORT_EMAIL).await;

    assert_eq!(analysis.category, Category::Productive);
    assert_eq!(analysis.source, ClassificationSource::Fallback);
    assert_eq!(analysis.reason, FALLBACK_REASON);
    assert!(analysis.confidence > 0.5 && analysis.confidence <= 0.8);
    assert!(analysis.suggested_response.contains("24-48 horas"));

    let keywords = analysis.keywords.unwrap();
    assert!(!keywords.iter().any(|k| k.contains("exemplo") || k.contains("cliente")));
    assert!(keywords.contains(&"sistema".to_string()));
}

#[tokio::test]
async fn test_greeting_is_unproductive() {
    let analysis = ClassificationOrchestrator::offline().analyze(GREETING_EMAIL).await;

    assert_eq!(analysis.category, Category::Unproductive);
    assert!(analysis.suggested_response.contains("Não é necessária nenhuma ação"));

    let stats = analysis.nlp_stats.unwrap();
    assert!(stats.unproductive_hits >= 3);
    assert_eq!(stats.productive_hits, 0);
}

#[tokio::test]
async fn test_batch_preserves_order() {
    let texts = vec![
        GREETING_EMAIL.to_string(),
        SUPPORT_EMAIL.to_string(),
        String::new(),
    ];

    let analyses = ClassificationOrchestrator::offline().analyze_many(&texts).await;

    let categories: Vec<Category> = analyses.iter().map(|a| a.category).collect();
    assert_eq!(
        categories,
        vec![Category::Unproductive, Category::Productive, Category::Productive]
    );
    assert_eq!(analyses[2].confidence, 0.5);
    assert_eq!(analyses[2].text_length, 0);
}

#[tokio::test]
async fn test_analysis_serializes_with_wire_labels() {
    let analysis = ClassificationOrchestrator::offline().analyze(GREETING_EMAIL).await;
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["category"], "Improdutivo");
    assert_eq!(json["source"], "fallback");
    assert!(json["timestamp"].is_string());
    assert!(json.get("ai_model").is_none());
}
