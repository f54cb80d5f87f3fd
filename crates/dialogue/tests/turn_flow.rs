//! End-to-end turn flows over the dialogue engine with a mock recipe
//! provider and a deterministic reply picker.

use std::sync::Arc;

use async_trait::async_trait;

use ordering_agent_core::{
    FirstReplyPicker, IntentCatalog, IntentDefinition, LookupError, RecipeLookup, TurnRequest,
};
use ordering_agent_dialogue::{DialogueEngine, EngineError};

struct MockRecipes;

#[async_trait]
impl RecipeLookup for MockRecipes {
    async fn lookup(&self, dish: &str, _credential: &str) -> Result<String, LookupError> {
        if dish == "feijoada" {
            return Err(LookupError::Network("connection refused".to_string()));
        }
        Ok(format!("Ingredientes de {}.", dish))
    }
}

fn catalog() -> IntentCatalog {
    let intent = |tag: &str, patterns: &[&str], responses: &[&str]| IntentDefinition {
        tag: tag.to_string(),
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        responses: responses.iter().map(|r| r.to_string()).collect(),
    };

    IntentCatalog {
        intents: vec![
            intent(
                "cumprimento",
                &["oi", "olá", "bom dia", "boa tarde"],
                &[
                    "Olá! Bem-vindo ao Will Japanese Restaurant! 🍣",
                    "Konnichiwa! Como posso ajudar?",
                ],
            ),
            intent(
                "compra",
                &[
                    "quero pedir",
                    "quero comprar um prato",
                    "vou querer um temaki",
                    "quero fazer um pedido",
                ],
                &["Legal! Qual prato você gostaria de pedir?"],
            ),
            intent(
                "itens_disponiveis",
                &[
                    "o que tem no cardápio",
                    "quais pratos vocês tem",
                    "quais as opções do menu",
                ],
                &["Temos sushis, temakis, yakissoba, udon e combinados variados!"],
            ),
            intent(
                "precos",
                &["qual o preço do combo", "quanto custa", "qual o valor"],
                &["Os preços variam de R$ 25 a R$ 90, dependendo do prato escolhido."],
            ),
            intent(
                "ingredientes",
                &[
                    "quais os ingredientes",
                    "quais os ingredientes do yakissoba",
                    "como é feito esse prato",
                ],
                &["Posso consultar os ingredientes para você!"],
            ),
        ],
    }
}

fn engine_with_credential(credential: Option<&str>) -> DialogueEngine {
    DialogueEngine::new(
        Arc::new(catalog()),
        Arc::new(MockRecipes),
        Arc::new(FirstReplyPicker),
        credential.map(str::to_string),
    )
}

fn engine() -> DialogueEngine {
    engine_with_credential(Some("server-key"))
}

#[tokio::test]
async fn test_compound_message_answers_each_clause() {
    let result = engine()
        .respond(&TurnRequest::new(
            "Oi, quero um temaki salmão grelhado e qual o preço do combo família?",
        ))
        .await
        .unwrap();

    assert_eq!(result.sentences_processed, 3);
    assert_eq!(result.sentence_intents, vec!["cumprimento", "compra", "precos"]);

    let replies: Vec<&str> = result.reply.split("\n\n").collect();
    assert_eq!(replies.len(), 3);

    // Exactly one greeting.
    assert_eq!(result.reply.matches("Bem-vindo").count(), 1);
    // Purchase confirmation names the title-cased dish.
    assert!(result.reply.contains("Temaki Salmão Grelhado"));
    // Price clause gets its own reply.
    assert!(result.reply.contains("Os preços variam"));

    // Primary intent is the highest-confidence clause (the price question).
    assert_eq!(result.intent, "precos");
    assert!((result.confidence - 66.67).abs() < 0.01);
    assert!(!result.awaiting_dish_selection);
}

#[tokio::test]
async fn test_greeting_suppressed_on_repeat() {
    let result = engine()
        .respond(&TurnRequest::new("Oi! Olá, bom dia!"))
        .await
        .unwrap();

    assert_eq!(result.reply.matches("Bem-vindo").count(), 1);
}

#[tokio::test]
async fn test_near_duplicate_replies_are_deduplicated() {
    let result = engine()
        .respond(&TurnRequest::new("quero pedir e quero comprar um prato"))
        .await
        .unwrap();

    assert_eq!(result.sentences_processed, 2);
    assert_eq!(result.sentence_intents, vec!["compra", "compra"]);
    // Both clauses picked the same template; only one survives.
    assert!(!result.reply.contains("\n\n"));
    assert_eq!(result.reply, "Legal! Qual prato você gostaria de pedir?");
}

#[tokio::test]
async fn test_ingredients_intent_presents_menu_and_awaits_selection() {
    for credential in [Some("server-key"), None] {
        let result = engine_with_credential(credential)
            .respond(&TurnRequest::new("Quais os ingredientes do yakissoba?"))
            .await
            .unwrap();

        assert!(result.awaiting_dish_selection);
        assert_eq!(result.intent, "ingredientes");
        assert!(result.reply.contains("1. Lasanha"));
        assert!(result.reply.contains("10. Combo Família"));
    }
}

#[tokio::test]
async fn test_menu_notes_missing_credential() {
    let result = engine_with_credential(None)
        .respond(&TurnRequest::new("quais os ingredientes"))
        .await
        .unwrap();

    assert!(result.reply.contains("nenhuma credencial"));
}

#[tokio::test]
async fn test_selection_resolves_in_menu_order() {
    let request = TurnRequest {
        message: String::new(),
        pending_selection: Some("1,3".to_string()),
        credential: Some("caller-key".to_string()),
    };

    let result = engine().respond(&request).await.unwrap();

    assert!(!result.awaiting_dish_selection);
    assert_eq!(result.intent, "ingredientes");
    assert_eq!(result.confidence, 100.0);

    let sections: Vec<&str> = result.reply.split("\n\n").collect();
    assert_eq!(sections.len(), 2);
    assert!(sections[0].starts_with("Lasanha:"));
    assert!(sections[1].starts_with("Moqueca:"));
}

#[tokio::test]
async fn test_selection_uses_server_credential_when_caller_sends_none() {
    let request = TurnRequest {
        message: String::new(),
        pending_selection: Some("5".to_string()),
        credential: None,
    };

    let result = engine().respond(&request).await.unwrap();
    assert!(!result.awaiting_dish_selection);
    assert!(result.reply.contains("Yakissoba:"));
}

#[tokio::test]
async fn test_selection_without_any_credential_keeps_awaiting() {
    let request = TurnRequest {
        message: String::new(),
        pending_selection: Some("1".to_string()),
        credential: None,
    };

    let result = engine_with_credential(None).respond(&request).await.unwrap();
    assert!(result.awaiting_dish_selection);
    assert!(result.reply.contains("credencial"));
}

#[tokio::test]
async fn test_invalid_selection_keeps_awaiting() {
    let request = TurnRequest {
        message: String::new(),
        pending_selection: Some("nenhum desses".to_string()),
        credential: Some("caller-key".to_string()),
    };

    let result = engine().respond(&request).await.unwrap();
    assert!(result.awaiting_dish_selection);
    assert!(result.reply.contains("Seleção inválida"));
}

#[tokio::test]
async fn test_failed_lookup_is_inlined_not_fatal() {
    let request = TurnRequest {
        message: String::new(),
        pending_selection: Some("2,6".to_string()),
        credential: Some("caller-key".to_string()),
    };

    let result = engine().respond(&request).await.unwrap();
    assert!(result.reply.contains("Feijoada:\nErro ao consultar a receita"));
    assert!(result.reply.contains("Sushi:\nIngredientes de sushi."));
}

#[tokio::test]
async fn test_empty_message_is_an_input_error() {
    let error = engine()
        .respond(&TurnRequest::new("   "))
        .await
        .unwrap_err();
    assert_eq!(error, EngineError::EmptyMessage);
}

#[tokio::test]
async fn test_unclassifiable_message_still_gets_a_reply() {
    let result = engine()
        .respond(&TurnRequest::new("zzz qqq www"))
        .await
        .unwrap();

    assert_eq!(result.intent, "desconhecido");
    assert_eq!(result.confidence, 0.0);
    assert!(!result.reply.is_empty());
}

#[tokio::test]
async fn test_keyword_fallback_confidence_scaling() {
    // "Oi" normalizes to nothing, so the ranker delegates to keywords:
    // one hit at 0.3 is reported as 30.0 on the 0-100 scale.
    let result = engine().respond(&TurnRequest::new("Oi")).await.unwrap();
    assert_eq!(result.intent, "cumprimento");
    assert!((result.confidence - 30.0).abs() < 0.01);
}
