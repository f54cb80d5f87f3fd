//! Keyword fallback matcher
//!
//! Secondary classifier over literal substring tables, used when the
//! similarity ranker's best score is below its floor. Keyword hits are a
//! weaker signal than pattern similarity, so the confidence scale tops out
//! below the ranker's high range.

use ordering_agent_core::{Classification, UNKNOWN_INTENT};

/// Confidence contributed by each keyword hit. Tunable, kept for
/// compatibility with historical behavior.
pub const KEYWORD_WEIGHT: f32 = 0.3;

/// Ceiling for fallback confidence: three or more hits saturate here.
pub const KEYWORD_CONFIDENCE_CAP: f32 = 0.8;

/// Literal keyword tables per intent. Declaration order breaks ties.
static KEYWORD_TABLE: &[(&str, &[&str])] = &[
    (
        "cumprimento",
        &["oi", "olá", "ola", "hello", "hey", "bom dia", "boa tarde", "boa noite"],
    ),
    (
        "compra",
        &[
            "quero",
            "pedir",
            "comprar",
            "pedido",
            "vou querer",
            // Sushi
            "salmão",
            "salmao",
            "salmon",
            "sake",
            "atum",
            "tuna",
            "maguro",
            "kani",
            "caranguejo",
            "surimi",
            "philadelphia",
            "filadélfia",
            "cream cheese",
            // Temaki
            "temaki",
            "temaki salmão",
            "temaki atum",
            "temaki kani",
            "hot roll",
            "hot philadelphia",
            "hot",
            "hott",
            "califórnia",
            "california",
            "california roll",
            "atum spicy",
            "spicy tuna",
            "spicy",
            "salmão grelhado",
            "salmao grelhado",
            "grilled salmon",
            // Hot dishes
            "yakissoba",
            "yakisoba",
            "yaki soba",
            "macarrão japonês",
            "udon",
            "macarrão udon",
            "sopa udon",
            "teriyaki",
            "teriyaki chicken",
            "frango teriyaki",
            // Combos
            "combo",
            "combinado",
            "combo salmão",
            "combo salmao",
            "combo misto",
            "combo família",
            "combo familia",
            "combo atum",
            "rodízio",
            "festival",
            // Full phrases
            "quero salmão",
            "quero atum",
            "quero temaki",
            "quero yakissoba",
            "quero combo",
            "quero udon",
            "quero hot roll",
            "quero califórnia",
        ],
    ),
    (
        "itens_disponiveis",
        &[
            "cardápio",
            "menu",
            "sabores",
            "sushis",
            "opções",
            "tem",
            "pratos",
            "temakis",
            "yakissoba",
            "combinados",
        ],
    ),
    ("precos", &["preço", "preco", "valor", "custa", "quanto"]),
    (
        "tempo_entrega",
        &["tempo", "entrega", "demora", "prazo", "quando"],
    ),
    (
        "agradecimento",
        &["obrigado", "obrigada", "valeu", "brigado", "thanks"],
    ),
    (
        "reclamacao",
        &["problema", "reclamação", "ruim", "fria", "errada", "atrasada"],
    ),
    (
        "despedida",
        &["tchau", "bye", "até logo", "falou", "até mais", "adeus"],
    ),
];

/// Classify by counting keyword substrings in the lowercased raw utterance.
///
/// Confidence is `min(0.8, hits * 0.3)`: one hit lands at 0.3, two at 0.6,
/// three or more saturate the cap. Zero hits yield the unknown sentinel at
/// 0.0 confidence.
pub fn keyword_fallback(message: &str) -> Classification {
    let mut best_tag = UNKNOWN_INTENT;
    let mut best_hits = 0usize;

    for (tag, keywords) in KEYWORD_TABLE.iter().copied() {
        let hits = keywords
            .iter()
            .filter(|keyword| message.contains(*keyword))
            .count();
        if hits > best_hits {
            best_hits = hits;
            best_tag = tag;
        }
    }

    if best_hits == 0 {
        return Classification::new(UNKNOWN_INTENT, 0.0);
    }

    let confidence = (best_hits as f32 * KEYWORD_WEIGHT).min(KEYWORD_CONFIDENCE_CAP);
    Classification::new(best_tag, confidence)
}
