//! Ingredient sub-dialogue
//!
//! Two-step flow: an "ingredientes" turn answers with the numbered dish
//! menu and hands the state back to the caller; the follow-up request
//! carries the selection (plus a credential) and is resolved here with one
//! recipe lookup per dish. No state lives on the server between the steps.

use once_cell::sync::Lazy;
use regex::Regex;

use ordering_agent_core::RecipeLookup;
use ordering_agent_nlp::title_case;

/// Dishes offered for ingredient lookup. Independent from the extraction
/// catalog: this list is presented 1-indexed and parsed back by number.
pub const INGREDIENT_MENU: &[&str] = &[
    "lasanha",
    "feijoada",
    "moqueca",
    "spaghetti alla carbonara",
    "yakissoba",
    "sushi",
    "temaki",
    "ramen",
    "hot roll",
    "combo família",
];

/// Reply when the selection matched nothing.
pub const INVALID_SELECTION_REPLY: &str =
    "Seleção inválida. Responda com o número de um dos pratos da lista (ou vários números separados por vírgula).";

/// Reply when no credential is available to call the recipe provider.
pub const MISSING_CREDENTIAL_REPLY: &str =
    "Preciso de uma credencial da API de receitas para consultar os ingredientes. Envie a chave junto com a sua escolha.";

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// The numbered dish menu presented when the ingredients intent fires.
pub fn menu_reply(credential_configured: bool) -> String {
    let mut lines = Vec::with_capacity(INGREDIENT_MENU.len() + 3);
    lines.push("Claro! Posso consultar os ingredientes destes pratos:".to_string());

    for (position, dish) in INGREDIENT_MENU.iter().enumerate() {
        lines.push(format!("{}. {}", position + 1, title_case(dish)));
    }

    lines.push(
        "Responda com o número do prato desejado (ou vários números separados por vírgula)."
            .to_string(),
    );

    if !credential_configured {
        lines.push(
            "Observação: nenhuma credencial da API de receitas está configurada no servidor; \
             envie a sua junto com a escolha."
                .to_string(),
        );
    }

    lines.join("\n")
}

/// Parse the caller's selection into menu dishes.
///
/// Integers win: every number in the text maps to the 1-indexed menu, with
/// duplicates collapsed and out-of-range values ignored. Only when no number
/// selects anything does matching fall back to case-insensitive containment
/// (either direction) against the dish names. An empty result means the
/// selection could not be understood.
pub fn parse_selection(selection: &str) -> Vec<&'static str> {
    let mut selected: Vec<&'static str> = Vec::new();

    for found in DIGITS.find_iter(selection) {
        if let Ok(position) = found.as_str().parse::<usize>() {
            if (1..=INGREDIENT_MENU.len()).contains(&position) {
                let dish = INGREDIENT_MENU[position - 1];
                if !selected.contains(&dish) {
                    selected.push(dish);
                }
            }
        }
    }

    if !selected.is_empty() {
        return selected;
    }

    let lowered = selection.trim().to_lowercase();
    if lowered.is_empty() {
        return selected;
    }

    for dish in INGREDIENT_MENU.iter().copied() {
        if (lowered.contains(dish) || dish.contains(lowered.as_str()))
            && !selected.contains(&dish)
        {
            selected.push(dish);
        }
    }

    selected
}

/// Resolve a parsed selection: one lookup per dish, failures inlined.
///
/// A failed lookup becomes a textual notice inside that dish's segment and
/// never aborts the remaining lookups.
pub async fn resolve(
    selected: &[&str],
    credential: &str,
    recipes: &dyn RecipeLookup,
) -> String {
    let mut sections = Vec::with_capacity(selected.len());

    for dish in selected {
        let body = match recipes.lookup(dish, credential).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(dish = %dish, error = %e, "Recipe lookup failed");
                format!("Erro ao consultar a receita: {}", e)
            }
        };
        sections.push(format!("{}:\n{}", title_case(dish), body));
    }

    sections.join("\n\n")
}
