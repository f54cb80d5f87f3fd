//! Menu-item (dish) extraction
//!
//! The catalog is a fixed literal list with deliberate duplication of
//! synonyms and common misspellings ("salmão", "salmao", "salmon" all name
//! the same dish). Matching runs over the raw lowercased text; catalog order
//! carries no priority. The longest match wins because it is the most
//! specific ("temaki salmão grelhado" must beat the bare "salmão").

/// Dish-name literals recognized inside order messages.
pub const DISH_CATALOG: &[&str] = &[
    // Sushi
    "philadelphia",
    "filadélfia",
    "cream cheese philadelphia",
    "sushi de salmão",
    "sushi salmão",
    "salmão",
    "salmao",
    "salmon",
    "sake",
    "sushi de atum",
    "sushi atum",
    "atum",
    "tuna",
    "maguro",
    "sushi de kani",
    "sushi kani",
    "kani",
    "caranguejo",
    "surimi",
    // Temaki
    "temaki hot philadelphia",
    "hot philadelphia",
    "hot roll",
    "temaki salmão grelhado",
    "salmão grelhado",
    "salmao grelhado",
    "grilled salmon",
    "temaki califórnia",
    "temaki california",
    "califórnia",
    "california",
    "california roll",
    "temaki atum spicy",
    "atum spicy",
    "spicy tuna",
    "spicy",
    "temaki salmão",
    "temaki salmao",
    "temaki atum",
    "temaki kani",
    "temaki",
    // Hot dishes
    "yakissoba de frango",
    "yakissoba frango",
    "yakissoba carne",
    "yakissoba misto",
    "yakissoba",
    "yakisoba",
    "yaki soba",
    "macarrão japonês",
    "udon de frango",
    "udon carne",
    "udon vegetariano",
    "udon",
    "macarrão udon",
    "sopa udon",
    "teriyaki chicken",
    "frango teriyaki",
    "chicken teriyaki",
    "teriyaki",
    "ramen",
    "lamen",
    "missoshiru",
    "miso soup",
    "sopa de miso",
    "gyoza",
    "guioza",
    "tempura",
    "tempora",
    // Combos
    "combo família",
    "combo familia",
    "combo family",
    "combo salmão",
    "combo salmao",
    "combo salmon",
    "combo misto",
    "combo mix",
    "combo variado",
    "combo atum",
    "combo tuna",
    "combo executivo",
    "combo especial",
    "combo premium",
    "combinado",
    "combo",
    "rodízio",
    "festival",
    // Sashimi
    "sashimi de salmão",
    "sashimi salmão",
    "sashimi salmao",
    "sashimi de atum",
    "sashimi atum",
    "sashimi tuna",
    "sashimi misto",
    "sashimi mix",
    "sashimi",
    // Gunkan and others
    "gunkan salmão",
    "gunkan atum",
    "gunkan ikura",
    "gunkan",
    "joe salmão",
    "joe atum",
    "joe",
    "skin salmão",
    "skin salmon",
    "skin",
    // Dietary options
    "vegetariano",
    "vegano",
    "vegan",
    "sem peixe",
    "sem carne",
    "sem glúten",
    "diet",
    "light",
    "fitness",
];

/// Find the most specific dish named in `text`.
///
/// Collects every catalog literal occurring as a substring of the lowercased
/// text and keeps the longest; on equal lengths the earlier catalog entry
/// wins, so the result is deterministic. Returns `None` when nothing matches.
pub fn extract_dish(text: &str) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    let mut best: Option<&'static str> = None;

    for dish in DISH_CATALOG.iter().copied() {
        if lowered.contains(dish) {
            let longer = best.map_or(true, |current| {
                dish.chars().count() > current.chars().count()
            });
            if longer {
                best = Some(dish);
            }
        }
    }

    best
}

/// Title-case a dish name for display ("temaki salmão grelhado" ->
/// "Temaki Salmão Grelhado").
pub fn title_case(name: &str) -> String {
    name.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => first.to_uppercase().chain(chars).collect(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longest_match_wins() {
        let dish = extract_dish("quero um temaki salmão grelhado por favor");
        assert_eq!(dish, Some("temaki salmão grelhado"));
    }

    #[test]
    fn test_bare_dish_still_matches() {
        assert_eq!(extract_dish("me vê um salmão"), Some("salmão"));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_dish("QUERO YAKISSOBA"), Some("yakissoba"));
    }

    #[test]
    fn test_spelling_variant_matches() {
        assert_eq!(extract_dish("um yakisoba de frango"), Some("yakisoba"));
    }

    #[test]
    fn test_no_dish_found() {
        assert_eq!(extract_dish("qual o prazo de entrega"), None);
        assert_eq!(extract_dish(""), None);
    }

    #[test]
    fn test_combo_variants() {
        assert_eq!(
            extract_dish("quanto custa o combo família"),
            Some("combo família")
        );
        assert_eq!(
            extract_dish("quanto custa o combo familia"),
            Some("combo familia")
        );
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("temaki salmão grelhado"), "Temaki Salmão Grelhado");
        assert_eq!(title_case("combo família"), "Combo Família");
        assert_eq!(title_case("sushi"), "Sushi");
    }
}
