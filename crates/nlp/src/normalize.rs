//! Utterance normalization
//!
//! Lowercases, strips punctuation, tokenizes on Unicode word boundaries and
//! drops stop-words and very short tokens. Downstream scoring treats the
//! output as a set; duplicates are retained here.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use unicode_segmentation::UnicodeSegmentation;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").expect("valid regex"));

/// Portuguese stop-words plus the handful of English function words that show
/// up in mixed-language orders.
static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        // Portuguese
        "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às",
        "até", "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois",
        "do", "dos", "e", "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram",
        "éramos", "essa", "essas", "esse", "esses", "esta", "está", "estamos", "estão", "estar",
        "estas", "estava", "estavam", "estávamos", "este", "esteja", "estejam", "estejamos",
        "estes", "esteve", "estive", "estivemos", "estiver", "estivera", "estiveram",
        "estivéramos", "estiverem", "estivermos", "estivesse", "estivessem", "estivéssemos",
        "estou", "eu", "foi", "fomos", "for", "fora", "foram", "fôramos", "forem", "formos",
        "fosse", "fossem", "fôssemos", "fui", "há", "haja", "hajam", "hajamos", "hão",
        "havemos", "haver", "hei", "houve", "houvemos", "houver", "houvera", "houverá",
        "houveram", "houvéramos", "houverão", "houverei", "houverem", "houveremos", "houveria",
        "houveriam", "houveríamos", "houvermos", "houvesse", "houvessem", "houvéssemos",
        "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu", "meus",
        "minha", "minhas", "muito", "na", "não", "nas", "nem", "no", "nos", "nós", "nossa",
        "nossas", "nosso", "nossos", "num", "numa", "o", "os", "ou", "para", "pela", "pelas",
        "pelo", "pelos", "por", "qual", "quando", "que", "quem", "são", "se", "seja", "sejam",
        "sejamos", "sem", "ser", "será", "serão", "serei", "seremos", "seria", "seriam",
        "seríamos", "seu", "seus", "só", "somos", "sou", "sua", "suas", "também", "te", "tem",
        "têm", "temos", "tenha", "tenham", "tenhamos", "tenho", "terá", "terão", "terei",
        "teremos", "teria", "teriam", "teríamos", "teu", "teus", "teve", "tinha", "tinham",
        "tínhamos", "tive", "tivemos", "tiver", "tivera", "tiveram", "tivéramos", "tiverem",
        "tivermos", "tivesse", "tivessem", "tivéssemos", "tu", "tua", "tuas", "um", "uma",
        "você", "vocês", "vos",
        // English function words
        "the", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    ]
    .into_iter()
    .collect()
});

/// Normalize an utterance into scoring tokens.
///
/// Empty input yields an empty sequence; there is no error path.
pub fn normalize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD.replace_all(&lowered, "");

    stripped
        .unicode_words()
        .filter(|word| word.chars().count() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect()
}
