//! Part-of-speech tagging.
//!
//! [`LexiconTagger`] is a small rule-based tagger: a closed-class lexicon for function words and a few
//! frequent content words, with open-class fallbacks (capitalized unknown word → proper noun, other
//! unknown word → noun). It only needs to separate interrogatives and nouns from everything else.

/// Coarse part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    /// Interrogative: what, who, where, when, why, how, which, whose, whom.
    Wh,
    Noun,
    ProperNoun,
    Verb,
    Determiner,
    Adjective,
    Pronoun,
    Preposition,
    Adverb,
    Conjunction,
    Interjection,
    Existential,
    Number,
}

impl PosTag {
    pub fn is_wh(self) -> bool {
        matches!(self, PosTag::Wh)
    }

    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }
}

/// A token and its tag. `word` keeps the input's casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub word: String,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(word: impl Into<String>, tag: PosTag) -> Self {
        Self {
            word: word.into(),
            tag,
        }
    }
}

/// Part-of-speech tagger.
pub trait Tagger: Send + Sync {
    fn tag(&self, text: &str) -> Vec<TaggedToken>;
}

const WH_WORDS: &[&str] = &[
    "what", "who", "whom", "whose", "where", "when", "why", "how", "which", "whatever", "whoever",
];

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "every", "each", "some", "any", "no",
    "all", "both", "either", "neither", "another",
];

const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my", "your",
    "his", "its", "our", "their", "mine", "yours", "hers", "ours", "theirs", "myself",
    "yourself", "himself", "herself", "itself", "ourselves", "themselves", "something",
    "anything", "everything", "nothing", "someone", "anyone", "everyone",
];

const VERBS: &[&str] = &[
    "is", "are", "was", "were", "be", "been", "being", "am", "do", "does", "did", "done", "have",
    "has", "had", "can", "could", "will", "would", "shall", "should", "may", "might", "must",
    "'s", "'re", "'m", "'ve", "'ll", "'d", "go", "goes", "went", "get", "gets", "got", "tell",
    "told", "know", "knows", "knew", "say", "says", "said", "make", "makes", "made", "see",
    "saw", "think", "thought", "want", "wants", "like", "likes", "mean", "means", "live",
    "lives", "lived", "born", "died", "play", "plays", "find", "found", "give", "show", "let",
    "help", "look", "need", "feel", "come", "came", "take", "took", "use", "work", "call",
    "called", "try", "ask", "invented", "wrote", "written", "located",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "to", "for", "with", "by", "from", "about", "into", "over", "under",
    "after", "before", "between", "through", "during", "near", "against", "without", "within",
    "across", "behind", "like", "than", "as", "since", "until", "upon",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet", "if", "because", "while", "although"];

const ADVERBS: &[&str] = &[
    "not", "n't", "here", "now", "then", "very", "really", "just", "also", "too", "again",
    "ever", "never", "always", "often", "today", "tonight", "tomorrow", "yesterday", "up",
    "out", "down", "off", "away", "soon", "still", "already", "right", "exactly", "currently",
];

const INTERJECTIONS: &[&str] = &[
    "hello", "hi", "hey", "thanks", "thank", "please", "yes", "yeah", "ok", "okay", "bye",
    "goodbye", "wow", "oh", "um", "uh", "hmm", "sorry",
];

const ADJECTIVES: &[&str] = &[
    "good", "great", "bad", "big", "small", "old", "new", "young", "current", "favorite",
    "best", "worst", "tall", "long", "short", "first", "last", "largest", "biggest", "smallest",
    "highest", "famous", "nice", "happy", "sad", "other", "many", "much", "few", "own", "same",
    "fine", "real", "true",
];

const CLITICS: &[&str] = &["n't", "'s", "'re", "'m", "'ve", "'ll", "'d"];

/// Rule-based tagger over a fixed English lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconTagger;

impl LexiconTagger {
    pub fn new() -> Self {
        Self
    }

    fn lookup(lower: &str) -> Option<PosTag> {
        // Checked in priority order: "that" is a determiner, "like" a verb, "up" an adverb.
        if WH_WORDS.contains(&lower) {
            Some(PosTag::Wh)
        } else if lower == "there" {
            Some(PosTag::Existential)
        } else if DETERMINERS.contains(&lower) {
            Some(PosTag::Determiner)
        } else if PRONOUNS.contains(&lower) {
            Some(PosTag::Pronoun)
        } else if VERBS.contains(&lower) {
            Some(PosTag::Verb)
        } else if ADVERBS.contains(&lower) {
            Some(PosTag::Adverb)
        } else if PREPOSITIONS.contains(&lower) {
            Some(PosTag::Preposition)
        } else if CONJUNCTIONS.contains(&lower) {
            Some(PosTag::Conjunction)
        } else if INTERJECTIONS.contains(&lower) {
            Some(PosTag::Interjection)
        } else if ADJECTIVES.contains(&lower) {
            Some(PosTag::Adjective)
        } else {
            None
        }
    }

    fn tag_word(word: &str) -> PosTag {
        let lower = word.to_lowercase();
        if let Some(tag) = Self::lookup(&lower) {
            return tag;
        }
        if word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return PosTag::Number;
        }
        if lower.len() > 4 && lower.ends_with("ly") {
            return PosTag::Adverb;
        }
        if word.chars().next().is_some_and(char::is_uppercase) {
            return PosTag::ProperNoun;
        }
        PosTag::Noun
    }
}

impl Tagger for LexiconTagger {
    fn tag(&self, text: &str) -> Vec<TaggedToken> {
        tokenize(text)
            .into_iter()
            .map(|word| {
                let tag = Self::tag_word(&word);
                TaggedToken { word, tag }
            })
            .collect()
    }
}

/// Splits on whitespace, strips surrounding punctuation, and splits English clitics
/// (`what's` → `what`, `'s`; `don't` → `do`, `n't`).
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for raw in text.split_whitespace() {
        let word = raw
            .trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
            .trim_matches('\'');
        if word.is_empty() {
            continue;
        }
        let normalized = word.replace('\u{2019}', "'");
        let lower = normalized.to_lowercase();
        match CLITICS.iter().find(|c| lower.ends_with(*c) && lower.len() > c.len()) {
            Some(clitic) => {
                let split = normalized.len() - clitic.len();
                tokens.push(normalized[..split].to_string());
                tokens.push(normalized[split..].to_string());
            }
            None => tokens.push(normalized),
        }
    }
    tokens
}
