/// The first `max` sentences of `text`, trimmed. A sentence ends at `.`, `!` or `?` followed by
/// whitespace or the end of the text. Returns the whole text if it has fewer sentences.
pub fn first_sentences(text: &str, max: usize) -> String {
    let text = text.trim();
    if max == 0 {
        return String::new();
    }

    let mut found = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !matches!(c, '.' | '!' | '?') {
            continue;
        }
        let at_boundary = match chars.peek() {
            None => true,
            Some((_, next)) => next.is_whitespace(),
        };
        if at_boundary {
            found += 1;
            if found == max {
                return text[..i + c.len_utf8()].to_string();
            }
        }
    }
    text.to_string()
}
