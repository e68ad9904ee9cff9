use unicode_normalization::char::is_combining_mark;

/// Trims, lowercases and title-cases free text.
///
/// Empty or all-whitespace input is returned unchanged; callers treat that as
/// "not supplied". A letter starts a word when it is the first character or
/// follows anything other than a letter, digit, combining mark or apostrophe
/// (`'` or `’`), so `"jean-luc o'neil"` becomes `"Jean-Luc O'neil"`,
/// `"2nd line"` becomes `"2nd Line"` and a decomposed `"ame\u{301}lie"` keeps
/// its lower-case `l`.
///
/// The transform is idempotent.
pub fn normalize_title_case(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return input.to_string();
    }

    let lowered = trimmed.to_lowercase();
    let mut out = String::with_capacity(lowered.len());
    let mut prev: Option<char> = None;

    for c in lowered.chars() {
        if starts_word(prev) && c.is_alphabetic() {
            push_capital(&mut out, c);
        } else {
            out.push(c);
        }
        prev = Some(c);
    }

    out
}

fn starts_word(prev: Option<char>) -> bool {
    match prev {
        None => true,
        Some(p) => !(p.is_alphanumeric() || is_combining_mark(p) || is_apostrophe(p)),
    }
}

fn is_apostrophe(c: char) -> bool {
    matches!(c, '\'' | '\u{2019}')
}

// Letters whose capital spans several chars (e.g. 'ß' -> "SS") stay as-is;
// expanding them would make a second pass produce a different string.
fn push_capital(out: &mut String, c: char) {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => out.push(u),
        _ => out.push(c),
    }
}
