/// Build a URL-safe identifier from a display name.
///
/// Lowercases, trims, joins whitespace runs with single hyphens, drops commas and
/// apostrophes, folds the accented letters common in dish names to ASCII and spells out
/// `&`. Characters outside those rules pass through unchanged.
pub fn slugify(name: &str) -> String {
    let mut folded = String::with_capacity(name.len());
    for ch in name.to_lowercase().chars() {
        match ch {
            ',' | '\'' | '’' => {}
            '&' => folded.push_str(" and "),
            _ => folded.push(fold_accent(ch)),
        }
    }

    folded.split_whitespace().collect::<Vec<_>>().join("-")
}

fn fold_accent(ch: char) -> char {
    match ch {
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'à' | 'á' | 'â' | 'ä' | 'ã' | 'å' => 'a',
        'î' | 'ï' | 'í' | 'ì' => 'i',
        'ô' | 'ö' | 'ó' | 'ò' | 'õ' => 'o',
        'û' | 'ü' | 'ú' | 'ù' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        _ => ch,
    }
}
