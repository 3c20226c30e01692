//! Character-level classification for Devanagari text.

pub const VIRAMA: char = '\u{094D}';
pub const NUKTA: char = '\u{093C}';

/// Consonants of the main block (क..ह), the precomposed nukta forms
/// (क़..य़) and the later additions at U+0978..U+097F.
pub fn is_consonant(c: char) -> bool {
    ('\u{0915}'..='\u{0939}').contains(&c)
        || ('\u{0958}'..='\u{095F}').contains(&c)
        || ('\u{0978}'..='\u{097F}').contains(&c)
}

/// Dependent vowel signs (matras), including the candra and short-e/o forms.
pub fn is_vowel_sign(c: char) -> bool {
    ('\u{093A}'..='\u{093B}').contains(&c)
        || ('\u{093E}'..='\u{094C}').contains(&c)
        || ('\u{094E}'..='\u{094F}').contains(&c)
        || ('\u{0955}'..='\u{0957}').contains(&c)
        || ('\u{0962}'..='\u{0963}').contains(&c)
}

/// Any mark that attaches to a preceding base: vowel signs, virama, nukta,
/// candrabindu, anusvara, visarga and the vedic stress marks.
pub fn is_combining(c: char) -> bool {
    ('\u{0900}'..='\u{0903}').contains(&c)
        || c == NUKTA
        || c == VIRAMA
        || ('\u{0951}'..='\u{0954}').contains(&c)
        || is_vowel_sign(c)
}

/// Composition class of a resolved output string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphClass {
    /// Begins with a combining mark and needs a base to attach to.
    Sign,
    /// Ends in a live consonant (optionally nukta-modified), so a following
    /// vowel sign may still override its inherent vowel.
    Consonant,
    Other,
}

pub fn classify(s: &str) -> GlyphClass {
    match s.chars().next() {
        None => GlyphClass::Other,
        // Rakar (्र) starts with a mark and still attaches to the held base.
        Some(first) if is_combining(first) => GlyphClass::Sign,
        Some(_) if is_consonant_final(s) => GlyphClass::Consonant,
        Some(_) => GlyphClass::Other,
    }
}

/// True when `s` ends in a consonant or a consonant + nukta.
pub fn is_consonant_final(s: &str) -> bool {
    let mut rev = s.chars().rev();
    match rev.next() {
        Some(c) if is_consonant(c) => true,
        Some(NUKTA) => rev.next().is_some_and(is_consonant),
        _ => false,
    }
}

/// Independent vowel letter for a dependent vowel sign, if one exists.
pub fn independent_vowel(sign: char) -> Option<char> {
    Some(match sign {
        'ा' => 'आ',
        'ि' => 'इ',
        'ी' => 'ई',
        'ु' => 'उ',
        'ू' => 'ऊ',
        'ृ' => 'ऋ',
        'ॄ' => 'ॠ',
        'ॢ' => 'ऌ',
        'ॣ' => 'ॡ',
        'ॅ' => 'ऍ',
        'ॆ' => 'ऎ',
        'े' => 'ए',
        'ै' => 'ऐ',
        'ॉ' => 'ऑ',
        'ॊ' => 'ऒ',
        'ो' => 'ओ',
        'ौ' => 'औ',
        _ => return None,
    })
}

/// Map a standalone sign to its independent vowel form. Signs without an
/// independent counterpart (anusvara, virama, ...) are returned unchanged.
pub fn to_independent(s: &str) -> String {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => independent_vowel(c).unwrap_or(c).to_string(),
        _ => s.to_string(),
    }
}
