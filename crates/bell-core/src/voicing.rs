//! Dakuten / handakuten mutation tables.

/// Voicing diacritic applied to the previously entered kana.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Voicing {
    /// ゛ (か → が)
    Dakuten,
    /// ゜ (は → ぱ)
    Handakuten,
}

impl Voicing {
    /// Voiced form of `c`, or `None` if `c` has no such form.
    pub fn apply(self, c: char) -> Option<char> {
        match self {
            Self::Dakuten => apply_dakuten(c),
            Self::Handakuten => apply_handakuten(c),
        }
    }

    pub fn mark(self) -> char {
        match self {
            Self::Dakuten => '゛',
            Self::Handakuten => '゜',
        }
    }
}

pub fn apply_dakuten(c: char) -> Option<char> {
    let voiced = match c {
        'う' => 'ゔ',
        'か' => 'が',
        'き' => 'ぎ',
        'く' => 'ぐ',
        'け' => 'げ',
        'こ' => 'ご',
        'さ' => 'ざ',
        'し' => 'じ',
        'す' => 'ず',
        'せ' => 'ぜ',
        'そ' => 'ぞ',
        'た' => 'だ',
        'ち' => 'ぢ',
        'つ' => 'づ',
        'て' => 'で',
        'と' => 'ど',
        'は' => 'ば',
        'ひ' => 'び',
        'ふ' => 'ぶ',
        'へ' => 'べ',
        'ほ' => 'ぼ',
        _ => return None,
    };
    Some(voiced)
}

pub fn apply_handakuten(c: char) -> Option<char> {
    let voiced = match c {
        'は' => 'ぱ',
        'ひ' => 'ぴ',
        'ふ' => 'ぷ',
        'へ' => 'ぺ',
        'ほ' => 'ぽ',
        _ => return None,
    };
    Some(voiced)
}
