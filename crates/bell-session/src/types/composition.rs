use bell_core::converter::Conversion;
use bell_core::voicing::Voicing;

/// Best guess and ranked list for the current reading.
#[derive(Debug, Clone, Default)]
pub(crate) struct Candidates {
    pub(crate) best: String,
    pub(crate) surfaces: Vec<String>,
}

impl Candidates {
    pub(crate) fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    pub(crate) fn clear(&mut self) {
        self.best.clear();
        self.surfaces.clear();
    }

    pub(crate) fn set(&mut self, conversion: Conversion) {
        self.best = conversion.best;
        self.surfaces = conversion.candidates;
    }
}

/// Kana awaiting conversion plus the candidates produced for it.
#[derive(Debug, Clone, Default)]
pub(crate) struct Composition {
    pub(crate) kana: String,
    pub(crate) candidates: Candidates,
}

impl Composition {
    pub(crate) fn is_empty(&self) -> bool {
        self.kana.is_empty()
    }

    pub(crate) fn char_count(&self) -> usize {
        self.kana.chars().count()
    }

    pub(crate) fn clear(&mut self) {
        self.kana.clear();
        self.candidates.clear();
    }

    /// Text that confirming would commit: the best candidate, else the raw kana.
    pub(crate) fn commit_text(&self) -> &str {
        if self.candidates.best.is_empty() {
            &self.kana
        } else {
            &self.candidates.best
        }
    }
}

/// Replace the last character of `text` with its voiced form.
/// Returns `false` (leaving `text` untouched) if empty or ineligible.
pub(crate) fn voice_last_char(text: &mut String, voicing: Voicing) -> bool {
    let Some(last) = text.chars().last() else {
        return false;
    };
    let Some(voiced) = voicing.apply(last) else {
        return false;
    };
    text.pop();
    text.push(voiced);
    true
}
