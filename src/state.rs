#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelPhase {
    Open,
    Fading,
    Closed,
}

impl PanelPhase {
    pub fn is_open(self) -> bool {
        matches!(self, PanelPhase::Open)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Shown,
    Hidden,
}

impl Visibility {
    pub fn from_hidden(hidden: bool) -> Self {
        if hidden {
            Visibility::Hidden
        } else {
            Visibility::Shown
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Visibility::Shown => Visibility::Hidden,
            Visibility::Hidden => Visibility::Shown,
        }
    }

    pub fn is_hidden(self) -> bool {
        matches!(self, Visibility::Hidden)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxState {
    Empty,
    Filled,
}

impl BoxState {
    pub fn flipped(self) -> Self {
        match self {
            BoxState::Empty => BoxState::Filled,
            BoxState::Filled => BoxState::Empty,
        }
    }

    pub fn class(self) -> &'static str {
        match self {
            BoxState::Empty => "empty-box",
            BoxState::Filled => "filled-box",
        }
    }
}

pub struct LabelPair {
    open: &'static str,
    closed: &'static str,
}

// Closed controls read "Show" and "▼"; open controls read "Hide" and "▶".
pub const WORD_PAIR: LabelPair = LabelPair {
    open: "Hide",
    closed: "Show",
};
pub const GLYPH_PAIR: LabelPair = LabelPair {
    open: "▶",
    closed: "▼",
};

impl LabelPair {
    pub fn rewrite(&self, text: &str, open: bool) -> Option<String> {
        let (from, to) = if open {
            (self.closed, self.open)
        } else {
            (self.open, self.closed)
        };
        let position = text.find(from)?;
        let mut rewritten = String::with_capacity(text.len() + to.len());
        rewritten.push_str(&text[..position]);
        rewritten.push_str(to);
        rewritten.push_str(&text[position + from.len()..]);
        Some(rewritten)
    }
}

// The first letter of the answer is displayed outside the boxes, so box
// `index` holds `answer[index + 1]`.
pub fn letter_from_answer(answer: &str, box_index: usize) -> Option<String> {
    answer.chars().nth(box_index + 1).map(|letter| letter.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_rewrites_show_to_hide() {
        assert_eq!(
            WORD_PAIR.rewrite("Show definitions", true).as_deref(),
            Some("Hide definitions")
        );
    }

    #[test]
    fn closing_rewrites_hide_to_show() {
        assert_eq!(
            WORD_PAIR.rewrite("Hide definitions", false).as_deref(),
            Some("Show definitions")
        );
    }

    #[test]
    fn glyph_rewrite_leaves_surrounding_text_untouched() {
        assert_eq!(
            GLYPH_PAIR.rewrite("▶ Today's clues", false).as_deref(),
            Some("▼ Today's clues")
        );
        assert_eq!(
            GLYPH_PAIR.rewrite("▼ Today's clues", true).as_deref(),
            Some("▶ Today's clues")
        );
    }

    #[test]
    fn rewrite_is_a_noop_without_the_token() {
        assert!(WORD_PAIR.rewrite("Reveal everything", true).is_none());
        assert!(GLYPH_PAIR.rewrite("Reveal everything", false).is_none());
    }

    #[test]
    fn rewrite_is_a_noop_when_already_in_state() {
        assert!(WORD_PAIR.rewrite("Hide clues", true).is_none());
        assert!(WORD_PAIR.rewrite("Show clues", false).is_none());
    }

    #[test]
    fn rewrite_touches_the_first_occurrence_only() {
        assert_eq!(
            WORD_PAIR.rewrite("Show and Show again", true).as_deref(),
            Some("Hide and Show again")
        );
    }

    #[test]
    fn letters_skip_the_displayed_first_letter() {
        assert_eq!(letter_from_answer("HELLO", 0).as_deref(), Some("E"));
        assert_eq!(letter_from_answer("HELLO", 1).as_deref(), Some("L"));
        assert_eq!(letter_from_answer("HELLO", 3).as_deref(), Some("O"));
    }

    #[test]
    fn letters_run_out_past_the_answer() {
        assert_eq!(letter_from_answer("HELLO", 4), None);
        assert_eq!(letter_from_answer("", 0), None);
    }

    #[test]
    fn box_state_flip_is_an_involution() {
        assert_eq!(BoxState::Empty.flipped(), BoxState::Filled);
        assert_eq!(BoxState::Filled.flipped(), BoxState::Empty);
        assert_eq!(BoxState::Empty.flipped().flipped(), BoxState::Empty);
    }

    #[test]
    fn box_state_maps_to_its_class() {
        assert_eq!(BoxState::Empty.class(), "empty-box");
        assert_eq!(BoxState::Filled.class(), "filled-box");
    }

    #[test]
    fn visibility_tracks_the_hidden_class() {
        assert!(Visibility::from_hidden(true).is_hidden());
        assert!(!Visibility::from_hidden(false).is_hidden());
        assert!(Visibility::Shown.flipped().is_hidden());
        assert!(!Visibility::Hidden.flipped().is_hidden());
    }

    #[test]
    fn fading_counts_as_closed() {
        assert!(PanelPhase::Open.is_open());
        assert!(!PanelPhase::Fading.is_open());
        assert!(!PanelPhase::Closed.is_open());
    }
}
