/// Counts whitespace-delimited words.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Figures shown behind the "Statistics" button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftStats {
    pub words: usize,
    /// Non-whitespace characters.
    pub characters: usize,
    /// Blocks separated by at least one blank line.
    pub paragraphs: usize,
}

impl DraftStats {
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        let characters = text.chars().filter(|ch| !ch.is_whitespace()).count();

        let mut paragraphs = 0;
        let mut in_paragraph = false;
        for line in text.lines() {
            if line.trim().is_empty() {
                in_paragraph = false;
            } else if !in_paragraph {
                in_paragraph = true;
                paragraphs += 1;
            }
        }

        Self {
            words: word_count(text),
            characters,
            paragraphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_whitespace() {
        assert_eq!(word_count("  hello   world  "), 2);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n\t "), 0);
        assert_eq!(word_count("one\ntwo\tthree"), 3);
    }

    #[test]
    fn stats_count_paragraphs() {
        let text = "First paragraph here.\nStill first.\n\n\n  Second one.  \n";
        let stats = DraftStats::from_text(text);
        assert_eq!(stats.words, 7);
        assert_eq!(stats.paragraphs, 2);
        assert_eq!(stats.characters, "Firstparagraphhere.Stillfirst.Secondone.".len());
    }

    #[test]
    fn empty_draft_has_no_stats() {
        assert_eq!(DraftStats::from_text("   "), DraftStats::default());
    }
}
