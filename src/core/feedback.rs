//! Per-letter feedback for a guess
//!
//! Each position of a guess is scored as one of three tags:
//! - `Correct`: right letter, right position
//! - `Present`: letter is in the answer, but elsewhere
//! - `Absent`: letter is not in the answer, or every copy is already claimed

use super::{WORD_LENGTH, Word, WordError};
use std::fmt;

/// Feedback tag for a single letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterFeedback {
    Correct,
    Present,
    Absent,
}

impl LetterFeedback {
    /// Lowercase tag name (`"correct"`, `"present"`, `"absent"`)
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }

    /// Emoji tile for this tag
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for LetterFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Feedback for a whole guess, one tag per letter position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([LetterFeedback; WORD_LENGTH]);

impl Feedback {
    /// All letters in the right place
    pub const PERFECT: Self = Self([LetterFeedback::Correct; WORD_LENGTH]);

    #[must_use]
    pub const fn new(tags: [LetterFeedback; WORD_LENGTH]) -> Self {
        Self(tags)
    }

    #[inline]
    #[must_use]
    pub const fn tags(&self) -> &[LetterFeedback; WORD_LENGTH] {
        &self.0
    }

    /// Check if this is a perfect match (all correct)
    #[inline]
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        *self == Self::PERFECT
    }

    /// Count the positions carrying `tag`
    #[must_use]
    pub fn count(&self, tag: LetterFeedback) -> usize {
        self.0.iter().filter(|&&t| t == tag).count()
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Examples
    /// ```
    /// use wordle_game::core::Feedback;
    ///
    /// let f1 = Feedback::from_str("GY-GY").unwrap();
    /// let f2 = Feedback::from_str("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    #[must_use]
    #[allow(clippy::should_implement_trait)] // Provides ergonomic Option API; FromStr trait also implemented below
    pub fn from_str(s: &str) -> Option<Self> {
        let mut tags = [LetterFeedback::Absent; WORD_LENGTH];
        let mut len = 0;

        for ch in s.chars() {
            let slot = tags.get_mut(len)?;
            *slot = match ch {
                'G' | 'g' | '🟩' => LetterFeedback::Correct,
                'Y' | 'y' | '🟨' => LetterFeedback::Present,
                '-' | '_' | '⬜' => LetterFeedback::Absent,
                _ => return None,
            };
            len += 1;
        }

        (len == WORD_LENGTH).then_some(Self(tags))
    }

    /// Convert feedback to an emoji string like "🟩🟨⬜🟩🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.0.iter().map(|tag| tag.emoji()).collect()
    }
}

impl std::str::FromStr for Feedback {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str(s).ok_or_else(|| format!("Invalid feedback string: {s}"))
    }
}

impl<'a> IntoIterator for &'a Feedback {
    type Item = &'a LetterFeedback;
    type IntoIter = std::slice::Iter<'a, LetterFeedback>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Score `guess` against `answer`
///
/// Implements Wordle's feedback rules, including duplicate letters.
///
/// # Algorithm
/// 1. Count the answer's letters
/// 2. First pass: mark exact matches `Correct` and remove them from the pool
/// 3. Second pass, left to right: mark `Present` while the pool still holds the letter
/// 4. Everything else stays `Absent`
///
/// Exact matches are reserved first, so a `Present` never claims a letter that a
/// later `Correct` needs. Earlier positions win ties in the second pass.
///
/// # Examples
/// ```
/// use wordle_game::core::{Word, compute_colors};
///
/// let guess = Word::new("trace").unwrap();
/// let answer = Word::new("crane").unwrap();
/// assert_eq!(compute_colors(&guess, &answer).to_emoji(), "⬜🟩🟩🟨🟩");
/// ```
#[must_use]
pub fn compute_colors(guess: &Word, answer: &Word) -> Feedback {
    let mut result = [LetterFeedback::Absent; WORD_LENGTH];
    let mut answer_available = answer.char_counts();

    // Allow: Index needed to access guess[i], answer[i], and set result[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if guess.char_at(i) == answer.char_at(i) {
            result[i] = LetterFeedback::Correct;

            if let Some(count) = answer_available.get_mut(&guess.char_at(i)) {
                *count = count.saturating_sub(1);
            }
        }
    }

    #[allow(clippy::needless_range_loop)]
    for i in 0..WORD_LENGTH {
        if result[i] == LetterFeedback::Correct {
            continue;
        }
        if let Some(count) = answer_available.get_mut(&guess.char_at(i))
            && *count > 0
        {
            result[i] = LetterFeedback::Present;
            *count -= 1;
        }
    }

    Feedback(result)
}

/// Score two strings, validating both as words first
///
/// # Errors
/// Returns `WordError` if either input is not a 5-letter ASCII word.
pub fn compute_colors_str(guess: &str, answer: &str) -> Result<Feedback, WordError> {
    Ok(compute_colors(&Word::new(guess)?, &Word::new(answer)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterFeedback::{Absent, Correct, Present};
    use proptest::prelude::*;

    fn score(guess: &str, answer: &str) -> [LetterFeedback; WORD_LENGTH] {
        *compute_colors_str(guess, answer).unwrap().tags()
    }

    #[test]
    fn feedback_all_absent() {
        assert_eq!(score("abcde", "fghij"), [Absent; WORD_LENGTH]);
    }

    #[test]
    fn feedback_all_correct() {
        for word in ["crane", "slate", "audio", "zzzzz", "aaaaa"] {
            assert!(compute_colors_str(word, word).unwrap().is_perfect());
        }
    }

    #[test]
    fn feedback_trace_against_crane() {
        // T absent; R, A, E exact; the answer's C is still unclaimed for position 3
        assert_eq!(
            score("trace", "crane"),
            [Absent, Correct, Correct, Present, Correct]
        );
    }

    #[test]
    fn feedback_duplicate_letters_speed_erase() {
        // ERASE holds two E's and one S, nothing lines up
        let feedback = compute_colors_str("speed", "erase").unwrap();
        assert_eq!(
            feedback.tags(),
            &[Present, Absent, Present, Present, Absent]
        );
        assert_eq!(feedback.count(Correct), 0);
        assert_eq!(feedback.count(Present), 3);
    }

    #[test]
    fn feedback_left_to_right_tie_break() {
        // One A in the answer, claimed by the exact match at position 0
        assert_eq!(
            score("aabbb", "abxxx"),
            [Correct, Absent, Present, Absent, Absent]
        );
    }

    #[test]
    fn feedback_earlier_position_claims_present() {
        // One E in the answer, neither guess E is exact: the first one wins
        assert_eq!(
            score("eeabc", "xyzez"),
            [Present, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn feedback_correct_reserved_before_present() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        assert_eq!(
            score("robot", "floor"),
            [Present, Present, Absent, Correct, Absent]
        );
        // The exact match at position 4 must not be stolen by the earlier L
        assert_eq!(
            score("lllll", "abcdl"),
            [Absent, Absent, Absent, Absent, Correct]
        );
    }

    #[test]
    fn feedback_is_case_insensitive() {
        assert_eq!(score("TRACE", "crane"), score("trace", "CRANE"));
    }

    #[test]
    fn feedback_rejects_mismatched_lengths() {
        assert_eq!(
            compute_colors_str("cranes", "crane"),
            Err(WordError::InvalidLength(6))
        );
        assert_eq!(
            compute_colors_str("crane", "cran"),
            Err(WordError::InvalidLength(4))
        );
    }

    #[test]
    fn feedback_from_str_valid() {
        let f1 = Feedback::from_str("GYG--").unwrap();
        let f2 = Feedback::from_str("🟩🟨🟩⬜⬜").unwrap();
        let f3 = Feedback::from_str("gyg__").unwrap();

        assert_eq!(f1, f2);
        assert_eq!(f1, f3);
        assert_eq!(f1, Feedback::new([Correct, Present, Correct, Absent, Absent]));
    }

    #[test]
    fn feedback_from_str_invalid() {
        assert!(Feedback::from_str("GYGGYX").is_none());
        assert!(Feedback::from_str("GYG").is_none());
        assert!(Feedback::from_str("GXGGY").is_none());
        assert!(Feedback::from_str("").is_none());
    }

    #[test]
    fn feedback_to_emoji() {
        assert_eq!(Feedback::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
        assert_eq!(
            Feedback::from_str("-Y-G-").unwrap().to_emoji(),
            "⬜🟨⬜🟩⬜"
        );
    }

    #[test]
    fn letter_feedback_display() {
        assert_eq!(Correct.to_string(), "correct");
        assert_eq!(Present.to_string(), "present");
        assert_eq!(Absent.to_string(), "absent");
    }

    fn word_strategy() -> impl Strategy<Value = Word> {
        // Small alphabet so repeated letters are common
        "[a-e]{5}".prop_map(|s| Word::new(&s).unwrap())
    }

    proptest! {
        #[test]
        fn correct_count_matches_exact_positions(guess in word_strategy(), answer in word_strategy()) {
            let feedback = compute_colors(&guess, &answer);
            let exact = (0..WORD_LENGTH)
                .filter(|&i| guess.char_at(i) == answer.char_at(i))
                .count();
            prop_assert_eq!(feedback.count(Correct), exact);
            prop_assert_eq!(feedback.tags().len(), WORD_LENGTH);
        }

        #[test]
        fn letters_never_over_counted(guess in word_strategy(), answer in word_strategy()) {
            let feedback = compute_colors(&guess, &answer);
            let counts = answer.char_counts();
            for (&letter, &available) in &counts {
                let claimed = (0..WORD_LENGTH)
                    .filter(|&i| guess.char_at(i) == letter && feedback.tags()[i] != Absent)
                    .count();
                prop_assert!(claimed <= usize::from(available));
            }
        }

        #[test]
        fn self_guess_is_perfect(word in word_strategy()) {
            prop_assert!(compute_colors(&word, &word).is_perfect());
        }
    }
}
