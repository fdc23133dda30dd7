use crate::data::{Word, WORD_LENGTH};
use crate::results::{GuessResult, LetterResult};

/// What a single letter of a guess says about the objective word.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum LetterRestrictionKind {
    /// The letter must be at this location.
    Here,
    /// The letter must be in the word, but not at this location.
    PresentNotHere,
    /// The letter must not be anywhere in the word.
    NotPresent,
    /// Nothing is learned from this location.
    Unrestricted,
}

/// A restriction on one letter at one location, derived from one letter of a guess.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct LetterRestriction {
    /// The zero-based location (i.e. index) of the letter in the guess.
    pub location: u8,
    pub letter: u8,
    pub kind: LetterRestrictionKind,
}

impl LetterRestriction {
    /// Returns `true` iff the given word satisfies this restriction.
    #[inline]
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        match self.kind {
            LetterRestrictionKind::Here => word.letter_at(self.location as usize) == self.letter,
            LetterRestrictionKind::PresentNotHere => {
                word.letter_at(self.location as usize) != self.letter && word.contains(self.letter)
            }
            LetterRestrictionKind::NotPresent => !word.contains(self.letter),
            LetterRestrictionKind::Unrestricted => true,
        }
    }
}

/// A rule that every remaining candidate must satisfy.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Rule {
    /// One restriction per location, all of which must hold.
    Letters([LetterRestriction; WORD_LENGTH]),
    /// The word must not be this one.
    NotWord(Word),
}

impl Rule {
    /// Builds the per-letter rule for the given guess result.
    ///
    /// An `Absent` letter normally means the letter is not in the word at all. When the same
    /// letter is `Exact` or `Present` at another location of the guess, that claim is already
    /// false, so the location adds nothing.
    pub fn from_result(result: &GuessResult) -> Rule {
        let guess = &result.guess;
        let mut restrictions = [LetterRestriction {
            location: 0,
            letter: b'a',
            kind: LetterRestrictionKind::Unrestricted,
        }; WORD_LENGTH];
        for (index, restriction) in restrictions.iter_mut().enumerate() {
            let letter = guess.letter_at(index);
            let kind = match result.results[index] {
                LetterResult::Exact => LetterRestrictionKind::Here,
                LetterResult::Present => LetterRestrictionKind::PresentNotHere,
                LetterResult::Absent => {
                    let claimed_elsewhere = guess
                        .letters()
                        .iter()
                        .zip(result.results.iter())
                        .enumerate()
                        .any(|(other_index, (other_letter, other_result))| {
                            other_index != index
                                && *other_letter == letter
                                && *other_result != LetterResult::Absent
                        });
                    if claimed_elsewhere {
                        LetterRestrictionKind::Unrestricted
                    } else {
                        LetterRestrictionKind::NotPresent
                    }
                }
            };
            *restriction = LetterRestriction {
                location: index as u8,
                letter,
                kind,
            };
        }
        Rule::Letters(restrictions)
    }

    /// Returns `true` iff the given word satisfies this rule.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        match self {
            Rule::Letters(restrictions) => restrictions
                .iter()
                .all(|restriction| restriction.is_satisfied_by(word)),
            Rule::NotWord(excluded) => excluded != word,
        }
    }
}

/// The ordered history of rules learned from feedback. Rules are only ever appended.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConstraintSet {
    rules: Vec<Rule>,
}

impl ConstraintSet {
    /// Creates an empty `ConstraintSet`, which every word satisfies.
    pub fn new() -> ConstraintSet {
        ConstraintSet { rules: Vec::new() }
    }

    /// Returns the restrictions imposed by the given result.
    pub fn from_result(result: &GuessResult) -> ConstraintSet {
        let mut constraints = ConstraintSet::new();
        constraints.add_rules(result);
        constraints
    }

    /// Appends the rules arising from the given guess result, and returns just the new rules.
    ///
    /// Unless the guess was fully correct, this also adds a rule excluding the guess itself.
    pub fn add_rules(&mut self, result: &GuessResult) -> &[Rule] {
        let first_new_rule = self.rules.len();
        self.rules.push(Rule::from_result(result));
        if !result.is_solved() {
            self.rules.push(Rule::NotWord(result.guess));
        }
        &self.rules[first_new_rule..]
    }

    /// Returns `true` iff the given word satisfies every rule.
    pub fn is_satisfied_by(&self, word: &Word) -> bool {
        self.rules.iter().all(|rule| rule.is_satisfied_by(word))
    }

    /// All rules in the order they were added.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Keeps only the words that satisfy every one of the given rules, preserving their order.
pub fn retain_satisfying(words: &mut Vec<Word>, rules: &[Rule]) {
    words.retain(|word| rules.iter().all(|rule| rule.is_satisfied_by(word)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::{compute_result, get_result_for_guess, WordleError};

    use LetterRestrictionKind::*;

    fn word(word: &str) -> Word {
        Word::new(word).unwrap()
    }

    fn kinds(rule: &Rule) -> Vec<LetterRestrictionKind> {
        match rule {
            Rule::Letters(restrictions) => restrictions.iter().map(|r| r.kind).collect(),
            Rule::NotWord(_) => panic!("expected a letters rule"),
        }
    }

    #[test]
    fn rule_from_result_maps_each_letter() -> Result<(), WordleError> {
        let rule = Rule::from_result(&get_result_for_guess("above", "about")?);

        assert_eq!(kinds(&rule), vec![Here, Here, Here, NotPresent, NotPresent]);
        Ok(())
    }

    #[test]
    fn rule_from_result_absent_duplicate_after_present_is_unrestricted() -> Result<(), WordleError>
    {
        let rule = Rule::from_result(&get_result_for_guess("abide", "speed")?);

        assert_eq!(
            kinds(&rule),
            vec![NotPresent, NotPresent, PresentNotHere, Unrestricted, PresentNotHere]
        );
        assert!(rule.is_satisfied_by(&word("abide")));
        Ok(())
    }

    #[test]
    fn rule_from_result_absent_duplicate_before_exact_is_unrestricted() -> Result<(), WordleError>
    {
        let rule = Rule::from_result(&get_result_for_guess("abide", "eerie")?);

        assert_eq!(
            kinds(&rule),
            vec![Unrestricted, Unrestricted, NotPresent, PresentNotHere, Here]
        );
        assert!(rule.is_satisfied_by(&word("abide")));
        Ok(())
    }

    #[test]
    fn rule_from_result_all_absent_duplicates_stay_not_present() -> Result<(), WordleError> {
        let rule = Rule::from_result(&get_result_for_guess("crank", "geese")?);

        assert_eq!(
            kinds(&rule),
            vec![NotPresent, NotPresent, NotPresent, NotPresent, NotPresent]
        );
        assert!(!rule.is_satisfied_by(&word("thyme")));
        Ok(())
    }

    #[test]
    fn letter_restriction_is_satisfied_by() {
        let here = LetterRestriction {
            location: 1,
            letter: b'r',
            kind: Here,
        };
        let present_not_here = LetterRestriction {
            location: 1,
            letter: b'r',
            kind: PresentNotHere,
        };
        let not_present = LetterRestriction {
            location: 1,
            letter: b'r',
            kind: NotPresent,
        };

        assert!(here.is_satisfied_by(&word("crane")));
        assert!(!here.is_satisfied_by(&word("rover")));
        assert!(present_not_here.is_satisfied_by(&word("rover")));
        assert!(!present_not_here.is_satisfied_by(&word("crane")));
        assert!(!present_not_here.is_satisfied_by(&word("slate")));
        assert!(not_present.is_satisfied_by(&word("slate")));
        assert!(!not_present.is_satisfied_by(&word("rover")));
    }

    #[test]
    fn add_rules_excludes_guess_unless_solved() -> Result<(), WordleError> {
        let mut constraints = ConstraintSet::new();

        let new_rules = constraints.add_rules(&get_result_for_guess("crane", "crate")?);
        assert_eq!(new_rules.len(), 2);
        assert_eq!(new_rules[1], Rule::NotWord(word("crate")));

        let new_rules = constraints.add_rules(&get_result_for_guess("crane", "crane")?);
        assert_eq!(new_rules.len(), 1);
        assert_eq!(constraints.len(), 3);
        assert!(constraints.is_satisfied_by(&word("crane")));
        Ok(())
    }

    #[test]
    fn constraint_set_retains_objective() -> Result<(), WordleError> {
        let objective = word("llama");
        let mut constraints = ConstraintSet::new();

        for guess in ["hello", "label", "balmy", "lilac"] {
            constraints.add_rules(&compute_result(&objective, &word(guess)));
        }

        assert!(constraints.is_satisfied_by(&objective));
        Ok(())
    }

    #[test]
    fn retain_satisfying_filters_in_order() -> Result<(), WordleError> {
        let mut words = vec![word("about"), word("above"), word("abuse")];
        let constraints = ConstraintSet::from_result(&get_result_for_guess("above", "about")?);

        retain_satisfying(&mut words, constraints.rules());

        assert_eq!(words, vec![word("above")]);
        Ok(())
    }

    #[test]
    fn empty_constraint_set_allows_everything() {
        let constraints = ConstraintSet::new();

        assert!(constraints.is_empty());
        assert!(constraints.is_satisfied_by(&word("zzzzz")));
    }
}
