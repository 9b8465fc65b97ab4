//! Keyword routing shared by every agent.
//!
//! A rule table is an ordered slice of `(category, keywords)` pairs. Input is
//! lower-cased and the first category with any keyword as a substring wins.
//! Keyword sets overlap between categories, so the order of a table is part
//! of its behavior: do not sort or regroup rule tables.

/// Ordered keyword rules for one category set.
pub type Rules<C> = &'static [(C, &'static [&'static str])];

/// Returns the first category whose keywords occur in `text`, if any.
pub fn first_match<C: Copy>(text: &str, rules: Rules<C>) -> Option<C> {
    let lowered = text.to_lowercase();
    rules
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(category, _)| *category)
}

/// A rule table with a fallback category. `classify` is total.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<C: Copy + 'static> {
    rules: Rules<C>,
    default: C,
}

impl<C: Copy + 'static> Classifier<C> {
    pub const fn new(rules: Rules<C>, default: C) -> Self {
        Self { rules, default }
    }

    pub fn classify(&self, text: &str) -> C {
        first_match(text, self.rules).unwrap_or(self.default)
    }

    /// Categories in declared priority order, default last if not already listed.
    pub fn categories(&self) -> Vec<C>
    where
        C: PartialEq,
    {
        let mut out: Vec<C> = self.rules.iter().map(|(c, _)| *c).collect();
        if !out.contains(&self.default) {
            out.push(self.default);
        }
        out
    }
}
