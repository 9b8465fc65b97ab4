//! Standalone contemplation helpers: pattern meanings, bug meanings,
//! philosophical renames, complexity, commit philosophy and code karma.

use crate::core::corpus::{self, CorpusTable, require_pool};
use crate::core::error::GithubError;
use crate::core::select::{pick_uniform, sample_distinct};
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

pub const GENERAL_THOUGHT_COUNT: usize = 3;

struct CodePattern {
    regex: Regex,
    label: &'static str,
    meaning: &'static str,
    wisdom: &'static str,
}

static CODE_PATTERNS: LazyLock<Vec<CodePattern>> = LazyLock::new(|| {
    let pattern = |re: &str, label, meaning, wisdom| CodePattern {
        regex: Regex::new(re).unwrap(),
        label,
        meaning,
        wisdom,
    };
    vec![
        pattern(
            r"def\s+\w+\s*\(",
            "Functions",
            "Function definitions are the verbs of the digital language",
            "Every function is a microcosm of purpose in the digital universe",
        ),
        pattern(
            r"if\s+.*:",
            "Conditions",
            "Conditional statements are the crossroads where code must choose",
            "Every condition is a choice between two realities",
        ),
        pattern(
            r"for\s+.*in\s+.*:",
            "Loops",
            "Loops are the heartbeat of the digital realm",
            "Repetition is the mother of learning, and loops are the mother of repetition",
        ),
        pattern(
            r"try:",
            "Error_Handling",
            "Error handling is the art of accepting imperfection",
            "Every try block is a prayer for success in the face of uncertainty",
        ),
        pattern(
            r"class\s+\w+",
            "Classes",
            "Classes are the blueprints of digital reality",
            "Every class is a universe with its own laws and possibilities",
        ),
        pattern(
            r"import\s+",
            "Imports",
            "Imports are the bridges between different realms of knowledge",
            "Every import is a connection to the collective wisdom of developers",
        ),
        pattern(
            r"#.*",
            "Comments",
            "Comments are love letters to your future self",
            "Comments are the soul of the code, explaining not just what, but why",
        ),
    ]
});

static FUNCTION_DEF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"def\s+\w+").unwrap());
static CLASS_DEF: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"class\s+\w+").unwrap());
static LOOP_KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"for\s+|while\s+").unwrap());
static CONDITION_KEYWORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"if\s+|elif\s+").unwrap());

#[derive(Debug, Deserialize)]
pub struct ContemplationCorpus {
    pub general_thoughts: Vec<String>,
    pub philosophical_prefixes: Vec<String>,
    pub bug_fallback: String,
    /// `[keyword, meaning]`, checked in order.
    pub bug_meanings: Vec<(String, String)>,
    /// `[key, replacement]`, checked in order.
    pub variable_names: Vec<(String, String)>,
}

impl CorpusTable for ContemplationCorpus {
    const NAME: &'static str = "contemplation";

    fn validate(&self) -> Result<(), GithubError> {
        require_pool(Self::NAME, "general_thoughts", &self.general_thoughts)?;
        require_pool(
            Self::NAME,
            "philosophical_prefixes",
            &self.philosophical_prefixes,
        )?;
        require_pool(Self::NAME, "bug_meanings", &self.bug_meanings)?;
        require_pool(Self::NAME, "variable_names", &self.variable_names)
    }
}

#[derive(Debug)]
pub struct Contemplation {
    corpus: ContemplationCorpus,
}

impl Contemplation {
    pub fn new() -> Result<Self, GithubError> {
        Ok(Self {
            corpus: corpus::load()?,
        })
    }

    pub fn corpus(&self) -> &ContemplationCorpus {
        &self.corpus
    }

    /// Each matching pattern contributes a meaning line, a wisdom line and a
    /// blank line; three distinct general thoughts close the list.
    pub fn contemplate_code<R: Rng + ?Sized>(&self, code: &str, rng: &mut R) -> Vec<String> {
        let mut thoughts = Vec::new();
        for pattern in CODE_PATTERNS.iter().filter(|p| p.regex.is_match(code)) {
            thoughts.push(format!("**{}:** {}", pattern.label, pattern.meaning));
            thoughts.push(format!("*Wisdom:* {}", pattern.wisdom));
            thoughts.push(String::new());
        }
        thoughts.extend(
            sample_distinct(&self.corpus.general_thoughts, GENERAL_THOUGHT_COUNT, rng)
                .into_iter()
                .cloned(),
        );
        thoughts
    }

    pub fn find_meaning_in_bugs(&self, description: &str) -> &str {
        let lowered = description.to_lowercase();
        self.corpus
            .bug_meanings
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword.as_str()))
            .map(|(_, meaning)| meaning.as_str())
            .unwrap_or(&self.corpus.bug_fallback)
    }

    /// The first mapped key found in the lower-cased name is replaced
    /// everywhere in it; otherwise a random prefix is prepended to the
    /// name as given.
    pub fn philosophical_variable_name<R: Rng + ?Sized>(&self, name: &str, rng: &mut R) -> String {
        let lowered = name.to_lowercase();
        match self
            .corpus
            .variable_names
            .iter()
            .find(|(key, _)| lowered.contains(key.as_str()))
        {
            Some((key, replacement)) => lowered.replace(key.as_str(), replacement),
            None => {
                let prefix = pick_uniform(&self.corpus.philosophical_prefixes, rng);
                format!("{}{}", prefix, name)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Complex,
    Cyclical,
    Conditional,
    Extensive,
    Simple,
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ComplexityLevel::Complex => "complex",
            ComplexityLevel::Cyclical => "cyclical",
            ComplexityLevel::Conditional => "conditional",
            ComplexityLevel::Extensive => "extensive",
            ComplexityLevel::Simple => "simple",
        };
        f.write_str(s)
    }
}

impl ComplexityLevel {
    pub fn wisdom(self) -> &'static str {
        match self {
            ComplexityLevel::Complex => {
                "Many functions create many possibilities, but also many responsibilities. Remember: with great power comes great complexity."
            }
            ComplexityLevel::Cyclical => {
                "Many loops suggest a cyclical nature. Are you repeating patterns that could be simplified? Life is about learning, not repeating."
            }
            ComplexityLevel::Conditional => {
                "Many conditions create many paths. Each path is a choice, and every choice has consequences. Choose wisely."
            }
            ComplexityLevel::Extensive => {
                "Extensive code suggests extensive thinking. But remember: the best code is often the simplest code."
            }
            ComplexityLevel::Simple => {
                "Simple code is beautiful code. In simplicity lies elegance, and in elegance lies truth."
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ComplexityReport {
    pub total_lines: usize,
    pub code_lines: usize,
    pub comment_lines: usize,
    pub function_count: usize,
    pub class_count: usize,
    pub loop_count: usize,
    pub condition_count: usize,
    pub complexity_level: ComplexityLevel,
    pub wisdom: String,
    pub philosophical_insight: String,
}

fn is_comment(line: &str) -> bool {
    line.trim().starts_with('#')
}

pub fn analyze_code_complexity(code: &str) -> ComplexityReport {
    let lines: Vec<&str> = code.split('\n').collect();
    let code_lines = lines
        .iter()
        .filter(|l| !l.trim().is_empty() && !is_comment(l))
        .count();
    let comment_lines = lines.iter().filter(|l| is_comment(l)).count();

    let function_count = FUNCTION_DEF.find_iter(code).count();
    let class_count = CLASS_DEF.find_iter(code).count();
    let loop_count = LOOP_KEYWORD.find_iter(code).count();
    let condition_count = CONDITION_KEYWORD.find_iter(code).count();

    let complexity_level = if function_count > 10 {
        ComplexityLevel::Complex
    } else if loop_count > 5 {
        ComplexityLevel::Cyclical
    } else if condition_count > 8 {
        ComplexityLevel::Conditional
    } else if code_lines > 100 {
        ComplexityLevel::Extensive
    } else {
        ComplexityLevel::Simple
    };

    ComplexityReport {
        total_lines: lines.len(),
        code_lines,
        comment_lines,
        function_count,
        class_count,
        loop_count,
        condition_count,
        complexity_level,
        wisdom: complexity_level.wisdom().to_string(),
        philosophical_insight: format!(
            "This code has {0} complexity, which reflects the {0} nature of the problem it solves.",
            complexity_level
        ),
    }
}

pub fn suggest_meditation_break(report: &ComplexityReport) -> Option<&'static str> {
    match report.complexity_level {
        ComplexityLevel::Complex | ComplexityLevel::Extensive => Some(
            "Your code shows signs of complexity. Consider taking a meditation break to clear your mind and return with fresh perspective.",
        ),
        ComplexityLevel::Cyclical => Some(
            "Many loops detected. Take a moment to breathe and consider if there's a simpler way to express your intent.",
        ),
        ComplexityLevel::Conditional => Some(
            "Many conditions found. Pause and reflect: are all these paths necessary, or can you simplify your logic?",
        ),
        ComplexityLevel::Simple => None,
    }
}

const COMMIT_PHILOSOPHY: &[(&[&str], &str)] = &[
    (
        &["refactor"],
        "Refactoring is the art of finding the soul within the code. You have not just changed the structure, but revealed the essence.",
    ),
    (
        &["fix", "bug"],
        "In fixing this bug, you have not just solved a problem, but learned a lesson. Every fix is a step toward mastery.",
    ),
    (
        &["add", "new"],
        "You have added something new to the digital realm. Every addition is a contribution to the collective wisdom of developers.",
    ),
    (
        &["remove", "delete"],
        "In removing code, you have not just deleted lines, but simplified reality. Sometimes less is more, and more is less.",
    ),
    (
        &["update", "modify"],
        "You have updated the code, and in doing so, you have updated your understanding. Every change is a step toward enlightenment.",
    ),
];

const COMMIT_PHILOSOPHY_DEFAULT: &str = "You have made changes to the code, and in doing so, you have changed yourself. Every modification is a moment of growth.";

pub fn generate_commit_philosophy<S: AsRef<str>>(changes: &[S]) -> &'static str {
    let joined = changes
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();
    COMMIT_PHILOSOPHY
        .iter()
        .find(|(words, _)| words.iter().any(|w| joined.contains(w)))
        .map(|(_, reflection)| *reflection)
        .unwrap_or(COMMIT_PHILOSOPHY_DEFAULT)
}

/// Substring, weight. Each factor counts at most once.
const KARMA_FACTORS: &[(&str, i32)] = &[
    ("def ", 5),
    ("class ", 3),
    ("try:", 2),
    ("if __name__ == '__main__':", 1),
    ("import ", 1),
    ("eval(", -10),
    ("exec(", -10),
    ("global ", -2),
    ("pass", -1),
];

/// Positive is good, negative is bad.
pub fn calculate_code_karma(code: &str) -> i32 {
    let mut karma: i32 = KARMA_FACTORS
        .iter()
        .filter(|(needle, _)| code.contains(needle))
        .map(|(_, weight)| weight)
        .sum();

    // `split` always yields at least one line.
    let lines: Vec<&str> = code.split('\n').collect();
    let comments = lines.iter().filter(|l| is_comment(l)).count();
    let ratio = comments as f64 / lines.len() as f64;
    if ratio > 0.1 {
        karma += 3;
    } else if ratio < 0.05 {
        karma -= 2;
    }
    karma
}

pub fn karma_interpretation(karma: i32) -> &'static str {
    match karma {
        10.. => "Your code radiates positive energy. You are on the path of digital enlightenment.",
        5..=9 => "Your code shows good intentions. Continue on your journey with confidence.",
        0..=4 => {
            "Your code is neutral. Consider adding more positive elements to improve your karma."
        }
        -5..=-1 => {
            "Your code shows some negative patterns. Reflect on your choices and seek improvement."
        }
        _ => {
            "Your code has accumulated negative karma. Consider refactoring and following better practices."
        }
    }
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "contemplation",
        "version": "0.1.0",
        "description": "Pattern contemplation, bug meanings, renames, complexity and karma",
        "commands": [
            { "name": "contemplate", "parameters": ["file"] },
            { "name": "bug", "parameters": ["description"] },
            { "name": "rename", "parameters": ["name"] },
            { "name": "karma", "parameters": ["file"] }
        ],
        "corpus": ["contemplation.toml"]
    })
}
