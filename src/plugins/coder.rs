//! The Existential Coder: line-level insights and philosophical commit messages.

use crate::core::classify::{Classifier, Rules};
use crate::core::corpus::{self, CorpusTable, require_pool};
use crate::core::error::GithubError;
use crate::core::select::pick_uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Depth of contemplation requested by the caller.
#[derive(
    clap::ValueEnum, Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum ContemplationLevel {
    /// Basic questions about variable names
    Surface,
    /// Questions about life and code
    #[default]
    Deep,
    /// Questions about the nature of existence
    Cosmic,
}

impl fmt::Display for ContemplationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContemplationLevel::Surface => "surface",
            ContemplationLevel::Deep => "deep",
            ContemplationLevel::Cosmic => "cosmic",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CodeInsight {
    pub question: String,
    pub wisdom: String,
    pub level: ContemplationLevel,
    /// 1-based source line; `None` for the closing aggregate insight.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCategory {
    Functions,
    Conditions,
    Loops,
    Variables,
    Errors,
}

impl LineCategory {
    /// The constant wisdom attached to every insight of this category.
    pub fn wisdom(self) -> &'static str {
        match self {
            LineCategory::Functions => {
                "Every function is a microcosm of purpose in the digital universe."
            }
            LineCategory::Conditions => "Every condition is a choice between two realities.",
            LineCategory::Loops => "Loops are the heartbeat of the digital realm.",
            LineCategory::Variables => "Every variable is a container for potential.",
            LineCategory::Errors => "Errors are not failures, but invitations to grow.",
        }
    }
}

type LinePredicate = fn(&str) -> bool;

fn is_function_def(line: &str) -> bool {
    line.contains("def ")
}

fn is_condition(line: &str) -> bool {
    line.contains("if ") || line.contains("elif ")
}

fn is_loop(line: &str) -> bool {
    line.contains("for ") || line.contains("while ")
}

fn is_assignment(line: &str) -> bool {
    line.contains('=') && !line.contains("==")
}

fn is_error_handling(line: &str) -> bool {
    line.contains("except") || line.contains("raise")
}

/// Evaluated top to bottom, first hit wins: `if x = 1:` is a condition.
const LINE_RULES: &[(LineCategory, LinePredicate)] = &[
    (LineCategory::Functions, is_function_def),
    (LineCategory::Conditions, is_condition),
    (LineCategory::Loops, is_loop),
    (LineCategory::Variables, is_assignment),
    (LineCategory::Errors, is_error_handling),
];

/// Buckets one source line. Blank and `#` comment lines have no category.
pub fn classify_line(line: &str) -> Option<LineCategory> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    LINE_RULES
        .iter()
        .find(|(_, is_match)| is_match(line))
        .map(|(category, _)| *category)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Refactor,
    Fix,
    Feature,
    Docs,
    Test,
    General,
}

const CHANGE_RULES: Rules<ChangeKind> = &[
    (ChangeKind::Refactor, &["refactor", "restructure", "reorganize"]),
    (ChangeKind::Fix, &["fix", "bug", "issue", "error"]),
    (ChangeKind::Feature, &["add", "new", "feature", "implement"]),
    (ChangeKind::Docs, &["doc", "readme", "comment", "explain"]),
    (ChangeKind::Test, &["test", "spec", "verify", "validate"]),
];

const CHANGE_CLASSIFIER: Classifier<ChangeKind> =
    Classifier::new(CHANGE_RULES, ChangeKind::General);

pub const DEFAULT_CHANGE: &str = "Made some changes";
pub const AGGREGATE_QUESTION: &str = "What wisdom does this code hold?";

#[derive(Debug, Deserialize)]
pub struct LineQuestions {
    pub variables: Vec<String>,
    pub functions: Vec<String>,
    pub loops: Vec<String>,
    pub conditions: Vec<String>,
    pub errors: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CommitTemplates {
    pub refactor: Vec<String>,
    pub fix: Vec<String>,
    pub feature: Vec<String>,
    pub docs: Vec<String>,
    pub test: Vec<String>,
    pub general: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CoderCorpus {
    pub wisdom_quotes: Vec<String>,
    pub questions: LineQuestions,
    pub commit: CommitTemplates,
}

impl CorpusTable for CoderCorpus {
    const NAME: &'static str = "coder";

    fn validate(&self) -> Result<(), GithubError> {
        require_pool(Self::NAME, "wisdom_quotes", &self.wisdom_quotes)?;
        let q = &self.questions;
        require_pool(Self::NAME, "questions.variables", &q.variables)?;
        require_pool(Self::NAME, "questions.functions", &q.functions)?;
        require_pool(Self::NAME, "questions.loops", &q.loops)?;
        require_pool(Self::NAME, "questions.conditions", &q.conditions)?;
        require_pool(Self::NAME, "questions.errors", &q.errors)?;
        let c = &self.commit;
        require_pool(Self::NAME, "commit.refactor", &c.refactor)?;
        require_pool(Self::NAME, "commit.fix", &c.fix)?;
        require_pool(Self::NAME, "commit.feature", &c.feature)?;
        require_pool(Self::NAME, "commit.docs", &c.docs)?;
        require_pool(Self::NAME, "commit.test", &c.test)?;
        require_pool(Self::NAME, "commit.general", &c.general)
    }
}

impl CoderCorpus {
    pub fn questions_for(&self, category: LineCategory) -> &[String] {
        let q = &self.questions;
        match category {
            LineCategory::Functions => &q.functions,
            LineCategory::Conditions => &q.conditions,
            LineCategory::Loops => &q.loops,
            LineCategory::Variables => &q.variables,
            LineCategory::Errors => &q.errors,
        }
    }

    pub fn commit_templates(&self, kind: ChangeKind) -> &[String] {
        let c = &self.commit;
        match kind {
            ChangeKind::Refactor => &c.refactor,
            ChangeKind::Fix => &c.fix,
            ChangeKind::Feature => &c.feature,
            ChangeKind::Docs => &c.docs,
            ChangeKind::Test => &c.test,
            ChangeKind::General => &c.general,
        }
    }
}

/// Analyzes code for philosophical implications rather than syntax errors.
#[derive(Debug)]
pub struct ExistentialCoder {
    level: ContemplationLevel,
    corpus: CoderCorpus,
}

impl ExistentialCoder {
    pub fn new(level: ContemplationLevel) -> Result<Self, GithubError> {
        Ok(Self {
            level,
            corpus: corpus::load()?,
        })
    }

    pub fn level(&self) -> ContemplationLevel {
        self.level
    }

    pub fn corpus(&self) -> &CoderCorpus {
        &self.corpus
    }

    /// One insight per classified line, plus a closing aggregate when any
    /// line produced one.
    pub fn analyze_code<R: Rng + ?Sized>(&self, code: &str, rng: &mut R) -> Vec<CodeInsight> {
        let mut insights: Vec<CodeInsight> = code
            .split('\n')
            .enumerate()
            .filter_map(|(idx, line)| {
                classify_line(line).map(|category| self.line_insight(category, idx + 1, rng))
            })
            .collect();

        if !insights.is_empty() {
            insights.push(CodeInsight {
                question: AGGREGATE_QUESTION.to_string(),
                wisdom: pick_uniform(&self.corpus.wisdom_quotes, rng).clone(),
                level: ContemplationLevel::Cosmic,
                line_number: None,
            });
        }

        tracing::debug!(insights = insights.len(), "code analyzed");
        insights
    }

    fn line_insight<R: Rng + ?Sized>(
        &self,
        category: LineCategory,
        line_number: usize,
        rng: &mut R,
    ) -> CodeInsight {
        CodeInsight {
            question: pick_uniform(self.corpus.questions_for(category), rng).clone(),
            wisdom: category.wisdom().to_string(),
            level: self.level,
            line_number: Some(line_number),
        }
    }

    /// A commit message that questions reality. No changes means
    /// `"Made some changes"`.
    pub fn generate_commit_message<S: AsRef<str>, R: Rng + ?Sized>(
        &self,
        changes: &[S],
        rng: &mut R,
    ) -> String {
        let kind = if changes.is_empty() {
            classify_changes(&[DEFAULT_CHANGE])
        } else {
            classify_changes(changes)
        };
        tracing::debug!(?kind, "changes classified");
        pick_uniform(self.corpus.commit_templates(kind), rng).clone()
    }
}

pub fn classify_changes<S: AsRef<str>>(changes: &[S]) -> ChangeKind {
    let joined = changes
        .iter()
        .map(|c| c.as_ref())
        .collect::<Vec<_>>()
        .join(" ");
    CHANGE_CLASSIFIER.classify(&joined)
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "coder",
        "version": "0.1.0",
        "description": "Line-level existential analysis and commit messages",
        "commands": [
            { "name": "analyze", "parameters": ["file", "level", "format"] },
            { "name": "commit", "parameters": ["changes"] }
        ],
        "corpus": ["coder.toml"]
    })
}
