//! The Philosopher: deep existential questioning about code.

use crate::core::classify::{Classifier, Rules};
use crate::core::corpus::{self, CorpusTable, require_pool};
use crate::core::error::GithubError;
use crate::core::select::pick_uniform;
use crate::core::tui::{self, BoxStyle};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::io::{self, BufRead, Write};

#[derive(
    clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Reality,
    Purpose,
    Identity,
    Time,
    Existence,
}

const QUESTION_RULES: Rules<QuestionCategory> = &[
    (
        QuestionCategory::Reality,
        &["exist", "real", "reality", "simulation"],
    ),
    (QuestionCategory::Purpose, &["purpose", "why", "meaning", "goal"]),
    (
        QuestionCategory::Identity,
        &["self", "identity", "who", "what am"],
    ),
    (QuestionCategory::Time, &["time", "age", "future", "past"]),
];

pub const QUESTION_CLASSIFIER: Classifier<QuestionCategory> =
    Classifier::new(QUESTION_RULES, QuestionCategory::Existence);

pub const DIALOGUE_PROMPT: &str = "What philosophical question do you have about your code?";
pub const FAREWELL: &str =
    "May your code be filled with meaning and your bugs be gentle teachers.";
const EXIT_WORDS: &[&str] = &["quit", "exit", "q"];

pub const REFLECTION_PROMPT: &str =
    "Take a moment to reflect on these thoughts. What insights do they bring to your coding journey?";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PhilosophicalQuestion {
    pub question: String,
    pub context: String,
    /// 1 to 5; 5 is the deepest existential level.
    pub depth: u8,
}

#[derive(Debug, Deserialize)]
pub struct QuestionTable {
    pub existence: Vec<PhilosophicalQuestion>,
    pub purpose: Vec<PhilosophicalQuestion>,
    pub identity: Vec<PhilosophicalQuestion>,
    pub time: Vec<PhilosophicalQuestion>,
    pub reality: Vec<PhilosophicalQuestion>,
}

#[derive(Debug, Deserialize)]
pub struct SituationGuidance {
    pub key: String,
    pub responses: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct PhilosopherCorpus {
    pub wisdom_responses: Vec<String>,
    pub contemplation_topics: Vec<String>,
    pub questions: QuestionTable,
    pub guidance: Vec<SituationGuidance>,
}

impl CorpusTable for PhilosopherCorpus {
    const NAME: &'static str = "philosopher";

    fn validate(&self) -> Result<(), GithubError> {
        require_pool(Self::NAME, "wisdom_responses", &self.wisdom_responses)?;
        require_pool(
            Self::NAME,
            "contemplation_topics",
            &self.contemplation_topics,
        )?;
        let q = &self.questions;
        require_pool(Self::NAME, "questions.existence", &q.existence)?;
        require_pool(Self::NAME, "questions.purpose", &q.purpose)?;
        require_pool(Self::NAME, "questions.identity", &q.identity)?;
        require_pool(Self::NAME, "questions.time", &q.time)?;
        require_pool(Self::NAME, "questions.reality", &q.reality)?;
        for entry in &self.guidance {
            require_pool(
                Self::NAME,
                &format!("guidance.{}", entry.key),
                &entry.responses,
            )?;
        }
        if let Some(q) = self.all_questions().find(|q| !(1..=5).contains(&q.depth)) {
            return Err(GithubError::CorpusError(format!(
                "{}: depth of '{}' must be between 1 and 5",
                Self::NAME,
                q.question
            )));
        }
        Ok(())
    }
}

impl PhilosopherCorpus {
    pub fn questions_for(&self, category: QuestionCategory) -> &[PhilosophicalQuestion] {
        let q = &self.questions;
        match category {
            QuestionCategory::Reality => &q.reality,
            QuestionCategory::Purpose => &q.purpose,
            QuestionCategory::Identity => &q.identity,
            QuestionCategory::Time => &q.time,
            QuestionCategory::Existence => &q.existence,
        }
    }

    pub fn all_questions(&self) -> impl Iterator<Item = &PhilosophicalQuestion> {
        let q = &self.questions;
        q.existence
            .iter()
            .chain(&q.purpose)
            .chain(&q.identity)
            .chain(&q.time)
            .chain(&q.reality)
    }
}

#[derive(Debug)]
pub struct PhilosopherAgent {
    corpus: PhilosopherCorpus,
}

impl PhilosopherAgent {
    pub fn new() -> Result<Self, GithubError> {
        Ok(Self {
            corpus: corpus::load()?,
        })
    }

    pub fn corpus(&self) -> &PhilosopherCorpus {
        &self.corpus
    }

    pub fn contemplate<R: Rng + ?Sized>(&self, question: &str, rng: &mut R) -> String {
        let category = QUESTION_CLASSIFIER.classify(question);
        tracing::debug!(?category, "question classified");

        let related = pick_uniform(self.corpus.questions_for(category), rng);
        let wisdom = pick_uniform(&self.corpus.wisdom_responses, rng);

        [
            format!("Ah, you ask: '{}'", question),
            String::new(),
            format!(
                "This brings to mind a deeper question: {}",
                related.question
            ),
            String::new(),
            format!("Consider this: {}", related.context),
            String::new(),
            format!("Here is wisdom to ponder: {}", wisdom),
            String::new(),
            REFLECTION_PROMPT.to_string(),
        ]
        .join("\n")
    }

    /// From one category, or from every category when `None`.
    pub fn random_question<R: Rng + ?Sized>(
        &self,
        category: Option<QuestionCategory>,
        rng: &mut R,
    ) -> &PhilosophicalQuestion {
        match category {
            Some(category) => pick_uniform(self.corpus.questions_for(category), rng),
            None => {
                let all: Vec<&PhilosophicalQuestion> = self.corpus.all_questions().collect();
                *pick_uniform(&all, rng)
            }
        }
    }

    pub fn contemplation_topic<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick_uniform(&self.corpus.contemplation_topics, rng).as_str()
    }

    /// Situation keywords are checked in corpus order; no hit draws a wisdom line.
    pub fn provide_guidance<R: Rng + ?Sized>(&self, situation: &str, rng: &mut R) -> &str {
        let lowered = situation.to_lowercase();
        match self
            .corpus
            .guidance
            .iter()
            .find(|entry| lowered.contains(&entry.key))
        {
            Some(entry) => pick_uniform(&entry.responses, rng).as_str(),
            None => pick_uniform(&self.corpus.wisdom_responses, rng).as_str(),
        }
    }
}

pub fn is_farewell(input: &str) -> bool {
    let input = input.trim();
    EXIT_WORDS.iter().any(|w| input.eq_ignore_ascii_case(w))
}

/// Reads questions line by line until a farewell word or end of input,
/// answering each with a contemplation panel.
///
/// Returns the number of questions answered.
pub fn run_dialogue<I, W, R>(
    agent: &PhilosopherAgent,
    mut input: I,
    out: &mut W,
    rng: &mut R,
) -> io::Result<usize>
where
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    let mut answered = 0;
    loop {
        write!(out, "\n{} ", DIALOGUE_PROMPT)?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }
        let question = line.trim();
        if is_farewell(question) {
            break;
        }

        let response = agent.contemplate(question, rng);
        writeln!(
            out,
            "{}",
            tui::panel("💭 Philosophical Response", &response, BoxStyle::Blue)
        )?;
        answered += 1;
    }
    writeln!(out, "\n{}", FAREWELL)?;
    tracing::debug!(answered, "dialogue finished");
    Ok(answered)
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "philosopher",
        "version": "0.1.0",
        "description": "Interactive existential dialogue",
        "commands": [
            { "name": "philosopher", "description": "Interactive question loop" },
            { "name": "guide", "parameters": ["situation"] }
        ],
        "categories": QUESTION_CLASSIFIER.categories(),
        "corpus": ["philosopher.toml"]
    })
}
