//! The Oracle: prophecies, predictions and guidance.

use crate::core::classify::{Classifier, Rules, first_match};
use crate::core::corpus::{self, CorpusTable, require_pool};
use crate::core::error::GithubError;
use crate::core::select::pick_uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProphecyType {
    Technical,
    Philosophical,
    Personal,
    Cosmic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpretationTopic {
    Career,
    Code,
    Future,
    Purpose,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnippetTopic {
    Errors,
    Functions,
    Loops,
    Conditions,
    Variables,
}

/// Which slice of predictions `predict_future` draws from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Timeframe {
    Near,
    Far,
    Cosmic,
}

impl Timeframe {
    /// Total: anything other than "near"/"far" is cosmic.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "near" => Timeframe::Near,
            "far" => Timeframe::Far,
            _ => Timeframe::Cosmic,
        }
    }
}

const PROPHECY_RULES: Rules<ProphecyType> = &[
    (
        ProphecyType::Technical,
        &["code", "programming", "function", "bug", "error"],
    ),
    (
        ProphecyType::Philosophical,
        &["meaning", "purpose", "why", "philosophy"],
    ),
    (ProphecyType::Personal, &["career", "future", "success", "path"]),
];

const INTERPRETATION_RULES: Rules<InterpretationTopic> = &[
    (InterpretationTopic::Career, &["career", "job", "work", "success"]),
    (InterpretationTopic::Code, &["code", "programming", "function", "bug"]),
    (InterpretationTopic::Future, &["future", "tomorrow", "next", "will"]),
    (InterpretationTopic::Purpose, &["purpose", "meaning", "why", "reason"]),
];

const SNIPPET_RULES: Rules<SnippetTopic> = &[
    (SnippetTopic::Errors, &["error", "except", "raise", "panic"]),
    (SnippetTopic::Functions, &["def ", "fn ", "function"]),
    (SnippetTopic::Loops, &["for ", "while ", "loop"]),
    (SnippetTopic::Conditions, &["if ", "else", "match "]),
    (SnippetTopic::Variables, &["=", "let "]),
];

pub const PROPHECY_CLASSIFIER: Classifier<ProphecyType> =
    Classifier::new(PROPHECY_RULES, ProphecyType::Cosmic);

pub const INTERPRETATION_CLASSIFIER: Classifier<InterpretationTopic> =
    Classifier::new(INTERPRETATION_RULES, InterpretationTopic::Future);

#[derive(Debug, Deserialize)]
pub struct Prophecies {
    pub technical: Vec<String>,
    pub philosophical: Vec<String>,
    pub personal: Vec<String>,
    pub cosmic: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct Interpretations {
    pub career: Vec<String>,
    pub code: Vec<String>,
    pub future: Vec<String>,
    pub purpose: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopicMeanings {
    pub errors: String,
    pub functions: String,
    pub loops: String,
    pub conditions: String,
    pub variables: String,
}

#[derive(Debug, Deserialize)]
pub struct GuidanceEntry {
    pub key: String,
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct OracleCorpus {
    pub cosmic_wisdom: Vec<String>,
    pub technical_predictions: Vec<String>,
    pub hidden_meanings: Vec<String>,
    pub guidance: Vec<GuidanceEntry>,
    pub prophecies: Prophecies,
    pub interpretations: Interpretations,
    pub topic_meanings: TopicMeanings,
}

impl CorpusTable for OracleCorpus {
    const NAME: &'static str = "oracle";

    fn validate(&self) -> Result<(), GithubError> {
        require_pool(Self::NAME, "cosmic_wisdom", &self.cosmic_wisdom)?;
        require_pool(Self::NAME, "hidden_meanings", &self.hidden_meanings)?;
        // Both halves of the split must be drawable.
        if self.technical_predictions.len() < 2 {
            return Err(GithubError::CorpusError(format!(
                "{}: technical_predictions needs at least 2 entries",
                Self::NAME
            )));
        }
        let p = &self.prophecies;
        require_pool(Self::NAME, "prophecies.technical", &p.technical)?;
        require_pool(Self::NAME, "prophecies.philosophical", &p.philosophical)?;
        require_pool(Self::NAME, "prophecies.personal", &p.personal)?;
        require_pool(Self::NAME, "prophecies.cosmic", &p.cosmic)?;
        let i = &self.interpretations;
        require_pool(Self::NAME, "interpretations.career", &i.career)?;
        require_pool(Self::NAME, "interpretations.code", &i.code)?;
        require_pool(Self::NAME, "interpretations.future", &i.future)?;
        require_pool(Self::NAME, "interpretations.purpose", &i.purpose)
    }
}

impl OracleCorpus {
    pub fn prophecies_for(&self, kind: ProphecyType) -> &[String] {
        let p = &self.prophecies;
        match kind {
            ProphecyType::Technical => &p.technical,
            ProphecyType::Philosophical => &p.philosophical,
            ProphecyType::Personal => &p.personal,
            ProphecyType::Cosmic => &p.cosmic,
        }
    }

    pub fn interpretations_for(&self, topic: InterpretationTopic) -> &[String] {
        let i = &self.interpretations;
        match topic {
            InterpretationTopic::Career => &i.career,
            InterpretationTopic::Code => &i.code,
            InterpretationTopic::Future => &i.future,
            InterpretationTopic::Purpose => &i.purpose,
        }
    }

    pub fn predictions_for(&self, timeframe: Timeframe) -> &[String] {
        let half = self.technical_predictions.len() / 2;
        match timeframe {
            Timeframe::Near => &self.technical_predictions[..half],
            Timeframe::Far => &self.technical_predictions[half..],
            Timeframe::Cosmic => &self.cosmic_wisdom,
        }
    }

    fn topic_meaning(&self, topic: SnippetTopic) -> &str {
        let m = &self.topic_meanings;
        match topic {
            SnippetTopic::Errors => &m.errors,
            SnippetTopic::Functions => &m.functions,
            SnippetTopic::Loops => &m.loops,
            SnippetTopic::Conditions => &m.conditions,
            SnippetTopic::Variables => &m.variables,
        }
    }
}

/// The structured form of one consultation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Prophecy {
    pub kind: ProphecyType,
    pub topic: InterpretationTopic,
    pub prophecy: String,
    pub interpretation: String,
    pub wisdom: String,
}

impl Prophecy {
    pub fn render(&self) -> String {
        format!(
            "\n🔮 Oracle's Response\n\n**Prophecy:** {}\n\n**Interpretation:** {}\n\n**Wisdom:** {}\n",
            self.prophecy, self.interpretation, self.wisdom
        )
    }
}

#[derive(Debug)]
pub struct Oracle {
    corpus: OracleCorpus,
}

impl Oracle {
    pub fn new() -> Result<Self, GithubError> {
        Ok(Self {
            corpus: corpus::load()?,
        })
    }

    pub fn corpus(&self) -> &OracleCorpus {
        &self.corpus
    }

    /// Three independent draws: prophecy, interpretation, cosmic wisdom.
    pub fn consult_record<R: Rng + ?Sized>(&self, question: &str, rng: &mut R) -> Prophecy {
        let kind = PROPHECY_CLASSIFIER.classify(question);
        let topic = INTERPRETATION_CLASSIFIER.classify(question);
        tracing::debug!(?kind, ?topic, "question classified");

        Prophecy {
            kind,
            topic,
            prophecy: pick_uniform(self.corpus.prophecies_for(kind), rng).clone(),
            interpretation: pick_uniform(self.corpus.interpretations_for(topic), rng).clone(),
            wisdom: pick_uniform(&self.corpus.cosmic_wisdom, rng).clone(),
        }
    }

    pub fn consult<R: Rng + ?Sized>(&self, question: &str, rng: &mut R) -> String {
        self.consult_record(question, rng).render()
    }

    pub fn predict_future<R: Rng + ?Sized>(&self, timeframe: &str, rng: &mut R) -> String {
        let pool = self.corpus.predictions_for(Timeframe::parse(timeframe));
        let prediction = pick_uniform(pool, rng);

        format!(
            "\n🔮 Future Prediction ({} term)\n\n{}\n\nThe Oracle sees that the path ahead is both challenging and rewarding. \nTrust in your abilities and remain open to the possibilities that await.\n",
            timeframe, prediction
        )
    }

    /// First guidance key contained in the situation wins; no hit draws cosmic wisdom.
    pub fn provide_guidance<R: Rng + ?Sized>(&self, situation: &str, rng: &mut R) -> &str {
        let lowered = situation.to_lowercase();
        match self
            .corpus
            .guidance
            .iter()
            .find(|entry| lowered.contains(&entry.key))
        {
            Some(entry) => entry.response.as_str(),
            None => pick_uniform(&self.corpus.cosmic_wisdom, rng).as_str(),
        }
    }

    pub fn reveal_hidden_meaning<R: Rng + ?Sized>(&self, snippet: &str, rng: &mut R) -> String {
        let meaning = match first_match(snippet, SNIPPET_RULES) {
            Some(topic) => self.corpus.topic_meaning(topic),
            None => pick_uniform(&self.corpus.hidden_meanings, rng).as_str(),
        };

        format!(
            "\n🔮 Hidden Meaning Revealed\n\n**Code:** `{}`\n\n**Oracle's Insight:** {}\n\nThe Oracle sees that every line of code contains wisdom waiting to be discovered. \nLook beyond the syntax and see the soul within.\n",
            snippet, meaning
        )
    }
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "oracle",
        "version": "0.1.0",
        "description": "Prophecies, predictions and guidance",
        "commands": [
            { "name": "ask", "parameters": ["question", "format"] },
            { "name": "predict", "parameters": ["timeframe"] },
            { "name": "reveal", "parameters": ["snippet"] },
            { "name": "guide", "parameters": ["situation"] }
        ],
        "corpus": ["oracle.toml"]
    })
}
