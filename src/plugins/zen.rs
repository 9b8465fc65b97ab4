//! The Zen Master: mindfulness, breathing and balance for developers.

use crate::core::classify::{Classifier, Rules, first_match};
use crate::core::corpus::{self, CorpusTable, require_pool};
use crate::core::error::GithubError;
use crate::core::select::pick_uniform;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(
    clap::ValueEnum, Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "lowercase")]
pub enum ZenLevel {
    Beginner,
    #[default]
    Intermediate,
    Advanced,
    Master,
}

impl fmt::Display for ZenLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ZenLevel::Beginner => "beginner",
            ZenLevel::Intermediate => "intermediate",
            ZenLevel::Advanced => "advanced",
            ZenLevel::Master => "master",
        };
        f.write_str(s)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ZenCategory {
    Patience,
    Acceptance,
    Mindfulness,
    Balance,
    Simplicity,
}

const SITUATION_RULES: Rules<ZenCategory> = &[
    (ZenCategory::Patience, &["stuck", "blocked", "can't", "unable"]),
    (ZenCategory::Acceptance, &["error", "bug", "broken", "failed"]),
    (ZenCategory::Mindfulness, &["distracted", "unfocused", "scattered"]),
    (ZenCategory::Balance, &["tired", "overwhelmed", "stressed"]),
    (ZenCategory::Simplicity, &["complex", "complicated", "messy"]),
];

pub const SITUATION_CLASSIFIER: Classifier<ZenCategory> =
    Classifier::new(SITUATION_RULES, ZenCategory::Mindfulness);

/// Scored per response: each category whose indicators appear adds a point.
const ZEN_INDICATORS: Rules<ZenCategory> = &[
    (ZenCategory::Patience, &["wait", "time", "slow", "patient"]),
    (ZenCategory::Acceptance, &["accept", "okay", "fine", "understand"]),
    (ZenCategory::Mindfulness, &["present", "now", "aware", "focused"]),
    (ZenCategory::Balance, &["balance", "harmony", "peace", "calm"]),
    (ZenCategory::Simplicity, &["simple", "clear", "minimal", "essential"]),
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Breath {
    Debugger,
    Flow,
    Refactor,
}

const BREATH_RULES: Rules<Breath> = &[
    (Breath::Debugger, &["debug", "stuck"]),
    (Breath::Flow, &["flow", "focus"]),
    (Breath::Refactor, &["refactor", "overwhelmed"]),
];

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct ZenWisdom {
    pub wisdom: String,
    pub context: String,
    pub level: ZenLevel,
}

impl ZenWisdom {
    pub fn render(&self) -> String {
        format!("{}\n\n{}", self.wisdom, self.context)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct BreathingExercise {
    pub name: String,
    pub description: String,
    pub steps: Vec<String>,
    pub duration: String,
}

#[derive(Debug, Deserialize)]
pub struct WisdomTable {
    pub patience: Vec<ZenWisdom>,
    pub acceptance: Vec<ZenWisdom>,
    pub mindfulness: Vec<ZenWisdom>,
    pub balance: Vec<ZenWisdom>,
    pub simplicity: Vec<ZenWisdom>,
}

#[derive(Debug, Deserialize)]
pub struct BreathingTable {
    pub debugger: BreathingExercise,
    pub flow: BreathingExercise,
    pub refactor: BreathingExercise,
}

#[derive(Debug, Deserialize)]
pub struct ZenCorpus {
    pub meditation_guidance: Vec<String>,
    pub affirmations: Vec<String>,
    pub wisdom: WisdomTable,
    pub breathing: BreathingTable,
}

impl CorpusTable for ZenCorpus {
    const NAME: &'static str = "zen";

    fn validate(&self) -> Result<(), GithubError> {
        require_pool(Self::NAME, "meditation_guidance", &self.meditation_guidance)?;
        require_pool(Self::NAME, "affirmations", &self.affirmations)?;
        let w = &self.wisdom;
        require_pool(Self::NAME, "wisdom.patience", &w.patience)?;
        require_pool(Self::NAME, "wisdom.acceptance", &w.acceptance)?;
        require_pool(Self::NAME, "wisdom.mindfulness", &w.mindfulness)?;
        require_pool(Self::NAME, "wisdom.balance", &w.balance)?;
        require_pool(Self::NAME, "wisdom.simplicity", &w.simplicity)?;
        for exercise in self.exercises() {
            require_pool(
                Self::NAME,
                &format!("breathing '{}' steps", exercise.name),
                &exercise.steps,
            )?;
        }
        Ok(())
    }
}

impl ZenCorpus {
    pub fn wisdom_for(&self, category: ZenCategory) -> &[ZenWisdom] {
        let w = &self.wisdom;
        match category {
            ZenCategory::Patience => &w.patience,
            ZenCategory::Acceptance => &w.acceptance,
            ZenCategory::Mindfulness => &w.mindfulness,
            ZenCategory::Balance => &w.balance,
            ZenCategory::Simplicity => &w.simplicity,
        }
    }

    pub fn all_wisdom(&self) -> impl Iterator<Item = &ZenWisdom> {
        let w = &self.wisdom;
        w.patience
            .iter()
            .chain(&w.acceptance)
            .chain(&w.mindfulness)
            .chain(&w.balance)
            .chain(&w.simplicity)
    }

    pub fn exercises(&self) -> [&BreathingExercise; 3] {
        let b = &self.breathing;
        [&b.debugger, &b.flow, &b.refactor]
    }

    fn exercise(&self, breath: Breath) -> &BreathingExercise {
        match breath {
            Breath::Debugger => &self.breathing.debugger,
            Breath::Flow => &self.breathing.flow,
            Breath::Refactor => &self.breathing.refactor,
        }
    }
}

#[derive(Debug)]
pub struct ZenMaster {
    level: ZenLevel,
    corpus: ZenCorpus,
}

impl ZenMaster {
    pub fn new(level: ZenLevel) -> Result<Self, GithubError> {
        Ok(Self {
            level,
            corpus: corpus::load()?,
        })
    }

    pub fn level(&self) -> ZenLevel {
        self.level
    }

    pub fn corpus(&self) -> &ZenCorpus {
        &self.corpus
    }

    /// An empty situation is treated like no situation at all.
    pub fn wisdom_record<R: Rng + ?Sized>(
        &self,
        situation: Option<&str>,
        rng: &mut R,
    ) -> &ZenWisdom {
        match situation.filter(|s| !s.is_empty()) {
            Some(situation) => {
                let category = SITUATION_CLASSIFIER.classify(situation);
                tracing::debug!(?category, "situation classified");
                pick_uniform(self.corpus.wisdom_for(category), rng)
            }
            None => {
                let all: Vec<&ZenWisdom> = self.corpus.all_wisdom().collect();
                *pick_uniform(&all, rng)
            }
        }
    }

    pub fn provide_wisdom<R: Rng + ?Sized>(&self, situation: Option<&str>, rng: &mut R) -> String {
        self.wisdom_record(situation, rng).render()
    }

    pub fn guide_meditation<R: Rng + ?Sized>(&self, minutes: u32, rng: &mut R) -> String {
        let guidance = pick_uniform(&self.corpus.meditation_guidance, rng);
        format!(
            "\n🧘 Meditation Guidance ({minutes} minutes)\n\n{guidance}\n\nTake {minutes} minutes to practice this meditation. \nWhen you return, your code will be waiting for you with fresh eyes and an open heart.\n\nRemember: The best code is written from a place of inner peace.\n"
        )
    }

    pub fn suggest_breathing_exercise<R: Rng + ?Sized>(
        &self,
        situation: Option<&str>,
        rng: &mut R,
    ) -> &BreathingExercise {
        match situation.and_then(|s| first_match(s, BREATH_RULES)) {
            Some(breath) => self.corpus.exercise(breath),
            None => {
                let all = self.corpus.exercises();
                *pick_uniform(&all, rng)
            }
        }
    }

    pub fn daily_affirmation<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        pick_uniform(&self.corpus.affirmations, rng).as_str()
    }
}

/// One point per (response, category) pair with any indicator present.
pub fn zen_score<S: AsRef<str>>(responses: &[S]) -> usize {
    responses
        .iter()
        .map(|r| r.as_ref().to_lowercase())
        .map(|lowered| {
            ZEN_INDICATORS
                .iter()
                .filter(|(_, words)| words.iter().any(|w| lowered.contains(w)))
                .count()
        })
        .sum()
}

pub fn assess_zen_level<S: AsRef<str>>(responses: &[S]) -> ZenLevel {
    match zen_score(responses) {
        15.. => ZenLevel::Master,
        10..=14 => ZenLevel::Advanced,
        5..=9 => ZenLevel::Intermediate,
        _ => ZenLevel::Beginner,
    }
}

pub fn render_breathing(exercise: &BreathingExercise) -> String {
    let mut lines = vec![
        exercise.description.clone(),
        String::new(),
        format!("Duration: {}", exercise.duration),
        String::new(),
    ];
    lines.extend(
        exercise
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step)),
    );
    lines.join("\n")
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "zen",
        "version": "0.1.0",
        "description": "Mindfulness guidance, breathing and affirmations",
        "commands": [
            { "name": "meditate", "description": "Guided meditation, then one wisdom" },
            { "name": "zen", "parameters": ["situation"] },
            { "name": "breathe", "parameters": ["situation"] },
            { "name": "affirm", "description": "Daily affirmation" }
        ],
        "categories": SITUATION_CLASSIFIER.categories(),
        "corpus": ["zen.toml"]
    })
}
