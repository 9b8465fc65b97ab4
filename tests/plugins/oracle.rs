use gith_ub::plugins::oracle::{
    INTERPRETATION_CLASSIFIER, InterpretationTopic, Oracle, PROPHECY_CLASSIFIER, ProphecyType,
    Timeframe,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn oracle() -> Oracle {
    Oracle::new().expect("oracle corpus should load")
}

#[test]
fn consult_always_has_three_labeled_sections() {
    let agent = oracle();
    let mut rng = StdRng::seed_from_u64(10);
    for question in [
        "",
        "Why does my code exist?",
        "Will my career succeed?",
        "what is love",
        "How do I fix this bug?",
    ] {
        let response = agent.consult(question, &mut rng);
        assert!(response.contains("🔮 Oracle's Response"), "{}", response);
        assert!(response.contains("**Prophecy:**"));
        assert!(response.contains("**Interpretation:**"));
        assert!(response.contains("**Wisdom:**"));
    }
}

#[test]
fn consult_record_draws_from_classified_pools() {
    let agent = oracle();
    let mut rng = StdRng::seed_from_u64(11);

    let record = agent.consult_record("Will this function ever compile?", &mut rng);
    assert_eq!(record.kind, ProphecyType::Technical);
    assert_eq!(record.topic, InterpretationTopic::Code);
    assert!(
        agent
            .corpus()
            .prophecies_for(ProphecyType::Technical)
            .contains(&record.prophecy)
    );
    assert!(
        agent
            .corpus()
            .interpretations_for(InterpretationTopic::Code)
            .contains(&record.interpretation)
    );
    assert!(agent.corpus().cosmic_wisdom.contains(&record.wisdom));
}

#[test]
fn question_routing_defaults() {
    assert_eq!(PROPHECY_CLASSIFIER.classify("hello"), ProphecyType::Cosmic);
    assert_eq!(
        PROPHECY_CLASSIFIER.classify("What is the meaning of it all?"),
        ProphecyType::Philosophical
    );
    assert_eq!(
        PROPHECY_CLASSIFIER.classify("Which path should I take?"),
        ProphecyType::Personal
    );
    assert_eq!(
        INTERPRETATION_CLASSIFIER.classify("hello"),
        InterpretationTopic::Future
    );
    assert_eq!(
        INTERPRETATION_CLASSIFIER.classify("Is my job safe?"),
        InterpretationTopic::Career
    );
    assert_eq!(
        INTERPRETATION_CLASSIFIER.classify("For what reason?"),
        InterpretationTopic::Purpose
    );
}

#[test]
fn predictions_split_by_timeframe() {
    let agent = oracle();
    let corpus = agent.corpus();
    let near = corpus.predictions_for(Timeframe::Near);
    let far = corpus.predictions_for(Timeframe::Far);
    assert_eq!(near.len() + far.len(), corpus.technical_predictions.len());
    assert!(!near.is_empty() && !far.is_empty());

    let mut rng = StdRng::seed_from_u64(12);
    let text = agent.predict_future("near", &mut rng);
    assert!(text.contains("Future Prediction (near term)"));
    assert!(near.iter().any(|p| text.contains(p.as_str())));

    let text = agent.predict_future("far", &mut rng);
    assert!(far.iter().any(|p| text.contains(p.as_str())));

    let text = agent.predict_future("someday", &mut rng);
    assert!(text.contains("(someday term)"));
    assert!(corpus.cosmic_wisdom.iter().any(|w| text.contains(w.as_str())));
}

#[test]
fn timeframe_parse_is_total() {
    assert_eq!(Timeframe::parse("near"), Timeframe::Near);
    assert_eq!(Timeframe::parse("far"), Timeframe::Far);
    assert_eq!(Timeframe::parse(""), Timeframe::Cosmic);
    assert_eq!(Timeframe::parse("NEAR"), Timeframe::Cosmic);
}

#[test]
fn guidance_uses_first_matching_key() {
    let agent = oracle();
    let mut rng = StdRng::seed_from_u64(30);
    let stuck = agent.provide_guidance("I am stuck", &mut rng);
    let confused = agent.provide_guidance("so CONFUSED", &mut rng);
    assert_ne!(stuck, confused);
    // "stuck" is listed before "frustrated".
    assert_eq!(
        agent.provide_guidance("frustrated and stuck", &mut rng),
        stuck
    );
}

#[test]
fn unmatched_guidance_draws_cosmic_wisdom() {
    let agent = oracle();
    let mut rng = StdRng::seed_from_u64(31);
    let seen: HashSet<&str> = (0..200)
        .map(|_| agent.provide_guidance("just vibing", &mut rng))
        .collect();
    let cosmic = &agent.corpus().cosmic_wisdom;
    assert!(seen.iter().all(|line| cosmic.iter().any(|w| w == line)));
    assert!(seen.len() > 1);
}

#[test]
fn hidden_meaning_routes_by_snippet_topic() {
    let agent = oracle();
    let mut rng = StdRng::seed_from_u64(13);

    let errors = agent.reveal_hidden_meaning("raise ValueError()", &mut rng);
    assert!(errors.contains("**Code:** `raise ValueError()`"));
    assert!(errors.contains(&agent.corpus().topic_meanings.errors));

    let functions = agent.reveal_hidden_meaning("fn main() {}", &mut rng);
    assert!(functions.contains(&agent.corpus().topic_meanings.functions));

    // Errors are checked before loops.
    let both = agent.reveal_hidden_meaning("for e in errors:", &mut rng);
    assert!(both.contains(&agent.corpus().topic_meanings.errors));

    let variables = agent.reveal_hidden_meaning("let x = 5;", &mut rng);
    assert!(variables.contains(&agent.corpus().topic_meanings.variables));

    let plain = agent.reveal_hidden_meaning("print(x)", &mut rng);
    assert!(
        agent
            .corpus()
            .hidden_meanings
            .iter()
            .any(|m| plain.contains(m.as_str()))
    );
}
