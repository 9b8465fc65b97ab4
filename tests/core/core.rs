use gith_ub::core::assets;
use gith_ub::core::classify::{Classifier, Rules, first_match};
use gith_ub::core::config::{CONFIG_FILE_NAME, load_config_file};
use gith_ub::core::corpus;
use gith_ub::core::error::GithubError;
use gith_ub::core::select::{make_rng, pick_uniform, sample_distinct};
use gith_ub::plugins::coder::{CoderCorpus, ContemplationLevel};
use gith_ub::plugins::contemplation::ContemplationCorpus;
use gith_ub::plugins::oracle::OracleCorpus;
use gith_ub::plugins::philosopher::PhilosopherCorpus;
use gith_ub::plugins::zen::ZenCorpus;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;
use std::fs;
use tempfile::tempdir;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Weather {
    Storm,
    Rain,
    Clear,
}

const WEATHER_RULES: Rules<Weather> = &[
    (Weather::Storm, &["thunder", "lightning"]),
    (Weather::Rain, &["rain", "drizzle", "thunder"]),
];

const WEATHER: Classifier<Weather> = Classifier::new(WEATHER_RULES, Weather::Clear);

#[test]
fn every_embedded_corpus_resolves_and_parses() {
    let names = assets::list_corpora();
    for name in ["coder", "oracle", "philosopher", "zen", "contemplation"] {
        assert!(names.contains(&name), "missing corpus: {}", name);
        let raw = assets::get_embedded_corpus(name).expect("listed corpus should exist");
        assert!(!raw.trim().is_empty());
    }
    assert_eq!(
        assets::get_embedded_corpus("zen.toml"),
        assets::get_embedded_corpus("zen")
    );
    assert!(assets::get_embedded_corpus("nihilism").is_none());

    corpus::load::<CoderCorpus>().expect("coder corpus");
    corpus::load::<OracleCorpus>().expect("oracle corpus");
    corpus::load::<PhilosopherCorpus>().expect("philosopher corpus");
    corpus::load::<ZenCorpus>().expect("zen corpus");
    corpus::load::<ContemplationCorpus>().expect("contemplation corpus");
}

#[test]
fn corpus_with_empty_pool_is_rejected() {
    let raw = r#"
wisdom_quotes = []

[questions]
variables = ["a?"]
functions = ["b?"]
loops = ["c?"]
conditions = ["d?"]
errors = ["e?"]

[commit]
refactor = ["r?"]
fix = ["f?"]
feature = ["n?"]
docs = ["d?"]
test = ["t?"]
general = ["g?"]
"#;
    let err = corpus::parse::<CoderCorpus>(raw).unwrap_err();
    match err {
        GithubError::CorpusError(msg) => assert!(msg.contains("wisdom_quotes"), "{}", msg),
        other => panic!("expected corpus error, got {:?}", other),
    }
}

#[test]
fn classifier_is_total_and_order_decides_overlaps() {
    assert_eq!(WEATHER.classify(""), Weather::Clear);
    assert_eq!(WEATHER.classify("sunny afternoon"), Weather::Clear);
    assert_eq!(WEATHER.classify("Light DRIZZLE"), Weather::Rain);
    // "thunder" is in both lists; the earlier rule wins.
    assert_eq!(WEATHER.classify("thunder and rain"), Weather::Storm);

    assert_eq!(first_match("more rain", WEATHER_RULES), Some(Weather::Rain));
    assert_eq!(first_match("nothing", WEATHER_RULES), None);

    assert_eq!(
        WEATHER.categories(),
        vec![Weather::Storm, Weather::Rain, Weather::Clear]
    );
}

#[test]
fn seeded_selection_is_reproducible() {
    let pool: Vec<u32> = (0..100).collect();

    let mut a = make_rng(Some(42));
    let mut b = make_rng(Some(42));
    let first: Vec<u32> = (0..20).map(|_| *pick_uniform(&pool, &mut a)).collect();
    let second: Vec<u32> = (0..20).map(|_| *pick_uniform(&pool, &mut b)).collect();
    assert_eq!(first, second);

    let mut rng = StdRng::seed_from_u64(3);
    let sample = sample_distinct(&pool, 10, &mut rng);
    let unique: HashSet<&u32> = sample.iter().copied().collect();
    assert_eq!(sample.len(), 10);
    assert_eq!(unique.len(), 10);
}

#[test]
fn pick_uniform_reaches_every_element() {
    let pool = ["a", "b", "c"];
    let mut rng = StdRng::seed_from_u64(11);
    let seen: HashSet<&str> = (0..200).map(|_| *pick_uniform(&pool, &mut rng)).collect();
    assert_eq!(seen.len(), pool.len());
}

#[test]
#[should_panic(expected = "empty pool")]
fn pick_uniform_on_empty_pool_panics() {
    let pool: [&str; 0] = [];
    let mut rng = StdRng::seed_from_u64(0);
    pick_uniform(&pool, &mut rng);
}

#[test]
fn config_file_overrides_defaults() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        "level = \"cosmic\"\nseed = 7\nmeditation_minutes = 12\n",
    )
    .expect("write config");

    let config = load_config_file(&path).expect("config should parse");
    assert_eq!(config.level, ContemplationLevel::Cosmic);
    assert_eq!(config.seed, Some(7));
    assert_eq!(config.meditation_minutes, 12);
}

#[test]
fn partial_config_keeps_defaults() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join(CONFIG_FILE_NAME);
    fs::write(&path, "meditation_minutes = 3\n").expect("write config");

    let config = load_config_file(&path).expect("config should parse");
    assert_eq!(config.level, ContemplationLevel::Deep);
    assert_eq!(config.seed, None);
    assert_eq!(config.meditation_minutes, 3);
}

#[test]
fn malformed_or_missing_config_is_a_config_error() {
    let tmp = tempdir().expect("tempdir");

    let bad = tmp.path().join("bad.toml");
    fs::write(&bad, "level = \"transcendent\"\n").expect("write config");
    assert!(matches!(load_config_file(&bad), Err(GithubError::ConfigError(_))));

    let unknown = tmp.path().join("unknown.toml");
    fs::write(&unknown, "mood = \"melancholy\"\n").expect("write config");
    assert!(matches!(load_config_file(&unknown), Err(GithubError::ConfigError(_))));

    let missing = tmp.path().join("missing.toml");
    assert!(matches!(load_config_file(&missing), Err(GithubError::ConfigError(_))));
}
