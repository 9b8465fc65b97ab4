use gith_ub::plugins::contemplation::{
    ComplexityLevel, Contemplation, GENERAL_THOUGHT_COUNT, analyze_code_complexity,
    calculate_code_karma, generate_commit_philosophy, karma_interpretation,
    suggest_meditation_break,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::collections::HashSet;

fn helper() -> Contemplation {
    Contemplation::new().expect("contemplation corpus should load")
}

#[test]
fn contemplation_lists_matched_patterns_then_general_thoughts() {
    let helper = helper();
    let mut rng = StdRng::seed_from_u64(40);
    let code = "import os\n\ndef greet(name):\n    # say hello\n    print(name)\n";

    let thoughts = helper.contemplate_code(code, &mut rng);
    assert_eq!(thoughts.len(), 3 * 3 + GENERAL_THOUGHT_COUNT);
    assert!(thoughts[0].starts_with("**Functions:**"));
    assert!(thoughts[1].starts_with("*Wisdom:*"));
    assert_eq!(thoughts[2], "");
    assert!(thoughts[3].starts_with("**Imports:**"));
    assert!(thoughts[6].starts_with("**Comments:**"));

    let general = &thoughts[9..];
    let unique: HashSet<&String> = general.iter().collect();
    assert_eq!(unique.len(), GENERAL_THOUGHT_COUNT);
    assert!(
        general
            .iter()
            .all(|t| helper.corpus().general_thoughts.contains(t))
    );
}

#[test]
fn plain_text_gets_only_general_thoughts() {
    let helper = helper();
    let mut rng = StdRng::seed_from_u64(41);
    let thoughts = helper.contemplate_code("hello world", &mut rng);
    assert_eq!(thoughts.len(), GENERAL_THOUGHT_COUNT);
}

#[test]
fn bug_meanings_follow_keyword_order() {
    let helper = helper();
    let null = helper.find_meaning_in_bugs("NullPointerException in handler");
    assert!(null.starts_with("The null pointer is the void"));

    // "error" is listed before "syntax".
    let syntax = helper.find_meaning_in_bugs("SyntaxError on line 3");
    assert!(syntax.starts_with("Errors are not failures"));

    let timeout = helper.find_meaning_in_bugs("request timeout");
    assert!(timeout.starts_with("Timeouts remind us"));

    assert_eq!(
        helper.find_meaning_in_bugs("it just feels off"),
        helper.corpus().bug_fallback
    );
}

#[test]
fn variable_names_are_mapped_or_prefixed() {
    let helper = helper();
    let mut rng = StdRng::seed_from_u64(42);

    assert_eq!(
        helper.philosophical_variable_name("userData", &mut rng),
        "digital_souldata"
    );
    assert_eq!(
        helper.philosophical_variable_name("result", &mut rng),
        "manifestation"
    );

    let renamed = helper.philosophical_variable_name("Zq", &mut rng);
    assert!(renamed.ends_with("Zq"));
    let prefix = renamed.trim_end_matches("Zq");
    assert!(
        helper
            .corpus()
            .philosophical_prefixes
            .iter()
            .any(|p| p == prefix)
    );
}

#[test]
fn complexity_counts_and_levels() {
    let code = "# comment\nclass A:\n    def f(self):\n        for x in y:\n            if x:\n                pass\n";
    let report = analyze_code_complexity(code);
    assert_eq!(report.total_lines, 7);
    assert_eq!(report.code_lines, 5);
    assert_eq!(report.comment_lines, 1);
    assert_eq!(report.function_count, 1);
    assert_eq!(report.class_count, 1);
    assert_eq!(report.loop_count, 1);
    assert_eq!(report.condition_count, 1);
    assert_eq!(report.complexity_level, ComplexityLevel::Simple);
    assert!(report.philosophical_insight.contains("simple complexity"));
    assert_eq!(suggest_meditation_break(&report), None);

    let many_functions: String = (0..11).map(|i| format!("def f{}():\n", i)).collect();
    let report = analyze_code_complexity(&many_functions);
    assert_eq!(report.complexity_level, ComplexityLevel::Complex);
    assert!(suggest_meditation_break(&report).is_some());

    let many_loops = "for a in b:\n".repeat(6);
    assert_eq!(
        analyze_code_complexity(&many_loops).complexity_level,
        ComplexityLevel::Cyclical
    );

    let many_conditions = "if a:\n".repeat(9);
    let report = analyze_code_complexity(&many_conditions);
    assert_eq!(report.complexity_level, ComplexityLevel::Conditional);
    assert!(
        suggest_meditation_break(&report)
            .expect("conditional code gets a break")
            .starts_with("Many conditions found")
    );

    let long = "x = 1\n".repeat(101);
    assert_eq!(
        analyze_code_complexity(&long).complexity_level,
        ComplexityLevel::Extensive
    );
}

#[test]
fn commit_philosophy_is_first_match() {
    assert!(generate_commit_philosophy(&["Refactor and fix"]).starts_with("Refactoring"));
    assert!(generate_commit_philosophy(&["fix", "typo"]).starts_with("In fixing this bug"));
    assert!(generate_commit_philosophy(&["Add login"]).starts_with("You have added"));
    assert!(generate_commit_philosophy(&["delete dead code"]).starts_with("In removing code"));
    assert!(generate_commit_philosophy(&["modify docs"]).starts_with("You have updated"));
    let empty: [&str; 0] = [];
    assert!(generate_commit_philosophy(&empty).starts_with("You have made changes"));
}

#[test]
fn karma_scores_good_and_bad_patterns() {
    // def +5, import +1, one comment line in three (> 10%) +3.
    let good = "import os\n# greet\ndef f(): return 1";
    assert_eq!(calculate_code_karma(good), 9);

    // eval -10, no comments -2.
    assert_eq!(calculate_code_karma("eval(input())"), -12);

    // Empty input is a single uncommented line.
    assert_eq!(calculate_code_karma(""), -2);
}

#[test]
fn karma_interpretation_bands() {
    assert!(karma_interpretation(12).contains("positive energy"));
    assert!(karma_interpretation(10).contains("positive energy"));
    assert!(karma_interpretation(5).contains("good intentions"));
    assert!(karma_interpretation(0).contains("neutral"));
    assert!(karma_interpretation(-5).contains("some negative patterns"));
    assert!(karma_interpretation(-6).contains("accumulated negative karma"));
}
