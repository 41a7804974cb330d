#![cfg(test)]
use crate::*;
use rstest::rstest;

const ALL_SUBJECTS: &[&str] = &[
    "title",
    "due",
    "status",
    "priority",
    "project",
    "createdAt",
    "updatedAt",
    "completedAt",
    "createdBy",
    "tag",
];

#[rstest]
#[case("", ALL_SUBJECTS)]
#[case("!ta", &["tag"])]
#[case("!tag.eq", &["equals"])]
#[case("!tag.eq(", &["school", "work", "projects"])]
#[case("!tag.eq(school) A", &["AND"])]
#[case("!tag.eq(school) ", &["AND", "OR"])]
#[case("tag.eq(work) o", &["OR"])]
#[case("tag.eq(work) AND ", ALL_SUBJECTS)]
#[case("tag.eq(work) and t", &["title", "tag"])]
fn suggests_the_next_token(engine: Engine, #[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(engine.suggest(input).expect("suggest never fails here"), expected);
}

#[rstest]
#[case("ti", &["title"])]
#[case("p", &["priority", "project"])]
#[case("st", &["status"])]
#[case("dead", &["due"])]
#[case("name", &["title"])]
#[case("created_", &["createdAt", "createdBy"])]
#[case("CREATEDA", &["createdAt"])]
#[case("nope", &[])]
fn completes_subjects_and_aliases(engine: Engine, #[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(engine.suggest(input).expect("suggest never fails here"), expected);
}

#[rstest]
#[case("tag.", &["equals", "notequals"])]
#[case("tag.n", &["notequals"])]
#[case("tag.ne", &["notequals"])]
#[case("due.", &["before", "after", "equals", "notequals"])]
#[case("deadline.a", &["after"])]
#[case("priority.g", &["greaterthan", "greaterthanorequal"])]
#[case("priority.gte", &["greaterthanorequal"])]
#[case("tag.before", &[])]
fn completes_verbs_of_the_resolved_subject(
    engine: Engine,
    #[case] input: &str,
    #[case] expected: &[&str],
) {
    assert_eq!(engine.suggest(input).expect("suggest never fails here"), expected);
}

#[rstest]
#[case("tag.eq(sch", &["school"])]
#[case("tag.eq(SCHOOL", &["school"])]
#[case("tag.eq(work OR ", &["school", "work", "projects"])]
#[case("tag.eq(work AND !(p", &["projects"])]
#[case("tag.eq(\"pro\"", &["projects"])]
#[case("tag.eq(work ", &["AND", "OR"])]
#[case("priority.gt(", &[])]
#[case("due.before(2024", &[])]
fn completes_values_inside_calls(engine: Engine, #[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(engine.suggest(input).expect("suggest never fails here"), expected);
}

#[rstest]
#[case("!", ALL_SUBJECTS)]
#[case("! ", ALL_SUBJECTS)]
#[case("( ", &[])]
#[case("tag.eq(a) AND ( ", &[])]
#[case("(( ", &[])]
#[case("( ! ", ALL_SUBJECTS)]
#[case("(tag.eq(a) ", &["AND", "OR"])]
#[case("!tag ", &[])]
#[case("tag.eq ", &[])]
#[case("tag.eq(a)", &["AND", "OR"])]
fn suggests_across_boundaries(engine: Engine, #[case] input: &str, #[case] expected: &[&str]) {
    assert_eq!(engine.suggest(input).expect("suggest never fails here"), expected);
}

#[rstest]
#[case("title.eq(\"unterminated")]
#[case("tag.eq(\"sch")]
#[case("tag.eq(a) & b")]
#[case("tag.eq(a) )")]
#[case("nope.eq(a) AND t")]
#[case("tag.eq(a) tag ")]
#[case("priority.gt(high) ")]
fn malformed_input_yields_nothing(engine: Engine, #[case] input: &str) {
    assert_eq!(engine.suggest(input), Ok(vec![]));
}

#[rstest]
#[case("tag.eq(work) AND createdAt.before(2024-01-01)")]
#[case("!tag.notequals(projects) OR priority.lte(3)")]
#[case("(deadline.after(2024-01-01) and title.contains(\"plan\"))")]
fn suggestions_narrow_while_typing_a_word(engine: Engine, #[case] full: &str) {
    const BOUNDARIES: [char; 6] = ['.', '(', ')', ' ', '!', '"'];
    for end in 1..full.len() {
        let (shorter, longer) = (&full[..end], &full[..=end]);
        let typed = full[end..].chars().next().expect("ascii input");
        let previous = full[..end].chars().last().expect("non-empty prefix");
        if BOUNDARIES.contains(&typed) || BOUNDARIES.contains(&previous) {
            continue;
        }
        let before = engine.suggest(shorter).expect("suggest");
        let after = engine.suggest(longer).expect("suggest");
        assert!(
            after.iter().all(|s| before.contains(s)),
            "{longer:?} suggested {after:?}, not within {before:?} for {shorter:?}"
        );
    }
}

#[rstest]
fn returns_typed_suggestions(engine: Engine) {
    assert_eq!(
        engine.suggestions("tag.eq(w").expect("suggest"),
        [Suggestion::Value("work".into())]
    );
    assert_eq!(
        engine.suggestions("tag.eq(w) ").expect("suggest"),
        [
            Suggestion::Connector(TokenType::And),
            Suggestion::Connector(TokenType::Or)
        ]
    );
    assert_eq!(
        engine.suggestions("tag.e").expect("suggest"),
        [Suggestion::Verb("equals".into())]
    );
    assert_eq!(
        engine.suggestions("ta").expect("suggest"),
        [Suggestion::Subject("tag".into())]
    );
}

#[rstest]
fn caps_the_number_of_suggestions(engine: Engine) {
    let engine = engine.with_limit(2);
    assert_eq!(engine.suggest("").expect("suggest"), ["title", "due"]);
    assert_eq!(engine.suggest("tag.eq(").expect("suggest"), ["school", "work"]);
}

#[test]
fn drops_duplicate_tags() {
    let engine = Engine::new(["work", "home", "work"]);
    assert_eq!(engine.suggest("tag.eq(").expect("suggest"), ["work", "home"]);
}

#[test]
fn an_engine_without_tags_still_completes_the_grammar() {
    let engine = Engine::new(Vec::<String>::new());
    assert_eq!(engine.suggest("tag.eq(").expect("suggest"), Vec::<String>::new());
    assert_eq!(engine.suggest("ta").expect("suggest"), ["tag"]);
}

#[rstest]
fn serves_concurrent_callers(engine: Engine) {
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["", "!ta", "tag.eq(", "tag.eq(a) A"]
            .into_iter()
            .map(|input| {
                let engine = &engine;
                scope.spawn(move || engine.suggest(input))
            })
            .collect();
        for handle in handles {
            assert!(handle.join().expect("thread").is_ok());
        }
    });
}
