use super::*;
use std::collections::BTreeSet;

use qmpt_ast::Term;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn add(x: Term, y: Term, z: Term) -> Term {
    Term::compound("add", vec![x, y, z])
}

fn logic_forward(x: Term, y: Term, result: Term) -> Term {
    Term::compound("logic_forward", vec![Term::list(vec![x, y]), result])
}

fn addition_engine() -> Engine {
    let mut engine = Engine::new();
    for x in 0..10 {
        for y in 0..10 {
            engine
                .add_fact(&add(Term::int(x), Term::int(y), Term::int(x + y)))
                .unwrap();
        }
    }
    engine
        .add_rule(
            &logic_forward(Term::var("A"), Term::var("B"), Term::var("C")),
            &[add(Term::var("A"), Term::var("B"), Term::var("C"))],
        )
        .unwrap();
    engine
}

#[test]
fn test_every_fact_is_provable() {
    init_logging();
    let mut engine = Engine::new();
    let facts = vec![
        Term::atom("a"),
        Term::negated(Term::atom("b")),
        Term::compound("p", vec![Term::var("X"), Term::int(1)]),
        add(Term::int(2), Term::int(2), Term::int(4)),
    ];
    for fact in &facts {
        engine.add_fact(fact).unwrap();
    }

    for fact in &facts {
        assert!(engine.prove(fact), "{} should be provable", fact);
    }
}

#[test]
fn test_reset_leaves_nothing_to_prove() {
    init_logging();
    let mut engine = addition_engine();
    engine.add_fact(&Term::atom("a")).unwrap();
    engine.reset();

    assert_eq!(engine.rule_count(), 0);
    assert!(engine.solve_all(&Term::atom("a")).is_empty());
    assert!(engine
        .solve_all(&logic_forward(Term::int(3), Term::int(4), Term::var("R")))
        .is_empty());
}

#[test]
fn test_contradictory_facts_do_not_block_direct_proof() {
    init_logging();
    let mut engine = Engine::new();
    engine.add_fact(&Term::atom("a")).unwrap();
    engine.add_fact(&Term::negated(Term::atom("a"))).unwrap();

    assert_eq!(engine.solve_all(&Term::atom("a")).len(), 1);
    assert_eq!(engine.solve_all(&Term::negated(Term::atom("a"))).len(), 1);
}

#[test]
fn test_contradiction_does_not_prove_unrelated_goals() {
    init_logging();
    let mut engine = Engine::new();
    engine.add_fact(&Term::atom("a")).unwrap();
    engine.add_fact(&Term::negated(Term::atom("a"))).unwrap();

    assert!(!engine.prove(&Term::atom("b")));
}

#[test]
fn test_logic_forward_has_exactly_one_answer() {
    init_logging();
    let engine = addition_engine();
    let solutions = engine.solve_all(&logic_forward(Term::int(3), Term::int(4), Term::var("R")));

    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].value("R"), Some(&Term::int(7)));
    assert_eq!(solutions[0].to_string(), "R = 7");
}

#[test]
fn test_logic_forward_on_every_ground_pair() {
    init_logging();
    let engine = addition_engine();

    for x in 0..10 {
        for y in 0..10 {
            let solutions =
                engine.solve_all(&logic_forward(Term::int(x), Term::int(y), Term::var("Res")));
            assert_eq!(solutions.len(), 1, "logic_forward([{}, {}], Res)", x, y);
            assert_eq!(solutions[0].value("Res"), Some(&Term::int(x + y)));
        }
    }
}

#[test]
fn test_full_addition_table_with_unrelated_contradiction() {
    init_logging();
    let mut engine = addition_engine();
    engine.add_fact(&Term::atom("a")).unwrap();
    engine.add_fact(&Term::negated(Term::atom("a"))).unwrap();

    let solutions = engine.solve_all(&logic_forward(
        Term::var("Z1"),
        Term::var("Z2"),
        Term::var("Res"),
    ));
    assert_eq!(solutions.len(), 100);

    let table: BTreeSet<(String, String, String)> = solutions
        .iter()
        .map(|answer| {
            (
                answer.value("Z1").unwrap().to_string(),
                answer.value("Z2").unwrap().to_string(),
                answer.value("Res").unwrap().to_string(),
            )
        })
        .collect();
    let expected: BTreeSet<(String, String, String)> = (0..10)
        .flat_map(|x| (0..10).map(move |y| (x.to_string(), y.to_string(), (x + y).to_string())))
        .collect();
    assert_eq!(table, expected);
}

#[test]
fn test_unknown_goal_has_no_solutions() {
    init_logging();
    let engine = addition_engine();

    assert!(engine
        .solve_all(&Term::compound("mul", vec![Term::int(2), Term::int(3), Term::var("R")]))
        .is_empty());
    assert!(engine
        .solve_all(&add(Term::int(3), Term::int(4), Term::int(8)))
        .is_empty());
}

#[test]
fn test_proof_by_cases() {
    init_logging();
    let mut engine = Engine::new();
    engine.consult("g :- a. g :- -a.").unwrap();

    assert!(engine.prove(&Term::atom("g")));
    assert!(!engine.prove(&Term::atom("a")));
}

#[test]
fn test_self_contradictory_rule_terminates() {
    init_logging();
    let mut engine = Engine::new();
    engine.consult("g :- a, -a.").unwrap();

    assert!(engine.solve_all(&Term::atom("g")).is_empty());
}

#[test]
fn test_rules_chain() {
    init_logging();
    let mut engine = Engine::new();
    engine
        .consult(
            "parent(tom, bob). parent(bob, ann).
             grandparent(X, Z) :- parent(X, Y), parent(Y, Z).",
        )
        .unwrap();

    let solutions = engine.solve_all(&Term::compound(
        "grandparent",
        vec![Term::atom("tom"), Term::var("Who")],
    ));
    assert!(!solutions.is_empty());
    assert!(solutions
        .iter()
        .all(|answer| answer.value("Who") == Some(&Term::atom("ann"))));
}

#[test]
fn test_solutions_are_lazy() {
    init_logging();
    let engine = addition_engine();
    let mut solutions = engine.solve(&add(Term::var("X"), Term::var("Y"), Term::int(18)));

    let first = solutions.next().unwrap();
    assert_eq!(first.to_string(), "X = 9, Y = 9");
    assert!(solutions.next().is_none());
}

#[test]
fn test_most_recent_rule_answers_first() {
    init_logging();
    let mut engine = Engine::new();
    engine.consult("color(red). color(green).").unwrap();

    let colors: Vec<String> = engine
        .solve(&Term::compound("color", vec![Term::var("C")]))
        .map(|answer| answer.value("C").unwrap().to_string())
        .collect();
    assert_eq!(colors, vec!["green", "red"]);
}

#[test]
fn test_solution_limit() {
    init_logging();
    let mut engine = addition_engine();
    engine.set_config(SolverConfig::default().with_solution_limit(3));

    let solutions = engine.solve_all(&add(Term::var("X"), Term::var("Y"), Term::var("Z")));
    assert_eq!(solutions.len(), 3);
}

#[test]
fn test_ground_goal_answer_is_true() {
    init_logging();
    let engine = addition_engine();
    let solutions = engine.solve_all(&add(Term::int(1), Term::int(1), Term::int(2)));

    assert_eq!(solutions.len(), 1);
    assert!(solutions[0].is_empty());
    assert_eq!(solutions[0].to_string(), "true");
}

#[test]
fn test_unbound_answer_variables_are_named() {
    init_logging();
    let mut engine = Engine::new();
    engine.consult("p(_).").unwrap();

    let solutions = engine.solve_all(&Term::compound("p", vec![Term::var("X")]));
    assert_eq!(solutions.len(), 1);
    assert!(solutions[0].to_string().starts_with("X = _G"));
}

#[test]
fn test_malformed_rule_is_rejected() {
    let mut engine = Engine::new();
    let err = engine.consult("g :- 3.").unwrap_err();

    assert!(matches!(err, EngineError::Clause(ClauseError::MalformedRule { .. })));
    assert_eq!(engine.rule_count(), 0);
}

#[test]
fn test_parse_errors_are_reported() {
    let mut engine = Engine::new();
    let err = engine.consult("g :- .").unwrap_err();

    assert!(matches!(err, EngineError::Parse(_)));
    assert!(!err.to_string().is_empty());
}

#[test]
fn test_consult_returns_queries() {
    let mut engine = Engine::new();
    let program = engine.consult("a. ?- a.").unwrap();

    assert_eq!(program.queries().count(), 1);
    assert_eq!(engine.rule_count(), 1);
}

#[test]
fn test_depth_limit_cuts_recursion() {
    init_logging();
    let mut engine = Engine::with_config(SolverConfig::default().with_max_depth(2));
    engine.consult("nat(z). nat(s(X)) :- nat(X).").unwrap();

    let answers: Vec<String> = engine
        .solve(&Term::compound("nat", vec![Term::var("N")]))
        .map(|answer| answer.value("N").unwrap().to_string())
        .collect();
    assert_eq!(answers, vec!["s(z)", "z"]);
}

#[test]
fn test_rejected_alternatives_release_variables() {
    init_logging();
    let mut program = String::from("pick(X) :- item(X), check(X).\ncheck(none).\n");
    for n in 0..200 {
        program.push_str(&format!("item(i{}).\n", n));
    }
    let mut engine = Engine::new();
    engine.consult(&program).unwrap();

    let mut solutions = engine.solve(&Term::compound("pick", vec![Term::var("X")]));
    assert!(solutions.next().is_none());
    assert_eq!(solutions.var_count(), 1);
}

#[test]
fn test_variables_stay_bounded_while_enumerating() {
    init_logging();
    let mut program = String::from("pick(X) :- item(X), check(X).\ncheck(i150).\n");
    for n in 0..200 {
        program.push_str(&format!("item(i{}).\n", n));
    }
    let mut engine = Engine::new();
    engine.consult(&program).unwrap();

    let mut solutions = engine.solve(&Term::compound("pick", vec![Term::var("X")]));
    let answer = solutions.next().expect("i150 passes the check");
    assert_eq!(answer.to_string(), "X = i150");
    assert!(solutions.var_count() <= 4, "{} variables", solutions.var_count());
}
