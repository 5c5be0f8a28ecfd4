use super::*;

fn p(args: Vec<Term>) -> Term {
    Term::compound("p", args)
}

fn resolved(bindings: &Bindings, terms: &[Term]) -> Vec<Term> {
    bindings.resolve_all(terms)
}

#[test]
fn test_dedup_structural_keeps_first_occurrence() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    let terms = vec![
        p(vec![x.clone()]),
        Term::atom("a"),
        p(vec![y.clone()]),
        p(vec![x.clone()]),
        Term::atom("a"),
    ];
    let kept = dedup_structural(&bindings, &terms);

    assert_eq!(kept, vec![p(vec![x]), Term::atom("a"), p(vec![y])]);
}

#[test]
fn test_dedup_structural_sees_through_bindings() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    assert!(crate::unify(&mut bindings, &x, &Term::int(1)));

    let kept = dedup_structural(&bindings, &[p(vec![x]), p(vec![Term::int(1)])]);
    assert_eq!(kept.len(), 1);
}

#[test]
fn test_dedup_alpha_pure_binds_nothing() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    let mark = bindings.mark();
    let kept = dedup_alpha_pure(&bindings, &[p(vec![x.clone()]), p(vec![y.clone()])]);

    assert_eq!(kept, vec![p(vec![x.clone()])]);
    assert_eq!(bindings.mark(), mark);
    assert_eq!(bindings.resolve(&y), y);
}

#[test]
fn test_dedup_alpha_unifies_duplicates_into_first() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    let terms = vec![p(vec![x.clone()]), Term::atom("a"), p(vec![y.clone()])];
    let kept = dedup_alpha(&mut bindings, &terms);

    assert_eq!(kept, vec![p(vec![x.clone()]), Term::atom("a")]);
    assert!(structurally_equal(&bindings, &x, &y));
}

#[test]
fn test_dedup_alpha_keeps_non_variants() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();

    let terms = vec![p(vec![x.clone()]), p(vec![Term::int(3)]), Term::neg(p(vec![x]))];
    let kept = dedup_alpha(&mut bindings, &terms);

    assert_eq!(kept, terms);
}

#[test]
fn test_dedup_alpha_repeats_until_nothing_collapses() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    // Collapsing h(Y) into h(X) binds X = Y, after which f(Y, Y) is a
    // duplicate of f(X, Y) as well
    let f = |a: &Term, b: &Term| Term::compound("f", vec![a.clone(), b.clone()]);
    let h = |a: &Term| Term::compound("h", vec![a.clone()]);
    let terms = vec![f(&x, &y), f(&y, &y), h(&x), h(&y)];

    let kept = dedup_alpha(&mut bindings, &terms);
    assert_eq!(kept, vec![f(&x, &y), h(&x)]);

    let again = dedup_alpha(&mut bindings, &kept);
    assert_eq!(resolved(&bindings, &again), resolved(&bindings, &kept));
}

#[test]
fn test_dedup_alpha_is_idempotent() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();
    let z = bindings.fresh();

    let samples = vec![
        vec![],
        vec![Term::atom("a"), Term::neg(Term::atom("a")), Term::atom("a")],
        vec![p(vec![x.clone()]), p(vec![y.clone()]), p(vec![z.clone()])],
        vec![
            Term::compound("add", vec![x.clone(), y.clone(), z.clone()]),
            Term::compound("add", vec![y.clone(), x.clone(), z.clone()]),
            Term::compound("add", vec![x.clone(), x.clone(), Term::int(0)]),
        ],
    ];

    for sample in samples {
        let once = dedup_alpha(&mut bindings, &sample);
        let mark = bindings.mark();
        let twice = dedup_alpha(&mut bindings, &once);

        assert_eq!(twice, once);
        assert_eq!(bindings.mark(), mark, "second pass bound variables");
    }
}
