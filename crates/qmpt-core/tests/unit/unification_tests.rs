use super::*;

fn atom(name: &str) -> Term {
    Term::atom(name)
}

fn f(args: Vec<Term>) -> Term {
    Term::compound("f", args)
}

#[test]
fn test_unify_binds_variable() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();

    assert!(unify(&mut bindings, &x, &Term::int(7)));
    assert_eq!(bindings.resolve(&x), Term::int(7));
}

#[test]
fn test_unify_compound_binds_both_sides() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    let left = f(vec![x.clone(), atom("b")]);
    let right = f(vec![atom("a"), y.clone()]);

    assert!(unify(&mut bindings, &left, &right));
    assert_eq!(bindings.resolve(&x), atom("a"));
    assert_eq!(bindings.resolve(&y), atom("b"));
    assert_eq!(bindings.resolve(&left), bindings.resolve(&right));
}

#[test]
fn test_failed_unify_leaves_no_bindings() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();

    // X binds to a before the second argument clashes
    let left = f(vec![x.clone(), atom("b")]);
    let right = f(vec![atom("a"), atom("c")]);

    assert!(!unify(&mut bindings, &left, &right));
    assert_eq!(bindings.resolve(&x), x);
}

#[test]
fn test_unify_respects_negation() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();

    assert!(!unify(&mut bindings, &atom("a"), &Term::neg(atom("a"))));
    assert!(unify(&mut bindings, &Term::neg(x.clone()), &Term::neg(atom("a"))));
    assert_eq!(bindings.resolve(&x), atom("a"));
}

#[test]
fn test_constants_of_different_kinds_do_not_unify() {
    let mut bindings = Bindings::new();
    let one = Term::int(1);
    let string = Term::Str(qmpt_ast::symbol("1"));
    let name = atom("1");

    assert!(!unify(&mut bindings, &one, &string));
    assert!(!unify(&mut bindings, &string, &name));
    assert!(!unify(&mut bindings, &f(vec![one.clone()]), &Term::compound("g", vec![one])));
}

#[test]
fn test_no_occurs_check() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();

    assert!(unify(&mut bindings, &x, &f(vec![x.clone()])));
    assert!(bindings.lookup(x.as_var().unwrap()).is_some());
}

#[test]
fn test_undo_to_mark() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    assert!(unify(&mut bindings, &x, &atom("a")));
    let mark = bindings.mark();
    assert!(unify(&mut bindings, &y, &atom("b")));
    bindings.undo(mark);

    assert_eq!(bindings.resolve(&x), atom("a"));
    assert_eq!(bindings.resolve(&y), y);
}

#[test]
fn test_undo_releases_fresh_variables() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let mark = bindings.mark();

    let y = bindings.fresh();
    bindings.fresh_block(3);
    assert!(unify(&mut bindings, &x, &f(vec![y])));
    assert_eq!(bindings.var_count(), 5);

    bindings.undo(mark);
    assert_eq!(bindings.var_count(), 1);
    assert_eq!(bindings.resolve(&x), x);
    assert_eq!(bindings.fresh(), Term::Var(Var::new(1)));
}

#[test]
fn test_unbind_keeps_variables() {
    let mut bindings = Bindings::new();
    let mark = bindings.mark();
    let x = bindings.fresh();
    assert!(unify(&mut bindings, &x, &atom("a")));

    bindings.unbind(mark);
    assert_eq!(bindings.var_count(), 1);
    assert_eq!(bindings.resolve(&x), x);
}

#[test]
fn test_walk_follows_chains() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    assert!(unify(&mut bindings, &x, &y));
    assert!(unify(&mut bindings, &y, &Term::int(3)));
    assert_eq!(bindings.walk(&x), &Term::int(3));
}

#[test]
fn test_structurally_equal_distinguishes_variables() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    assert!(structurally_equal(&bindings, &f(vec![x.clone()]), &f(vec![x.clone()])));
    assert!(!structurally_equal(&bindings, &f(vec![x.clone()]), &f(vec![y.clone()])));

    assert!(unify(&mut bindings, &x, &y));
    assert!(structurally_equal(&bindings, &f(vec![x]), &f(vec![y])));
}

#[test]
fn test_alpha_equivalent_up_to_renaming() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();
    let z = bindings.fresh();

    assert!(alpha_equivalent(
        &bindings,
        &f(vec![x.clone(), y.clone()]),
        &f(vec![y.clone(), z.clone()])
    ));
    assert!(alpha_equivalent(
        &bindings,
        &f(vec![x.clone(), x.clone()]),
        &f(vec![z.clone(), z.clone()])
    ));
}

#[test]
fn test_alpha_equivalence_is_bijective() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    assert!(!alpha_equivalent(
        &bindings,
        &f(vec![x.clone(), x.clone()]),
        &f(vec![x.clone(), y.clone()])
    ));
    assert!(!alpha_equivalent(
        &bindings,
        &f(vec![x.clone(), y.clone()]),
        &f(vec![x.clone(), x.clone()])
    ));
    assert!(!alpha_equivalent(&bindings, &x, &atom("a")));
}

#[test]
fn test_alpha_equivalent_is_pure() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    let mark = bindings.mark();
    assert!(alpha_equivalent(&bindings, &x, &y));
    assert_eq!(bindings.mark(), mark);
}

#[test]
fn test_alpha_unify_makes_terms_identical() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    let left = f(vec![x.clone(), atom("a")]);
    let right = f(vec![y.clone(), atom("a")]);
    assert!(alpha_unify(&mut bindings, &left, &right));
    assert!(structurally_equal(&bindings, &left, &right));

    // f(Z) and f(b) unify but are not variants
    let z = bindings.fresh();
    assert!(!alpha_unify(&mut bindings, &f(vec![z.clone()]), &f(vec![atom("b")])));
    assert_eq!(bindings.resolve(&z), z);
}

#[test]
fn test_alpha_equivalent_sets_ignore_order() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();

    let left = vec![f(vec![x.clone()]), Term::neg(atom("a"))];
    let right = vec![Term::neg(atom("a")), f(vec![y.clone()])];

    assert!(alpha_equivalent_sets(&bindings, &Renaming::new(), &left, &right));
    assert!(!alpha_equivalent_sets(
        &bindings,
        &Renaming::new(),
        &left,
        &right[..1]
    ));
}

#[test]
fn test_alpha_equivalent_sets_share_one_renaming() {
    let mut bindings = Bindings::new();
    let x = bindings.fresh();
    let y = bindings.fresh();
    let z = bindings.fresh();

    // {f(X), g(X)} is not a variant of {f(Y), g(Z)}
    let g = |term: Term| Term::compound("g", vec![term]);
    let left = vec![f(vec![x.clone()]), g(x.clone())];
    let right = vec![f(vec![y.clone()]), g(z.clone())];

    assert!(!alpha_equivalent_sets(&bindings, &Renaming::new(), &left, &right));
}
