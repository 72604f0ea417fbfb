use otter_nd::{
    config::Config,
    context::Context,
    db::world::World,
    procedures::{assert, eval},
    structures::proposition::Proposition,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn disjunctive_syllogism() {
    init_logger();
    let mut world = World::default();

    let p = Proposition::atom("p");
    let q = Proposition::atom("q");
    let r = Proposition::atom("r");

    assert!(assert(Proposition::disjunction(p.clone(), q.clone()), &mut world).is_ok());
    assert!(assert(Proposition::conditional(p.clone(), r.clone()), &mut world).is_ok());
    assert!(assert(Proposition::conditional(q.clone(), r.clone()), &mut world).is_ok());

    assert!(eval(&r, &world));
    assert!(!eval(&p, &world));
    assert!(!eval(&q, &world));
}

#[test]
fn disjunctive_syllogism_unsaturated() {
    init_logger();
    let mut config = Config::default();
    config.saturation.value = false;
    let mut the_context = Context::from_config(config);

    let p = Proposition::atom("p");
    let q = Proposition::atom("q");
    let r = Proposition::atom("r");

    assert!(the_context.assert(Proposition::disjunction(p.clone(), q.clone())).is_ok());
    assert!(the_context.assert(Proposition::conditional(p.clone(), r.clone())).is_ok());
    assert!(the_context.assert(Proposition::conditional(q.clone(), r.clone())).is_ok());
    assert!(the_context.is_false(&r));

    // Modus ponens applies only if the antecedent holds when the conditional is asserted.
    the_context.reset();
    assert!(the_context.assert(Proposition::conditional(p.clone(), r.clone())).is_ok());
    assert!(the_context.assert(p.clone()).is_ok());
    assert!(the_context.is_false(&r));

    the_context.reset();
    assert!(the_context.assert(p.clone()).is_ok());
    assert!(the_context.assert(Proposition::conditional(p, r.clone())).is_ok());
    assert!(the_context.is_true(&r));
}

#[test]
fn contradiction() {
    init_logger();
    let mut world = World::default();
    let p = Proposition::atom("p");

    assert!(assert(p.clone(), &mut world).is_ok());
    assert!(assert(Proposition::negation(p), &mut world).is_ok());

    let bottom = Proposition::Bottom;
    assert!(eval(&bottom, &world));
    assert!(!world.has_bottom());
}

#[test]
fn conjunction_cascade() {
    init_logger();
    let mut world = World::default();
    let p = Proposition::atom("p");
    let q = Proposition::atom("q");

    assert!(assert(Proposition::conjunction(p.clone(), q.clone()), &mut world).is_ok());

    assert!(eval(&p, &world));
    assert!(eval(&q, &world));
}

#[test]
fn nested_cascade() {
    init_logger();
    let mut the_context = Context::default();
    let p = Proposition::atom("p");
    let q = Proposition::atom("q");
    let r = Proposition::atom("r");
    let s = Proposition::atom("s");

    // p ∧ (p → (q ∧ ¬¬r)), with (r → s) asserted later.
    let nested = Proposition::conjunction(
        p.clone(),
        Proposition::conditional(
            p.clone(),
            Proposition::conjunction(
                q.clone(),
                Proposition::negation(Proposition::negation(r.clone())),
            ),
        ),
    );

    assert!(the_context.assert(nested).is_ok());
    assert!(the_context.is_true(&q));
    assert!(the_context.is_true(&r));
    assert!(the_context.is_false(&s));

    assert!(the_context.assert(Proposition::conditional(r, s.clone())).is_ok());
    assert!(the_context.is_true(&s));
}

#[test]
fn hypothetical_reasoning() {
    init_logger();
    let world = World::default();
    let p = Proposition::atom("p");
    let q = Proposition::atom("q");

    // ⊢ p → (q → p)
    let weakening = Proposition::conditional(p.clone(), Proposition::conditional(q.clone(), p.clone()));
    assert!(eval(&weakening, &world));

    // ⊢ ¬(p ∧ ¬p)
    let non_contradiction = Proposition::negation(Proposition::conjunction(
        p.clone(),
        Proposition::negation(p.clone()),
    ));
    assert!(eval(&non_contradiction, &world));

    // ⊬ p → q
    assert!(!eval(&Proposition::conditional(p, q), &world));
    assert!(world.is_empty());
}

#[test]
fn modus_tollens() {
    init_logger();
    let mut world = World::default();
    let p = Proposition::atom("p");
    let q = Proposition::atom("q");

    assert!(assert(Proposition::conditional(p.clone(), q.clone()), &mut world).is_ok());
    assert!(assert(Proposition::negation(q), &mut world).is_ok());

    assert!(eval(&Proposition::negation(p), &world));
}

#[test]
fn explosion() {
    init_logger();
    let mut the_context = Context::default();

    assert!(the_context.assert(Proposition::bottom()).is_ok());
    assert!(the_context.is_true(&Proposition::atom("anything")));
    assert!(the_context.assert(Proposition::bottom()).is_err());

    the_context.reset();
    assert!(the_context.is_false(&Proposition::atom("anything")));
    assert!(the_context.assert(Proposition::bottom()).is_ok());
}

#[test]
fn independent_case_analyses() {
    init_logger();
    let mut world = World::default();
    let cases = 8;

    for case in 0..cases {
        let a = Proposition::atom(format!("a{case}"));
        let b = Proposition::atom(format!("b{case}"));
        let c = Proposition::atom(format!("c{case}"));

        assert!(assert(Proposition::disjunction(a.clone(), b.clone()), &mut world).is_ok());
        assert!(assert(Proposition::conditional(a, c.clone()), &mut world).is_ok());
        assert!(assert(Proposition::conditional(b, c), &mut world).is_ok());
    }

    for case in 0..cases {
        assert!(eval(&Proposition::atom(format!("c{case}")), &world));
        assert!(!eval(&Proposition::atom(format!("a{case}")), &world));
        assert!(!eval(&Proposition::atom(format!("b{case}")), &world));
    }
    assert!(!world.has_bottom());
}
