use propcheck::{
    ast::{Proposition, VariableId},
    evaluate::Assignment,
    parser::parse_proposition,
    variables::VariableSet,
};

fn atom(index: usize) -> Proposition {
    Proposition::Atomic(VariableId(index))
}

#[test]
fn enumeration_is_ascending_and_complete() {
    let masks = Assignment::enumerate(2).map(|a| a.0).collect::<Vec<_>>();
    assert_eq!(masks, [0, 1, 2, 3]);

    // A problem without variables still has the one empty assignment.
    let masks = Assignment::enumerate(0).map(|a| a.0).collect::<Vec<_>>();
    assert_eq!(masks, [0]);
}

#[test]
fn assignments_read_single_bits() {
    let assignment = Assignment(0b101);

    assert!(assignment.value_of(VariableId(0)));
    assert!(!assignment.value_of(VariableId(1)));
    assert!(assignment.value_of(VariableId(2)));
    assert!(!assignment.value_of(VariableId(31)));
}

#[test]
fn connective_truth_tables() {
    let p = || Box::new(atom(0));
    let q = || Box::new(atom(1));

    // (P, Q) rows in assignment order: 00, 10, 01, 11.
    let test_cases = [
        (Proposition::Conjunction(p(), q()), [false, false, false, true]),
        (Proposition::Disjunction(p(), q()), [false, true, true, true]),
        (
            Proposition::ExclusiveDisjunction(p(), q()),
            [false, true, true, false],
        ),
        (Proposition::Implication(p(), q()), [true, false, true, true]),
        (Proposition::Equivalence(p(), q()), [true, false, false, true]),
    ];

    for (proposition, expected) in test_cases {
        for (assignment, expected) in Assignment::enumerate(2).zip(expected) {
            assert_eq!(
                proposition.evaluate(assignment),
                expected,
                "proposition: {proposition}, mask: {}",
                assignment.0
            );
        }
    }
}

#[test]
fn constants_and_negation() {
    for assignment in Assignment::enumerate(1) {
        assert!(Proposition::Tautology.evaluate(assignment));
        assert!(!Proposition::Contradiction.evaluate(assignment));
        assert_eq!(
            Proposition::Negation(Box::new(atom(0))).evaluate(assignment),
            !assignment.value_of(VariableId(0))
        );
    }
}

#[test]
fn implication_matches_its_conjunction_form() {
    // (L => R) is !(L & !R) under every assignment.
    let left = Proposition::Disjunction(Box::new(atom(0)), Box::new(atom(1)));
    let right = Proposition::Negation(Box::new(atom(2)));

    let implication =
        Proposition::Implication(Box::new(left.clone()), Box::new(right.clone()));
    let expanded = Proposition::Negation(Box::new(Proposition::Conjunction(
        Box::new(left),
        Box::new(Proposition::Negation(Box::new(right))),
    )));

    for assignment in Assignment::enumerate(3) {
        assert_eq!(
            implication.evaluate(assignment),
            expanded.evaluate(assignment),
            "mask: {}",
            assignment.0
        );
    }
}

#[test]
fn synonyms_evaluate_identically() {
    let test_cases = [
        ("([P] and [Q])", "([P] & [Q])"),
        ("([P] then [Q])", "([P] => [Q])"),
        ("([P] if [Q])", "([Q] then [P])"),
        ("([P] iff [Q])", "([P] <=> [Q])"),
    ];

    for (left, right) in test_cases {
        let mut variables = VariableSet::new();
        let left = parse_proposition(left, 1, &mut variables).unwrap();
        let right = parse_proposition(right, 2, &mut variables).unwrap();

        for assignment in Assignment::enumerate(variables.len()) {
            assert_eq!(
                left.evaluate(assignment),
                right.evaluate(assignment),
                "propositions: {left} vs {right}, mask: {}",
                assignment.0
            );
        }
    }
}
