use crate::expression::{Arrangement, Operator};
use crate::placement::generator::generate_placements;
use crate::placement::pruning::changes_result;
use crate::placement::types::{Placement, Span};

fn bracketed_parts(numbers: &[i32], operators: &[Operator], spans: &[(usize, usize)]) -> Vec<String> {
    let mut arrangement = Arrangement::new(numbers);
    for &(start, end) in spans {
        arrangement.insert_brackets(start, end);
    }
    arrangement.set_operators(operators);
    arrangement.parts().to_vec()
}

#[test]
fn test_no_placements_below_three_operands() {
    assert!(generate_placements(0, false).is_empty());
    assert!(generate_placements(1, false).is_empty());
    assert!(generate_placements(2, false).is_empty());
    assert!(generate_placements(2, true).is_empty());
}

#[test]
fn test_placements_for_three_operands() {
    let placements = generate_placements(3, false);
    let expected = vec![
        Placement::new(vec![Span::new(0, 2)]),
        Placement::new(vec![Span::new(1, 3)]),
    ];
    assert_eq!(placements, expected);
}

#[test]
fn test_placements_for_four_operands() {
    let placements = generate_placements(4, false);
    let expected = vec![
        Placement::new(vec![Span::new(0, 3)]),
        Placement::new(vec![Span::new(1, 4)]),
        Placement::new(vec![Span::new(0, 2)]),
        Placement::new(vec![Span::new(0, 2), Span::new(2, 4)]),
        Placement::new(vec![Span::new(1, 3)]),
        Placement::new(vec![Span::new(2, 4)]),
    ];
    assert_eq!(placements, expected);
}

#[test]
fn test_placement_count_for_five_operands() {
    assert_eq!(generate_placements(5, false).len(), 14);
}

#[test]
fn test_placement_generation_is_deterministic() {
    assert_eq!(generate_placements(7, false), generate_placements(7, false));
    assert_eq!(generate_placements(6, true), generate_placements(6, true));
}

#[test]
fn test_nested_children_only_on_wide_spans() {
    let placements = generate_placements(4, true);
    for placement in &placements {
        for span in &placement.spans {
            if span.len() >= 3 {
                assert_eq!(span.inner, generate_placements(span.len(), true));
                assert!(!span.inner.is_empty());
            } else {
                assert!(span.inner.is_empty());
            }
        }
    }

    let wide = placements
        .iter()
        .flat_map(|placement| &placement.spans)
        .find(|span| span.len() == 3);
    assert!(wide.is_some());
}

#[test]
fn test_flat_placements_carry_no_children() {
    let placements = generate_placements(7, false);
    for placement in &placements {
        for span in &placement.spans {
            assert!(span.inner.is_empty());
        }
    }
}

#[test]
fn test_pruning_rejects_pure_additive_assignments() {
    let operators = [Operator::Add, Operator::Subtract];
    let parts = bracketed_parts(&[1, 2, 3], &operators, &[(0, 2)]);
    assert!(!changes_result(&operators, &parts));
}

#[test]
fn test_pruning_rejects_pure_multiplicative_assignments() {
    let operators = [Operator::Multiply, Operator::Divide];
    let parts = bracketed_parts(&[1, 2, 3], &operators, &[(0, 2)]);
    assert!(!changes_result(&operators, &parts));
}

#[test]
fn test_pruning_rejects_bracket_without_additive_content() {
    // (1*2)+3 evaluates the same as 1*2+3.
    let operators = [Operator::Multiply, Operator::Add];
    let parts = bracketed_parts(&[1, 2, 3], &operators, &[(0, 2)]);
    assert!(!changes_result(&operators, &parts));

    // 2+(3*4) likewise.
    let operators = [Operator::Add, Operator::Multiply];
    let parts = bracketed_parts(&[2, 3, 4], &operators, &[(1, 3)]);
    assert!(!changes_result(&operators, &parts));
}

#[test]
fn test_pruning_rejects_vacuous_nested_bracket() {
    // 1*((2+3)+4): the inner brackets regroup nothing.
    let operators = [Operator::Multiply, Operator::Add, Operator::Add];
    let parts = bracketed_parts(&[1, 2, 3, 4], &operators, &[(1, 4), (1, 3)]);
    assert_eq!(
        parts.concat(),
        "1*((2+3)+4)".to_string()
    );
    assert!(!changes_result(&operators, &parts));
}

#[test]
fn test_pruning_rejects_bracket_flanked_by_additive_context() {
    // 1+(2+3*4)+5 evaluates the same as 1+2+3*4+5.
    let operators = [
        Operator::Add,
        Operator::Add,
        Operator::Multiply,
        Operator::Add,
    ];
    let parts = bracketed_parts(&[1, 2, 3, 4, 5], &operators, &[(1, 4)]);
    assert!(!changes_result(&operators, &parts));
}

#[test]
fn test_pruning_keeps_groupings_that_change_the_result() {
    // (1+2)*3 != 1+2*3
    let operators = [Operator::Add, Operator::Multiply];
    let parts = bracketed_parts(&[1, 2, 3], &operators, &[(0, 2)]);
    assert!(changes_result(&operators, &parts));

    // 4*(2+3) != 4*2+3
    let operators = [Operator::Multiply, Operator::Add];
    let parts = bracketed_parts(&[4, 2, 3], &operators, &[(1, 3)]);
    assert!(changes_result(&operators, &parts));

    // 1*(2+3)+4 != 1*2+3+4
    let operators = [Operator::Multiply, Operator::Add, Operator::Add];
    let parts = bracketed_parts(&[1, 2, 3, 4], &operators, &[(1, 3)]);
    assert!(changes_result(&operators, &parts));
}
