use crate::expression::Operator;

/// Decides whether evaluating an operator assignment under a bracket
/// layout could yield a result the unbracketed arrangement cannot.
///
/// Evaluation is the expensive step and duplicate solution shapes are
/// unwanted, so an assignment is only worth evaluating when:
/// - it mixes multiplicative and additive operators (pure `+`/`-` and
///   pure `*`/`/` are insensitive to grouping here); and
/// - every bracket matters: it contains at least one `+`/`-`, and is not
///   flanked on both sides by an additive context that makes the
///   grouping vacuous. E.g. in `1 * ((2 + 3) + 4)` the brackets around
///   `2 + 3` group nothing new.
///
/// `parts` is the token stream with operators already written into their
/// slots; `operators` is the same assignment in slot order.
pub fn changes_result(operators: &[Operator], parts: &[String]) -> bool {
    if !operators.iter().any(|op| op.is_multiplicative()) {
        return false;
    }
    if !operators.iter().any(|op| op.is_additive()) {
        return false;
    }

    let mut opened = 0usize;
    // One entry per currently open bracket.
    let mut contains_additive: Vec<bool> = Vec::new();
    let mut additive_before_open: Vec<bool> = Vec::new();
    let mut operator_index = 0usize;

    for (i, part) in parts.iter().enumerate() {
        if part == "(" {
            opened += 1;
            contains_additive.push(false);
            let boundary_before = i == 0
                || parts[i - 1] == "("
                || (operator_index > 0
                    && operators
                        .get(operator_index - 1)
                        .is_some_and(|op| op.is_additive()));
            additive_before_open.push(boundary_before);
        } else if opened > 0 {
            if part == ")" {
                if !contains_additive.pop().unwrap_or(false) {
                    return false;
                }
                let before = additive_before_open.pop().unwrap_or(false);
                let boundary_after = i + 1 >= parts.len()
                    || parts[i + 1] == ")"
                    || operators
                        .get(operator_index)
                        .is_some_and(|op| op.is_additive());
                if before && boundary_after {
                    return false;
                }
                opened -= 1;
            } else if !is_number(part) {
                if operators
                    .get(operator_index)
                    .is_some_and(|op| op.is_additive())
                    && let Some(flag) = contains_additive.last_mut()
                {
                    *flag = true;
                }
                operator_index += 1;
            }
        } else if !is_number(part) {
            operator_index += 1;
        }
    }
    true
}

fn is_number(part: &str) -> bool {
    !part.is_empty() && part.chars().all(|c| c.is_ascii_digit())
}
