use log::debug;

/// Generates every ordered selection of `length` values from `values`.
///
/// Duplicate values are treated as distinct positions, the way repeated
/// tiles in a number draw are distinct physical tiles. Order is fixed
/// (lexicographic by position), so repeated calls return identical
/// lists.
///
/// This uses an iterative approach with an explicit stack.
pub fn generate_permutations(values: &[i32], length: usize) -> Vec<Vec<i32>> {
    if length == 0 || length > values.len() {
        return Vec::new();
    }

    let mut result = Vec::new();
    let mut stack: Vec<Vec<usize>> = vec![Vec::new()];

    while let Some(chosen) = stack.pop() {
        if chosen.len() == length {
            result.push(chosen.iter().map(|&index| values[index]).collect());
            continue;
        }

        for index in (0..values.len()).rev() {
            if !chosen.contains(&index) {
                let mut next = chosen.clone();
                next.push(index);
                stack.push(next);
            }
        }
    }

    debug!(
        "Generated {} permutations of length {} from {} values",
        result.len(),
        length,
        values.len()
    );
    result
}
