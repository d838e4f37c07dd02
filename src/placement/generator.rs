use log::debug;

use super::types::{Placement, Span};

/// A span must cover at least this many operands before brackets nested
/// inside it can group anything.
const MIN_NESTED_SPAN: usize = 3;

/// Enumerates the non-redundant bracket layouts for `operand_count`
/// operand slots.
///
/// Order is fixed: descending span size, then ascending start offset,
/// with the span-plus-remainder combinations emitted directly after
/// their leading span. Repeated calls with equal arguments return
/// identical lists, so results can be cached per operand count.
///
/// With `nested` set, every span covering at least three operands
/// additionally carries the layouts of its own interior, expressed
/// relative to the span start.
pub fn generate_placements(operand_count: usize, nested: bool) -> Vec<Placement> {
    let mut placements = flat_placements(operand_count);
    if nested {
        for placement in &mut placements {
            for span in &mut placement.spans {
                if span.len() >= MIN_NESTED_SPAN {
                    span.inner = generate_placements(span.len(), true);
                }
            }
        }
    }
    debug!(
        "Generated {} placements for {} operands (nested: {})",
        placements.len(),
        operand_count,
        nested
    );
    placements
}

fn flat_placements(operand_count: usize) -> Vec<Placement> {
    let mut placements = Vec::new();
    if operand_count < 3 {
        // A bracket around fewer than 2 operands groups nothing, and one
        // around the whole expression changes nothing.
        return placements;
    }

    for size in (2..operand_count).rev() {
        for start in 0..=(operand_count - size) {
            let end = start + size;
            placements.push(Placement::new(vec![Span::new(start, end)]));

            if operand_count - end >= 2 {
                placements.push(Placement::new(vec![
                    Span::new(start, end),
                    Span::new(end, operand_count),
                ]));
                // The remainder after the span can carry bracket layouts
                // of its own; shift them into place behind the span.
                for remainder in flat_placements(operand_count - end) {
                    let mut spans = vec![Span::new(start, end)];
                    spans.extend(
                        remainder
                            .spans
                            .into_iter()
                            .map(|span| Span::new(span.start + end, span.end + end)),
                    );
                    placements.push(Placement::new(spans));
                }
            }
        }
    }
    placements
}
