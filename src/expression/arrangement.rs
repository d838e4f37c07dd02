use crate::expression::operator::Operator;

/// Token list for an expression under construction: operand literals,
/// operator slots and bracket tokens, with parallel index arrays so
/// bracket insertion only has to shift bookkeeping.
#[derive(Debug, Clone)]
pub struct Arrangement {
    parts: Vec<String>,
    operand_slots: Vec<usize>,
    operator_slots: Vec<usize>,
}

impl Arrangement {
    /// Builds the unbracketed arrangement `n0 _ n1 _ ... nk`, with one
    /// empty operator slot between each pair of operands.
    pub fn new(numbers: &[i32]) -> Self {
        let mut parts = Vec::with_capacity(numbers.len() * 2);
        let mut operand_slots = Vec::with_capacity(numbers.len());
        let mut operator_slots = Vec::with_capacity(numbers.len().saturating_sub(1));

        for (i, number) in numbers.iter().enumerate() {
            if i > 0 {
                operator_slots.push(parts.len());
                parts.push(String::new());
            }
            operand_slots.push(parts.len());
            parts.push(number.to_string());
        }

        Self {
            parts,
            operand_slots,
            operator_slots,
        }
    }

    pub fn operand_count(&self) -> usize {
        self.operand_slots.len()
    }

    pub fn operator_count(&self) -> usize {
        self.operator_slots.len()
    }

    /// Writes an operator assignment into the operator slots. Extra
    /// operators beyond the available slots are ignored.
    pub fn set_operators(&mut self, operators: &[Operator]) {
        for (&slot, op) in self.operator_slots.iter().zip(operators) {
            let part = &mut self.parts[slot];
            part.clear();
            part.push(op.symbol());
        }
    }

    /// Inserts a bracket pair around the operand span `[start, end)`,
    /// shifting the recorded slot positions past each insertion point.
    pub fn insert_brackets(&mut self, start: usize, end: usize) {
        assert!(
            start < end && end <= self.operand_slots.len(),
            "bracket span {}..{} out of range for {} operands",
            start,
            end,
            self.operand_slots.len()
        );

        let open_at = self.operand_slots[start];
        self.parts.insert(open_at, "(".to_string());
        self.shift_slots_from(open_at);

        let close_at = self.operand_slots[end - 1] + 1;
        self.parts.insert(close_at, ")".to_string());
        self.shift_slots_from(close_at);
    }

    fn shift_slots_from(&mut self, position: usize) {
        for slot in &mut self.operand_slots {
            if *slot >= position {
                *slot += 1;
            }
        }
        for slot in &mut self.operator_slots {
            if *slot >= position {
                *slot += 1;
            }
        }
    }

    pub fn parts(&self) -> &[String] {
        &self.parts
    }

    pub fn render(&self) -> String {
        self.parts.concat()
    }
}
