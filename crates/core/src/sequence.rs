/// Iterator over F(0), F(1), ..., F(len - 1) with wrapping arithmetic.
#[derive(Clone, Debug)]
pub struct Sequence {
    current: u64,
    next: u64,
    remaining: u64,
}

/// The first `len` fibonacci numbers, starting at F(0).
pub fn sequence(len: u64) -> Sequence {
    Sequence {
        current: 0,
        next: 1,
        remaining: len,
    }
}

impl Iterator for Sequence {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let value = self.current;
        self.current = self.next;
        self.next = value.wrapping_add(self.next);
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl ExactSizeIterator for Sequence {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fibonacci;

    #[test]
    fn first_terms() {
        let terms: Vec<u64> = sequence(11).collect();
        assert_eq!(terms, vec![0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55]);
    }

    #[test]
    fn empty_sequence() {
        assert_eq!(sequence(0).next(), None);
    }

    #[test]
    fn matches_pointwise_computation_past_overflow() {
        for (n, value) in sequence(120).enumerate() {
            assert_eq!(value, fibonacci(n as u64), "n = {n}");
        }
    }

    #[test]
    fn reports_exact_length() {
        assert_eq!(sequence(7).len(), 7);
    }
}
