use std::sync::atomic::{AtomicU64, Ordering};

/// Счетчик для выпуска ID записей.
///
/// Заменяет ID на основе времени создания: два создания в одну и ту же
/// миллисекунду получают разные номера.
#[derive(Debug)]
pub struct IdSequence {
    next: AtomicU64,
}

impl IdSequence {
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }

    /// Счетчик, который продолжает после максимального из уже занятых номеров
    pub fn after<I>(taken: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let first = taken.into_iter().max().map_or(1, |max| max.saturating_add(1));
        Self::starting_at(first)
    }

    /// Выдать следующий номер
    pub fn next_value(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Номер, который будет выдан следующим (без резервирования)
    pub fn peek(&self) -> u64 {
        self.next.load(Ordering::Relaxed)
    }
}

impl Clone for IdSequence {
    fn clone(&self) -> Self {
        Self::starting_at(self.peek())
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_after_skips_taken_numbers() {
        let seq = IdSequence::after(vec![3, 7, 5]);
        assert_eq!(seq.next_value(), 8);
        assert_eq!(seq.next_value(), 9);
        assert_eq!(IdSequence::after(Vec::new()).peek(), 1);
    }

    #[test]
    fn test_no_collisions_across_threads() {
        let seq = Arc::new(IdSequence::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let seq = Arc::clone(&seq);
                std::thread::spawn(move || (0..250).map(|_| seq.next_value()).collect::<Vec<_>>())
            })
            .collect();

        let mut seen = HashSet::new();
        for handle in handles {
            for value in handle.join().unwrap() {
                assert!(seen.insert(value), "duplicate id {value}");
            }
        }
        assert_eq!(seen.len(), 1000);
    }
}
