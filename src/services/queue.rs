use std::fmt;
use std::mem;
use tracing::debug;

use crate::error::{BookingError, BookingResult};

/// Порядок элементов в куче: `outranks(a, b)` истинно, если `a` должен
/// стоять ближе к корню, чем `b`. Отношение строгое, равные ключи не
/// переставляются.
pub trait HeapOrder {
    type Item;

    const NAME: &'static str;

    fn outranks(a: &Self::Item, b: &Self::Item) -> bool;
}

/// Двоичная куча на массиве: дети узла `i` лежат в `2i+1` и `2i+2`.
///
/// При равных ключах порядок извлечения не определён (не FIFO).
pub struct KeyedHeap<O: HeapOrder> {
    entries: Vec<O::Item>,
}

impl<O: HeapOrder> KeyedHeap<O> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Корень кучи без извлечения
    pub fn peek(&self) -> Option<&O::Item> {
        self.entries.first()
    }

    pub(crate) fn push(&mut self, item: O::Item) {
        self.entries.push(item);
        self.sift_up(self.entries.len() - 1);
        debug!(queue = O::NAME, len = self.entries.len(), "item inserted");
    }

    pub(crate) fn pop(&mut self) -> BookingResult<O::Item> {
        let last = self.entries.pop().ok_or(BookingError::Empty)?;
        if self.entries.is_empty() {
            debug!(queue = O::NAME, len = 0, "item extracted");
            return Ok(last);
        }

        // Последний элемент встаёт в корень и опускается вниз
        let root = mem::replace(&mut self.entries[0], last);
        self.sift_down(0);
        debug!(queue = O::NAME, len = self.entries.len(), "item extracted");
        Ok(root)
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if !O::outranks(&self.entries[index], &self.entries[parent]) {
                break;
            }
            self.entries.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.entries.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            if left >= len {
                break;
            }

            // Сравниваем только с "лучшим" из двух детей
            let mut best = left;
            if right < len && O::outranks(&self.entries[right], &self.entries[left]) {
                best = right;
            }

            if !O::outranks(&self.entries[best], &self.entries[index]) {
                break;
            }
            self.entries.swap(index, best);
            index = best;
        }
    }

    #[cfg(test)]
    pub(crate) fn entries(&self) -> &[O::Item] {
        &self.entries
    }

    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        (1..self.entries.len()).all(|i| !O::outranks(&self.entries[i], &self.entries[(i - 1) / 2]))
    }
}

impl<O: HeapOrder> KeyedHeap<O>
where
    O::Item: Clone,
{
    /// Упорядоченный снимок очереди. Сама куча не меняется: извлечение идёт
    /// из рабочей копии.
    pub fn peek_all(&self) -> Vec<O::Item> {
        let mut working = self.clone();
        let mut ordered = Vec::with_capacity(working.len());
        while let Ok(item) = working.pop() {
            ordered.push(item);
        }
        ordered
    }
}

impl<O: HeapOrder> Default for KeyedHeap<O> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: HeapOrder> Clone for KeyedHeap<O>
where
    O::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl<O: HeapOrder> fmt::Debug for KeyedHeap<O>
where
    O::Item: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyedHeap")
            .field("order", &O::NAME)
            .field("entries", &self.entries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Smallest;

    impl HeapOrder for Smallest {
        type Item = (u32, char);
        const NAME: &'static str = "test";

        fn outranks(a: &Self::Item, b: &Self::Item) -> bool {
            a.0 < b.0
        }
    }

    #[test]
    fn pop_on_empty_heap_is_an_error() {
        let mut heap = KeyedHeap::<Smallest>::new();
        assert_eq!(heap.pop(), Err(BookingError::Empty));
        assert!(heap.is_empty());
    }

    #[test]
    fn sift_down_picks_the_better_child() {
        let mut heap = KeyedHeap::<Smallest>::new();
        for (key, tag) in [(1, 'a'), (5, 'b'), (3, 'c'), (9, 'd'), (6, 'e'), (4, 'f')] {
            heap.push((key, tag));
        }
        assert_eq!(heap.entries()[0], (1, 'a'));

        assert_eq!(heap.pop().unwrap(), (1, 'a'));
        assert!(heap.is_valid());
        assert_eq!(heap.peek(), Some(&(3, 'c')));
    }

    #[test]
    fn peek_all_leaves_heap_untouched() {
        let mut heap = KeyedHeap::<Smallest>::new();
        for key in [7, 2, 9, 2, 1] {
            heap.push((key, 'x'));
        }
        let before = heap.entries().to_vec();

        let keys: Vec<u32> = heap.peek_all().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![1, 2, 2, 7, 9]);
        assert_eq!(heap.entries(), before.as_slice());
        assert_eq!(heap.len(), 5);
    }
}
