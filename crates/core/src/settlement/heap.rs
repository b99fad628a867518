//! Array-backed binary min-heap.
//!
//! Ordering comes entirely from the key's `Ord`, so ties are whatever the key
//! says they are. The planner builds keys that fall back to the user id.

/// Binary min-heap over `Ord` keys stored in a flat `Vec`.
///
/// Children of index `i` sit at `2i + 1` and `2i + 2`.
#[derive(Debug, Clone)]
pub struct MinHeap<T: Ord> {
    items: Vec<T>,
}

impl<T: Ord> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> MinHeap<T> {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when there is nothing to pop.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Inserts an entry.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
    }

    /// Removes and returns the smallest entry.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let top = self.items.pop();
        if !self.items.is_empty() {
            self.sift_down(0);
        }
        top
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.items[index] >= self.items[parent] {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.items.len();
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < len && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < len && self.items[right] < self.items[smallest] {
                smallest = right;
            }
            if smallest == index {
                return;
            }
            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        for item in iter {
            heap.push(item);
        }
        heap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::cmp::Reverse;

    #[test]
    fn test_empty_heap() {
        let mut heap: MinHeap<i32> = MinHeap::new();
        assert!(heap.is_empty());
        assert_eq!(heap.pop(), None);
    }

    #[test]
    fn test_pops_in_ascending_order() {
        let mut heap: MinHeap<i32> = [5, 3, 8, 1, 9, 2].into_iter().collect();
        assert_eq!(heap.len(), 6);

        let mut popped = Vec::new();
        while let Some(item) = heap.pop() {
            popped.push(item);
        }
        assert_eq!(popped, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn test_reverse_key_gives_max_heap() {
        let mut heap: MinHeap<Reverse<i32>> = [4, 10, 7].into_iter().map(Reverse).collect();
        assert_eq!(heap.pop(), Some(Reverse(10)));
        assert_eq!(heap.pop(), Some(Reverse(7)));
        assert_eq!(heap.pop(), Some(Reverse(4)));
    }

    #[test]
    fn test_ties_fall_back_to_secondary_key() {
        let mut heap: MinHeap<(i32, u8)> = [(1, 3), (1, 1), (0, 9), (1, 2)].into_iter().collect();
        assert_eq!(heap.pop(), Some((0, 9)));
        assert_eq!(heap.pop(), Some((1, 1)));
        assert_eq!(heap.pop(), Some((1, 2)));
        assert_eq!(heap.pop(), Some((1, 3)));
    }

    proptest! {
        #[test]
        fn prop_heap_sorts(values in prop::collection::vec(-1000i32..1000, 0..200)) {
            let mut heap: MinHeap<i32> = values.iter().copied().collect();
            let mut popped = Vec::with_capacity(values.len());
            while let Some(item) = heap.pop() {
                popped.push(item);
            }
            let mut expected = values;
            expected.sort_unstable();
            prop_assert_eq!(popped, expected);
        }

        #[test]
        fn prop_interleaved_push_pop(
            ops in prop::collection::vec(prop::option::of(-100i32..100), 0..200),
        ) {
            let mut heap = MinHeap::new();
            let mut model: Vec<i32> = Vec::new();
            for op in ops {
                match op {
                    Some(value) => {
                        heap.push(value);
                        model.push(value);
                    }
                    None => {
                        model.sort_unstable_by(|a, b| b.cmp(a));
                        prop_assert_eq!(heap.pop(), model.pop());
                    }
                }
                prop_assert_eq!(heap.len(), model.len());
            }
        }
    }
}
