/*!
A max-heap of indices, ordered by an activity stored alongside each index.

Every index in `0..count` has an activity, whether or not the index is *active* (on the heap).
So, an index may be removed from the heap by [pop_max](ActivityHeap::pop_max), have its activity revised while off the heap, and later be (re)activated.

The heap is used to store atoms, as it is a useful heuristic to choose an atom without a value with the most activity when a decision is required.

```rust
# use otter_coloring::generic::activity_heap::ActivityHeap;
let mut heap = ActivityHeap::with_count(4);

heap.bump(2, 3.0);
heap.bump(0, 1.0);
for index in 0..4 {
    heap.activate(index);
}

assert_eq!(heap.pop_max(), Some(2));
assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.len(), 2);
```
*/

use crate::config::Activity;

/// The activity heap struct.
#[derive(Clone, Debug, Default)]
pub struct ActivityHeap {
    activity: Vec<Activity>,
    position: Vec<Option<usize>>,
    heap: Vec<usize>,
}

impl ActivityHeap {
    /// A heap over indices `0..count`, each with zero activity, and none active.
    pub fn with_count(count: usize) -> Self {
        ActivityHeap {
            activity: vec![0.0; count],
            position: vec![None; count],
            heap: Vec::with_capacity(count),
        }
    }

    /// A count of the active indices.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// True if no index is active.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The activity of `index`.
    pub fn activity(&self, index: usize) -> Activity {
        self.activity[index]
    }

    /// True if `index` is on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        self.position[index].is_some()
    }

    /// Places `index` on the heap, if not already present.
    pub fn activate(&mut self, index: usize) {
        if self.position[index].is_none() {
            self.position[index] = Some(self.heap.len());
            self.heap.push(index);
            self.sift_up(self.heap.len() - 1);
        }
    }

    /// Removes and returns the active index with greatest activity.
    pub fn pop_max(&mut self) -> Option<usize> {
        let last = self.heap.len().checked_sub(1)?;
        self.heap.swap(0, last);
        let max = self.heap.pop()?;
        self.position[max] = None;
        if !self.heap.is_empty() {
            self.position[self.heap[0]] = Some(0);
            self.sift_down(0);
        }
        Some(max)
    }

    /// Increases the activity of `index` by `bump`, and restores the heap if `index` is active.
    pub fn bump(&mut self, index: usize, bump: Activity) {
        self.activity[index] += bump;
        if let Some(position) = self.position[index] {
            self.sift_up(position);
        }
    }

    /// Multiplies every activity by `factor`.
    ///
    /// As every activity is scaled by the same (positive) factor the order of the heap is unchanged.
    pub fn rescale(&mut self, factor: Activity) {
        for activity in self.activity.iter_mut() {
            *activity *= factor;
        }
    }

    fn sift_up(&mut self, mut position: usize) {
        while position > 0 {
            let parent = (position - 1) / 2;
            if self.activity[self.heap[parent]] >= self.activity[self.heap[position]] {
                break;
            }
            self.swap(parent, position);
            position = parent;
        }
    }

    fn sift_down(&mut self, mut position: usize) {
        loop {
            let left = 2 * position + 1;
            let right = left + 1;
            let mut largest = position;

            if left < self.heap.len()
                && self.activity[self.heap[left]] > self.activity[self.heap[largest]]
            {
                largest = left;
            }
            if right < self.heap.len()
                && self.activity[self.heap[right]] > self.activity[self.heap[largest]]
            {
                largest = right;
            }
            if largest == position {
                break;
            }
            self.swap(position, largest);
            position = largest;
        }
    }

    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }
}
