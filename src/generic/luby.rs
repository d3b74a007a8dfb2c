/*!
An iterator over the luby sequence, used to schedule restarts.

See <https://oeis.org/A182105> for details on the luby sequence.

Elements are computed directly from their index, following the presentation in [MiniSAT](http://minisat.se/), by finding the smallest complete binary tree containing the index and descending to the subsequence the index belongs to.

```rust
# use otter_coloring::generic::luby::Luby;
let prefix = Luby::default().take(7).collect::<Vec<_>>();
assert_eq!(prefix, vec![1, 1, 2, 1, 1, 2, 4]);
```
*/

/// Representation used for numbers in a luby sequence.
pub type LubyRepresentation = u32;

/// An iterator over the luby sequence, from the first element.
#[derive(Clone, Debug, Default)]
pub struct Luby {
    index: u32,
    current: LubyRepresentation,
}

impl Luby {
    /// The most recent element returned by the iterator, or zero if no element has been returned.
    pub fn current(&self) -> LubyRepresentation {
        self.current
    }
}

/// The element of the luby sequence at (zero-based) `index`, if representable.
pub fn luby(index: u32) -> Option<LubyRepresentation> {
    let mut size: u64 = 1;
    let mut exponent: u32 = 0;
    while size < index as u64 + 1 {
        exponent += 1;
        size = 2 * size + 1;
    }

    let mut index = index as u64;
    while size - 1 != index {
        size = (size - 1) >> 1;
        exponent -= 1;
        index %= size;
    }

    1_u32.checked_shl(exponent)
}

impl Iterator for Luby {
    type Item = LubyRepresentation;

    fn next(&mut self) -> Option<Self::Item> {
        let element = luby(self.index)?;
        self.index = self.index.checked_add(1)?;
        self.current = element;
        Some(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://oeis.org/A182105
    const LUBY_SLICE: &[LubyRepresentation] = &[
        1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8,
        16, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4, 8, 1, 1, 2, 1, 1, 2, 4, 1, 1, 2, 1, 1, 2, 4,
        8, 16, 32, 1, 1, 2,
    ];

    #[test]
    fn luby_prefix() {
        let sequence = Luby::default().take(LUBY_SLICE.len()).collect::<Vec<_>>();
        assert_eq!(sequence, LUBY_SLICE);
    }

    #[test]
    fn current_follows_next() {
        let mut l = Luby::default();
        assert_eq!(l.current(), 0);
        for _ in 0..7 {
            l.next();
        }
        assert_eq!(l.current(), 4);
    }
}
