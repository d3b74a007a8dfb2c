//! The atom database.
//!
//! Each atom `1..=count` has:
//! - A value, if valued, with the level at which the value was set and the clause which asserted the value, if any.
//! - A previous value, used for phase saving.
//! - An activity, stored on a heap alongside the atoms without a value (and perhaps a few with a value).
//!
//! Index zero is unused throughout, as zero is never an atom.

use rand::Rng;

use crate::{
    config::{Activity, OracleConfig},
    db::{ClauseKey, LevelIndex},
    generic::activity_heap::ActivityHeap,
    structures::literal::{Atom, Literal},
};

/// The atom database.
pub struct AtomDB {
    value: Vec<Option<bool>>,
    level: Vec<LevelIndex>,
    reason: Vec<Option<ClauseKey>>,
    previous_value: Vec<bool>,

    activity_heap: ActivityHeap,
    bump: Activity,
    decay: Activity,
}

impl AtomDB {
    /// Activities are rescaled when some activity exceeds this limit.
    const ACTIVITY_LIMIT: Activity = 1e100;

    /// A database for atoms `1..=count`, each without a value and on the heap.
    ///
    /// Previous values are drawn from `rng` with probability of truth given by the polarity lean.
    pub fn new(count: Atom, config: &OracleConfig, rng: &mut impl Rng) -> Self {
        let size = count as usize + 1;

        let mut activity_heap = ActivityHeap::with_count(size);
        for atom in 1..size {
            activity_heap.activate(atom);
        }

        AtomDB {
            value: vec![None; size],
            level: vec![0; size],
            reason: vec![None; size],
            previous_value: (0..size)
                .map(|_| rng.gen_bool(config.polarity_lean.value))
                .collect(),

            activity_heap,
            bump: config.atom_bump.value,
            decay: config.atom_decay.value,
        }
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.value.len() - 1
    }

    /// The value of `atom`, if valued.
    pub fn value_of(&self, atom: Atom) -> Option<bool> {
        self.value[atom as usize]
    }

    /// The value of `literal` on the current valuation, if its atom is valued.
    pub fn value_of_literal(&self, literal: Literal) -> Option<bool> {
        self.value[literal.atom() as usize].map(|value| value == literal.polarity())
    }

    /// The level at which `atom` was valued.
    ///
    /// Meaningful only if `atom` has a value.
    pub fn level_of(&self, atom: Atom) -> LevelIndex {
        self.level[atom as usize]
    }

    /// The clause which asserted the value of `atom`, if any.
    pub fn reason_of(&self, atom: Atom) -> Option<ClauseKey> {
        self.reason[atom as usize]
    }

    /// The previous value of `atom`.
    pub fn previous_value_of(&self, atom: Atom) -> bool {
        self.previous_value[atom as usize]
    }

    /// Values the atom of `literal` with the polarity of `literal`.
    pub fn set_value(&mut self, literal: Literal, level: LevelIndex, reason: Option<ClauseKey>) {
        let atom = literal.atom() as usize;
        self.value[atom] = Some(literal.polarity());
        self.level[atom] = level;
        self.reason[atom] = reason;
    }

    /// Clears the value of `atom`, noting the value as the previous value, and returns the atom to the heap.
    pub fn drop_value(&mut self, atom: Atom) {
        let atom = atom as usize;
        if let Some(value) = self.value[atom].take() {
            self.previous_value[atom] = value;
        }
        self.reason[atom] = None;
        self.activity_heap.activate(atom);
    }

    /// Removes the most active atom on the heap, which may have a value.
    pub fn heap_pop_most_active(&mut self) -> Option<Atom> {
        self.activity_heap.pop_max().map(|index| index as Atom)
    }

    /// Atoms without a value, in order.
    pub fn unvalued_atoms(&self) -> impl Iterator<Item = Atom> + '_ {
        self.value
            .iter()
            .enumerate()
            .skip(1)
            .filter(|(_, value)| value.is_none())
            .map(|(atom, _)| atom as Atom)
    }

    /// Bumps the activity of `atom` by the current bump.
    pub fn bump_activity(&mut self, atom: Atom) {
        self.activity_heap.bump(atom as usize, self.bump);
        if self.activity_heap.activity(atom as usize) > Self::ACTIVITY_LIMIT {
            self.activity_heap.rescale(Self::ACTIVITY_LIMIT.recip());
            self.bump *= Self::ACTIVITY_LIMIT.recip();
        }
    }

    /// Decays the activity of every atom, by growing the bump.
    pub fn decay_activity(&mut self) {
        self.bump *= self.decay.recip();
    }
}
