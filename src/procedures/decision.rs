/*!
Methods for choosing the value of an atom.

# Overview

The core decision procedure is straightforward:
- Search through all atoms in the context for an atom which is not assigned a value, and assign either true or false.

# Decisions as literals

Strictly a decision is to value some atom *a* with value *v*.
Still, it is convenient to represent such a decision as a literal with atom *a* and polarity *v*.

# Heuristics

## Activity

Atoms are selected by activity, and the [atom database](crate::db::atom) stores atoms on a max activity heap.
Atoms are only returned to the heap when their value is cleared, and so the heap may contain atoms with a value.
These are discarded when popped.

## Phase saving

If phase saving is enabled the chosen atom is valued as it was last valued.
Otherwise, the value is chosen at random, with probability of truth given by the polarity lean.

## Randomness

With probability given by the random decision bias an atom without a value is chosen at random, rather than by activity.
*/

use rand::{seq::IteratorRandom, Rng};

use crate::{
    context::Context,
    misc::log::targets::{self},
    structures::literal::{Atom, Literal},
};

/// Methods related to making decisions.
impl Context {
    /// Chooses a literal whose atom has no value, if some atom has no value.
    pub fn make_decision(&mut self) -> Option<Literal> {
        let chosen_atom = self.atom_without_value()?;
        self.counters.total_decisions += 1;

        let decision = match self.config.phase_saving.value {
            true => Literal::new(chosen_atom, self.atom_db.previous_value_of(chosen_atom)),
            false => Literal::new(
                chosen_atom,
                self.rng.gen_bool(self.config.polarity_lean.value),
            ),
        };
        log::trace!(target: targets::PROPAGATION, "Decision {decision}");

        Some(decision)
    }

    /// Returns an atom which has no value on the current valuation, either by random decision or by most activity.
    pub fn atom_without_value(&mut self) -> Option<Atom> {
        match self.rng.gen_bool(self.config.random_decision_bias.value) {
            true => self.atom_db.unvalued_atoms().choose(&mut self.rng),
            false => {
                while let Some(atom) = self.atom_db.heap_pop_most_active() {
                    if self.atom_db.value_of(atom).is_none() {
                        return Some(atom);
                    }
                }
                None
            }
        }
    }
}
