use crate::structures::literal::Literal;

use super::LevelIndex;

/// The assignments made during a solve, in order, split into levels.
#[derive(Default)]
pub struct Trail {
    /// Every assignment, in order of assignment.
    pub literals: Vec<Literal>,

    /// The index in `literals` at which each decision level begins.
    pub level_indicies: Vec<usize>,

    /// The index in `literals` of the next assignment to propagate.
    pub q_head: usize,
}

impl Trail {
    /// The current level.
    pub fn level(&self) -> LevelIndex {
        self.level_indicies.len() as LevelIndex
    }

    /// Returns true if some decision is active, false otherwise.
    pub fn decision_is_made(&self) -> bool {
        !self.level_indicies.is_empty()
    }

    /// Opens a fresh level, for a decision.
    pub fn push_level(&mut self) {
        self.level_indicies.push(self.literals.len());
    }

    /// The next assignment to propagate, if any, advancing the queue.
    pub fn next_in_queue(&mut self) -> Option<Literal> {
        let literal = self.literals.get(self.q_head).copied()?;
        self.q_head += 1;
        Some(literal)
    }

    /// Removes every level above `target`, returning the assignments made on those levels.
    pub fn forget_above(&mut self, target: LevelIndex) -> Vec<Literal> {
        match self.level_indicies.get(target as usize) {
            Some(&start) => {
                self.level_indicies.truncate(target as usize);
                self.q_head = self.q_head.min(start);
                self.literals.split_off(start)
            }
            None => Vec::default(),
        }
    }
}
