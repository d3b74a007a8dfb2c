//! Recovery from a conflict.
//!
//! # Overview
//!
//! A backjump is a 'jump' from some (higher) decision level to some previous (lower) decision level.
//!
//! Typically, a backjump is made from level *l* to level *l - i* because a conflict was found at level *l* and analysis produced a clause which asserts some literal at level *l - i*.
//! In this case, all decisions and all consequences of those decisions from level *l* down to level *l - i* are undone, and any queued consequences of the decision are removed from the queue.
//!
//! For sound application the target level must be equal to or lower than the current level.
//! Still, passing a target level greater than the current level is safe --- nothing will happen.
//!
//! A restart is a backjump to level zero.
//!
//! # Literature
//!
//! See [Chronological Backtracking](https://doi.org/10.1007/978-3-319-94144-8_7) for a discussion of chronological and non-chronological backjumping.

use crate::{
    context::Context,
    db::LevelIndex,
    misc::log::targets::{self},
};

impl Context {
    /// Backjumps to the given target level.
    ///
    /// For documentation, see [procedures::backjump](crate::procedures::backjump).
    pub fn backjump(&mut self, target: LevelIndex) {
        if target >= self.trail.level() {
            return;
        }
        log::trace!(target: targets::BACKJUMP, "Backjump from {} to {target}", self.trail.level());

        for literal in self.trail.forget_above(target) {
            self.atom_db.drop_value(literal.atom());
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{config::OracleConfig, context::Context, structures::literal::Literal};

    #[test]
    fn backjump_clears_values() {
        let mut context = Context::from_config(OracleConfig::default(), 3);
        context.assign(Literal::new(1, true), None);
        context.trail.push_level();
        context.assign(Literal::new(2, false), None);
        context.trail.push_level();
        context.assign(Literal::new(3, true), None);

        context.backjump(1);
        assert_eq!(context.atom_db.value_of(3), None);
        assert_eq!(context.atom_db.value_of(2), Some(false));
        assert!(context.atom_db.previous_value_of(3));

        context.backjump(0);
        assert_eq!(context.atom_db.value_of(2), None);
        assert_eq!(context.atom_db.value_of(1), Some(true));
        assert_eq!(context.level(), 0);
    }
}
