//! Observer interface for duel events.

use crate::attack::Attack;
use crate::player::Player;

/// An entity that can log, render or animate every event within a duel.
///
/// Callbacks run synchronously, in duel order, strictly after the state they
/// describe has been resolved. They receive shared references only and cannot
/// influence the outcome. Every callback defaults to a no-op so observers
/// implement only what they present.
pub trait Commentator {
    /// The duel is about to begin.
    fn start(&mut self) {}

    /// Introduces both fighters; `first` strikes first in every round.
    fn present_players(&mut self, _first: &Player, _second: &Player) {}

    /// A new round (1-based) begins.
    fn present_round(&mut self, _round: u32) {}

    /// An attack fully resolved; `defender` already reflects its damage.
    fn present_attack(&mut self, _attack: &Attack, _attacker: &Player, _defender: &Player) {}

    /// `loser` died in `round`.
    fn end_duel_knockout(&mut self, _round: u32, _winner: &Player, _loser: &Player) {}

    /// Every round was played without a knockout.
    fn end_duel_tie(&mut self, _round: u32, _first: &Player, _second: &Player) {}
}

/// Commentator that ignores every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentCommentator;

impl Commentator for SilentCommentator {}
