//! Turn order selection.

use crate::player::PlayerStats;

use super::Seat;

/// Decides which seat strikes first for the whole duel.
///
/// Higher speed goes first; equal speed falls back to higher luck; a full tie
/// keeps configuration order (player one first).
pub fn turn_order(one: &PlayerStats, two: &PlayerStats) -> (Seat, Seat) {
    if one.speed > two.speed {
        return (Seat::PlayerOne, Seat::PlayerTwo);
    }

    if one.speed < two.speed {
        return (Seat::PlayerTwo, Seat::PlayerOne);
    }

    if one.luck < two.luck {
        return (Seat::PlayerTwo, Seat::PlayerOne);
    }

    (Seat::PlayerOne, Seat::PlayerTwo)
}
