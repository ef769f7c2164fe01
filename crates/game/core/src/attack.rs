//! Attack and hit value objects.
//!
//! An [`Attack`] starts life as a single [`Hit`] carrying the attacker's
//! strength. Offensive skills may add hits, defensive skills may shrink or
//! zero them, and whatever potential damage survives is finally resolved
//! against the defender's defence.

/// A single strike within an attack.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hit {
    /// Damage dealt before the defender's defence is subtracted.
    pub potential_damage: f64,

    /// Offensive skill labels that acted on this hit only.
    pub used_offensive_skills: Vec<String>,

    /// Defensive skill labels that acted on this hit only.
    pub used_defensive_skills: Vec<String>,
}

impl Hit {
    pub fn new(potential_damage: f64) -> Self {
        Self {
            potential_damage,
            used_offensive_skills: Vec::new(),
            used_defensive_skills: Vec::new(),
        }
    }
}

/// A player's attack: an ordered list of hits plus attack-level skill usage.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub hits: Vec<Hit>,

    /// Offensive skill labels that acted on the attack as a whole.
    pub used_offensive_skills: Vec<String>,

    /// Defensive skill labels that acted on the attack as a whole.
    pub used_defensive_skills: Vec<String>,
}

impl Attack {
    /// Creates a single-hit attack whose damage equals `strength`.
    pub fn new(strength: f64) -> Self {
        Self::from_hits(vec![Hit::new(strength)])
    }

    pub fn from_hits(hits: Vec<Hit>) -> Self {
        Self {
            hits,
            used_offensive_skills: Vec::new(),
            used_defensive_skills: Vec::new(),
        }
    }

    pub fn hit_count(&self) -> usize {
        self.hits.len()
    }

    pub fn record_offensive(&mut self, label: impl Into<String>) {
        self.used_offensive_skills.push(label.into());
    }

    pub fn record_defensive(&mut self, label: impl Into<String>) {
        self.used_defensive_skills.push(label.into());
    }
}
