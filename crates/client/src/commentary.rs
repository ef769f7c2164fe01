//! Human readable duel narration.
//!
//! Every line is produced by a pure function so the wording can be tested
//! without a subscriber; [`TracingCommentator`] just emits them.
use duel_core::{Attack, Commentator, Player, Skill};

pub fn welcome() -> String {
    "Welcome everyone to a new duel :)".to_string()
}

/// Introduction of both duelists; `first` strikes first every round.
pub fn introduce(first: &Player, second: &Player) -> Vec<String> {
    let mut lines = vec![
        format!("Our duelists are {} and {}", first.name(), second.name()),
        "Let's look a bit at those fighters' stats and skills".to_string(),
    ];
    lines.extend(player_card(first));
    lines.extend(player_card(second));
    lines.push(format!("{} will hit first on each round", first.name()));
    lines
}

pub fn player_card(player: &Player) -> Vec<String> {
    let stats = player.stats();
    let mut lines = vec![
        format!("{} has the following stats:", player.name()),
        format!("Health: {:.2}", stats.health),
        format!("Strength: {:.2}", stats.strength),
        format!("Defence: {:.2}", stats.defence),
        format!("Speed: {:.2}", stats.speed),
        format!("Luck: {:.2}%", stats.luck * 100.0),
    ];

    let skills = player.skills();
    if !skills.is_empty() {
        lines.push(format!("{} also has the following skills", player.name()));
    }
    if !skills.offensive.is_empty() {
        lines.push(format!("Offensive: {}", describe(&skills.offensive)));
    }
    if !skills.defensive.is_empty() {
        lines.push(format!("Defensive: {}", describe(&skills.defensive)));
    }
    lines
}

pub fn round_header(round: u32) -> String {
    format!("Round {round}! Start!")
}

/// Narrates a resolved attack; `defender` already carries the damage.
pub fn attack_report(attack: &Attack, attacker: &Player, defender: &Player) -> Vec<String> {
    let hits = if attack.hit_count() == 1 {
        "hit"
    } else {
        "hits"
    };
    let mut lines = vec![format!(
        "{} attacks {}. The attack contained {} {}",
        attacker.name(),
        defender.name(),
        attack.hit_count(),
        hits
    )];

    for (index, hit) in attack.hits.iter().enumerate() {
        lines.push(format!(
            "Hit {} with {:.2} potential damage on {}",
            index + 1,
            hit.potential_damage,
            defender.name()
        ));
        if !hit.used_offensive_skills.is_empty() {
            lines.push(format!(
                "{} used the following offensive skills for this hit: {}",
                attacker.name(),
                hit.used_offensive_skills.join(", ")
            ));
        }
        if !hit.used_defensive_skills.is_empty() {
            lines.push(format!(
                "{} used as defensive skills for this hit: {}",
                defender.name(),
                hit.used_defensive_skills.join(", ")
            ));
        }
    }

    if !attack.used_offensive_skills.is_empty() {
        lines.push(format!(
            "{} used the following offensive skills on this attack: {}",
            attacker.name(),
            attack.used_offensive_skills.join(", ")
        ));
    }
    if !attack.used_defensive_skills.is_empty() {
        lines.push(format!(
            "{} used the following defensive skills on this attack: {}",
            defender.name(),
            attack.used_defensive_skills.join(", ")
        ));
    }

    lines.push(format!(
        "{} has {:.2} remaining health",
        defender.name(),
        defender.health()
    ));
    lines
}

pub fn knockout(round: u32, winner: &Player, loser: &Player) -> String {
    format!(
        "Knockout in round {round}!! {} is dead! Congratulations to {} for winning the duel before the last round",
        loser.name(),
        winner.name()
    )
}

pub fn tie(round: u32, first: &Player, second: &Player) -> Vec<String> {
    vec![
        "The duel finished with a tie! Congratulations to both players for this battle".to_string(),
        format!(
            "After those {round} rounds, {} remains with {:.2} health while {} has {:.2} health remaining",
            first.name(),
            first.health(),
            second.name(),
            second.health()
        ),
    ]
}

fn describe(skills: &[Box<dyn Skill>]) -> String {
    skills
        .iter()
        .map(|skill| skill.description())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Commentator that narrates through `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingCommentator;

impl TracingCommentator {
    pub fn new() -> Self {
        Self
    }

    fn say(lines: impl IntoIterator<Item = String>) {
        for line in lines {
            tracing::info!(target: "duel::commentary", "{line}");
        }
    }
}

impl Commentator for TracingCommentator {
    fn start(&mut self) {
        Self::say([welcome()]);
    }

    fn present_players(&mut self, first: &Player, second: &Player) {
        Self::say(introduce(first, second));
    }

    fn present_round(&mut self, round: u32) {
        Self::say([round_header(round)]);
    }

    fn present_attack(&mut self, attack: &Attack, attacker: &Player, defender: &Player) {
        Self::say(attack_report(attack, attacker, defender));
    }

    fn end_duel_knockout(&mut self, round: u32, winner: &Player, loser: &Player) {
        Self::say([knockout(round, winner, loser)]);
    }

    fn end_duel_tie(&mut self, round: u32, first: &Player, second: &Player) {
        Self::say(tie(round, first, second));
    }
}
