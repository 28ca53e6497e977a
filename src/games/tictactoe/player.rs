//! The two sides of a match and how the first move is assigned.

use super::Marker;
use crate::GameRng;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Names the computer opponent may go by.
pub const COMPUTER_NAMES: [&str; 4] = ["Bert", "Sally", "Marvin", "Karen"];

/// Which side a player is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Role {
    /// The person at the keyboard.
    Human,
    /// The heuristic opponent.
    Computer,
}

impl Role {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Role::Human => Role::Computer,
            Role::Computer => Role::Human,
        }
    }
}

/// One side of the match. Fixed for the whole match once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Human or computer.
    role: Role,
    /// The marker this side places.
    marker: Marker,
}

impl Player {
    /// Creates a player.
    pub fn new(role: Role, marker: Marker) -> Self {
        Self { role, marker }
    }
}

/// Both sides of a match.
///
/// Markers never swap between rounds; only the turn order changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Players {
    /// The human side.
    human: Player,
    /// The computer side, holding the other marker.
    computer: Player,
}

impl Players {
    /// Builds both sides from the marker the human picked.
    #[instrument]
    pub fn from_human_marker(marker: Marker) -> Self {
        Self {
            human: Player::new(Role::Human, marker),
            computer: Player::new(Role::Computer, marker.opponent()),
        }
    }

    /// The marker placed by `role`.
    pub fn marker_of(&self, role: Role) -> Marker {
        match role {
            Role::Human => self.human.marker,
            Role::Computer => self.computer.marker,
        }
    }

    /// The side that places `marker`.
    pub fn role_of(&self, marker: Marker) -> Role {
        if marker == self.human.marker {
            Role::Human
        } else {
            Role::Computer
        }
    }
}

/// Who moves first in the opening round, as picked at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartChoice {
    /// The human moves first.
    Human,
    /// The computer moves first.
    Computer,
    /// Flip a coin.
    Random,
}

impl StartChoice {
    /// Turns the choice into a concrete role, drawing from `rng` for `Random`.
    #[instrument(skip(rng))]
    pub fn resolve(self, rng: &mut GameRng) -> Role {
        let role = match self {
            StartChoice::Human => Role::Human,
            StartChoice::Computer => Role::Computer,
            StartChoice::Random => {
                if rng.gen_bool(0.5) {
                    Role::Human
                } else {
                    Role::Computer
                }
            }
        };
        debug!(%role, "Opening starter resolved");
        role
    }
}

/// Picks a display name for the computer opponent.
pub fn computer_name(rng: &mut GameRng) -> &'static str {
    rng.choose(&COMPUTER_NAMES).copied().unwrap_or(COMPUTER_NAMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_computer_takes_other_marker() {
        let players = Players::from_human_marker(Marker::O);
        assert_eq!(*players.human().marker(), Marker::O);
        assert_eq!(*players.computer().marker(), Marker::X);
        assert_eq!(players.role_of(Marker::X), Role::Computer);
        assert_eq!(players.marker_of(Role::Human), Marker::O);
    }

    #[test]
    fn test_fixed_choices_ignore_rng() {
        let mut rng = GameRng::new(3);
        assert_eq!(StartChoice::Human.resolve(&mut rng), Role::Human);
        assert_eq!(StartChoice::Computer.resolve(&mut rng), Role::Computer);
    }

    #[test]
    fn test_random_choice_is_seeded() {
        let a: Vec<Role> = {
            let mut rng = GameRng::new(11);
            (0..10).map(|_| StartChoice::Random.resolve(&mut rng)).collect()
        };
        let b: Vec<Role> = {
            let mut rng = GameRng::new(11);
            (0..10).map(|_| StartChoice::Random.resolve(&mut rng)).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_computer_name_from_roster() {
        let mut rng = GameRng::new(5);
        assert!(COMPUTER_NAMES.contains(&computer_name(&mut rng)));
    }
}
