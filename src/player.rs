// Where's That Word? – A word search game
// Copyright (C) 2024  Neil Roberts
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use std::fmt;
use serde::Serialize;

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(into = "String")]
pub enum Player {
    One,
    Two,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug, Serialize)]
#[serde(into = "String")]
pub enum Outcome {
    PlayerOneWins,
    PlayerTwoWins,
    Tie,
}

impl Player {
    pub fn other(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

pub fn current_player(is_player_one_turn: bool) -> Player {
    if is_player_one_turn {
        Player::One
    } else {
        Player::Two
    }
}

pub fn winner(score1: u32, score2: u32) -> Outcome {
    match score1.cmp(&score2) {
        std::cmp::Ordering::Greater => Outcome::PlayerOneWins,
        std::cmp::Ordering::Less => Outcome::PlayerTwoWins,
        std::cmp::Ordering::Equal => Outcome::Tie,
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::One => write!(f, "player one"),
            Player::Two => write!(f, "player two"),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Outcome::PlayerOneWins => write!(f, "player one wins"),
            Outcome::PlayerTwoWins => write!(f, "player two wins"),
            Outcome::Tie => write!(f, "tie game"),
        }
    }
}

impl From<Player> for String {
    fn from(player: Player) -> String {
        player.to_string()
    }
}

impl From<Outcome> for String {
    fn from(outcome: Outcome) -> String {
        outcome.to_string()
    }
}
