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

// A guess is always searched for along a single row or column of the
// grid. Reading a row left to right is “forward” and reading a column
// top to bottom is “down”. The other two directions read the same
// lines in reverse. The harder a direction is to spot, the more
// points it is worth.

use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};

#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Forward,
    Backward,
    Down,
    Up,
}

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum Axis {
    Row,
    Column,
}

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
#[error("invalid direction: {0}")]
pub struct ParseDirectionError(String);

pub const FORWARD_FACTOR: u32 = 1;
pub const DOWN_FACTOR: u32 = 2;
pub const BACKWARD_FACTOR: u32 = 3;
pub const UP_FACTOR: u32 = 4;

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Forward,
        Direction::Backward,
        Direction::Down,
        Direction::Up,
    ];

    pub fn factor(self) -> u32 {
        match self {
            Direction::Forward => FORWARD_FACTOR,
            Direction::Down => DOWN_FACTOR,
            Direction::Backward => BACKWARD_FACTOR,
            Direction::Up => UP_FACTOR,
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Direction::Forward | Direction::Backward => Axis::Row,
            Direction::Down | Direction::Up => Axis::Column,
        }
    }

    pub fn is_reversed(self) -> bool {
        matches!(self, Direction::Backward | Direction::Up)
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Forward => "forward",
            Direction::Backward => "backward",
            Direction::Down => "down",
            Direction::Up => "up",
        }
    }
}

/// Returns the point multiplier for finding a word in `direction`.
pub fn factor(direction: Direction) -> u32 {
    direction.factor()
}

impl FromStr for Direction {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Direction, ParseDirectionError> {
        Direction::ALL.into_iter()
            .find(|direction| direction.label() == s)
            .ok_or_else(|| ParseDirectionError(s.to_string()))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}
