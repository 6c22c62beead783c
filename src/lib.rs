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

pub mod direction;
pub mod guess;
pub mod matcher;
pub mod player;
pub mod puzzle;
pub mod score;

pub use direction::{factor, Axis, Direction, ParseDirectionError};
pub use guess::{check_guess, check_guess_str, oriented_line};
pub use matcher::{contains, reverse};
pub use player::{current_player, winner, Outcome, Player};
pub use puzzle::{column, n_rows, row, row_length, Puzzle};
pub use score::{points, BONUS, THRESHOLD};
