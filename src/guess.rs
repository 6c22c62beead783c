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

use log::{debug, trace};
use super::direction::{Axis, Direction, ParseDirectionError};
use super::matcher;
use super::puzzle::{self, Puzzle};
use super::score;

/// Returns the letters of row or column `index` of `puzzle` in the
/// order that they are read when looking in `direction`.
pub fn oriented_line(
    puzzle: &str,
    direction: Direction,
    index: usize,
) -> String {
    let line = match direction.axis() {
        Axis::Row => puzzle::row(puzzle, index),
        Axis::Column => puzzle::column(puzzle, index),
    };

    if direction.is_reversed() {
        matcher::reverse(&line)
    } else {
        line
    }
}

fn score_line(
    line: &str,
    direction: Direction,
    guess: &str,
    num_words_left: u32,
) -> u32 {
    trace!("searching {} line “{}” for “{}”", direction, line, guess);

    let score = if matcher::contains(line, guess) {
        score::points(direction, num_words_left)
    } else {
        0
    };

    debug!(
        "guess “{}” {} with {} words left scores {}",
        guess,
        direction,
        num_words_left,
        score,
    );

    score
}

/// Returns the points scored for `guess` if it appears on row or
/// column `index` of `puzzle` when read in `direction`, or zero if it
/// doesn’t.
pub fn check_guess(
    puzzle: &str,
    direction: Direction,
    guess: &str,
    index: usize,
    num_words_left: u32,
) -> u32 {
    let line = oriented_line(puzzle, direction, index);

    score_line(&line, direction, guess, num_words_left)
}

/// Same as [`check_guess`] but with the direction given by its label.
pub fn check_guess_str(
    puzzle: &str,
    direction: &str,
    guess: &str,
    index: usize,
    num_words_left: u32,
) -> Result<u32, ParseDirectionError> {
    let direction = direction.parse::<Direction>()?;

    Ok(check_guess(puzzle, direction, guess, index, num_words_left))
}

impl Puzzle {
    pub fn check_guess(
        &self,
        direction: Direction,
        guess: &str,
        index: usize,
        num_words_left: u32,
    ) -> Result<u32, puzzle::Error> {
        let line = self.line(direction, index)?;

        Ok(score_line(&line, direction, guess, num_words_left))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    static GRID: &'static str = "abcd\nefgh\nijkl\n";

    #[test]
    fn examples() {
        assert_eq!(check_guess(GRID, Direction::Forward, "ef", 1, 4), 6);
        assert_eq!(check_guess(GRID, Direction::Up, "jfb", 1, 1), 48);
    }

    #[test]
    fn all_directions() {
        assert_eq!(check_guess(GRID, Direction::Forward, "fgh", 1, 5), 5);
        assert_eq!(check_guess(GRID, Direction::Backward, "hgf", 1, 5), 15);
        assert_eq!(check_guess(GRID, Direction::Down, "gk", 2, 5), 10);
        assert_eq!(check_guess(GRID, Direction::Up, "lhd", 3, 5), 20);
    }

    #[test]
    fn wrong_orientation() {
        assert_eq!(check_guess(GRID, Direction::Backward, "fgh", 1, 5), 0);
        assert_eq!(check_guess(GRID, Direction::Up, "bfj", 1, 5), 0);
        assert_eq!(check_guess(GRID, Direction::Down, "ef", 1, 5), 0);
    }

    #[test]
    fn wrong_line() {
        assert_eq!(check_guess(GRID, Direction::Forward, "ef", 0, 3), 0);
        assert_eq!(check_guess(GRID, Direction::Down, "bfj", 2, 3), 0);
    }

    #[test]
    fn found_words_always_score() {
        // Every substring of every oriented line must score something.
        // An earlier version reset the score after the match so that
        // every guess scored nothing.
        for direction in Direction::ALL {
            let n_lines = match direction.axis() {
                Axis::Row => puzzle::n_rows(GRID),
                Axis::Column => puzzle::row_length(GRID),
            };

            for index in 0..n_lines {
                let line = oriented_line(GRID, direction, index);

                for start in 0..line.len() {
                    for end in start + 1..=line.len() {
                        let guess = &line[start..end];

                        for n in 1..8 {
                            assert_eq!(
                                check_guess(GRID, direction, guess, index, n),
                                score::points(direction, n),
                            );
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn labelled_directions() {
        assert_eq!(check_guess_str(GRID, "forward", "ef", 1, 4), Ok(6));
        assert_eq!(check_guess_str(GRID, "up", "jfb", 1, 1), Ok(48));
        assert_eq!(
            &check_guess_str(GRID, "diagonal", "afk", 0, 1)
                .unwrap_err()
                .to_string(),
            "invalid direction: diagonal",
        );
    }

    #[test]
    fn huge_row_index() {
        for direction in [Direction::Forward, Direction::Backward] {
            assert_eq!(check_guess(GRID, direction, "f", usize::MAX, 2), 0);
        }
    }

    #[test]
    fn validated_puzzle() {
        let puzzle = Puzzle::new(GRID).unwrap();

        assert_eq!(puzzle.check_guess(Direction::Forward, "ef", 1, 4), Ok(6));
        assert_eq!(puzzle.check_guess(Direction::Up, "jfb", 1, 1), Ok(48));
        assert_eq!(puzzle.check_guess(Direction::Down, "xy", 0, 1), Ok(0));
        assert_eq!(
            puzzle.check_guess(Direction::Forward, "ef", 3, 1),
            Err(puzzle::Error::IndexOutOfRange {
                direction: Direction::Forward,
                index: 3,
                limit: 3,
            }),
        );
    }

    #[test]
    fn free_functions_match_puzzle() {
        let puzzle = Puzzle::new(GRID).unwrap();

        for direction in Direction::ALL {
            let n_lines = match direction.axis() {
                Axis::Row => puzzle.n_rows(),
                Axis::Column => puzzle.row_length(),
            };

            for index in 0..n_lines {
                assert_eq!(
                    oriented_line(GRID, direction, index),
                    puzzle.line(direction, index).unwrap(),
                );
            }
        }
    }
}
