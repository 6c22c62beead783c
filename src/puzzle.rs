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

// A puzzle is a rectangle of letters written one row per line:
//
// abcd
// efgh
// ijkl
//
// The free functions in this module work directly on that text and
// trust the caller to pass indices that are inside the grid. The
// Puzzle type checks the shape once up front so that lookups can
// report bad indices instead.

use std::fmt;
use std::str::FromStr;
use super::direction::{Axis, Direction};
use super::matcher;

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("empty puzzle")]
    EmptyPuzzle,
    #[error("row {row} has {actual} letters but the puzzle is {expected} \
             letters wide")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[error("{direction} index {index} is outside the puzzle \
             (must be less than {limit})")]
    IndexOutOfRange {
        direction: Direction,
        index: usize,
        limit: usize,
    },
}

/// Returns the number of letters in the first row of `puzzle`.
pub fn row_length(puzzle: &str) -> usize {
    puzzle.split('\n').next().unwrap_or("").chars().count()
}

pub fn n_rows(puzzle: &str) -> usize {
    let puzzle = puzzle.trim_end();

    if puzzle.is_empty() {
        0
    } else {
        puzzle.split('\n').count()
    }
}

/// Returns the letters of row `index`. The rows are located by
/// offset, so `index` must be less than the number of rows. An index
/// past the end gives a short or empty string.
pub fn row(puzzle: &str, index: usize) -> String {
    let length = row_length(puzzle);

    puzzle.chars()
        .skip((length + 1).saturating_mul(index))
        .take(length)
        .collect::<String>()
}

/// Returns the letter at position `index` of every row, from the top
/// row down.
///
/// Panics if `index` is not less than the row length.
pub fn column(puzzle: &str, index: usize) -> String {
    assert!(index < row_length(puzzle));

    puzzle.trim_end()
        .split('\n')
        .filter_map(|line| line.chars().nth(index))
        .collect::<String>()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    values: Box<[char]>,
    width: usize,
    height: usize,
}

impl Puzzle {
    pub fn new(s: &str) -> Result<Puzzle, Error> {
        // Blank lines before the grid aren’t part of it
        let s = s.trim_end()
            .trim_start_matches(|ch: char| ch == '\n' || ch == '\r');
        let width = s.split('\n')
            .next()
            .unwrap_or("")
            .trim_end()
            .chars()
            .count();

        if width < 1 {
            return Err(Error::EmptyPuzzle);
        }

        let mut values = Vec::new();

        for (row, line) in s.split('\n').enumerate() {
            let start = values.len();

            values.extend(line.trim_end().chars());

            let actual = values.len() - start;

            if actual != width {
                return Err(Error::RaggedRow { row, expected: width, actual });
            }
        }

        let height = values.len() / width;

        Ok(Puzzle {
            values: values.into_boxed_slice(),
            width,
            height,
        })
    }

    pub fn row_length(&self) -> usize {
        self.width
    }

    pub fn n_rows(&self) -> usize {
        self.height
    }

    pub fn at(&self, x: usize, y: usize) -> char {
        assert!(x < self.width);

        self.values[y * self.width + x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[char]> {
        self.values.chunks(self.width)
    }

    pub fn row(&self, index: usize) -> String {
        self.values[index * self.width..(index + 1) * self.width]
            .iter()
            .collect::<String>()
    }

    pub fn column(&self, index: usize) -> String {
        (0..self.height).map(|y| self.at(index, y)).collect::<String>()
    }

    /// Returns the letters along row or column `index` in the order
    /// that they are read when looking in `direction`.
    pub fn line(
        &self,
        direction: Direction,
        index: usize,
    ) -> Result<String, Error> {
        let limit = match direction.axis() {
            Axis::Row => self.height,
            Axis::Column => self.width,
        };

        if index >= limit {
            return Err(Error::IndexOutOfRange { direction, index, limit });
        }

        let line = match direction.axis() {
            Axis::Row => self.row(index),
            Axis::Column => self.column(index),
        };

        if direction.is_reversed() {
            Ok(matcher::reverse(&line))
        } else {
            Ok(line)
        }
    }
}

impl FromStr for Puzzle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Puzzle, Error> {
        Puzzle::new(s)
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, row) in self.rows().enumerate() {
            if y > 0 {
                writeln!(f)?;
            }

            for &ch in row.iter() {
                write!(f, "{}", ch)?;
            }
        }

        Ok(())
    }
}
