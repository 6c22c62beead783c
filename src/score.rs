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

use super::direction::Direction;

// Once there are this many words left to find, every word is worth
// the same number of points.
pub const THRESHOLD: u32 = 5;
// Extra points for finding the last word.
pub const BONUS: u32 = 12;

/// Returns the points for finding a word in `direction` when
/// `num_words_left` words (including this one) remain to be found.
///
/// Panics if `num_words_left` is zero.
pub fn points(direction: Direction, num_words_left: u32) -> u32 {
    assert!(num_words_left > 0);

    let factor = direction.factor();

    if num_words_left >= THRESHOLD {
        factor * THRESHOLD
    } else if num_words_left > 1 {
        (2 * THRESHOLD - num_words_left) * factor
    } else {
        (2 * THRESHOLD - 1) * factor + BONUS
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn examples() {
        assert_eq!(points(Direction::Up, 2), 32);
        assert_eq!(points(Direction::Down, 7), 10);
        assert_eq!(points(Direction::Forward, 1), 21);
        assert_eq!(points(Direction::Backward, 4), 18);
    }

    #[test]
    fn flat_above_threshold() {
        for direction in Direction::ALL {
            let expected = direction.factor() * THRESHOLD;

            for n in THRESHOLD..THRESHOLD + 20 {
                assert_eq!(points(direction, n), expected);
            }
        }
    }

    #[test]
    fn more_points_for_fewer_words() {
        for direction in Direction::ALL {
            for n in 2..30 {
                assert!(points(direction, n + 1) <= points(direction, n));
            }

            assert!(points(direction, 1) > points(direction, 2));
            assert_eq!(
                points(direction, 1),
                9 * direction.factor() + BONUS,
            );
        }
    }

    #[test]
    fn harder_directions_score_more() {
        for n in 1..10 {
            assert!(points(Direction::Forward, n) < points(Direction::Down, n));
            assert!(points(Direction::Down, n) < points(Direction::Backward, n));
            assert!(points(Direction::Backward, n) < points(Direction::Up, n));
        }
    }

    #[test]
    #[should_panic]
    fn no_words_left() {
        points(Direction::Forward, 0);
    }
}
