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

use std::{fs, process::ExitCode, ffi::OsString};
use clap::Parser;
use serde::Serialize;
use wheres_that_word::{Direction, Puzzle};

#[derive(Parser)]
#[command(name = "Check guess")]
struct Cli {
    #[arg(value_name = "GUESS")]
    guess: String,
    #[arg(short, long, value_name = "FILE", default_value = "puzzle1.txt")]
    puzzle: OsString,
    #[arg(short, long, value_name = "DIRECTION")]
    direction: Direction,
    #[arg(short, long, value_name = "N")]
    index: usize,
    #[arg(
        short,
        long,
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    words_left: u32,
    #[arg(short, long)]
    json: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    guess: &'a str,
    direction: Direction,
    index: usize,
    words_left: u32,
    found: bool,
    points: u32,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();

    let puzzle_string = match fs::read_to_string(&cli.puzzle) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("{}: {}", cli.puzzle.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    let puzzle = match Puzzle::new(&puzzle_string) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}: {}", cli.puzzle.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    log::info!(
        "loaded {}x{} puzzle from {}",
        puzzle.row_length(),
        puzzle.n_rows(),
        cli.puzzle.to_string_lossy(),
    );

    let points = match puzzle.check_guess(
        cli.direction,
        &cli.guess,
        cli.index,
        cli.words_left,
    ) {
        Ok(points) => points,
        Err(e) => {
            eprintln!("{}: {}", cli.puzzle.to_string_lossy(), e);
            return ExitCode::FAILURE;
        },
    };

    if cli.json {
        let report = Report {
            guess: &cli.guess,
            direction: cli.direction,
            index: cli.index,
            words_left: cli.words_left,
            found: points > 0,
            points,
        };

        match serde_json::to_string(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            },
        }
    } else {
        println!("{}", points);
    }

    ExitCode::SUCCESS
}
