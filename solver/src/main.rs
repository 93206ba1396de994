use std::io::Read;
use std::{env, fs, io, process};

use hexagram::render::Figure;
use hexagram::Puzzle;

fn main() {
    let raw = match env::args().nth(1) {
        Some(path) => match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) => {
                eprintln!("cannot read {path}: {err}");
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(err) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("cannot read stdin: {err}");
                process::exit(1);
            }
            buffer
        }
    };

    let words = raw.lines().map(str::trim).filter(|line| !line.is_empty());
    let puzzle = match Puzzle::parse(words) {
        Ok(puzzle) => puzzle,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    };

    let mut found = 0usize;
    for solution in puzzle.solve() {
        println!("answer: {solution}");
        print!("{}", Figure::from(&solution));
        found += 1;
    }

    if found == 0 {
        println!("no arrangement fills the star");
    }
}
