//! Interactive cube player.
//!
//! Reads command lines, dispatches to the session, and prints the cube
//! between commands. All engine and macro logic lives in the library;
//! this binary only does terminal I/O.

use std::io::{self, BufRead, Write};

use rust_cube::{CubeEngine, Session};

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    // Set to false to test rotations on a solved cube.
    let scramble = true;
    let check_solved = scramble;

    let mut engine = CubeEngine::new(3)?;
    if scramble {
        engine.scramble();
    }
    let mut session = Session::new(engine);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        println!("{}", session.engine().display());
        println!("Move count: {}\n", session.engine().move_count());

        if check_solved {
            match session.engine().is_solved() {
                Ok(true) => {
                    println!("SOLVED!");
                    break;
                }
                Ok(false) => {}
                // Invalid configurations are reported; play continues.
                Err(err) => println!("{err}"),
            }
        }

        print!("cube> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.is_empty() {
            continue;
        }

        let outcome = match words.as_slice() {
            ["q"] | ["quit"] => break,
            ["-"] | ["undo"] => session.undo(),
            ["save", path] => session.save_commands(path),
            ["load", path] => session.load_commands(path),
            ["cmds"] => {
                for (name, expansion) in session.commands() {
                    println!("{name} : {expansion}");
                }
                Ok(())
            }
            [name, ":", expansion @ ..] if !expansion.is_empty() => {
                session.define(name, &expansion.join(" "));
                Ok(())
            }
            _ => session.run_line(&line),
        };

        if let Err(err) = outcome {
            println!("Invalid command line: {line}");
            println!("{err}");
        }
    }

    Ok(())
}
