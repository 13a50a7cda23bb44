use std::{env, fs, process::ExitCode};

use colored::Colorize;
use propcheck::checker::{Problem, Verdict};

fn main() -> ExitCode {
    let Some(filename) = env::args().nth(1) else {
        eprintln!("Usage: propcheck <filename>");
        return ExitCode::FAILURE;
    };

    let source = match fs::read_to_string(&filename) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("{} cannot open {filename}: {error}", "Error:".red());
            return ExitCode::FAILURE;
        }
    };

    let problem = match source.parse::<Problem>() {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{} {error} in {filename}", "Error:".red());
            return ExitCode::FAILURE;
        }
    };

    match problem.check() {
        Verdict::Verified => {
            println!("{}", "Theorem has been verified!".green());
            ExitCode::SUCCESS
        }
        Verdict::Inconsistent => {
            println!("{}", "Axioms are not consistent!".yellow());
            ExitCode::SUCCESS
        }
        Verdict::Counterexample(assignment) => {
            println!("{}", "Theorem is false!".red());

            if !problem.variables.is_empty() {
                println!("Counterexample:");
                println!("{:>40} Value", "Proposition");
                for (name, value) in problem.variables.bindings(assignment) {
                    println!("{name:>40} {}", if value { "True" } else { "False" });
                }
            }

            ExitCode::FAILURE
        }
    }
}
