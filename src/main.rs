use clap::{App, Arg};
use exsat::bench;
use exsat::formula::dimacs::{parse, DimacsParseError};
use exsat::formula::Formula;
use exsat::{SatResult, Solver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs::File;

fn main() {
    env_logger::init();

    let matches = App::new("exsat")
        .arg(Arg::with_name("INPUT").help("input file (in CNF)").index(1))
        .arg(
            Arg::with_name("bench")
                .long("bench")
                .help("generate and time random formulas of increasing size"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .default_value("42")
                .help("seed for the random formula generator"),
        )
        .arg(
            Arg::with_name("output")
                .long("output")
                .takes_value(true)
                .help("append benchmark results to this file"),
        )
        .get_matches();

    if matches.is_present("bench") {
        let seed = match matches.value_of("seed").unwrap().parse::<u64>() {
            Ok(seed) => seed,
            Err(_) => {
                eprintln!("invalid seed");
                std::process::exit(-1);
            }
        };

        let mut rng = StdRng::seed_from_u64(seed);
        let results = bench::run_trials(&mut rng, bench::DEFAULT_SIZES, bench::DEFAULT_TRIALS_PER_SIZE);

        let written = match matches.value_of("output") {
            Some(path) => bench::append_results(path, &results),
            None => bench::write_results(&mut std::io::stdout(), &results),
        };
        if let Err(e) = written {
            eprintln!("write error: {:?}", e);
            std::process::exit(-1);
        }
        return;
    }

    let f = if let Some(path) = matches.value_of("INPUT") {
        parse_from_file(path)
    } else {
        parse(std::io::stdin())
    };

    match f {
        Ok(f) => {
            let mut solver = Solver::new(f);

            let exit_code = match solver.solve() {
                SatResult::Satisfiable(witness) => {
                    println!("s SATISFIABLE");
                    println!("v {} 0", witness);
                    0
                }
                SatResult::Unsatisfiable => {
                    println!("s UNSATISFIABLE");
                    1
                }
            };
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("parse error: {:?}", e);
            std::process::exit(-1);
        }
    }
}

fn parse_from_file(path: &str) -> Result<Formula, DimacsParseError> {
    let file = File::open(path)?;
    parse(file)
}
