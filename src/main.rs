extern crate dynamic_order_statistics;
#[macro_use]
extern crate log;
extern crate rand;
extern crate simplelog;

use dynamic_order_statistics::{analysis, OsTree, Result};
use log::LevelFilter;
use rand::Rng;
use simplelog::{Config, SimpleLogger};
use std::env;
use std::process;

const USAGE: &str = "usage: dynamic-order-statistics [demo [n] | analyze [max_n] [step]]";

fn parse_arg(args: &[String], index: usize, default: usize) -> usize {
    match args.get(index) {
        Some(arg) => match arg.parse() {
            Ok(value) => value,
            Err(_) => {
                eprintln!("{}", USAGE);
                process::exit(2);
            },
        },
        None => default,
    }
}

fn demo(n: usize) -> Result<()> {
    let mut rng = rand::thread_rng();
    let mut tree = OsTree::build(n);
    println!("{}", tree);
    if tree.is_empty() {
        return Ok(());
    }

    for _ in 0..3 {
        let rank = rng.gen_range(1, n + 1);
        println!("select {} -> {}\n", rank, tree.select(rank)?);
    }

    let rank = rng.gen_range(1, n + 1);
    if let Some(key) = tree.delete(rank)? {
        println!("delete {} -> {}\n", rank, key);
    }
    println!("{}", tree);
    tree.check_invariants()
}

fn analyze(max_n: usize, step: usize) -> Result<()> {
    let step = step.max(1);
    let sizes = (1..=max_n / step)
        .map(|index| index * step)
        .collect::<Vec<usize>>();
    info!("analyzing {} sizes up to {}", sizes.len(), max_n);
    let samples = analysis::measure(&sizes, analysis::DEFAULT_REPEATS, &mut rand::thread_rng())?;
    println!("n,build,select,delete");
    for sample in samples {
        println!("{},{},{},{}", sample.n, sample.build, sample.select, sample.delete);
    }
    Ok(())
}

fn main() {
    let level = match env::var("OST_DEBUG") {
        Ok(_) => LevelFilter::Debug,
        Err(_) => LevelFilter::Info,
    };
    if let Err(error) = SimpleLogger::init(level, Config::default()) {
        eprintln!("failed to initialize logger: {}", error);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let result = match args.get(0).map(String::as_str) {
        None | Some("demo") => demo(parse_arg(&args, 1, 11)),
        Some("analyze") => analyze(parse_arg(&args, 1, 10000), parse_arg(&args, 2, 100)),
        Some(_) => {
            eprintln!("{}", USAGE);
            process::exit(2);
        },
    };

    if let Err(error) = result {
        error!("{}", error);
        process::exit(1);
    }
}
