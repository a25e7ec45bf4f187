// Copyright (c) 2022 Bastiaan Marinus van de Weerd

mod util;
util::mod_days![01, 02, 03, 04, 05, 06, 07, 08, 09, 10, 11];

use std::path::PathBuf;


/// Solves one part of one day of Advent of Code 2022
#[derive(Debug, clap::Parser)]
#[command(name = "advent2022")]
struct Args {
	/// The day to solve
	#[arg(value_parser = clap::value_parser!(u8).range(1..=25))]
	day: u8,

	/// The part of the day to solve
	#[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
	part: u8,

	/// Input file path, `<INPUTS_DIR>/<DAY>/input.txt` if omitted
	#[arg(short, long)]
	input: Option<PathBuf>,

	/// Directory holding the day-numbered inputs
	#[arg(long, default_value = "inputs")]
	inputs_dir: PathBuf,

	/// Log more (repeat for even more); `RUST_LOG` takes precedence
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

impl Args {
	fn input_path(&self) -> PathBuf {
		self.input.clone().unwrap_or_else(||
			self.inputs_dir.join(self.day.to_string()).join("input.txt"))
	}

	fn log_level(&self) -> log::LevelFilter {
		match self.verbose {
			0 => log::LevelFilter::Info,
			1 => log::LevelFilter::Debug,
			_ => log::LevelFilter::Trace,
		}
	}
}


fn run(args: &Args) -> Result<String, util::Error> {
	let (day, part) = (args.day, args.part);
	let solve = solver(day, part).ok_or(util::Error::NoSolver { day, part })?;

	let path = args.input_path();
	log::debug!("day {day} part {part}; input {}", path.display());
	let input = util::read_input(&path)?;

	Ok(solve(&input)?)
}

fn main() -> anyhow::Result<()> {
	use clap::Parser as _;
	let args = Args::parse();

	env_logger::Builder::new()
		.filter_level(args.log_level())
		.parse_default_env()
		.init();

	let answer = run(&args)?;
	log::info!("day {} part {}: {answer:?}", args.day, args.part);

	if answer.contains('\n') { println!("result:\n{answer}") }
	else { println!("result: {answer}") }
	Ok(())
}
