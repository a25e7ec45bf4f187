// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Instr {
	Noop,
	AddX(i64),
}

impl Instr {
	fn cycles(self) -> usize {
		match self { Instr::Noop => 1, Instr::AddX(_) => 2 }
	}
}

/// Register value *during* a cycle; cycles count from 1.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Cycle { number: usize, x: i64 }

impl Cycle {
	fn signal_strength(&self) -> i64 {
		self.number as i64 * self.x
	}
}

mod cpu {
	use super::{Instr, Cycle};

	pub(super) struct Cpu {
		pub(super) x: i64,
		pub(super) history: Vec<Cycle>,
	}

	impl Cpu {
		pub(super) fn new() -> Self {
			Cpu { x: 1, history: vec![] }
		}

		pub(super) fn execute(&mut self, instr: Instr) {
			for _ in 0..instr.cycles() {
				self.history.push(Cycle { number: self.history.len() + 1, x: self.x });
			}
			if let Instr::AddX(v) = instr { self.x += v }
			log::trace!("{instr:?} → cycle {}, x {}", self.history.len(), self.x);
		}

		pub(super) fn run(program: &[Instr]) -> Self {
			let mut cpu = Cpu::new();
			program.iter().for_each(|&instr| cpu.execute(instr));
			cpu
		}
	}
}


const CRT_WIDTH: usize = 40;
const CRT_HEIGHT: usize = 6;

struct Crt([bool; CRT_WIDTH * CRT_HEIGHT]);

impl Crt {
	fn draw(history: &[Cycle]) -> Crt {
		let mut pixels = [false; CRT_WIDTH * CRT_HEIGHT];
		for (pixel, cycle) in pixels.iter_mut().zip(history) {
			let column = ((cycle.number - 1) % CRT_WIDTH) as i64;
			*pixel = (cycle.x - 1..=cycle.x + 1).contains(&column);
		}
		Crt(pixels)
	}
}

impl std::fmt::Display for Crt {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		use std::fmt::Write;
		for (y, row) in self.0.chunks(CRT_WIDTH).enumerate() {
			if y > 0 { f.write_char('\n')? }
			for &lit in row { f.write_char(if lit { '#' } else { '.' })? }
		}
		Ok(())
	}
}


fn input_program_from_str(s: &str) -> Result<Vec<Instr>, MalformedInput> {
	parsing::instrs_from_str(s).collect::<Result<_, _>>().malformed()
}


/// Sums the signal strengths every 40 cycles from the 20th, up to but excluding the final cycle.
fn part1_impl(input_program: &[Instr]) -> i64 {
	let history = cpu::Cpu::run(input_program).history;
	let last = history.len();
	history.iter()
		.filter(|cycle| cycle.number % 40 == 20 && cycle.number < last)
		.map(Cycle::signal_strength)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<i64, MalformedInput> {
	Ok(part1_impl(&input_program_from_str(input)?))
}


fn part2_impl(input_program: &[Instr]) -> Crt {
	Crt::draw(&cpu::Cpu::run(input_program).history)
}

pub(crate) fn part2(input: &str) -> Result<impl std::fmt::Display, MalformedInput> {
	Ok(part2_impl(&input_program_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::Instr;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum InstrError {
		Invalid(String),
		AddX(ParseIntError),
	}

	impl FromStr for Instr {
		type Err = InstrError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			match s.split_once(' ') {
				None if s == "noop" => Ok(Instr::Noop),
				Some(("addx", v)) => Ok(Instr::AddX(v.parse().map_err(InstrError::AddX)?)),
				_ => Err(InstrError::Invalid(s.to_owned())),
			}
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct InstrsError {
		line: usize,
		source: InstrError,
	}

	pub(super) fn instrs_from_str(s: &str) -> impl Iterator<Item = Result<Instr, InstrsError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|source| InstrsError { line: l + 1, source }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			noop
			addx 3
			addx -5
		" },
		include_str!("day10-test.txt"),
	];

	#[test]
	fn parse() {
		assert_eq!(input_program_from_str(INPUTS[0]).unwrap(),
			[Instr::Noop, Instr::AddX(3), Instr::AddX(-5)]);
		assert!(super::part1("subx 3\n").is_err());
		assert!(super::part1("addx three\n").is_err());
	}

	#[test]
	fn small_program() {
		let cpu = cpu::Cpu::run(&input_program_from_str(INPUTS[0]).unwrap());
		assert_eq!(cpu.x, -1);
		assert_eq!(cpu.history.iter().map(|c| (c.number, c.x)).collect::<Vec<_>>(),
			[(1, 1), (2, 1), (3, 1), (4, 4), (5, 4)]);
	}

	#[test]
	fn large_program() {
		let cpu = cpu::Cpu::run(&input_program_from_str(INPUTS[1]).unwrap());
		assert_eq!(cpu.history.len(), 240);
		for (number, x) in [(20, 21), (60, 19), (100, 18), (140, 21), (180, 16), (220, 18)] {
			assert_eq!(cpu.history[number - 1], Cycle { number, x });
		}
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(&input_program_from_str(INPUTS[0]).unwrap()), 0);
		assert_eq!(part1_impl(&input_program_from_str(INPUTS[1]).unwrap()), 13140);
	}

	#[test]
	fn part1_excludes_final_cycle() {
		assert_eq!(super::part1(&"noop\n".repeat(20)).unwrap(), 0);
		assert_eq!(super::part1(&"noop\n".repeat(21)).unwrap(), 20);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(&input_program_from_str(INPUTS[1]).unwrap()).to_string(), indoc::indoc! { "
			##..##..##..##..##..##..##..##..##..##..
			###...###...###...###...###...###...###.
			####....####....####....####....####....
			#####.....#####.....#####.....#####.....
			######......######......######......####
			#######.......#######.......#######....." });
	}
}
