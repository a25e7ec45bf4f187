// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Crate(u8);

/// Stacks bottom to top, indexed from zero.
#[derive(Debug)]
struct Stacks(Vec<Vec<Crate>>);

impl Stacks {
	/// Top crate of every non-empty stack.
	fn message(&self) -> String {
		self.0.iter()
			.filter_map(|stack| stack.last())
			.map(|crat| crat.0 as char)
			.collect()
	}
}

#[derive(PartialEq, Eq, Debug)]
struct Step {
	count: usize,
	from: usize,
	to: usize,
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Crane {
	/// Moves one crate at a time.
	CrateMover9000,
	/// Moves several crates at once, retaining their order.
	CrateMover9001,
}

#[allow(dead_code)]
#[derive(Debug)]
enum CraneError {
	NotEnoughCrates { step: usize, available: usize, count: usize },
}

impl Crane {
	fn operate(self, stacks: &mut Stacks, n: usize, step: &Step) -> Result<(), CraneError> {
		let from = &mut stacks.0[step.from];
		let at = from.len().checked_sub(step.count)
			.ok_or(CraneError::NotEnoughCrates { step: n + 1, available: from.len(), count: step.count })?;
		let mut lifted = from.split_off(at);
		if self == Crane::CrateMover9000 { lifted.reverse() }
		stacks.0[step.to].extend(lifted);
		Ok(())
	}
}


fn input_from_str(s: &str) -> Result<(Stacks, Vec<Step>), MalformedInput> {
	parsing::try_stacks_and_steps_from_str(s).malformed()
}


fn part1and2_impl(input: (Stacks, Vec<Step>), crane: Crane) -> Result<String, CraneError> {
	let (mut stacks, steps) = input;
	for (n, step) in steps.iter().enumerate() {
		crane.operate(&mut stacks, n, step)?;
		log::trace!("{step:?}: {}", stacks.message());
	}
	Ok(stacks.message())
}

pub(crate) fn part1(input: &str) -> Result<String, MalformedInput> {
	part1and2_impl(input_from_str(input)?, Crane::CrateMover9000).malformed()
}

pub(crate) fn part2(input: &str) -> Result<String, MalformedInput> {
	part1and2_impl(input_from_str(input)?, Crane::CrateMover9001).malformed()
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Crate, Stacks, Step};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StacksError {
		NoLabels,
		Label { column: usize, found: char },
		InvalidCrate { line: usize, column: usize },
		FloatingCrate { line: usize, column: usize },
	}

	/// Parses the drawing, whose last line labels the stacks ` 1   2   3 `.
	fn try_stacks_from_lines(lines: &[&str]) -> Result<Stacks, StacksError> {
		let (labels, drawing) = lines.split_last().ok_or(StacksError::NoLabels)?;

		let columns = labels.char_indices()
			.filter(|(_, c)| !c.is_whitespace())
			.enumerate()
			.map(|(i, (column, c))| match c.to_digit(10) {
				Some(label) if label as usize == i + 1 => Ok(column),
				_ => Err(StacksError::Label { column: column + 1, found: c }),
			})
			.collect::<Result<Vec<_>, _>>()?;
		if columns.is_empty() { return Err(StacksError::NoLabels) }

		let mut stacks = vec![vec![]; columns.len()];
		let mut topped = vec![false; columns.len()];
		for (l, line) in drawing.iter().enumerate().rev() {
			let line = line.as_bytes();
			for (stack, &column) in columns.iter().enumerate() {
				match line.get(column) {
					None | Some(b' ') => topped[stack] = true,
					Some(&b) if b.is_ascii_uppercase()
						&& column > 0 && line[column - 1] == b'['
						&& line.get(column + 1) == Some(&b']') => {
						if topped[stack] {
							return Err(StacksError::FloatingCrate { line: l + 1, column: column + 1 })
						}
						stacks[stack].push(Crate(b));
					}
					Some(_) => return Err(StacksError::InvalidCrate { line: l + 1, column: column + 1 }),
				}
			}
		}

		Ok(Stacks(stacks))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StepError {
		Format,
		Count(ParseIntError),
		From(ParseIntError),
		To(ParseIntError),
		ZeroStack,
		SameStack,
	}

	impl FromStr for Step {
		type Err = StepError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let words = s.split_whitespace().collect::<Vec<_>>();
			let ["move", count, "from", from, "to", to] = words[..] else {
				return Err(StepError::Format)
			};
			let count = count.parse().map_err(StepError::Count)?;
			let from = from.parse::<usize>().map_err(StepError::From)?;
			let to = to.parse::<usize>().map_err(StepError::To)?;
			if from == 0 || to == 0 { return Err(StepError::ZeroStack) }
			if from == to { return Err(StepError::SameStack) }
			Ok(Step { count, from: from - 1, to: to - 1 })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum StacksAndStepsError {
		NoBlank,
		Stacks(StacksError),
		Step { line: usize, source: StepError },
		UnknownStack { line: usize, stack: usize },
	}

	pub(super) fn try_stacks_and_steps_from_str(s: &str) -> Result<(Stacks, Vec<Step>), StacksAndStepsError> {
		let lines = s.lines().collect::<Vec<_>>();
		let blank = lines.iter().position(|line| line.trim().is_empty())
			.ok_or(StacksAndStepsError::NoBlank)?;

		let stacks = try_stacks_from_lines(&lines[..blank]).map_err(StacksAndStepsError::Stacks)?;

		let steps = lines.iter()
			.enumerate()
			.skip(blank + 1)
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| {
				let step: Step = line.parse()
					.map_err(|source| StacksAndStepsError::Step { line: l + 1, source })?;
				if let Some(&stack) = [step.from, step.to].iter().find(|&&s| s >= stacks.0.len()) {
					return Err(StacksAndStepsError::UnknownStack { line: l + 1, stack: stack + 1 })
				}
				Ok(step)
			})
			.collect::<Result<_, _>>()?;

		Ok((stacks, steps))
	}
}
