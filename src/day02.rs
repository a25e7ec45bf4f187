// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Shape { Rock, Paper, Scissors }

impl Shape {
	fn score(self) -> u64 {
		self as u64 + 1
	}

	/// The shape this one defeats.
	fn beats(self) -> Shape {
		use Shape::*;
		match self { Rock => Scissors, Paper => Rock, Scissors => Paper }
	}

	/// The shape that defeats this one.
	fn beaten_by(self) -> Shape {
		use Shape::*;
		match self { Rock => Paper, Paper => Scissors, Scissors => Rock }
	}

	fn against(self, theirs: Shape) -> Outcome {
		if self == theirs { Outcome::Draw }
		else if self.beats() == theirs { Outcome::Win }
		else { Outcome::Lose }
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Outcome { Lose, Draw, Win }

impl Outcome {
	fn score(self) -> u64 {
		self as u64 * 3
	}

	/// What to play against `theirs` for this outcome.
	fn choose(self, theirs: Shape) -> Shape {
		match self {
			Outcome::Lose => theirs.beats(),
			Outcome::Draw => theirs,
			Outcome::Win => theirs.beaten_by(),
		}
	}
}

/// Second column of the strategy guide, whose meaning differs per part.
#[derive(Clone, Copy, Debug)]
enum Column { X, Y, Z }

impl Column {
	fn as_shape(self) -> Shape {
		match self { Column::X => Shape::Rock, Column::Y => Shape::Paper, Column::Z => Shape::Scissors }
	}

	fn as_outcome(self) -> Outcome {
		match self { Column::X => Outcome::Lose, Column::Y => Outcome::Draw, Column::Z => Outcome::Win }
	}
}

struct Round {
	theirs: Shape,
	column: Column,
}


fn input_rounds_from_str(s: &str) -> Result<Vec<Round>, MalformedInput> {
	parsing::rounds_from_str(s).collect::<Result<_, _>>().malformed()
}


fn score(ours: Shape, theirs: Shape) -> u64 {
	ours.score() + ours.against(theirs).score()
}

fn part1_impl(input_rounds: &[Round]) -> u64 {
	input_rounds.iter()
		.map(|round| score(round.column.as_shape(), round.theirs))
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, MalformedInput> {
	Ok(part1_impl(&input_rounds_from_str(input)?))
}


fn part2_impl(input_rounds: &[Round]) -> u64 {
	input_rounds.iter()
		.map(|round| score(round.column.as_outcome().choose(round.theirs), round.theirs))
		.sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, MalformedInput> {
	Ok(part2_impl(&input_rounds_from_str(input)?))
}


mod parsing {
	use {std::str::FromStr, itertools::Itertools as _};
	use super::{Shape, Column, Round};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundError {
		Format,
		Theirs(char),
		Column(char),
	}

	impl FromStr for Round {
		type Err = RoundError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (theirs, column) = s.split_once(' ')
				.and_then(|(theirs, column)| Some((
					theirs.chars().exactly_one().ok()?,
					column.chars().exactly_one().ok()?,
				)))
				.ok_or(RoundError::Format)?;
			let theirs = match theirs {
				'A' => Shape::Rock,
				'B' => Shape::Paper,
				'C' => Shape::Scissors,
				found => return Err(RoundError::Theirs(found)),
			};
			let column = match column {
				'X' => Column::X,
				'Y' => Column::Y,
				'Z' => Column::Z,
				found => return Err(RoundError::Column(found)),
			};
			Ok(Round { theirs, column })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RoundsError {
		Empty,
		Round { line: usize, source: RoundError },
	}

	pub(super) fn rounds_from_str(s: &str) -> impl Iterator<Item = Result<Round, RoundsError>> + '_ {
		use {std::iter::once, itertools::Either::*};
		if s.is_empty() { return Left(once(Err(RoundsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|source| RoundsError::Round { line: l + 1, source })))
	}
}
