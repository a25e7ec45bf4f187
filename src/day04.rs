// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


/// Inclusive range of section IDs.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Assignment { first: u32, last: u32 }

impl Assignment {
	fn contains(&self, other: &Assignment) -> bool {
		self.first <= other.first && other.last <= self.last
	}

	fn intersection(&self, other: &Assignment) -> Option<Assignment> {
		let first = self.first.max(other.first);
		let last = self.last.min(other.last);
		(first <= last).then_some(Assignment { first, last })
	}

	/// Renders the sections within `bounds`, `X` where assigned.
	fn render(&self, bounds: &Assignment) -> String {
		(bounds.first..=bounds.last)
			.map(|section| if (self.first..=self.last).contains(&section) { 'X' } else { '.' })
			.collect()
	}
}

struct Pair([Assignment; 2]);


fn input_pairs_from_str(s: &str) -> Result<Vec<Pair>, MalformedInput> {
	parsing::pairs_from_str(s).collect::<Result<_, _>>().malformed()
}


fn part1_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter()
		.filter(|Pair([left, right])| left.contains(right) || right.contains(left))
		.count()
}

pub(crate) fn part1(input: &str) -> Result<usize, MalformedInput> {
	Ok(part1_impl(&input_pairs_from_str(input)?))
}


fn part2_impl(input_pairs: &[Pair]) -> usize {
	input_pairs.iter()
		.filter(|Pair([left, right])| {
			let overlap = left.intersection(right);
			if log::log_enabled!(log::Level::Trace) {
				let bounds = Assignment { first: 1, last: left.last.max(right.last) };
				log::trace!("{} {} overlap {}", left.render(&bounds), right.render(&bounds),
					overlap.map_or_else(|| "none".to_owned(), |o| o.render(&bounds)));
			}
			overlap.is_some()
		})
		.count()
}

pub(crate) fn part2(input: &str) -> Result<usize, MalformedInput> {
	Ok(part2_impl(&input_pairs_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Assignment, Pair};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum AssignmentError {
		NoHyphen,
		First(ParseIntError),
		Last(ParseIntError),
		Reversed { first: u32, last: u32 },
	}

	impl FromStr for Assignment {
		type Err = AssignmentError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (first, last) = s.split_once('-').ok_or(AssignmentError::NoHyphen)?;
			let first = first.parse().map_err(AssignmentError::First)?;
			let last = last.parse().map_err(AssignmentError::Last)?;
			if last < first { return Err(AssignmentError::Reversed { first, last }) }
			Ok(Assignment { first, last })
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairError {
		NoComma,
		Left(AssignmentError),
		Right(AssignmentError),
	}

	impl FromStr for Pair {
		type Err = PairError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (left, right) = s.split_once(',').ok_or(PairError::NoComma)?;
			Ok(Pair([
				left.parse().map_err(PairError::Left)?,
				right.parse().map_err(PairError::Right)?,
			]))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum PairsError {
		Empty,
		Pair { line: usize, source: PairError },
	}

	pub(super) fn pairs_from_str(s: &str) -> impl Iterator<Item = Result<Pair, PairsError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(PairsError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.parse()
				.map_err(|source| PairsError::Pair { line: l + 1, source })))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		2-4,6-8
		2-3,4-5
		5-7,7-9
		2-8,3-7
		6-6,4-6
		2-6,4-8
	" };

	fn assignment(s: &str) -> Assignment {
		s.parse().unwrap()
	}

	#[test]
	fn render() {
		assert_eq!(assignment("2-4").render(&assignment("1-9")), ".XXX.....");
		assert_eq!(assignment("6-8").render(&assignment("1-9")), ".....XXX.");
	}

	#[test]
	fn intersection() {
		assert_eq!(assignment("5-7").intersection(&assignment("7-9")), Some(assignment("7-7")));
		assert_eq!(assignment("2-4").intersection(&assignment("6-8")), None);
		assert_eq!(assignment("2-8").intersection(&assignment("3-7")), Some(assignment("3-7")));
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(&input_pairs_from_str(INPUT).unwrap()), 2);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(&input_pairs_from_str(INPUT).unwrap()), 4);
	}

	#[test]
	fn part2_traced() {
		let _ = env_logger::builder().is_test(true).filter_level(log::LevelFilter::Trace).try_init();
		assert_eq!(part2_impl(&input_pairs_from_str(INPUT).unwrap()), 4);
	}

	#[test]
	fn malformed() {
		assert!(super::part1("4-2,1-1\n").is_err());
		assert!(super::part1("2-4\n").is_err());
		assert!(super::part2("a-4,1-2\n").is_err());
	}
}
