// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


/// Totals per elf; a `None` (blank line) ends an elf’s inventory.
fn totals_per_elf(input_calories: &[Option<u64>]) -> Vec<u64> {
	use itertools::Itertools as _;
	input_calories.iter()
		.group_by(|calories| calories.is_some())
		.into_iter()
		.filter_map(|(is_food, foods)| is_food.then(|| foods.flatten().sum()))
		.collect()
}


fn input_calories_from_str(s: &str) -> Result<Vec<Option<u64>>, MalformedInput> {
	parsing::calories_from_str(s).collect::<Result<_, _>>().malformed()
}


fn part1_impl(input_calories: &[Option<u64>]) -> u64 {
	totals_per_elf(input_calories).into_iter().max().unwrap_or(0)
}

pub(crate) fn part1(input: &str) -> Result<u64, MalformedInput> {
	Ok(part1_impl(&input_calories_from_str(input)?))
}


fn part2_impl(input_calories: &[Option<u64>]) -> u64 {
	let mut totals = totals_per_elf(input_calories);
	totals.sort_unstable_by(|a, b| b.cmp(a));
	log::debug!("{} elves, top three carry {:?}", totals.len(), &totals[..totals.len().min(3)]);
	totals.iter().take(3).sum()
}

pub(crate) fn part2(input: &str) -> Result<u64, MalformedInput> {
	Ok(part2_impl(&input_calories_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CaloriesError {
		Empty,
		Invalid { line: usize, source: ParseIntError },
	}

	pub(super) fn calories_from_str(s: &str) -> impl Iterator<Item = Result<Option<u64>, CaloriesError>> + '_ {
		use {std::iter::once, itertools::Either};
		if s.trim().is_empty() { return Either::Left(once(Err(CaloriesError::Empty))) }

		Either::Right(s.lines()
			.enumerate()
			.map(|(l, line)| match line.trim() {
				"" => Ok(None),
				calories => calories.parse()
					.map(Some)
					.map_err(|source| CaloriesError::Invalid { line: l + 1, source }),
			}))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		1000
		2000
		3000

		4000

		5000
		6000

		7000
		8000
		9000

		10000
	" };

	#[test]
	fn totals() {
		let calories = input_calories_from_str(INPUT).unwrap();
		assert_eq!(totals_per_elf(&calories), [6000, 4000, 11000, 24000, 10000]);
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(&input_calories_from_str(INPUT).unwrap()), 24_000);
		assert_eq!(super::part1(INPUT).unwrap(), 24_000);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(&input_calories_from_str(INPUT).unwrap()), 45_000);
		assert_eq!(super::part2("100\n\n200\n").unwrap(), 300);
	}

	#[test]
	fn trailing_blank_lines() {
		assert_eq!(super::part1("5\n\n\n").unwrap(), 5);
	}

	#[test]
	fn malformed() {
		assert!(super::part1("").is_err());
		let err = super::part1("1000\nabc\n").unwrap_err().to_string();
		assert!(err.contains("line: 2"), "{err}");
	}
}
