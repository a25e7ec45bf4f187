// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


/// Set of item types, bit `n` standing for the item of priority `n`.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Items(u64);

impl Items {
	fn priority(item: u8) -> u32 {
		match item {
			b'a'..=b'z' => (item - b'a' + 1) as u32,
			b'A'..=b'Z' => (item - b'A' + 27) as u32,
			_ => unreachable!("validated while parsing"),
		}
	}

	fn from_bytes(bytes: &[u8]) -> Items {
		Items(bytes.iter().fold(0, |set, &item| set | 1 << Items::priority(item)))
	}

	fn intersection(self, other: Items) -> Items {
		Items(self.0 & other.0)
	}

	fn priorities(self) -> impl Iterator<Item = u32> {
		(1..=52).filter(move |p| self.0 & 1 << p != 0)
	}

	/// Sum of the priorities of every item type in this set; `0` when empty.
	fn priority_sum(self) -> u64 {
		self.priorities().map(u64::from).sum()
	}
}

struct Rucksack<'s>(&'s [u8]);

impl Rucksack<'_> {
	fn compartments(&self) -> [Items; 2] {
		let (first, second) = self.0.split_at(self.0.len() / 2);
		[Items::from_bytes(first), Items::from_bytes(second)]
	}

	fn items(&self) -> Items {
		Items::from_bytes(self.0)
	}
}


#[allow(dead_code)]
#[derive(Debug)]
struct IncompleteGroupError { len: usize }


fn input_rucksacks_from_str(s: &str) -> Result<Vec<Rucksack<'_>>, MalformedInput> {
	parsing::rucksacks_from_str(s).collect::<Result<_, _>>().malformed()
}


fn part1_impl(input_rucksacks: &[Rucksack<'_>]) -> u64 {
	input_rucksacks.iter()
		.map(|rucksack| {
			let [first, second] = rucksack.compartments();
			first.intersection(second).priority_sum()
		})
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, MalformedInput> {
	Ok(part1_impl(&input_rucksacks_from_str(input)?))
}


fn part2_impl(input_rucksacks: &[Rucksack<'_>]) -> Result<u64, IncompleteGroupError> {
	let groups = input_rucksacks.chunks_exact(3);
	if !groups.remainder().is_empty() {
		return Err(IncompleteGroupError { len: groups.remainder().len() })
	}
	Ok(groups
		.enumerate()
		.map(|(g, group)| {
			let common = group.iter()
				.map(Rucksack::items)
				.reduce(Items::intersection)
				.unwrap_or(Items(0));
			log::trace!("group {g}: badge priorities {:?}", common.priorities().collect::<Vec<_>>());
			common.priority_sum()
		})
		.sum())
}

pub(crate) fn part2(input: &str) -> Result<u64, MalformedInput> {
	part2_impl(&input_rucksacks_from_str(input)?).malformed()
}


mod parsing {
	use super::Rucksack;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksackError {
		OddLen(usize),
		InvalidItem { column: usize, found: char },
	}

	impl<'s> TryFrom<&'s str> for Rucksack<'s> {
		type Error = RucksackError;
		fn try_from(s: &'s str) -> Result<Self, Self::Error> {
			if let Some((c, found)) = s.char_indices().find(|(_, c)| !c.is_ascii_alphabetic()) {
				return Err(RucksackError::InvalidItem { column: c + 1, found })
			}
			if s.len() % 2 != 0 { return Err(RucksackError::OddLen(s.len())) }
			Ok(Rucksack(s.as_bytes()))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum RucksacksError {
		Empty,
		Rucksack { line: usize, source: RucksackError },
	}

	pub(super) fn rucksacks_from_str(s: &str) -> impl Iterator<Item = Result<Rucksack<'_>, RucksacksError>> + '_ {
		use {std::iter::once, either::Either::*};
		if s.is_empty() { return Left(once(Err(RucksacksError::Empty))) }
		Right(s.lines()
			.enumerate()
			.map(|(l, line)| line.try_into()
				.map_err(|source| RucksacksError::Rucksack { line: l + 1, source })))
	}
}


#[cfg(test)]
mod tests {
	use {super::*, test_case::test_case};

	const INPUT: &str = indoc::indoc! { "
		vJrwpWtwJgWrhcsFMMfFFhFp
		jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
		PmmdzqPrVvPwwTWBwg
		wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
		ttgJtRGJQctTZtZT
		CrZsJsPPZsGzwwsLwLmpwMDw
	" };

	#[test_case(b'a' => 1)]
	#[test_case(b'z' => 26)]
	#[test_case(b'A' => 27)]
	#[test_case(b'Z' => 52)]
	fn priority(item: u8) -> u32 {
		Items::priority(item)
	}

	#[test_case("vJrwpWtwJgWrhcsFMMfFFhFp" => 16)]
	#[test_case("jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL" => 38)]
	#[test_case("PmmdzqPrVvPwwTWBwg" => 42)]
	#[test_case("CrZsJsPPZsGzwwsLwLmpwMDw" => 19)]
	#[test_case("abab" => 3)]
	#[test_case("abcd" => 0)]
	#[test_case("" => 0 ; "blank")]
	fn common_item(line: &str) -> u64 {
		let [first, second] = Rucksack::try_from(line).unwrap().compartments();
		first.intersection(second).priority_sum()
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(&input_rucksacks_from_str(INPUT).unwrap()), 157);
	}

	#[test]
	fn part1_blank_line() {
		assert_eq!(super::part1("vJrwpWtwJgWrhcsFMMfFFhFp\n\nabab\n").unwrap(), 19);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(&input_rucksacks_from_str(INPUT).unwrap()).unwrap(), 70);
	}

	#[test]
	fn malformed() {
		assert!(super::part1("abc\n").is_err());
		assert!(super::part1("ab1b\n").is_err());
		assert!(super::part2("aa\naa\n").is_err());
	}
}
