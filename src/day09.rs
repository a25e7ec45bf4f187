// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Dir { Up, Down, Left, Right }

#[derive(PartialEq, Eq, Debug)]
struct Motion(Dir, usize);

#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Debug)]
struct Knot { x: i64, y: i64 }

impl Knot {
	fn step(&mut self, dir: Dir) {
		match dir {
			Dir::Up => self.y += 1,
			Dir::Down => self.y -= 1,
			Dir::Left => self.x -= 1,
			Dir::Right => self.x += 1,
		}
	}

	fn touches(&self, other: &Knot) -> bool {
		self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
	}

	/// Moves one step towards `leader` unless touching it; returns whether it moved.
	fn follow(&mut self, leader: &Knot) -> bool {
		if self.touches(leader) { return false }
		self.x += (leader.x - self.x).signum();
		self.y += (leader.y - self.y).signum();
		true
	}
}


fn input_motions_from_str(s: &str) -> Result<Vec<Motion>, MalformedInput> {
	parsing::motions_from_str(s).collect::<Result<_, _>>().malformed()
}


/// Number of distinct positions visited by the tail of a rope of `KNOTS` knots.
fn part1and2_impl<const KNOTS: usize>(input_motions: &[Motion]) -> usize {
	use std::collections::HashSet;
	assert!(KNOTS >= 2);

	let mut rope = [Knot::default(); KNOTS];
	let mut tail_visited = HashSet::from([rope[KNOTS - 1]]);

	for &Motion(dir, steps) in input_motions {
		for _ in 0..steps {
			rope[0].step(dir);
			for k in 1..KNOTS {
				let leader = rope[k - 1];
				if !rope[k].follow(&leader) { break }
			}
			tail_visited.insert(rope[KNOTS - 1]);
		}
	}

	log::debug!("{KNOTS} knots; tail ends at {:?}", rope[KNOTS - 1]);
	tail_visited.len()
}

pub(crate) fn part1(input: &str) -> Result<usize, MalformedInput> {
	Ok(part1and2_impl::<2>(&input_motions_from_str(input)?))
}

pub(crate) fn part2(input: &str) -> Result<usize, MalformedInput> {
	Ok(part1and2_impl::<10>(&input_motions_from_str(input)?))
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Dir, Motion};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MotionError {
		NoSpace,
		Dir(String),
		Steps(ParseIntError),
	}

	impl FromStr for Motion {
		type Err = MotionError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (dir, steps) = s.split_once(' ').ok_or(MotionError::NoSpace)?;
			let dir = match dir {
				"U" => Dir::Up,
				"D" => Dir::Down,
				"L" => Dir::Left,
				"R" => Dir::Right,
				invalid => return Err(MotionError::Dir(invalid.to_owned())),
			};
			Ok(Motion(dir, steps.parse().map_err(MotionError::Steps)?))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct MotionsError {
		line: usize,
		source: MotionError,
	}

	pub(super) fn motions_from_str(s: &str) -> impl Iterator<Item = Result<Motion, MotionsError>> + '_ {
		s.lines()
			.enumerate()
			.filter(|(_, line)| !line.is_empty())
			.map(|(l, line)| line.parse()
				.map_err(|source| MotionsError { line: l + 1, source }))
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			R 4
			U 4
			L 3
			D 1
			R 4
			D 1
			L 5
			R 2
		" },
		indoc::indoc! { "
			R 5
			U 8
			L 8
			D 3
			R 17
			D 10
			L 25
			U 20
		" },
	];

	#[test]
	fn parse() {
		assert_eq!("R 4".parse::<Motion>().unwrap(), Motion(Dir::Right, 4));
		assert!("X 4".parse::<Motion>().is_err());
		assert!("R four".parse::<Motion>().is_err());
		assert_eq!(input_motions_from_str(INPUTS[0]).unwrap().len(), 8);
	}

	#[test]
	fn follow() {
		let mut tail = Knot::default();
		assert!(!tail.follow(&Knot { x: 1, y: 1 }));
		assert!(tail.follow(&Knot { x: 2, y: 1 }));
		assert_eq!(tail, Knot { x: 1, y: 1 });
	}

	#[test]
	fn part1() {
		assert_eq!(part1and2_impl::<2>(&input_motions_from_str(INPUTS[0]).unwrap()), 13);
	}

	#[test]
	fn part2_short() {
		assert_eq!(part1and2_impl::<10>(&input_motions_from_str(INPUTS[0]).unwrap()), 1);
	}

	#[test]
	fn part2_long() {
		assert_eq!(part1and2_impl::<10>(&input_motions_from_str(INPUTS[1]).unwrap()), 36);
	}
}
