// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


const DIRECTIONS: [[isize; 2]; 4] = [[0, -1], [-1, 0], [1, 0], [0, 1]];

#[derive(Debug)]
struct Grid {
	tree_heights: Vec<u8>,
	width: usize,
	height: usize,
}

impl Grid {
	fn tree_height(&self, [x, y]: [usize; 2]) -> u8 {
		self.tree_heights[y * self.width + x]
	}

	/// Heights from the tree at `pos` (exclusive) up to the edge, looking towards `dir`.
	fn sightline(&self, pos: [usize; 2], [dx, dy]: [isize; 2]) -> impl Iterator<Item = u8> + '_ {
		std::iter::successors(Some(pos), move |&[x, y]| {
			let next = [x.checked_add_signed(dx)?, y.checked_add_signed(dy)?];
			(next[0] < self.width && next[1] < self.height).then_some(next)
		})
			.skip(1)
			.map(|pos| self.tree_height(pos))
	}

	fn is_visible(&self, pos: [usize; 2]) -> bool {
		let height = self.tree_height(pos);
		DIRECTIONS.into_iter().any(|dir| self.sightline(pos, dir).all(|h| h < height))
	}

	fn scenic_score(&self, pos: [usize; 2]) -> u64 {
		let height = self.tree_height(pos);
		DIRECTIONS.into_iter()
			.map(|dir| {
				let mut distance = 0;
				for h in self.sightline(pos, dir) {
					distance += 1;
					if h >= height { break }
				}
				distance
			})
			.product()
	}
}


fn input_grid_from_str(s: &str) -> Result<Grid, MalformedInput> {
	s.parse::<Grid>().malformed()
}


fn part1_impl(input_grid: &Grid) -> usize {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};
	(0..input_grid.height).into_par_iter()
		.map(|y| (0..input_grid.width).filter(|&x| input_grid.is_visible([x, y])).count())
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<usize, MalformedInput> {
	Ok(part1_impl(&input_grid_from_str(input)?))
}


fn part2_impl(input_grid: &Grid) -> u64 {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};
	(0..input_grid.height).into_par_iter()
		.map(|y| (0..input_grid.width).map(|x| input_grid.scenic_score([x, y])).max().unwrap_or(0))
		.max()
		.unwrap_or(0)
}

pub(crate) fn part2(input: &str) -> Result<u64, MalformedInput> {
	Ok(part2_impl(&input_grid_from_str(input)?))
}


mod parsing {
	use std::str::FromStr;
	use super::Grid;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum GridError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
	}

	impl FromStr for Grid {
		type Err = GridError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let mut tree_heights = vec![];
			let mut width = None;
			let mut height = 0;

			for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
				if let Some(c) = line.bytes().position(|b| !b.is_ascii_digit()) {
					return Err(GridError::InvalidByte { line: l + 1, column: c + 1, found: line.as_bytes()[c] })
				}
				match width {
					None => width = Some(line.len()),
					Some(len) if len != line.len() =>
						return Err(GridError::LineLen { line: l + 1, len, found: line.len() }),
					Some(_) => (),
				}
				tree_heights.extend(line.bytes().map(|b| b - b'0'));
				height += 1;
			}

			let width = width.ok_or(GridError::Empty)?;
			Ok(Grid { tree_heights, width, height })
		}
	}
}
