// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use std::{fmt::Debug, io, path::{Path, PathBuf}};


/// Solves one part of one day, given that day’s complete input.
pub(crate) type Solver = fn(&str) -> Result<String, MalformedInput>;


/// Wraps whatever a day’s parser rejected; the message is the parser’s own `Debug` error.
#[derive(Debug, thiserror::Error)]
#[error("malformed input: {0}")]
pub(crate) struct MalformedInput(String);

pub(crate) trait ResultExt<T> {
	fn malformed(self) -> Result<T, MalformedInput>;
}

impl<T, E: Debug> ResultExt<T> for Result<T, E> {
	fn malformed(self) -> Result<T, MalformedInput> {
		self.map_err(|e| MalformedInput(format!("{e:?}")))
	}
}


#[derive(Debug, thiserror::Error)]
pub(crate) enum Error {
	#[error("no solver for day {day} part {part}")]
	NoSolver { day: u8, part: u8 },
	#[error("cannot read input {}", path.display())]
	Input { path: PathBuf, #[source] source: io::Error },
	#[error(transparent)]
	Malformed(#[from] MalformedInput),
}


pub(crate) fn read_input(path: &Path) -> Result<String, Error> {
	std::fs::read_to_string(path)
		.map_err(|source| Error::Input { path: path.to_owned(), source })
}


/// Declares the `dayNN` modules and generates the `solver` lookup over their `part1`/`part2`.
macro_rules! mod_days { ( $( $day:literal ),* $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )*

	#[cfg_attr(not(test), allow(dead_code))]
	pub(crate) const DAYS: &[u8] = &[$( $day ),*];

	pub(crate) fn solver(day: u8, part: u8) -> Option<crate::util::Solver> {
		match (day, part) {
			$(
				($day, 1) => Some((|s: &str| [<day $day>]::part1(s)
					.map(|answer| answer.to_string())) as crate::util::Solver),
				($day, 2) => Some((|s: &str| [<day $day>]::part2(s)
					.map(|answer| answer.to_string())) as crate::util::Solver),
			)*
			_ => None,
		}
	}
} } }

pub(crate) use mod_days;
