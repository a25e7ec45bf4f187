// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


const DISK_SIZE: u64 = 70_000_000;
const SPACE_NEEDED: u64 = 30_000_000;

#[derive(Debug)]
struct Dir<'s> {
	parent: Option<usize>,
	subdirs: Vec<(&'s str, usize)>,
	files_size: u64,
}

/// Directory tree as an arena; the root is at index `0`, and subdirectories always come after
/// their parents.
#[derive(Debug)]
struct Filesystem<'s> {
	dirs: Vec<Dir<'s>>,
}

impl<'s> Filesystem<'s> {
	const ROOT: usize = 0;

	fn new() -> Self {
		Filesystem { dirs: vec![Dir { parent: None, subdirs: vec![], files_size: 0 }] }
	}

	fn subdir(&self, dir: usize, name: &str) -> Option<usize> {
		self.dirs[dir].subdirs.iter().find(|(n, _)| *n == name).map(|&(_, i)| i)
	}

	fn add_subdir(&mut self, dir: usize, name: &'s str) -> usize {
		if let Some(existing) = self.subdir(dir, name) { return existing }
		let index = self.dirs.len();
		self.dirs.push(Dir { parent: Some(dir), subdirs: vec![], files_size: 0 });
		self.dirs[dir].subdirs.push((name, index));
		index
	}

	/// Total size per directory, including everything nested within.
	fn total_sizes(&self) -> Vec<u64> {
		let mut totals = self.dirs.iter().map(|dir| dir.files_size).collect::<Vec<_>>();
		for (i, dir) in self.dirs.iter().enumerate().skip(1).rev() {
			if let Some(parent) = dir.parent { totals[parent] += totals[i] }
		}
		totals
	}
}


fn input_filesystem_from_str(s: &str) -> Result<Filesystem<'_>, MalformedInput> {
	parsing::try_filesystem_from_str(s).malformed()
}


fn part1_impl(input_filesystem: &Filesystem<'_>) -> u64 {
	input_filesystem.total_sizes().into_iter()
		.filter(|&size| size <= 100_000)
		.sum()
}

pub(crate) fn part1(input: &str) -> Result<u64, MalformedInput> {
	Ok(part1_impl(&input_filesystem_from_str(input)?))
}


fn part2_impl(input_filesystem: &Filesystem<'_>) -> u64 {
	let totals = input_filesystem.total_sizes();
	let used = totals[Filesystem::ROOT];
	let to_free = (SPACE_NEEDED + used).saturating_sub(DISK_SIZE);
	log::debug!("{used} used, {to_free} to free");
	if to_free == 0 { return 0 }
	totals.into_iter()
		.filter(|&size| size >= to_free)
		.min()
		.unwrap_or(used)
}

pub(crate) fn part2(input: &str) -> Result<u64, MalformedInput> {
	Ok(part2_impl(&input_filesystem_from_str(input)?))
}


mod parsing {
	use std::num::ParseIntError;
	use super::Filesystem;

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum LineErrorKind<'s> {
		CannotChangeOutOfRootDir,
		ChangeIntoDirNotFound(&'s str),
		InvalidCommand(&'s str),
		OutputOutsideListing,
		InvalidEntry,
		InvalidFileSize(ParseIntError),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct LineError<'s> { line: usize, kind: LineErrorKind<'s> }

	pub(super) fn try_filesystem_from_str(s: &str) -> Result<Filesystem<'_>, LineError<'_>> {
		use LineErrorKind::*;

		let mut filesystem = Filesystem::new();
		let mut cwd = Filesystem::ROOT;
		let mut listing = false;

		for (l, line) in s.lines().enumerate().filter(|(_, line)| !line.is_empty()) {
			let err = |kind| LineError { line: l + 1, kind };

			if let Some(command) = line.strip_prefix("$ ") {
				listing = false;
				match command.split_once(' ') {
					Some(("cd", "/")) => cwd = Filesystem::ROOT,
					Some(("cd", "..")) => cwd = filesystem.dirs[cwd].parent
						.ok_or_else(|| err(CannotChangeOutOfRootDir))?,
					Some(("cd", name)) => cwd = filesystem.subdir(cwd, name)
						.ok_or_else(|| err(ChangeIntoDirNotFound(name)))?,
					None if command == "ls" => {
						// Listing again must not count files twice
						filesystem.dirs[cwd].files_size = 0;
						listing = true;
					}
					_ => return Err(err(InvalidCommand(command))),
				}
				continue
			}

			if !listing { return Err(err(OutputOutsideListing)) }
			match line.split_once(' ') {
				Some(("dir", name)) => _ = filesystem.add_subdir(cwd, name),
				Some((size, _)) => filesystem.dirs[cwd].files_size +=
					size.parse::<u64>().map_err(|e| err(InvalidFileSize(e)))?,
				None => return Err(err(InvalidEntry)),
			}
		}

		Ok(filesystem)
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		$ cd /
		$ ls
		dir a
		14848514 b.txt
		8504156 c.dat
		dir d
		$ cd a
		$ ls
		dir e
		29116 f
		2557 g
		62596 h.lst
		$ cd e
		$ ls
		584 i
		$ cd ..
		$ cd ..
		$ cd d
		$ ls
		4060174 j
		8033020 d.log
		5626152 d.ext
		7214296 k
	" };

	#[test]
	fn total_sizes() {
		let filesystem = input_filesystem_from_str(INPUT).unwrap();
		let totals = filesystem.total_sizes();
		let size_of = |path: &[&str]| totals[path.iter()
			.fold(Filesystem::ROOT, |dir, name| filesystem.subdir(dir, name).unwrap())];
		assert_eq!(size_of(&[]), 48381165);
		assert_eq!(size_of(&["a"]), 94853);
		assert_eq!(size_of(&["a", "e"]), 584);
		assert_eq!(size_of(&["d"]), 24933642);
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(&input_filesystem_from_str(INPUT).unwrap()), 95437);
	}

	#[test]
	fn part2() {
		assert_eq!(part2_impl(&input_filesystem_from_str(INPUT).unwrap()), 24933642);
		assert_eq!(super::part2("$ cd /\n$ ls\n100 a\n").unwrap(), 0);
	}

	#[test]
	fn relisting() {
		let twice = "$ cd /\n$ ls\n100 a\ndir b\n$ ls\n100 a\ndir b\n";
		let filesystem = input_filesystem_from_str(twice).unwrap();
		assert_eq!(filesystem.dirs.len(), 2);
		assert_eq!(filesystem.total_sizes()[Filesystem::ROOT], 100);
	}

	#[test]
	fn malformed() {
		assert!(super::part1("$ cd ..\n").is_err());
		assert!(super::part1("$ cd /\n$ cd x\n").is_err());
		assert!(super::part1("$ rm -rf /\n").is_err());
		assert!(super::part1("$ cd /\n100 a\n").is_err());
		assert!(super::part1("$ ls\nabc a\n").is_err());
	}
}
