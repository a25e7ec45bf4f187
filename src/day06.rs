// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


fn input_datastream_from_str(s: &str) -> Result<&[u8], MalformedInput> {
	parsing::try_datastream_from_str(s).malformed()
}


#[allow(dead_code)]
#[derive(Debug)]
struct NoMarker { len: usize }

/// Characters processed once the first `N` pairwise distinct ones have been seen.
fn end_of_marker<const N: usize>(datastream: &[u8]) -> Result<usize, NoMarker> {
	datastream.windows(N)
		.position(|window| window.iter()
			.fold(0_u32, |seen, b| seen | 1 << (b - b'a'))
			.count_ones() as usize == N)
		.map(|start| start + N)
		.ok_or(NoMarker { len: N })
}

pub(crate) fn part1(input: &str) -> Result<usize, MalformedInput> {
	end_of_marker::<4>(input_datastream_from_str(input)?).malformed()
}

pub(crate) fn part2(input: &str) -> Result<usize, MalformedInput> {
	end_of_marker::<14>(input_datastream_from_str(input)?).malformed()
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum DatastreamError {
		LineCount(usize),
		InvalidByte { column: usize, found: u8 },
	}

	pub(super) fn try_datastream_from_str(s: &str) -> Result<&[u8], DatastreamError> {
		use itertools::Itertools as _;
		let line = s.lines().exactly_one()
			.map_err(|lines| DatastreamError::LineCount(lines.count()))?;
		if let Some(c) = line.bytes().position(|b| !b.is_ascii_lowercase()) {
			return Err(DatastreamError::InvalidByte { column: c + 1, found: line.as_bytes()[c] })
		}
		Ok(line.as_bytes())
	}
}
