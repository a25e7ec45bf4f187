// Copyright (c) 2022 Bastiaan Marinus van de Weerd

use crate::util::{MalformedInput, ResultExt as _};


#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operator { Add, Mul }

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Operand { Old, Value(u64) }

/// `new = old <operator> <operand>`
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Operation(Operator, Operand);

impl Operation {
	/// `None` on overflow.
	fn apply(&self, old: u64) -> Option<u64> {
		let rhs = match self.1 { Operand::Old => old, Operand::Value(v) => v };
		match self.0 { Operator::Add => old.checked_add(rhs), Operator::Mul => old.checked_mul(rhs) }
	}

	/// Like `apply`, modulo `m`; `old` must already be less than `m`.
	fn apply_mod(&self, old: u64, m: u64) -> u64 {
		let (old, rhs) = (old as u128, match self.1 { Operand::Old => old, Operand::Value(v) => v % m } as u128);
		let new = match self.0 { Operator::Add => old + rhs, Operator::Mul => old * rhs };
		(new % m as u128) as u64
	}
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct ThrowTest {
	div_by: u64,
	if_true: usize,
	if_false: usize,
}

#[derive(Debug)]
struct Monkey<W = u64> {
	items: Vec<W>,
	operation: Operation,
	throw_test: ThrowTest,
}


/// How a troop tracks an item’s worry level; `divisors` holds every monkey’s test divisor.
trait WorryLevel: Sized {
	fn from_level(level: u64, divisors: &[u64]) -> Self;
	/// `None` when the new level cannot be represented.
	fn inspected(self, operation: &Operation, divisors: &[u64]) -> Option<Self>;
	fn is_divisible(&self, monkey: usize, divisors: &[u64]) -> bool;
}

/// Worry level that drops to a third once an inspection leaves the item undamaged.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
struct Relieved(u64);

impl WorryLevel for Relieved {
	fn from_level(level: u64, _: &[u64]) -> Self {
		Relieved(level)
	}

	fn inspected(self, operation: &Operation, _: &[u64]) -> Option<Self> {
		Some(Relieved(operation.apply(self.0)? / 3))
	}

	fn is_divisible(&self, monkey: usize, divisors: &[u64]) -> bool {
		self.0 % divisors[monkey] == 0
	}
}

/// Unbounded worry level, known only by its residue modulo each monkey’s divisor. Every test
/// stays exact since additions and multiplications commute with taking residues.
#[derive(Clone, PartialEq, Eq, Debug)]
struct Residues(Vec<u64>);

impl WorryLevel for Residues {
	fn from_level(level: u64, divisors: &[u64]) -> Self {
		Residues(divisors.iter().map(|d| level % d).collect())
	}

	fn inspected(mut self, operation: &Operation, divisors: &[u64]) -> Option<Self> {
		for (residue, &d) in self.0.iter_mut().zip(divisors) {
			*residue = operation.apply_mod(*residue, d);
		}
		Some(self)
	}

	fn is_divisible(&self, monkey: usize, _: &[u64]) -> bool {
		self.0[monkey] == 0
	}
}


#[allow(dead_code)]
#[derive(Debug)]
struct WorryOverflowError { round: usize, monkey: usize }

struct Troop<W> {
	monkeys: Vec<Monkey<W>>,
	divisors: Vec<u64>,
	inspections: Vec<usize>,
	rounds_done: usize,
}

impl<W: WorryLevel> Troop<W> {
	fn new(monkeys: Vec<Monkey>) -> Self {
		let divisors = monkeys.iter().map(|m| m.throw_test.div_by).collect::<Vec<_>>();
		let monkeys = monkeys.into_iter()
			.map(|Monkey { items, operation, throw_test }| Monkey {
				items: items.into_iter().map(|level| W::from_level(level, &divisors)).collect(),
				operation,
				throw_test,
			})
			.collect::<Vec<_>>();
		let inspections = vec![0; monkeys.len()];
		Troop { monkeys, divisors, inspections, rounds_done: 0 }
	}

	fn turn(&mut self, i: usize) -> Result<(), WorryOverflowError> {
		let items = std::mem::take(&mut self.monkeys[i].items);
		self.inspections[i] += items.len();
		let (operation, throw_test) = (self.monkeys[i].operation, self.monkeys[i].throw_test);
		for item in items {
			let item = item.inspected(&operation, &self.divisors)
				.ok_or(WorryOverflowError { round: self.rounds_done + 1, monkey: i })?;
			let target = if item.is_divisible(i, &self.divisors) { throw_test.if_true }
				else { throw_test.if_false };
			assert_ne!(target, i);
			self.monkeys[target].items.push(item);
		}
		Ok(())
	}

	fn round(&mut self) -> Result<(), WorryOverflowError> {
		(0..self.monkeys.len()).try_for_each(|i| self.turn(i))?;
		self.rounds_done += 1;
		log::trace!("round {}: inspections {:?}", self.rounds_done, self.inspections);
		Ok(())
	}

	fn rounds(&mut self, n: usize) -> Result<(), WorryOverflowError> {
		(0..n).try_for_each(|_| self.round())
	}

	/// Product of the two highest inspection counts.
	fn monkey_business(&self) -> u64 {
		use itertools::Itertools as _;
		self.inspections.iter()
			.sorted_unstable_by(|a, b| b.cmp(a))
			.take(2)
			.map(|&count| count as u64)
			.product()
	}
}


fn input_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MalformedInput> {
	parsing::try_monkeys_from_str(s).malformed()
}


fn part1and2_impl<W: WorryLevel>(input_monkeys: Vec<Monkey>, rounds: usize) -> Result<u64, WorryOverflowError> {
	let mut troop = Troop::<W>::new(input_monkeys);
	troop.rounds(rounds)?;
	log::debug!("after {rounds} rounds: inspections {:?}", troop.inspections);
	Ok(troop.monkey_business())
}

fn part1_impl(input_monkeys: Vec<Monkey>) -> Result<u64, WorryOverflowError> {
	part1and2_impl::<Relieved>(input_monkeys, 20)
}

pub(crate) fn part1(input: &str) -> Result<u64, MalformedInput> {
	part1_impl(input_monkeys_from_str(input)?).malformed()
}

fn part2_impl(input_monkeys: Vec<Monkey>) -> Result<u64, WorryOverflowError> {
	part1and2_impl::<Residues>(input_monkeys, 10_000)
}

pub(crate) fn part2(input: &str) -> Result<u64, MalformedInput> {
	part2_impl(input_monkeys_from_str(input)?).malformed()
}


mod parsing {
	use std::{num::ParseIntError, str::FromStr};
	use super::{Operator, Operand, Operation, ThrowTest, Monkey};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum OperationError {
		Format,
		Operator(String),
		Operand(ParseIntError),
	}

	impl FromStr for Operation {
		type Err = OperationError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let words = s.split_whitespace().collect::<Vec<_>>();
			let ["new", "=", "old", operator, operand] = words[..] else {
				return Err(OperationError::Format)
			};
			let operator = match operator {
				"+" => Operator::Add,
				"*" => Operator::Mul,
				invalid => return Err(OperationError::Operator(invalid.to_owned())),
			};
			let operand = match operand {
				"old" => Operand::Old,
				value => Operand::Value(value.parse().map_err(OperationError::Operand)?),
			};
			Ok(Operation(operator, operand))
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MonkeyError {
		LineCount(usize),
		Format { line: usize, expected: &'static str },
		Id(ParseIntError),
		StartingItem { offset: usize, source: ParseIntError },
		Operation(OperationError),
		DivBy(ParseIntError),
		ZeroDivBy,
		Target(bool, ParseIntError),
	}

	fn field<'s>(line: usize, s: &'s str, prefix: &'static str) -> Result<&'s str, MonkeyError> {
		s.trim()
			.strip_prefix(prefix)
			.map(str::trim)
			.ok_or(MonkeyError::Format { line, expected: prefix })
	}

	fn try_monkey_from_lines(lines: &[&str]) -> Result<(usize, Monkey), MonkeyError> {
		let &[id, items, operation, test, if_true, if_false] = lines else {
			return Err(MonkeyError::LineCount(lines.len()))
		};

		let id: usize = field(0, id, "Monkey ")?
			.strip_suffix(':').ok_or(MonkeyError::Format { line: 0, expected: ":" })?
			.parse().map_err(MonkeyError::Id)?;

		let items = field(1, items, "Starting items:")?
			.split(',')
			.map(str::trim)
			.filter(|item| !item.is_empty())
			.enumerate()
			.map(|(offset, item)| item.parse()
				.map_err(|source| MonkeyError::StartingItem { offset, source }))
			.collect::<Result<_, _>>()?;

		let operation = field(2, operation, "Operation:")?
			.parse().map_err(MonkeyError::Operation)?;

		let div_by: u64 = field(3, test, "Test: divisible by")?
			.parse().map_err(MonkeyError::DivBy)?;
		if div_by == 0 { return Err(MonkeyError::ZeroDivBy) }
		let if_true: usize = field(4, if_true, "If true: throw to monkey")?
			.parse().map_err(|e| MonkeyError::Target(true, e))?;
		let if_false: usize = field(5, if_false, "If false: throw to monkey")?
			.parse().map_err(|e| MonkeyError::Target(false, e))?;

		Ok((id, Monkey { items, operation, throw_test: ThrowTest { div_by, if_true, if_false } }))
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum MonkeysErrorKind {
		Monkey(MonkeyError),
		Id(usize),
		Target(usize),
		TooFew(usize),
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct MonkeysError { line: usize, kind: MonkeysErrorKind }

	pub(super) fn try_monkeys_from_str(s: &str) -> Result<Vec<Monkey>, MonkeysError> {
		let lines = s.lines().enumerate().collect::<Vec<_>>();
		let mut monkeys = vec![];

		for block in lines.split(|(_, line)| line.trim().is_empty()).filter(|block| !block.is_empty()) {
			let err = |kind| MonkeysError { line: block[0].0 + 1, kind };
			let block_lines = block.iter().map(|&(_, line)| line).collect::<Vec<_>>();
			let (id, monkey) = try_monkey_from_lines(&block_lines)
				.map_err(|e| err(MonkeysErrorKind::Monkey(e)))?;
			if id != monkeys.len() { return Err(err(MonkeysErrorKind::Id(id))) }
			monkeys.push((block[0].0, monkey));
		}

		let n = monkeys.len();
		if n < 2 { return Err(MonkeysError { line: 1, kind: MonkeysErrorKind::TooFew(n) }) }
		for (id, (l, monkey)) in monkeys.iter().enumerate() {
			let ThrowTest { if_true, if_false, .. } = monkey.throw_test;
			if let Some(&target) = [if_true, if_false].iter().find(|&&t| t == id || t >= n) {
				return Err(MonkeysError { line: l + 1, kind: MonkeysErrorKind::Target(target) })
			}
		}

		Ok(monkeys.into_iter().map(|(_, monkey)| monkey).collect())
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		Monkey 0:
		  Starting items: 79, 98
		  Operation: new = old * 19
		  Test: divisible by 23
		    If true: throw to monkey 2
		    If false: throw to monkey 3

		Monkey 1:
		  Starting items: 54, 65, 75, 74
		  Operation: new = old + 6
		  Test: divisible by 19
		    If true: throw to monkey 2
		    If false: throw to monkey 0

		Monkey 2:
		  Starting items: 79, 60, 97
		  Operation: new = old * old
		  Test: divisible by 13
		    If true: throw to monkey 1
		    If false: throw to monkey 3

		Monkey 3:
		  Starting items: 74
		  Operation: new = old + 3
		  Test: divisible by 17
		    If true: throw to monkey 0
		    If false: throw to monkey 1
	" };

	fn troop() -> Troop<Relieved> {
		Troop::new(input_monkeys_from_str(INPUT).unwrap())
	}

	fn holdings(troop: &Troop<Relieved>) -> Vec<Vec<u64>> {
		troop.monkeys.iter().map(|m| m.items.iter().map(|w| w.0).collect()).collect()
	}

	#[test]
	fn parse() {
		let monkeys = input_monkeys_from_str(INPUT).unwrap();
		assert_eq!(monkeys.len(), 4);
		assert_eq!(monkeys[1].items, [54, 65, 75, 74]);
		assert_eq!(monkeys[0].operation.apply(2), Some(38));
		assert_eq!(monkeys[2].operation.apply(3), Some(9));
		assert_eq!(monkeys[3].throw_test, ThrowTest { div_by: 17, if_true: 0, if_false: 1 });
	}

	#[test]
	fn operation() {
		assert_eq!("new = old + 6".parse::<Operation>().unwrap().apply(6), Some(12));
		assert_eq!("new = old * old".parse::<Operation>().unwrap().apply(1 << 32), None);
		assert_eq!("new = old * old".parse::<Operation>().unwrap().apply_mod(u64::MAX - 1, u64::MAX), 1);
		assert!("new = old - 6".parse::<Operation>().is_err());
		assert!("new = 6 + old".parse::<Operation>().is_err());
	}

	#[test]
	fn turn() {
		let mut troop = troop();
		troop.turn(0).unwrap();
		assert!(holdings(&troop)[0].is_empty());
		assert_eq!(holdings(&troop)[3], [74, 500, 620]);
	}

	#[test]
	fn rounds() {
		let mut troop = troop();
		troop.round().unwrap();
		assert_eq!(holdings(&troop), [
			vec![20, 23, 27, 26],
			vec![2080, 25, 167, 207, 401, 1046],
			vec![],
			vec![],
		]);
		troop.rounds(19).unwrap();
		assert_eq!(holdings(&troop), [
			vec![10, 12, 14, 26, 34],
			vec![245, 93, 53, 199, 115],
			vec![],
			vec![],
		]);
		assert_eq!(troop.inspections, [101, 95, 7, 105]);
	}

	#[test]
	fn residues() {
		let divisors = [23, 19, 13, 17];
		let level = Residues::from_level(79, &divisors)
			.inspected(&"new = old * old".parse().unwrap(), &divisors)
			.unwrap();
		assert_eq!(level, Residues::from_level(79 * 79, &divisors));
		assert!(Residues::from_level(19 * 13, &divisors).is_divisible(1, &divisors));
		assert!(!Residues::from_level(19 * 13, &divisors).is_divisible(0, &divisors));
	}

	#[test]
	fn part1() {
		assert_eq!(part1_impl(input_monkeys_from_str(INPUT).unwrap()).unwrap(), 10605);
	}

	#[test]
	fn part2() {
		let mut troop = Troop::<Residues>::new(input_monkeys_from_str(INPUT).unwrap());
		troop.round().unwrap();
		assert_eq!(troop.inspections, [2, 4, 3, 6]);
		troop.rounds(19).unwrap();
		assert_eq!(troop.inspections, [99, 97, 8, 103]);
		assert_eq!(part2_impl(input_monkeys_from_str(INPUT).unwrap()).unwrap(), 2713310158);
	}

	#[test]
	fn large_worry_levels() {
		let input = indoc::indoc! { "
			Monkey 0:
			  Starting items: 10000000000
			  Operation: new = old * old
			  Test: divisible by 7
			    If true: throw to monkey 1
			    If false: throw to monkey 1

			Monkey 1:
			  Starting items: 1
			  Operation: new = old + 1
			  Test: divisible by 2
			    If true: throw to monkey 0
			    If false: throw to monkey 0
		" };
		let err = super::part1(input).unwrap_err();
		assert!(err.to_string().contains("WorryOverflowError { round: 1, monkey: 0 }"), "{err}");
		assert!(super::part2(input).is_ok());
	}

	#[test]
	fn malformed() {
		let throws_to_itself = INPUT.replacen("throw to monkey 2", "throw to monkey 0", 1);
		assert!(super::part1(&throws_to_itself).is_err());
		let unknown_target = INPUT.replacen("throw to monkey 3", "throw to monkey 9", 1);
		assert!(super::part1(&unknown_target).is_err());
		let out_of_order = INPUT.replacen("Monkey 1:", "Monkey 5:", 1);
		assert!(super::part1(&out_of_order).is_err());
		assert!(super::part1("Monkey 0:\n  Starting items: 1\n").is_err());
	}
}
