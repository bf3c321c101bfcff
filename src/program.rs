use std::fmt::{Display, Formatter};
use std::iter::FromIterator;
use std::slice::Iter;

use crate::instruction::Instruction;

/// An ordered list of instructions. A program is fixed once built; booting it never changes it.
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct Program {
  instructions: Vec<Instruction>
}

impl Program {
  pub fn new(instructions: Vec<Instruction>) -> Program {
    Program { instructions }
  }

  pub fn iter(&self) -> Iter<'_, Instruction> {
    self.instructions.iter()
  }

  pub fn len(&self) -> usize {
    self.instructions.len()
  }

  pub fn is_empty(&self) -> bool {
    self.instructions.is_empty()
  }
}

impl From<Vec<Instruction>> for Program {
  fn from(instructions: Vec<Instruction>) -> Program {
    Program::new(instructions)
  }
}

impl FromIterator<Instruction> for Program {
  fn from_iter<T: IntoIterator<Item = Instruction>>(iter: T) -> Program {
    Program::new(iter.into_iter().collect())
  }
}

impl<'a> IntoIterator for &'a Program {
  type Item = &'a Instruction;
  type IntoIter = Iter<'a, Instruction>;

  fn into_iter(self) -> Iter<'a, Instruction> {
    self.iter()
  }
}

/// One instruction per line, in assembly syntax.
impl Display for Program {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    for instruction in self {
      writeln!(f, "{}", instruction)?;
    }
    Ok(())
  }
}

/// Builds a `Program` from a list of instructions: `program![data("x", num(1))?, inc(...)]`.
#[macro_export]
macro_rules! program {
  ($($instruction:expr),* $(,)?) => {
    $crate::Program::new(vec![$($instruction),*])
  };
}
