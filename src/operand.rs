/*!
  Operands of instructions. An operand is read through two views:

   1. its *value*, what `get` returns;
   2. its *address*, the word used to select a memory cell when the operand is wrapped in `mem`.

  For every operand the two views agree, but they are computed separately so that `lea x` can be
  both a number (the address of `x`) and a cell selector (`mem(lea x)` is the cell of `x`)
  without a separate pointer type.

  `RValue`s can only be read. `LValue`s, the memory cells, can also be written. Operands carry
  no state of their own; every view is a pure function of the `Memory` it is evaluated against.
*/

use std::fmt::{Display, Formatter};

use crate::error::Result;
use crate::identifier::Id;
use crate::memory::{Address, Memory, Word};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum RValue {
  /// A literal word.
  Num(Word),
  /// The address assigned to a variable.
  Lea(Id),
  /// The contents of a memory cell.
  Mem(LValue),
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum LValue {
  /// The memory cell whose address is the address view of the inner operand.
  Mem(Box<RValue>),
}

impl RValue {

  pub fn get(&self, memory: &Memory) -> Result<Word> {
    match self {
      RValue::Num(word)    => Ok(*word),
      RValue::Lea(_)       => self.get_address(memory),
      RValue::Mem(lvalue)  => lvalue.get(memory),
    }
  }

  /// The address view. Only `Lea` computes it differently from the value.
  pub fn get_address(&self, memory: &Memory) -> Result<Word> {
    match self {
      RValue::Lea(id) => memory.get_variable_address(id).map(|address| address as Word),
      _               => self.get(memory),
    }
  }
}

impl LValue {

  /// The address of the designated cell, checked against the size of `memory`.
  pub fn cell_address(&self, memory: &Memory) -> Result<Address> {
    match self {
      LValue::Mem(inner) => memory.resolve(inner.get_address(memory)?)
    }
  }

  pub fn get(&self, memory: &Memory) -> Result<Word> {
    memory.at(self.cell_address(memory)?)
  }

  pub fn set(&self, memory: &mut Memory, word: Word) -> Result<()> {
    let address = self.cell_address(memory)?;
    memory.set(address, word)
  }
}

impl From<LValue> for RValue {
  fn from(lvalue: LValue) -> RValue {
    RValue::Mem(lvalue)
  }
}

impl From<Word> for RValue {
  fn from(word: Word) -> RValue {
    RValue::Num(word)
  }
}

impl Display for RValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      RValue::Num(word)   => write!(f, "{}", word),
      RValue::Lea(id)     => write!(f, "lea {}", id),
      RValue::Mem(lvalue) => write!(f, "{}", lvalue),
    }
  }
}

impl Display for LValue {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      LValue::Mem(inner) => write!(f, "[{}]", inner)
    }
  }
}

// region Constructors

pub fn num(word: Word) -> RValue {
  RValue::Num(word)
}

/// Fails if `id` is not a valid identifier.
pub fn lea(id: &str) -> Result<RValue> {
  Ok(RValue::Lea(Id::new(id)?))
}

pub fn mem<R: Into<RValue>>(address: R) -> LValue {
  LValue::Mem(Box::new(address.into()))
}

// endregion
