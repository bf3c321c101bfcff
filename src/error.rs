//! The single error type of the crate. Every fault aborts the boot pass (or parse) in progress
//! and is handed back to the caller; nothing is recovered internally.

use thiserror::Error;

use crate::instruction::Opcode;
use crate::memory::Word;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
  /// A variable name that is empty or longer than `identifier::MAX_ID_LENGTH` characters.
  #[error("invalid identifier {0:?}: must be 1 to 10 characters long")]
  InvalidIdentifier(String),

  /// A read or write at an address outside of `0..size`. The address is kept as a `Word`
  /// because an operand can evaluate to a negative address.
  #[error("memory access out of range: address {address} in memory of size {size}")]
  OutOfRangeAccess { address: Word, size: usize },

  /// A `data` declaration when every memory slot is already taken.
  #[error("cannot declare {id}: all {capacity} memory slots are taken")]
  CapacityExceeded { id: String, capacity: usize },

  /// `lea` of a name no `data` instruction declared.
  #[error("unknown variable {0}")]
  UnknownVariable(String),

  // region Assembly front end

  #[error("line {line}: cannot parse `{text}`")]
  Syntax { line: usize, text: String },

  #[error("line {line}: {name} is not an operation")]
  UnknownOperation { line: usize, name: String },

  #[error("line {line}: {operation} requires {expected} arguments but was given {found}")]
  WrongArity { line: usize, operation: Opcode, expected: usize, found: usize },

  #[error("line {line}: {operand} cannot be written to, only memory cells `[...]` can")]
  NotAnLValue { line: usize, operand: String },

  // endregion

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}
