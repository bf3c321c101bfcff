/*!
  Instructions and their two-pass execution.

  Every instruction takes part in two passes over a program. The *declare* pass only lays out
  memory: `data` binds its variable to the next free cell. The *execute* pass does the
  computation. Because all declarations happen before anything executes, an instruction may
  refer to a variable whose `data` comes later in the program.
*/

use std::fmt::{Display, Formatter};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum_macros::{Display as StrumDisplay, EnumString, IntoStaticStr};

use crate::error::Result;
use crate::identifier::Id;
use crate::memory::{Memory, Word};
use crate::operand::{num, LValue, RValue};
use crate::processor::Processor;

/**
  Mnemonics of the assembly language.

  The order the opcodes are listed below is significant: two argument operations come first so
  that `Opcode::arity` is a trivial comparison against `MAX_BINARY_OPCODE`.

  `inc` and `dec` are mnemonics only. They assemble to `add` and `sub` with a literal `1`.
*/
#[derive(
  StrumDisplay, IntoStaticStr, EnumString, TryFromPrimitive, IntoPrimitive,
  Clone,        Copy,          Eq,         PartialEq,        Debug,         Hash
)]
#[repr(u8)]
pub enum Opcode {
  // Two arguments //
  #[strum(to_string = "data")]
  Data,              // data( name, value )
  #[strum(to_string = "mov")]
  Mov,               // mov( dst, src )
  #[strum(to_string = "add")]
  Add,               // add( dst, src )
  #[strum(to_string = "sub")]
  Sub,               // sub( dst, src )
  // Opcode 4

  // One argument //
  #[strum(to_string = "inc")]
  Inc,               // inc( dst )
  #[strum(to_string = "dec")]
  Dec,               // dec( dst )
  #[strum(to_string = "one")]
  One,               // one( dst )
  #[strum(to_string = "onez")]
  OneZ,              // onez( dst )
  #[strum(to_string = "ones")]
  OneS,              // ones( dst )
}

pub const MAX_BINARY_OPCODE: u8 = 4u8;

impl Opcode {
  pub fn code(&self) -> u8 {
    Into::<u8>::into(*self)
  }

  pub fn arity(&self) -> usize {
    match self.code() < MAX_BINARY_OPCODE {
      true  => 2,
      false => 1
    }
  }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Instruction {
  /// Declares `id` and initializes it with `value`. Does nothing when executed.
  Data { id: Id, value: RValue },
  Mov  { dst: LValue, src: RValue },
  /// `dst += src`, setting the flags.
  Add  { dst: LValue, src: RValue },
  /// `dst -= src`, setting the flags.
  Sub  { dst: LValue, src: RValue },
  /// Unconditionally stores 1.
  One(LValue),
  /// Stores 1 if the zero flag is set.
  OneZ(LValue),
  /// Stores 1 if the sign flag is set.
  OneS(LValue),
}

impl Instruction {

  pub fn opcode(&self) -> Opcode {
    match self {
      Instruction::Data { .. } => Opcode::Data,
      Instruction::Mov  { .. } => Opcode::Mov,
      Instruction::Add  { .. } => Opcode::Add,
      Instruction::Sub  { .. } => Opcode::Sub,
      Instruction::One(_)      => Opcode::One,
      Instruction::OneZ(_)     => Opcode::OneZ,
      Instruction::OneS(_)     => Opcode::OneS,
    }
  }

  /// The declare pass. Only `data` has an effect.
  pub fn declare(&self, memory: &mut Memory) -> Result<()> {
    if let Instruction::Data { id, value } = self {
      let word = value.get(memory)?;
      memory.add_variable(id, word)?;
    }
    Ok(())
  }

  /// The execute pass.
  pub fn execute(&self, processor: &mut Processor, memory: &mut Memory) -> Result<()> {
    match self {

      Instruction::Data { .. } => Ok(()),

      Instruction::Mov { dst, src } => {
        let word = src.get(memory)?;
        dst.set(memory, word)
      }

      Instruction::Add { dst, src } => {
        Instruction::arithmetic(dst, src, Word::wrapping_add, processor, memory)
      }

      Instruction::Sub { dst, src } => {
        Instruction::arithmetic(dst, src, Word::wrapping_sub, processor, memory)
      }

      Instruction::One(dst)  => Instruction::set_one(dst, true, memory),
      Instruction::OneZ(dst) => Instruction::set_one(dst, processor.zf(), memory),
      Instruction::OneS(dst) => Instruction::set_one(dst, processor.sf(), memory),

    }
  }

  // Overflow wraps around; it is not detected.
  fn arithmetic(
    dst       : &LValue,
    src       : &RValue,
    function  : fn(Word, Word) -> Word,
    processor : &mut Processor,
    memory    : &mut Memory
  ) -> Result<()>
  {
    let result = function(dst.get(memory)?, src.get(memory)?);
    processor.set_flags(result);
    dst.set(memory, result)
  }

  fn set_one(dst: &LValue, condition: bool, memory: &mut Memory) -> Result<()> {
    match condition {
      true  => dst.set(memory, 1),
      false => Ok(())
    }
  }
}

impl Display for Instruction {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      Instruction::Data { id, value } => {
        write!(f, "{} {}, {}", self.opcode(), id, value)
      }

      | Instruction::Mov { dst, src }
      | Instruction::Add { dst, src }
      | Instruction::Sub { dst, src } => {
        write!(f, "{} {}, {}", self.opcode(), dst, src)
      }

      | Instruction::One(dst)
      | Instruction::OneZ(dst)
      | Instruction::OneS(dst) => {
        write!(f, "{} {}", self.opcode(), dst)
      }

    }
  }
}

// region Constructors

/// Fails if `id` is not a valid identifier.
pub fn data<R: Into<RValue>>(id: &str, value: R) -> Result<Instruction> {
  Ok(Instruction::Data { id: Id::new(id)?, value: value.into() })
}

pub fn mov<R: Into<RValue>>(dst: LValue, src: R) -> Instruction {
  Instruction::Mov { dst, src: src.into() }
}

pub fn add<R: Into<RValue>>(dst: LValue, src: R) -> Instruction {
  Instruction::Add { dst, src: src.into() }
}

pub fn sub<R: Into<RValue>>(dst: LValue, src: R) -> Instruction {
  Instruction::Sub { dst, src: src.into() }
}

pub fn inc(dst: LValue) -> Instruction {
  add(dst, num(1))
}

pub fn dec(dst: LValue) -> Instruction {
  sub(dst, num(1))
}

pub fn one(dst: LValue) -> Instruction {
  Instruction::One(dst)
}

pub fn onez(dst: LValue) -> Instruction {
  Instruction::OneZ(dst)
}

pub fn ones(dst: LValue) -> Instruction {
  Instruction::OneS(dst)
}

// endregion


#[cfg(test)]
mod tests {
  use std::convert::TryFrom;
  use std::str::FromStr;

  use super::*;
  use crate::error::Error;
  use crate::operand::{lea, mem};

  fn x() -> LValue {
    mem(lea("x").unwrap())
  }

  /// A memory of size 2 with `x` declared at address 0.
  fn setup(value: Word) -> (Processor, Memory) {
    let mut memory = Memory::new(2);
    data("x", num(value)).unwrap().declare(&mut memory).unwrap();
    (Processor::new(), memory)
  }

  #[test]
  fn opcode_text_and_arity(){
    assert_eq!(Opcode::from_str("onez").unwrap(), Opcode::OneZ);
    assert_eq!(Opcode::Data.to_string(), "data");
    assert!(Opcode::from_str("jmp").is_err());

    assert_eq!(Opcode::Sub.arity(), 2);
    assert_eq!(Opcode::Inc.arity(), 1);
    assert_eq!(Opcode::try_from(3u8).unwrap(), Opcode::Sub);
  }

  #[test]
  fn data_declares_but_does_not_execute(){
    let mut memory = Memory::new(2);
    let mut processor = Processor::new();
    let instruction = data("x", num(7)).unwrap();

    instruction.declare(&mut memory).unwrap();
    assert_eq!(memory.words(), &[7, 0]);

    memory.set(0, 1).unwrap();
    instruction.execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.words(), &[1, 0]);
  }

  #[test]
  fn other_instructions_do_not_declare(){
    let mut memory = Memory::new(2);
    mov(mem(num(0)), num(5)).declare(&mut memory).unwrap();
    one(mem(num(1))).declare(&mut memory).unwrap();
    assert_eq!(memory.words(), &[0, 0]);
    assert_eq!(memory.variables_count(), 0);
  }

  #[test]
  fn add_and_sub_set_flags(){
    let (mut processor, mut memory) = setup(2);

    add(x(), num(-2)).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), 0);
    assert!(processor.zf() && !processor.sf());

    sub(x(), num(5)).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), -5);
    assert!(!processor.zf() && processor.sf());

    inc(x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), -4);
    assert!(!processor.zf() && processor.sf());

    add(x(), num(10)).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), 6);
    assert!(!processor.zf() && !processor.sf());
  }

  #[test]
  fn arithmetic_wraps(){
    let (mut processor, mut memory) = setup(Word::MAX);

    inc(x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), Word::MIN);
    assert!(processor.sf());

    dec(x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), Word::MAX);
    assert!(!processor.sf() && !processor.zf());
  }

  #[test]
  fn mov_copies(){
    let (mut processor, mut memory) = setup(3);
    mov(mem(num(1)), x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.words(), &[3, 3]);
    assert_eq!(processor, Processor::new());
  }

  #[test]
  fn conditional_ones(){
    let (mut processor, mut memory) = setup(9);

    onez(x()).execute(&mut processor, &mut memory).unwrap();
    ones(x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), 9);

    processor.set_zf(true);
    onez(x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), 1);

    memory.set(0, 9).unwrap();
    processor.set_sf(true);
    ones(x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), 1);

    memory.set(0, 9).unwrap();
    processor.reset();
    one(x()).execute(&mut processor, &mut memory).unwrap();
    assert_eq!(memory.at(0).unwrap(), 1);
  }

  #[test]
  fn errors_propagate(){
    let (mut processor, mut memory) = setup(0);
    let result = add(mem(lea("y").unwrap()), num(1)).execute(&mut processor, &mut memory);
    assert!(matches!(result, Err(Error::UnknownVariable(_))));

    let result = mov(mem(num(2)), num(1)).execute(&mut processor, &mut memory);
    assert!(matches!(result, Err(Error::OutOfRangeAccess { address: 2, size: 2 })));
  }

  #[test]
  fn display_as_assembly(){
    assert_eq!(data("x", num(-1)).unwrap().to_string(), "data x, -1");
    assert_eq!(mov(x(), lea("y").unwrap()).to_string(), "mov [lea x], lea y");
    assert_eq!(dec(mem(x())).to_string(), "sub [[lea x]], 1");
    assert_eq!(ones(x()).to_string(), "ones [lea x]");
  }
}
