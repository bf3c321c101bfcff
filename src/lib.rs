/*!
  An object-modeled assembly language. A host program builds a `Program` out of instruction
  values and boots it on a `Computer`, which has a fixed amount of word memory and a processor
  holding nothing but a zero flag and a sign flag.

  ```
  use ooasm::*;

  let program = program![
    data("x", num(5))?,
    data("y", num(3))?,
    add(mem(lea("x")?), mem(lea("y")?)),
  ];

  let mut computer = Computer::new(4);
  computer.boot(&program)?;
  assert_eq!(computer.dump_string(), "8 3 0 0 ");
  # Ok::<(), ooasm::Error>(())
  ```
*/

#[macro_use] extern crate prettytable;
#[macro_use] extern crate lazy_static;

mod error;
mod identifier;
mod symboltable;
mod memory;
mod operand;
mod processor;
mod instruction;
mod program;
mod computer;
pub mod assembly;

pub use error::{Error, Result};
pub use identifier::{Id, MAX_ID_LENGTH};
pub use memory::{Address, Memory, Word};
pub use operand::{lea, mem, num, LValue, RValue};
pub use processor::{Flag, Processor};
pub use instruction::{add, data, dec, inc, mov, one, onez, ones, sub, Instruction, Opcode};
pub use program::Program;
pub use computer::Computer;
pub use assembly::parse_assembly;
