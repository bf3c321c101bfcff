/*!
  The human readable textual form of a program is called assembly. This module parses assembly
  into a `Program` built from the same constructors a host program would call directly, so a
  parsed program and a hand-built one are indistinguishable.

  One instruction per line. `%` starts a comment that runs to the end of the line.

  ```text
  data x, 5          % declare x = 5
  data y, 3
  add [lea x], [lea y]
  dec [lea y]
  ones [lea y]
  ```

  Operands are integer literals (`-5`), variable addresses (`lea x`), or memory cells
  (`[operand]`), which nest. Only memory cells can be written to.
*/

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use nom::{
  IResult,
  branch::alt,
  bytes::complete::tag_no_case,
  character::complete::{
    alpha1,
    alphanumeric1,
    char as one_char,
    digit1,
    space0,
    space1
  },
  combinator::{all_consuming, map, map_res, opt, recognize, rest},
  multi::{many0, separated_list},
  sequence::{delimited, pair, preceded}
};

use crate::error::{Error, Result};
use crate::instruction::{self, Instruction, Opcode};
use crate::memory::Word;
use crate::operand::{lea, mem, num, LValue, RValue};
use crate::program::Program;

/// An operand as written, before it is checked against the operation that uses it.
#[derive(Clone, Debug, Eq, PartialEq)]
enum Argument<'a> {
  Number(Word),
  Lea(&'a str),
  Mem(Box<Argument<'a>>),
  /// A bare name, only meaningful as the first argument of `data`.
  Name(&'a str),
}

impl<'a> Display for Argument<'a> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Argument::Number(word) => write!(f, "{}", word),
      Argument::Lea(name)    => write!(f, "lea {}", name),
      Argument::Mem(inner)   => write!(f, "[{}]", inner),
      Argument::Name(name)   => write!(f, "{}", name),
    }
  }
}

/// A mnemonic with its arguments.
type Statement<'a> = (&'a str, Vec<Argument<'a>>);

// region Parsers

fn identifier(input: &str) -> IResult<&str, &str> {
  recognize(pair(
    alt((alpha1, recognize(one_char('_')))),
    many0(alt((alphanumeric1, recognize(one_char('_')))))
  ))(input)
}

fn number(input: &str) -> IResult<&str, Word> {
  map_res(
    recognize(pair(opt(one_char('-')), digit1)),
    |text: &str| text.parse::<Word>()
  )(input)
}

fn argument(input: &str) -> IResult<&str, Argument<'_>> {
  alt((
    map(number, Argument::Number),
    map(preceded(pair(tag_no_case("lea"), space1), identifier), Argument::Lea),
    map(
      delimited(
        pair(one_char('['), space0),
        argument,
        pair(space0, one_char(']'))
      ),
      |inner| Argument::Mem(Box::new(inner))
    ),
    map(identifier, Argument::Name)
  ))(input)
}

fn argument_list(input: &str) -> IResult<&str, Vec<Argument<'_>>> {
  separated_list(delimited(space0, one_char(','), space0), argument)(input)
}

fn comment(input: &str) -> IResult<&str, &str> {
  preceded(one_char('%'), rest)(input)
}

/// A whole line: an optional statement, then an optional comment.
fn line(input: &str) -> IResult<&str, Option<Statement<'_>>> {
  all_consuming(
    delimited(
      space0,
      opt(pair(
        alpha1,
        alt((
          preceded(space1, argument_list),
          map(space0, |_| Vec::new())
        ))
      )),
      pair(space0, opt(comment))
    )
  )(input)
}

// endregion

// region Conversion to instructions

fn to_rvalue(line: usize, argument: &Argument<'_>) -> Result<RValue> {
  match argument {
    Argument::Number(word) => Ok(num(*word)),
    Argument::Lea(name)    => lea(name),
    Argument::Mem(inner)   => Ok(mem(to_rvalue(line, inner)?).into()),
    // A bare name is neither a value nor an address. Write `lea name` or `[lea name]`.
    Argument::Name(_)      => Err(Error::Syntax { line, text: argument.to_string() }),
  }
}

fn to_lvalue(line: usize, argument: &Argument<'_>) -> Result<LValue> {
  match argument {
    Argument::Mem(inner) => Ok(mem(to_rvalue(line, inner)?)),
    _                    => Err(Error::NotAnLValue { line, operand: argument.to_string() })
  }
}

fn to_instruction(line: usize, mnemonic: &str, arguments: &[Argument<'_>]) -> Result<Instruction> {
  let operation =
    Opcode::from_str(&mnemonic.to_ascii_lowercase())
      .map_err(|_| Error::UnknownOperation { line, name: mnemonic.to_string() })?;

  if arguments.len() != operation.arity() {
    return Err(Error::WrongArity {
      line,
      operation,
      expected: operation.arity(),
      found: arguments.len()
    });
  }

  let instruction =
    match operation {
      Opcode::Data => {
        match &arguments[0] {
          Argument::Name(name) => instruction::data(name, to_rvalue(line, &arguments[1])?)?,
          other => return Err(Error::Syntax { line, text: other.to_string() })
        }
      }
      Opcode::Mov => instruction::mov(to_lvalue(line, &arguments[0])?, to_rvalue(line, &arguments[1])?),
      Opcode::Add => instruction::add(to_lvalue(line, &arguments[0])?, to_rvalue(line, &arguments[1])?),
      Opcode::Sub => instruction::sub(to_lvalue(line, &arguments[0])?, to_rvalue(line, &arguments[1])?),
      Opcode::Inc  => instruction::inc(to_lvalue(line, &arguments[0])?),
      Opcode::Dec  => instruction::dec(to_lvalue(line, &arguments[0])?),
      Opcode::One  => instruction::one(to_lvalue(line, &arguments[0])?),
      Opcode::OneZ => instruction::onez(to_lvalue(line, &arguments[0])?),
      Opcode::OneS => instruction::ones(to_lvalue(line, &arguments[0])?),
    };

  Ok(instruction)
}

// endregion

/// Parses assembly text into a program. The first bad line aborts parsing.
pub fn parse_assembly(text: &str) -> Result<Program> {
  let mut instructions = Vec::new();

  for (index, source_line) in text.lines().enumerate() {
    let line_number = index + 1;
    match line(source_line) {

      Ok((_, Some((mnemonic, arguments)))) => {
        instructions.push(to_instruction(line_number, mnemonic, &arguments)?);
      }

      Ok((_, None)) => {} // Blank or comment only.

      Err(_) => {
        return Err(Error::Syntax { line: line_number, text: source_line.trim().to_string() });
      }

    }
  }

  Ok(Program::new(instructions))
}
