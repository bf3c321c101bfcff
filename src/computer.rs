//! The `Computer` ties a `Memory` and a `Processor` together and boots programs on them.

use std::fmt::{Display, Formatter};
use std::io::{self, Write};

use prettytable::{format as TableFormat, Table};

use crate::error::Result;
use crate::memory::Memory;
use crate::processor::Processor;
use crate::program::Program;

pub struct Computer {
  memory    : Memory,
  processor : Processor,
}

impl Computer {

  // region Display methods

  fn make_memory_table(memory: &Memory) -> Table {
    let mut table = Table::new();

    table.set_format(*TABLE_DISPLAY_FORMAT);
    table.set_titles(row![ubr->"Address", ubl->"Variable", ubl->"Contents"]);

    for (address, word) in memory.words().iter().enumerate() {
      let name = match memory.variable_at(address) {
        Some(id) => id.to_string(),
        None     => String::new()
      };
      table.add_row(row![r->format!("M[{}] =", address), name, word]);
    }
    table
  }

  // endregion

  /// A computer with `capacity` words of zeroed memory.
  pub fn new(capacity: usize) -> Computer {
    Computer {
      memory    : Memory::new(capacity),
      processor : Processor::new(),
    }
  }

  pub fn capacity(&self) -> usize {
    self.memory.size()
  }

  pub fn memory(&self) -> &Memory {
    &self.memory
  }

  pub fn processor(&self) -> &Processor {
    &self.processor
  }

  /**
    Runs `program` from a clean state.

    Memory is wiped and the flags are cleared first, so nothing from an earlier boot is visible.
    Then every instruction is declared, in program order, and only after that is every
    instruction executed, in program order. The first error aborts the boot; memory is left as
    it was at the point of failure.
  */
  pub fn boot(&mut self, program: &Program) -> Result<()> {
    self.memory.wipe();
    self.processor.reset();

    #[cfg(feature = "trace_computation")]
    println!("Declaring {} instructions", program.len());
    for instruction in program {
      instruction.declare(&mut self.memory)?;
    }

    #[cfg(feature = "trace_computation")]
    println!("Executing {} instructions", program.len());
    for instruction in program {
      instruction.execute(&mut self.processor, &mut self.memory)?;
      #[cfg(feature = "trace_computation")] println!("{}\n{}", instruction, self);
    }

    Ok(())
  }

  /// Writes every word in address order, each followed by a space.
  pub fn memory_dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
    for word in self.memory.words() {
      write!(out, "{} ", word)?;
    }
    Ok(())
  }

  pub fn dump_string(&self) -> String {
    self.memory
        .words()
        .iter()
        .map(|word| format!("{} ", word))
        .collect()
  }
}


lazy_static! {
  static ref TABLE_DISPLAY_FORMAT: TableFormat::TableFormat =
    TableFormat::FormatBuilder::new()
      .column_separator('│')
      .borders(' ')
      .separator(
        TableFormat::LinePosition::Title,
        TableFormat::LineSeparator::new('─', '┼', ' ', ' ')
      )
      .separator(
        TableFormat::LinePosition::Bottom,
        TableFormat::LineSeparator::new('─', '┴', ' ', ' ')
      )
      .padding(1, 1)
      .build();
}

impl Display for Computer {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    let table = Computer::make_memory_table(&self.memory);
    write!(f, "Flags: {}\n{}", self.processor, table)
  }
}
