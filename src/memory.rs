//! The flat memory store of a `Computer`: a fixed number of words plus the table of declared
//! variables. Memory never grows; every access outside `0..size` is an error.

use std::convert::TryFrom;

use crate::error::{Error, Result};
use crate::identifier::Id;
use crate::symboltable::SymbolTable;

/// The unit of storage and computation.
pub type Word = i64;
// `Address` is `usize`, as it is naturally an index into a memory store.
pub type Address = usize;

#[derive(Debug)]
pub struct Memory {
  words           : Vec<Word>,
  symbols         : SymbolTable,
  /// The next slot `add_variable` hands out; a cursor.
  variables_count : usize,
}

impl Memory {

  pub fn new(size: usize) -> Memory {
    Memory {
      words           : vec![0; size],
      symbols         : SymbolTable::new(),
      variables_count : 0,
    }
  }

  pub fn size(&self) -> usize {
    self.words.len()
  }

  pub fn words(&self) -> &[Word] {
    &self.words
  }

  fn out_of_range(&self, address: Word) -> Error {
    Error::OutOfRangeAccess { address, size: self.size() }
  }

  // Addresses past `Word::MAX` are reported as `Word::MAX`.
  fn out_of_range_at(&self, address: Address) -> Error {
    self.out_of_range(Word::try_from(address).unwrap_or(Word::MAX))
  }

  /// Converts a word computed by an operand into an address of this memory.
  pub fn resolve(&self, word: Word) -> Result<Address> {
    match Address::try_from(word) {
      Ok(address) if address < self.size() => Ok(address),
      _                                    => Err(self.out_of_range(word))
    }
  }

  pub fn at(&self, address: Address) -> Result<Word> {
    match self.words.get(address) {
      Some(word) => Ok(*word),
      None       => Err(self.out_of_range_at(address))
    }
  }

  pub fn set(&mut self, address: Address, word: Word) -> Result<()> {
    match self.words.get_mut(address) {
      Some(cell) => {
        *cell = word;
        Ok(())
      }
      None => Err(self.out_of_range_at(address))
    }
  }

  /**
    Declares `id` and stores `word` in the next free slot, returning the slot.

    A name is bound to the first slot it is declared in. Declaring a name again still takes a
    fresh slot and writes `word` there, but `get_variable_address` keeps answering with the
    first slot.
  */
  pub fn add_variable(&mut self, id: &Id, word: Word) -> Result<Address> {
    let address = self.variables_count;
    if address >= self.size() {
      return Err(Error::CapacityExceeded { id: id.to_string(), capacity: self.size() });
    }

    match self.symbols.insert(id.clone(), address) {
      Ok(()) => {}
      // The slot is fresh, so only the name can collide: it keeps its first address.
      Err(_) => {}
    }
    self.words[address] = word;
    self.variables_count += 1;

    Ok(address)
  }

  pub fn get_variable_address(&self, id: &Id) -> Result<Address> {
    self.symbols
        .get_address(id)
        .ok_or_else(|| Error::UnknownVariable(id.to_string()))
  }

  /// The variable bound to `address`, if any.
  pub fn variable_at(&self, address: Address) -> Option<&Id> {
    self.symbols.get_symbol(address)
  }

  /// Declared variables in address order.
  pub fn variables(&self) -> Vec<(&Id, Address)> {
    self.symbols.bindings()
  }

  pub fn variables_count(&self) -> usize {
    self.variables_count
  }

  /// Zeroes every word and forgets every variable.
  pub fn wipe(&mut self) {
    for word in self.words.iter_mut() {
      *word = 0;
    }
    self.symbols.clear();
    self.variables_count = 0;
  }
}
