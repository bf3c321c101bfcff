use bimap::BiMap;

use crate::identifier::Id;
use crate::memory::Address;

/**
  The symbol table maps declared variable names to the memory address they were assigned by the
  declare pass. A symbol table is really just a convenience wrapper around a BiMap; the reverse
  direction is used to label addresses when memory is displayed.

  A name is bound at most once. Later bindings of the same name are refused, so the first
  address a name receives is the one it keeps.
*/
#[derive(Debug)]
pub struct SymbolTable {
  table: BiMap<Id, Address>
}

impl SymbolTable {

  pub fn new() -> SymbolTable {
    SymbolTable {
      table: BiMap::new()
    }
  }

  pub fn get_symbol(&self, address: Address) -> Option<&Id> {
    self.table.get_by_right(&address)
  }

  pub fn get_address(&self, id: &Id) -> Option<Address> {
    self.table.get_by_left(id).cloned()
  }

  /// Binds `id` to `address` unless either is already bound.
  pub fn insert(&mut self, id: Id, address: Address) -> Result<(), (Id, Address)> {
    self.table.insert_no_overwrite(id, address)
  }

  /// The bindings in address order.
  pub fn bindings(&self) -> Vec<(&Id, Address)> {
    let mut bindings: Vec<(&Id, Address)> =
      self.table.iter().map(|(id, address)| (id, *address)).collect();
    bindings.sort_by_key(|(_, address)| *address);
    bindings
  }

  pub fn clear(&mut self) {
    self.table = BiMap::new();
  }
}

impl Default for SymbolTable {
  fn default() -> SymbolTable {
    SymbolTable::new()
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  fn id(name: &str) -> Id {
    Id::new(name).unwrap()
  }

  #[test]
  fn lookup_both_directions(){
    let mut table = SymbolTable::new();
    table.insert(id("x"), 0).unwrap();
    table.insert(id("y"), 1).unwrap();

    assert_eq!(table.get_address(&id("y")), Some(1));
    assert_eq!(table.get_symbol(0), Some(&id("x")));
    assert_eq!(table.get_symbol(7), None);
  }

  #[test]
  fn first_binding_wins(){
    let mut table = SymbolTable::new();
    table.insert(id("x"), 0).unwrap();

    assert!(table.insert(id("x"), 3).is_err());
    assert_eq!(table.get_address(&id("x")), Some(0));
    assert_eq!(table.bindings().len(), 1);
  }

  #[test]
  fn bindings_are_sorted_by_address(){
    let mut table = SymbolTable::new();
    table.insert(id("c"), 2).unwrap();
    table.insert(id("a"), 0).unwrap();
    table.insert(id("b"), 1).unwrap();

    let names: Vec<&str> = table.bindings().iter().map(|(id, _)| id.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);

    table.clear();
    assert!(table.bindings().is_empty());
  }
}
