//! Variable names. An `Id` is a validated, interned name: it can only be constructed from a
//! string of 1 to `MAX_ID_LENGTH` characters, so holding an `Id` is proof of validity.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use string_cache::DefaultAtom;

use crate::error::{Error, Result};

pub const MAX_ID_LENGTH: usize = 10;

/**
  An interned variable name. Clones are cheap. Names are compared by exact string equality; no
  case folding or other normalization is done, so `x` and `X` are different variables.
*/
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Id {
  name: DefaultAtom
}

impl Id {
  pub fn new(name: &str) -> Result<Id> {
    // Length is counted in characters, not bytes.
    match (1..=MAX_ID_LENGTH).contains(&name.chars().count()) {
      true  => Ok(Id{ name: DefaultAtom::from(name) }),
      false => Err(Error::InvalidIdentifier(name.to_string()))
    }
  }

  pub fn as_str(&self) -> &str {
    &self.name
  }
}

impl FromStr for Id {
  type Err = Error;

  fn from_str(s: &str) -> Result<Id> {
    Id::new(s)
  }
}

impl Display for Id {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name)
  }
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_lengths_one_through_ten(){
    assert_eq!(Id::new("x").unwrap().as_str(), "x");
    assert_eq!(Id::new("abcdefghij").unwrap().as_str(), "abcdefghij");
  }

  #[test]
  fn rejects_empty_and_long_names(){
    assert!(matches!(Id::new(""), Err(Error::InvalidIdentifier(_))));
    assert!(matches!(
      Id::new("abcdefghijk"),
      Err(Error::InvalidIdentifier(name)) if name == "abcdefghijk"
    ));
  }

  #[test]
  fn counts_characters_not_bytes(){
    // Ten two-byte characters.
    assert!(Id::new("ääääääääää").is_ok());
  }

  #[test]
  fn equality_is_exact(){
    assert_eq!(Id::new("x").unwrap(), "x".parse::<Id>().unwrap());
    assert_ne!(Id::new("x").unwrap(), Id::new("X").unwrap());
  }
}
