use std::fmt::{Display, Formatter};

use strum_macros::{Display as StrumDisplay, EnumIter};

use crate::memory::Word;

#[derive(StrumDisplay, EnumIter, Clone, Copy, Eq, PartialEq, Debug, Hash)]
pub enum Flag {
  #[strum(to_string = "ZF")]
  Zero,
  #[strum(to_string = "SF")]
  Sign,
}

/// The processor has no registers; memory cells play that role. All it holds are the two
/// flags set by arithmetic and read by the conditional `onez`/`ones` instructions.
#[derive(Clone, Copy, Default, Eq, PartialEq, Debug)]
pub struct Processor {
  zf: bool,
  sf: bool,
}

impl Processor {
  pub fn new() -> Processor {
    Processor::default()
  }

  pub fn zf(&self) -> bool {
    self.zf
  }

  pub fn sf(&self) -> bool {
    self.sf
  }

  pub fn set_zf(&mut self, value: bool) {
    self.zf = value;
  }

  pub fn set_sf(&mut self, value: bool) {
    self.sf = value;
  }

  pub fn flag(&self, flag: Flag) -> bool {
    match flag {
      Flag::Zero => self.zf,
      Flag::Sign => self.sf,
    }
  }

  /// Sets both flags from the result of an arithmetic instruction.
  pub fn set_flags(&mut self, result: Word) {
    self.set_sf(result < 0);
    self.set_zf(result == 0);
  }

  pub fn reset(&mut self) {
    *self = Processor::default();
  }
}

impl Display for Processor {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}={} {}={}", Flag::Zero, self.zf as u8, Flag::Sign, self.sf as u8)
  }
}


#[cfg(test)]
mod tests {
  use super::*;
  use strum::IntoEnumIterator;

  #[test]
  fn flags_follow_result_sign(){
    let mut processor = Processor::new();

    processor.set_flags(0);
    assert!(processor.zf() && !processor.sf());

    processor.set_flags(-7);
    assert!(!processor.zf() && processor.sf());

    processor.set_flags(42);
    assert!(!processor.zf() && !processor.sf());
  }

  #[test]
  fn flag_by_name(){
    let mut processor = Processor::new();
    processor.set_sf(true);

    let set: Vec<Flag> = Flag::iter().filter(|f| processor.flag(*f)).collect();
    assert_eq!(set, vec![Flag::Sign]);
  }

  #[test]
  fn display_and_reset(){
    let mut processor = Processor::new();
    processor.set_zf(true);
    assert_eq!(processor.to_string(), "ZF=1 SF=0");

    processor.reset();
    assert_eq!(processor, Processor::new());
  }
}
