use std::fmt;

use crate::combination::digits::Combination;

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut first = true;
        for digit in self.iter() {
            if first {
                write!(f, "{}", digit)?;
                first = false;
            } else {
                write!(f, " + {}", digit)?;
            }
        }
        Ok(())
    }
}
