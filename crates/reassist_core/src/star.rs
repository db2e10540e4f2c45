use std::fmt;

use thiserror::Error;

/// What starring a row would do. The record itself is left untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarNotice {
    pub title: String,
    pub currently_starred: bool,
}

impl StarNotice {
    /// Star state the record would have after the toggle.
    pub fn would_be_starred(&self) -> bool {
        !self.currently_starred
    }
}

impl fmt::Display for StarNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.currently_starred {
            "un-starred"
        } else {
            "starred"
        };
        write!(f, "Publication \"{}\" {}", self.title, verb)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StarError {
    #[error("no publication at index {index} ({len} publications)")]
    IndexOutOfRange { index: usize, len: usize },
}
