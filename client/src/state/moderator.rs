//! Identity of the moderator operating the console.
//!
//! SYSTEM CONTEXT
//! ==============
//! Fetched once by the app shell and provided via context; the nav bar reads
//! it to show who is signed in. A failed fetch leaves the slot empty.

#[cfg(test)]
#[path = "moderator_test.rs"]
mod moderator_test;

use crate::net::error::ApiError;
use crate::net::types::Moderator;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ModeratorState {
    pub moderator: Option<Moderator>,
    pub loading: bool,
}

impl ModeratorState {
    pub fn finish(&mut self, result: Result<Moderator, ApiError>) {
        if let Ok(moderator) = result {
            self.moderator = Some(moderator);
        }
        self.loading = false;
    }

    pub fn display_name(&self) -> Option<&str> {
        self.moderator
            .as_ref()
            .map(|m| m.name.trim())
            .filter(|name| !name.is_empty())
    }
}
