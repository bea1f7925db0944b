use serde::{Deserialize, Serialize};

/// Generational handle into an externally owned store.
///
/// Two handles are equal only if both the slot index and the generation match,
/// so a handle to a recycled slot never aliases the previous occupant.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Handle(u32, u32); // (index, generation)

impl Handle {
    pub const fn new(index: u32, generation: u32) -> Self {
        Handle(index, generation)
    }

    pub const fn index(&self) -> u32 {
        self.0
    }

    pub const fn generation(&self) -> u32 {
        self.1
    }
}
