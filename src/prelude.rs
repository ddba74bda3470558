pub use crate::animation::*;
pub use crate::cube::*;
pub use crate::r#move::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
