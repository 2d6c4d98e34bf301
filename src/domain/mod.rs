pub mod book;
pub mod loan;

pub use book::*;
pub use loan::*;
