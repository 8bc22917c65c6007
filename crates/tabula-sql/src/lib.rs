pub mod flavor;
pub use flavor::Flavor;

pub mod serializer;

mod statement;
pub use statement::{BatchStatement, Statement};
