mod compare;

pub use compare::{CompareInput, CompareOperation, CompareOutput, compare_directories};
