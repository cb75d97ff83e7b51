pub mod compile;
pub mod externals;
pub mod generate;
pub mod prepare;
