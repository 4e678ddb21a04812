pub mod env;
pub mod fixed;
