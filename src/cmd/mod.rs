pub mod export;
pub mod generate;
