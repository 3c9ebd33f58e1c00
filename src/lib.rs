pub mod clips;
pub mod config;
pub mod error;
pub mod ingest;
pub mod model;
pub mod output;
pub mod store;
pub mod tokenizer;
