//! Data acquisition: built-in sample generation and remote CSV fetch.

pub mod remote;
pub mod sample;

pub use remote::fetch_csv;
pub use sample::generate_sample;
