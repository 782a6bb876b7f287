pub mod connection;
pub mod errors;
pub mod records;

#[cfg(test)]
mod tests;

pub use connection::*;
pub use errors::*;
pub use records::*;
