//! Result-sink glue: JSON serialization of the token stream and display of
//! collected diagnostics.

pub mod output;

#[cfg(test)]
mod tests;
