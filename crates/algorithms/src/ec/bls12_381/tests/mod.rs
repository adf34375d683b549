//! BLS12-381 test suite

mod pairings;
mod serialization;
