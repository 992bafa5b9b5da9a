/// Random number sources
pub mod random;
