pub mod district;
pub mod errors;
