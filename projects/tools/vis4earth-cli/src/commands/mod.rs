pub mod transfer_function;
pub mod volume;
