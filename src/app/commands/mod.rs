pub mod publish;
pub mod runners;
pub mod sign;
pub mod sync;
