pub mod destination;
pub mod loose;
pub mod package;
