/// The interface to a last-in-first-out store
pub mod lifo;

pub use lifo::Lifo;
