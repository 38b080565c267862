#[cfg(test)]
pub mod fixtures;
mod group;
mod table;
mod transaction;

pub use group::is_mix_excluded;
pub use table::{RoomColumn, TransactionTable};
pub use transaction::Transaction;
