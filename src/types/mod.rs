mod amount;
mod period;

pub use amount::{parse_amount, percent_change};
pub use period::Period;
