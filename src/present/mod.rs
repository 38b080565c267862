mod chart;
mod dashboard;
mod errors;
mod export;
mod format;
mod locale;
mod table;

pub use chart::ChartSpec;
pub use dashboard::{Dashboard, View};
pub use errors::ExportError;
pub use export::{write_charts, write_top_guests};
pub use locale::{Labels, Locale};
