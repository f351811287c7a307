pub mod chart;
pub mod formatting;
pub mod table;

pub use chart::{render_bars, Bar, BarStyle, BAR_WIDTH};
pub use formatting::Formatter;
pub use table::{Alignment, Table, TableColumn};
