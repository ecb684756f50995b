// ============================================================
// TABLE DOMAIN LAYER
// ============================================================
// In-memory tabular values shared by every pipeline stage
// No I/O, no format knowledge

mod cell;
mod column;
mod frame;

pub use cell::{Cell, CellKey};
pub use column::{Column, ColumnKind};
pub use frame::Table;
