pub mod batch;
pub mod session;

pub use batch::{process_uploads, BatchReport, FileChoices, FileOutcome, ProcessedFile};
pub use session::FileSession;
