pub mod competency;
pub mod loaders;
pub mod record;
pub mod worked_examples;

pub use competency::{BandProfile, ColumnKind, ScoreBand, EXPECTED_COLUMNS};
pub use loaders::{load_score_table, load_score_table_from_path};
pub use record::{CandidateRecord, CellValue, ScoreTable};
