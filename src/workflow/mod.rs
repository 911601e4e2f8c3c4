pub mod analysis_session;
pub mod analysis_state;

pub use analysis_session::AnalysisSession;
pub use analysis_state::{AnalysisEvent, AnalysisState};
