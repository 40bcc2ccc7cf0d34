mod criteria;
mod evaluate;

pub use criteria::FilterCriteria;
pub use evaluate::{apply, matches};
