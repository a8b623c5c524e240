//! The DS (deductive search) core: a forward-chaining rule engine
//! that treats stored facts as inference rules and derives new facts
//! one resolution step at a time.

mod driver;
mod error;
mod search;

pub use driver::run;
pub use error::{DsError, DsResult};
pub use search::Search;
