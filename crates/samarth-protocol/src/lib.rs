pub mod answer;
pub mod query;
pub mod record;

pub use answer::*;
pub use query::*;
pub use record::*;
