pub mod lookup;

pub use lookup::{BoundParam, LookupMode, LookupOutcome, LookupQuery, LookupShape};
