pub mod ledger;
pub use ledger::*;

pub mod record;
pub use record::*;

pub mod sheet;
pub use sheet::*;

pub mod store;
pub use store::*;
