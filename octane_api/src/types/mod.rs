mod endpoint;
pub use self::endpoint::Endpoint;

mod category;
pub use self::category::{RecordKind, StatKind};
