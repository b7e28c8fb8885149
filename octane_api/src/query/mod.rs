mod common;
pub(crate) use self::common::impl_query;
pub use self::common::{FilterSet, FilterValue, Query, SortDirection};

mod event;
pub use self::event::EventQuery;

mod matches;
pub use self::matches::MatchQuery;

mod game;
pub use self::game::GameQuery;

mod player;
pub use self::player::PlayerQuery;

mod team;
pub use self::team::TeamQuery;

mod record;
pub use self::record::RecordQuery;
