pub mod options;
pub mod player;
pub mod view;

pub use options::{FilterSortOptions, SortKey};
pub use player::{PlayerRecord, Roster, ValidationError};
pub use view::ResultView;
