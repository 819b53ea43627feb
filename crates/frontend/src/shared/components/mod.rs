pub mod multi_select;
pub mod stat_card;

pub use multi_select::MultiSelect;
pub use stat_card::StatCard;
