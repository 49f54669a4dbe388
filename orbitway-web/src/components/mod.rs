pub mod header;
pub mod load_error;
pub mod passenger_card;
pub mod price_summary;

pub use header::Header;
pub use load_error::LoadErrorNotice;
pub use passenger_card::PassengerCard;
pub use price_summary::PriceSummary;
