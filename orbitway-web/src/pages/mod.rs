pub mod booking;
pub mod login;
pub mod not_found;

pub use booking::BookingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
