pub mod booking;
pub mod popup;

pub use booking::{wire_booking_handlers, BookingWiring};
pub use popup::wire_welcome_popup;
