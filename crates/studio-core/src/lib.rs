pub mod booking;
pub mod catalog;
pub mod constants;
pub mod error;
pub mod popup;
pub mod query;
pub mod selection;
pub mod summary;

pub use booking::*;
pub use catalog::*;
pub use constants::*;
pub use error::*;
pub use popup::*;
pub use query::*;
pub use selection::*;
pub use summary::*;
