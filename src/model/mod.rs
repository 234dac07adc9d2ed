//! # Cast Graph Model
//!
//! Plain DTOs shared by storage, search and rendering.
//!
//! People and movies reference each other by identifier only; the
//! `RecordStore` owns both and resolves the references. No I/O, no state.

pub mod person;
pub mod movie;
pub mod path;
pub mod record;

pub use person::{Person, PersonId};
pub use movie::{Movie, MovieId};
pub use path::{Path, Step};
pub use record::{PersonRow, MovieRow, StarRow};
