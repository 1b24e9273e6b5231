//! # Domain Layer
//!
//! Entities, key tuples, table layouts and errors. No I/O; storage is reached
//! only through the `TableStore` port.

pub mod entities;
pub mod errors;
pub mod schema;
pub mod value_objects;

pub use entities::*;
pub use errors::*;
pub use schema::*;
pub use value_objects::*;
