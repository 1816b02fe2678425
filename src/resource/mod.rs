//! Resource abstraction layer
//!
//! This module turns typed resources into generic documents and back without
//! runtime reflection. Every structure describes itself through a static
//! [`Shape`]; the converter walks shapes, never concrete types.
//!
//! # Architecture
//!
//! - [`shape`] - Static field tables and the traits that expose them
//! - [`registry`] - Maps resource types to their (group, version, kind)
//! - [`resolver`] - Fills in missing identity metadata from the registry
//! - [`convert`] - The structural walk in both directions
//! - [`object`] - Top-level resources carrying identity metadata
//!
//! # Example
//!
//! ```ignore
//! use crate::resource::{convert, resolve_kind, Registry};
//!
//! fn to_map(registry: &Registry, machine: &mut Machine) -> serde_json::Map<String, Value> {
//!     resolve_kind(registry, machine);
//!     convert::encode_struct(machine)
//! }
//! ```

pub mod convert;
mod field;
pub mod object;
pub mod registry;
pub mod resolver;
pub mod shape;

pub use object::Object;
pub use registry::{KindDescriptor, Registry};
pub use resolver::{resolve_kind, Resolution};
pub use shape::{FieldDescriptor, FieldKind, FieldMode, FieldPath, ScalarKind, Shape, Structured};
