//! Typed `vitistack.io` resources and lossless conversion to and from
//! generic documents.
//!
//! # Architecture
//!
//! - [`resource`] - Shapes, the type registry, kind resolution and the
//!   structural converter
//! - [`api`] - Object metadata and the `vitistack.io/v1alpha1` kinds
//! - [`document`] - The generic, loosely-typed document form
//! - [`unstructured`] - The conversion facade tying the pieces together
//!
//! # Example
//!
//! ```
//! use vitistack_crds::api::v1alpha1::{self, Machine};
//! use vitistack_crds::Converter;
//!
//! let registry = v1alpha1::registry()?;
//! let converter = Converter::new(&registry);
//!
//! let mut machine = Machine::default();
//! machine.spec.name = "web-1".to_string();
//!
//! let document = converter.encode(&mut machine)?;
//! assert_eq!(document.kind(), Some("Machine"));
//!
//! let decoded: Machine = converter.decode(&document)?;
//! assert_eq!(decoded, machine);
//! # Ok::<(), vitistack_crds::Error>(())
//! ```

pub mod api;
pub mod document;
pub mod error;
pub mod resource;
pub mod unstructured;

pub use api::meta::{GroupVersionKind, ObjectMeta, Time, TypeMeta};
pub use document::Document;
pub use error::{Error, Result};
pub use resource::{Object, Registry, Resolution};
pub use unstructured::Converter;
