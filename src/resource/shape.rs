//! Structural shapes
//!
//! A [`Shape`] is a static table describing the fields of a typed structure:
//! the document key of every field, its omit-empty policy and the kind of
//! value it holds. Shapes replace runtime reflection: every structure built
//! with [`structured!`](crate::structured) carries one, next to an accessor
//! table ([`Structured::fields`]) whose entries line up with
//! [`Shape::fields`] one-to-one.

use std::fmt;

use serde_json::Value;

use crate::error::{Error, Result};

/// Scalar leaf kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarKind {
    String,
    Int32,
    Int64,
    Float64,
    Bool,
    /// RFC 3339 timestamp carried as a string.
    Time,
}

impl ScalarKind {
    pub fn type_name(self) -> &'static str {
        match self {
            ScalarKind::String => "string",
            ScalarKind::Int32 => "int32",
            ScalarKind::Int64 => "int64",
            ScalarKind::Float64 => "float64",
            ScalarKind::Bool => "bool",
            ScalarKind::Time => "Time",
        }
    }
}

/// The kind of value a field holds.
///
/// Nested kinds are referenced through function pointers so that shape tables
/// can live in `static`s and still describe recursive nesting.
#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    Scalar(ScalarKind),
    /// A nested structure with its own shape.
    Struct(fn() -> &'static Shape),
    /// An ordered sequence of values.
    List(fn() -> FieldKind),
    /// A string-keyed mapping.
    Map(fn() -> FieldKind),
    /// A value that may be absent (a nullable reference in the wire form).
    Optional(fn() -> FieldKind),
}

impl FieldKind {
    /// Go-like type name, e.g. `[]MachineSpecDisk` or `map[string]string`.
    pub fn type_name(&self) -> String {
        match self {
            FieldKind::Scalar(scalar) => scalar.type_name().to_string(),
            FieldKind::Struct(shape) => shape().name.to_string(),
            FieldKind::List(item) => format!("[]{}", item().type_name()),
            FieldKind::Map(value) => format!("map[string]{}", value().type_name()),
            FieldKind::Optional(inner) => format!("*{}", inner().type_name()),
        }
    }

    /// Shape of the nested structure, looking through lists, maps and optionals.
    pub fn nested_shape(&self) -> Option<&'static Shape> {
        match self {
            FieldKind::Scalar(_) => None,
            FieldKind::Struct(shape) => Some(shape()),
            FieldKind::List(inner) | FieldKind::Map(inner) | FieldKind::Optional(inner) => {
                inner().nested_shape()
            }
        }
    }
}

/// How a field participates in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldMode {
    /// Skipped when the value is zero.
    OmitEmpty,
    /// Always emitted, even when zero.
    Always,
    /// A nested structure flattened into the parent level.
    Inline,
}

/// One field of a [`Shape`].
#[derive(Debug)]
pub struct FieldDescriptor {
    /// Rust field name.
    pub name: &'static str,
    /// Document key. Empty for inlined fields.
    pub key: &'static str,
    pub kind: FieldKind,
    pub mode: FieldMode,
}

/// Static structural description of a typed structure.
#[derive(Debug)]
pub struct Shape {
    pub name: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl Shape {
    /// Find a field by document key, searching inlined structures as well.
    pub fn field(&self, key: &str) -> Option<&'static FieldDescriptor> {
        self.fields.iter().find_map(|field| match field.mode {
            FieldMode::Inline => field.kind.nested_shape().and_then(|inner| inner.field(key)),
            _ if field.key == key => Some(field),
            _ => None,
        })
    }

    /// Resolve a dotted path of document keys (`spec.disks.sizeGB`) to a field.
    ///
    /// Lists, maps and optionals are looked through, so a path only ever names
    /// structure keys.
    pub fn field_at(&self, path: &str) -> Option<&'static FieldDescriptor> {
        let mut parts = path.split('.').filter(|part| !part.is_empty());
        let mut field = self.field(parts.next()?)?;
        for part in parts {
            field = field.kind.nested_shape()?.field(part)?;
        }
        Some(field)
    }
}

/// A value that can be read from and written to a generic document.
///
/// Implemented for scalars, collections and every structure declared with
/// [`structured!`](crate::structured).
pub trait FieldValue {
    /// Whether the value equals the zero value of its type.
    fn is_zero(&self) -> bool;

    /// Reset to the zero value.
    fn clear(&mut self);

    /// Convert to a document value.
    fn encode(&self) -> Value;

    /// Overwrite from a non-null document value.
    fn assign(&mut self, value: &Value, path: &FieldPath) -> Result<()>;

    fn as_structured(&self) -> Option<&dyn Structured> {
        None
    }

    fn as_structured_mut(&mut self) -> Option<&mut dyn Structured> {
        None
    }
}

/// Static kind information for a [`FieldValue`] type.
pub trait FieldType: FieldValue + Default + 'static {
    const KIND: FieldKind;

    fn kind() -> FieldKind {
        Self::KIND
    }
}

/// A structure whose fields are described by a static [`Shape`].
pub trait Structured {
    fn descriptor() -> &'static Shape
    where
        Self: Sized;

    fn shape(&self) -> &'static Shape;

    /// Field accessors in shape order.
    fn fields(&self) -> Vec<&dyn FieldValue>;

    /// Mutable field accessors in shape order.
    fn fields_mut(&mut self) -> Vec<&mut dyn FieldValue>;
}

/// Location of a value inside a document, used in error messages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath(String);

impl FieldPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn key(&self, key: &str) -> Self {
        if self.0.is_empty() {
            Self(key.to_string())
        } else {
            Self(format!("{}.{}", self.0, key))
        }
    }

    pub fn index(&self, index: usize) -> Self {
        Self(format!("{}[{}]", self.0, index))
    }

    pub fn entry(&self, key: &str) -> Self {
        Self(format!("{}[{}]", self.0, key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build a [`Error::TypeMismatch`] for a value found at this path.
    pub fn mismatch(&self, expected: impl Into<String>, found: &Value) -> Error {
        self.mismatch_described(expected, json_type_name(found))
    }

    pub fn mismatch_described(&self, expected: impl Into<String>, found: impl Into<String>) -> Error {
        Error::TypeMismatch {
            path: self.to_string(),
            expected: expected.into(),
            found: found.into(),
        }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            f.write_str("<root>")
        } else {
            f.write_str(&self.0)
        }
    }
}

/// Name of the JSON type of a document value.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Declare a structure together with its [`Shape`] and field accessors.
///
/// Each field names its document key after `as`. Fields default to
/// omit-empty; `always` keeps zero values in the document and `inline`
/// flattens a nested structure into the parent level.
///
/// ```ignore
/// structured! {
///     pub struct MachineCPU {
///         pub cores: i64 as "cores",
///         pub sockets: i64 as "sockets" always,
///     }
/// }
/// ```
#[macro_export]
macro_rules! structured {
    (@mode) => {
        $crate::resource::shape::FieldMode::OmitEmpty
    };
    (@mode always) => {
        $crate::resource::shape::FieldMode::Always
    };
    (@mode inline) => {
        $crate::resource::shape::FieldMode::Inline
    };
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                pub $field:ident : $ty:ty as $key:literal $($mode:ident)?
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                pub $field: $ty,
            )*
        }

        impl $crate::resource::shape::Structured for $name {
            fn descriptor() -> &'static $crate::resource::shape::Shape {
                static SHAPE: $crate::resource::shape::Shape = $crate::resource::shape::Shape {
                    name: stringify!($name),
                    fields: &[
                        $(
                            $crate::resource::shape::FieldDescriptor {
                                name: stringify!($field),
                                key: $key,
                                kind: <$ty as $crate::resource::shape::FieldType>::KIND,
                                mode: $crate::structured!(@mode $($mode)?),
                            },
                        )*
                    ],
                };
                &SHAPE
            }

            fn shape(&self) -> &'static $crate::resource::shape::Shape {
                <Self as $crate::resource::shape::Structured>::descriptor()
            }

            fn fields(&self) -> Vec<&dyn $crate::resource::shape::FieldValue> {
                vec![$(&self.$field as &dyn $crate::resource::shape::FieldValue),*]
            }

            fn fields_mut(&mut self) -> Vec<&mut dyn $crate::resource::shape::FieldValue> {
                vec![$(&mut self.$field as &mut dyn $crate::resource::shape::FieldValue),*]
            }
        }

        impl $crate::resource::shape::FieldValue for $name {
            fn is_zero(&self) -> bool {
                true $(&& $crate::resource::shape::FieldValue::is_zero(&self.$field))*
            }

            fn clear(&mut self) {
                *self = Self::default();
            }

            fn encode(&self) -> serde_json::Value {
                serde_json::Value::Object($crate::resource::convert::encode_struct(self))
            }

            fn assign(
                &mut self,
                value: &serde_json::Value,
                path: &$crate::resource::shape::FieldPath,
            ) -> $crate::Result<()> {
                $crate::resource::convert::assign_struct(self, value, path)
            }

            fn as_structured(&self) -> Option<&dyn $crate::resource::shape::Structured> {
                Some(self)
            }

            fn as_structured_mut(&mut self) -> Option<&mut dyn $crate::resource::shape::Structured> {
                Some(self)
            }
        }

        impl $crate::resource::shape::FieldType for $name {
            const KIND: $crate::resource::shape::FieldKind =
                $crate::resource::shape::FieldKind::Struct(
                    <$name as $crate::resource::shape::Structured>::descriptor,
                );
        }
    };
}
