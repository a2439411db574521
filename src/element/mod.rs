//! Element Model - Immutable descriptors of what to render.
//!
//! Elements are plain data: a kind, an attribute bag and an ordered list of
//! children. They are built fresh for every render and consumed by the
//! reconciler, which never mutates them.
//!
//! Components are expanded eagerly. Building an element whose type is a
//! [`Component`] calls the component right away with the attributes and
//! children, so the reconciler only ever sees host and text elements.
//!
//! # Example
//!
//! ```ignore
//! use spark_fiber::element;
//!
//! let tree = element!("div", { "id" => "foo" },
//!     element!("h1", {}, "Hello"),
//! );
//! ```

mod build;
mod macros;

pub use build::*;
