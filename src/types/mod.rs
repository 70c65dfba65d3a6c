//! LDB value types: the primitive registry, scalar values and names.

mod name;
mod type_tag;
mod value;

pub use name::Name;
pub use type_tag::TypeTag;
pub use value::{ArrayData, Scalar};
