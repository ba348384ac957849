//! Refract Desc - the type descriptor codec.
//!
//! Converts between three spellings of a type:
//! - descriptors: `I`, `[[Ljava/lang/String;`
//! - human names: `int`, `java.lang.String[][]`
//! - host binary names: `int`, `[[Ljava.lang.String;`
//!
//! Descriptor grammar:
//!
//! ```text
//! desc      := primitive | reference | array
//! primitive := 'V' | 'Z' | 'B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S'
//! reference := 'L' qualifiedSlashName ';'
//! array     := '[' desc
//! ```
//!
//! Every conversion is strict: input outside the grammar is rejected with a
//! [`DescError`] rather than passed through. Two host limits narrow the
//! grammar further: at most [`MAX_ARRAY_DIMENSIONS`] leading `[`, and a
//! single-segment reference name may not be a primitive keyword (`Lint;`).

mod cursor;
mod decode;
mod encode;
mod error;
mod ident;
mod method;
mod name;

pub use decode::{decode, is_descriptor, parse};
pub use encode::{binary_name, encode, encode_all, human_name};
pub use error::DescError;
pub use method::{
    constructor_descriptor, method_descriptor, method_descriptor_without_name,
    parse_method_descriptor, MethodDescriptor,
};
pub use name::{name_to_desc, parse_name};

/// Most array dimensions the host accepts in a descriptor or name.
pub const MAX_ARRAY_DIMENSIONS: usize = 255;
