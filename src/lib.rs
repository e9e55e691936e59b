//! Binary codec for the OPC UA `Variant` built-in type.
//!
//! A `Variant` carries one value of any of the 25 built-in types, or a
//! homogeneous array of one such type with optional array dimensions, behind
//! a single encoding-mask byte:
//!
//! - bits 0-5: built-in type id (1-25)
//! - bit 6: array dimensions follow the values
//! - bit 7: an `i32` element count precedes the values
//!
//! The in-memory form is a closed enum ([`Value`]), so every decodable kind
//! is matched exhaustively and an unknown type id is a decode error rather
//! than a silently skipped slot. Nested `Variant`, `DataValue` and
//! `DiagnosticInfo` values are decoded under an explicit depth limit (see
//! [`DecodeLimits`]).
//!
//! ```
//! use ua_variant::{BinaryCodec, Variant};
//!
//! let matrix = Variant::from_array([1i32, 2, 3, 4, 5, 6])
//!     .with_dimensions(vec![2, 3])
//!     .unwrap();
//! let bytes = matrix.to_bytes().unwrap();
//! let (back, _) = Variant::from_bytes(&bytes).unwrap();
//! assert_eq!(back, matrix);
//! assert_eq!(back.get(&[1, 0]).unwrap().to_string(), "4");
//! ```

mod accessors;
mod byte_string;
pub use byte_string::*;
mod codec;
pub use codec::*;
mod data_value;
pub use data_value::*;
mod date_time;
pub use date_time::*;
mod decoder;
pub use decoder::*;
mod diagnostic_info;
pub use diagnostic_info::*;
mod encoder;
pub use encoder::*;
mod encoding_mask;
pub use encoding_mask::*;
mod error;
pub use error::*;
mod extension_object;
pub use extension_object::*;
mod guid;
pub use guid::*;
mod limits;
pub use limits::*;
mod localized_text;
pub use localized_text::*;
mod node_id;
pub use node_id::*;
mod qualified_name;
pub use qualified_name::*;
mod status_code;
pub use status_code::*;
mod type_id;
pub use type_id::*;
mod value;
pub use value::*;
mod variant;
pub use variant::*;
