pub mod color;
pub mod contact;
pub mod decode;
pub mod error;
pub mod highlight;
pub mod image;
pub mod locate;
pub mod tags;
pub mod time;
pub mod value;

// Convenient re-exports
pub use color::{contrasting_text_color, parse_color, to_css_text, Rgba};
pub use decode::try_parse_json;
pub use error::{DecodeFailure, ScanError};
pub use highlight::build_error_highlight;
pub use locate::{build_pointer_index, find_path_position, PathSegment, PointerIndex};
pub use tags::{classify, pick_primary, RecognitionConfig, ValueTag};
