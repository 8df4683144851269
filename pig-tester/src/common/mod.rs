pub mod util;

pub use util::{parse_threshold_tokens, split_csv};
