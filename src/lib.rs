pub mod comparator;
pub mod error;
pub mod key;
pub mod options;
pub mod range;
pub mod utils;

pub use comparator::Comparator;
pub use error::{Error, Result};
pub use key::{format_key, parse_key, KeyFormat};
pub use options::Options;
pub use range::KeyRange;
pub use utils::comparators::{compare_end_key, BytewiseComparator, EndKeyComparator};

#[cfg(test)]
#[ctor::ctor]
fn init() {
    color_backtrace::install();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(true)
        .with_file(true)
        .with_level(true)
        .without_time()
        .with_thread_ids(true)
        .with_test_writer()
        .init();
}
