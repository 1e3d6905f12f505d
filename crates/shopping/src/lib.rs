mod aggregation;
mod categorization;
mod format;
mod list;
mod normalize;
mod types;

pub use aggregation::*;
pub use categorization::*;
pub use format::*;
pub use list::*;
pub use normalize::*;
pub use types::*;

cfg_if::cfg_if! {
    if #[cfg(feature = "full")] {
        mod store;

        pub use store::*;
    }
}
