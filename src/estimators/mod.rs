pub mod approaches;
pub mod dataset;
pub mod entropy;
pub mod mutual_information;
pub mod redundancy;
pub mod traits;
pub mod utils;

// Unified re-exports so users can import hoimeasure::estimators::* ergonomically.
pub use dataset::HoiData;
pub use entropy::{EntropyConfig, EntropyMethod, get_entropy, prepare_for_entropy};
pub use mutual_information::scan_feature_target_mi;
pub use redundancy::{FitOptions, RedundancyMmi};
pub use traits::EntropyBackend;
