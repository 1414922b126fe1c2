pub mod driver;
pub mod metrics;
pub mod replay;
pub mod workload;

pub use driver::{SimReport, simulate};
pub use metrics::Metrics;
pub use replay::replay;
pub use workload::Generator;
