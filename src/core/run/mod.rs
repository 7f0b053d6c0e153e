pub use pipeline::{Pipeline, Summary};
pub use worker::ReadsStats;
pub use workload::{ThreadsBudget, Workload};

mod pipeline;
mod worker;
mod workload;
