pub mod observer;
pub mod process;
pub mod timeline;

pub use observer::Observer;
pub use process::{Pid, ProcKey, ProcTable, Process, ProcessReport, Time};
pub use timeline::{Segment, Timeline};
