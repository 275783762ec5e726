pub mod condition;
pub mod evidence;
pub mod judgments;
pub mod report;
pub mod response;
pub mod scales;
pub mod trace;
