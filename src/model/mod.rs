mod match_record;
mod wire;

pub use match_record::*;
pub use wire::*;
