//! Pipeline composition: glue the lower-level components (§4.B–§4.F) into the two shapes a
//! caller actually needs — decode a whole file at once, or decode a live stream one buffer at a
//! time.

mod bulk;
mod live;

pub use bulk::{BulkDecodeResult, BulkPipeline};
pub use live::LivePipeline;
