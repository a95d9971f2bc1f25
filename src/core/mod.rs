pub mod etl;
pub mod flatten;
pub mod output;
pub mod pipeline;

pub use crate::domain::model::{FlatRow, TransformResult, VenueRecord};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
