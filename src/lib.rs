pub mod event;
pub mod logging;
pub mod merge;
pub mod normalize;
pub mod output;
pub mod parser;
pub mod pipeline;
