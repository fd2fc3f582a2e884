// core logic - chat transport, the two model stages, and the gate

mod chat;
mod generator;
mod guardian;
mod pipeline;

pub use chat::ChatClient;
pub use generator::{Generator, Responder};
pub use guardian::{Classifier, Guardian, Verdict};
pub use pipeline::{BLOCK_MESSAGE, Outcome, Pipeline};
