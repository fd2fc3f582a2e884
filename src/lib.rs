// guardgate library - guardian model in front of an llm

pub mod cli;
mod config;
mod core;
mod error;
mod output;

pub use config::{Config, MAX_TOKENS, TEMPERATURE};
pub use core::{
    BLOCK_MESSAGE, ChatClient, Classifier, Generator, Guardian, Outcome, Pipeline, Responder,
    Verdict,
};
pub use error::Error;
pub use output::Output;
