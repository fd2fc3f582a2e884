// output formatting - readable lines or raw json

use serde::Serialize;

use crate::Error;
use crate::core::Outcome;

pub struct Output;

#[derive(Serialize)]
struct Record<'a> {
    query: &'a str,
    blocked: bool,
    response: &'a str,
}

impl Output {
    pub fn banner(role: &str, endpoint: &str, model: &str) {
        println!("{}", Self::banner_line(role, endpoint, model));
    }

    pub fn banner_line(role: &str, endpoint: &str, model: &str) -> String {
        format!("# connecting to {role} at {endpoint} (model {model})")
    }

    // for humans
    pub fn pretty(query: &str, outcome: &Outcome) {
        println!("\nquery: {query}");
        if outcome.is_blocked() {
            println!("blocked: {outcome}");
        } else {
            println!("response: {outcome}");
        }
    }

    // one json object per line, for scripts
    pub fn raw(query: &str, outcome: &Outcome) -> Result<(), Error> {
        println!("{}", Self::record(query, outcome)?);
        Ok(())
    }

    pub fn record(query: &str, outcome: &Outcome) -> Result<String, Error> {
        let record = Record {
            query,
            blocked: outcome.is_blocked(),
            response: outcome.text(),
        };
        Ok(serde_json::to_string(&record)?)
    }
}
