//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};

use serde::de::DeserializeOwned;
use thiserror::Error;

use super::format::{Cassette, Interaction};

/// Replay failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CassetteError {
    /// Nothing was ever recorded for this port/method.
    #[error("no interactions recorded for {port}::{method}; available: [{available}]")]
    Unrecorded {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// Comma-separated `port::method` pairs the cassette does hold.
        available: String,
    },
    /// Every recorded interaction for this port/method has been consumed.
    #[error("cassette exhausted: all {count} interactions for {port}::{method} consumed")]
    Exhausted {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// How many were recorded.
        count: usize,
    },
    /// The recorded output is not in `{"Ok": ..}` / `{"Err": ..}` form or
    /// does not match the expected type.
    #[error("malformed recorded output for {port}::{method}: {reason}")]
    Malformed {
        /// Requested port.
        port: String,
        /// Requested method.
        method: String,
        /// What went wrong.
        reason: String,
    },
}

/// Replays interactions sequentially per port/method pair.
#[derive(Debug)]
pub struct CassetteReplayer {
    queues: HashMap<(String, String), VecDeque<Interaction>>,
    counts: HashMap<(String, String), usize>,
}

impl CassetteReplayer {
    /// Creates a replayer over the cassette's interactions.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<(String, String), VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        let counts = queues.iter().map(|(k, q)| (k.clone(), q.len())).collect();
        Self { queues, counts }
    }

    /// Takes the next interaction recorded for `port`/`method`.
    ///
    /// # Errors
    ///
    /// Returns an error if none was recorded or all have been consumed.
    pub fn next_interaction(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<Interaction, CassetteError> {
        let key = (port.to_string(), method.to_string());
        if !self.queues.contains_key(&key) {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return Err(CassetteError::Unrecorded {
                port: key.0,
                method: key.1,
                available: available.join(", "),
            });
        }
        match self.queues.get_mut(&key).and_then(VecDeque::pop_front) {
            Some(interaction) => Ok(interaction),
            None => {
                let count = self.counts.get(&key).copied().unwrap_or_default();
                Err(CassetteError::Exhausted { port: key.0, method: key.1, count })
            }
        }
    }

    /// Takes the next interaction and decodes its recorded `Result`.
    ///
    /// The outer error is a replay failure; the inner `Err(String)` is the
    /// error message the port returned while recording.
    ///
    /// # Errors
    ///
    /// Returns a [`CassetteError`] if no interaction is available or its
    /// output cannot be decoded as `T`.
    pub fn next_result<T: DeserializeOwned>(
        &mut self,
        port: &str,
        method: &str,
    ) -> Result<Result<T, String>, CassetteError> {
        let interaction = self.next_interaction(port, method)?;
        let malformed = |reason: String| CassetteError::Malformed {
            port: port.to_string(),
            method: method.to_string(),
            reason,
        };

        match interaction.output {
            serde_json::Value::Object(mut map) => {
                if let Some(ok) = map.remove("Ok") {
                    serde_json::from_value(ok).map(Ok).map_err(|e| malformed(e.to_string()))
                } else if let Some(err) = map.remove("Err") {
                    Ok(Err(err.as_str().map_or_else(|| err.to_string(), String::from)))
                } else {
                    Err(malformed("expected an Ok or Err key".to_string()))
                }
            }
            other => Err(malformed(format!("expected an object, found {other}"))),
        }
    }
}
