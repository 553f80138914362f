//! Serves recorded interactions back in order.

use std::collections::{HashMap, VecDeque};
use std::path::Path;

use super::format::{Cassette, Interaction};

type PortMethod = (String, String);

/// Replays interactions from a loaded cassette, one queue per port/method
/// pair, so calls to different methods do not consume each other's entries.
pub struct CassetteReplayer {
    queues: HashMap<PortMethod, VecDeque<Interaction>>,
    served: HashMap<PortMethod, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethod, VecDeque<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            queues
                .entry((interaction.port.clone(), interaction.method.clone()))
                .or_default()
                .push_back(interaction.clone());
        }
        Self { queues, served: HashMap::new() }
    }

    /// Loads a cassette file and creates a replayer for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_path(path: &Path) -> Result<Self, String> {
        Ok(Self::new(&Cassette::from_path(path)?))
    }

    /// Number of interactions not yet served, across all ports.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.queues.values().map(VecDeque::len).sum()
    }

    /// Takes the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette has no (more) interactions for the
    /// pair. The message lists what was requested and what the cassette
    /// does contain.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<Interaction, String> {
        let key = (port.to_string(), method.to_string());

        let Some(queue) = self.queues.get_mut(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|(p, m)| format!("{p}::{m}")).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        };

        let served = self.served.entry(key).or_default();
        let Some(interaction) = queue.pop_front() else {
            return Err(format!(
                "Cassette exhausted: all {served} interactions for port={port:?} \
                 method={method:?} have been consumed."
            ));
        };
        *served += 1;
        Ok(interaction)
    }
}
