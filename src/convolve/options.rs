use serde::{Deserialize, Serialize};

/// How the engine evaluates the 2-D sum.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Reference loop over the full `order × order` footprint.
    #[default]
    Direct,
    /// Horizontal then vertical 1-D passes with the Gaussian's separable taps.
    Separable,
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Strategy::Direct => "direct",
            Strategy::Separable => "separable",
        })
    }
}

/// Options controlling the convolution engine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineOptions {
    pub strategy: Strategy,
    /// Partition output rows across the rayon pool. Ignored when the crate is
    /// built without the `parallel` feature.
    pub parallel: bool,
}

impl EngineOptions {
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            parallel: false,
        }
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
