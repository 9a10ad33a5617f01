//! Approximate string matching with a state-set index.
//!
//! Register a large set of strings once, then ask which of them lie within
//! edit distance `D` of a query, without comparing the query against every
//! registered string.
//!
//! Every string is folded through an [`Alphabet`] into a short symbol path
//! and stored in a trie whose node ids encode the path
//! (`state = parent * alphabet_size + symbol`). A query walks that trie with a
//! cost-annotated frontier, pruning every branch that exceeds the budget, and
//! the candidates that survive are verified with an exact distance automaton.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ alphabet.rs │────▶│   index.rs   │────▶│  data_store.rs   │
//! │ char→symbol │     │ StateSetIndex│     │ state → strings  │
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!                        │         │
//!                        ▼         ▼
//!            ┌──────────────┐   ┌──────────────────────────┐
//!            │ state_set/   │   │ fuzzy/                   │
//!            │ trie +       │   │ bounded distance,        │
//!            │ frontiers    │   │ automaton, TrieFilter    │
//!            └──────────────┘   └──────────────────────────┘
//!                        │         │
//!                        ▼         ▼
//! ┌──────────────────────────────────────────────────────────┐
//! │                    verify/contracts.rs                    │
//! │   (forest well-formed, frontier in budget, sorted ids)    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use state_set_index::{Config, QueryMode, StateSetIndex, Utf8Alphabet};
//!
//! let config = Config::new(6, 16)?;
//! let mut index = StateSetIndex::in_memory(config, Utf8Alphabet);
//! index.index(["Mueller", "Müller", "Muster", "Mustermann"])?;
//!
//! assert_eq!(index.find("Mustre", 2, QueryMode::Levenshtein)?, vec!["Muster"]);
//! assert_eq!(index.find("Mustre", 1, QueryMode::Damerau)?, vec!["Muster"]);
//! # Ok::<(), state_set_index::Error>(())
//! ```

// Module declarations
mod alphabet;
mod config;
mod data_store;
mod error;
pub mod fuzzy;
mod index;
pub mod state_set;
pub mod testing;
mod types;
pub mod verify;

// Re-exports for public API
pub use alphabet::{Alphabet, InMemoryAlphabet, Utf8Alphabet};
pub use config::Config;
pub use data_store::{DataStore, InMemoryDataStore};
pub use error::{Error, Result};
pub use fuzzy::{
    bounded_distance, damerau_levenshtein, levenshtein, levenshtein_within, Automaton, EditCosts,
    TrieFilter,
};
pub use index::StateSetIndex;
pub use state_set::{CostAnnotatedStateSet, StateSet};
pub use types::{QueryMode, State, Symbol, ROOT};
