pub mod core;
pub mod analysis;
pub mod index;
pub mod search;
pub mod query;
pub mod directory;

pub use crate::core::config::{Config, NormalizationMode};
pub use crate::core::error::{Error, ErrorKind, Result};
pub use crate::core::types::{EntityKind, EntityRecord, IndexEntry};
pub use crate::directory::service::Directory;
pub use crate::directory::source::IndexSource;
pub use crate::index::search_index::SearchIndex;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                           TRIEWARD STRUCT ARCHITECTURE                       │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────────── DIRECTORY LAYER ─────────────────────────────┐
│                                                                              │
│  struct Directory<T>                                                         │
│  ┌────────────────────────────────────────────────────────────────────────┐  │
│  │ users:     LazyIndex<T>      // OnceCell<RwLock<SearchIndex<T>>>       │  │
│  │ groups:    LazyIndex<T>      // public groups only                     │  │
│  │ locations: LazyIndex<T>      // name + aliases                         │  │
│  │ events:    LazyIndex<T>      // public events only                     │  │
│  └────────────────────────────────────────────────────────────────────────┘  │
│        │ initialize(kind, &dyn IndexSource<T>)   exactly one build           │
│        │ upsert / remove                         write lock                  │
│        │ search                                  read lock                   │
└────────┼─────────────────────────────────────────────────────────────────────┘
         ▼
┌──────────────────────────────── INDEX LAYER ─────────────────────────────────┐
│                                                                              │
│  struct SearchIndex<T>                                                       │
│  ┌────────────────────────────────────────────────────────────────────────┐  │
│  │ root: TrieNode               // depth 0, char-keyed children           │  │
│  │ arena: Vec<Match<T>>         // every match ever created               │  │
│  │ reverse: HashMap<T, Vec<MatchId>>                                      │  │
│  │ analyzer: Analyzer           // whitespace → strip → lowercase         │  │
│  │ cache: Option<QueryCache<T>> // cleared on every mutation              │  │
│  └────────────────────────────────────────────────────────────────────────┘  │
│                                                                              │
│  TrieNode { depth, matches: Vec<MatchId>, children: HashMap<char, _> }       │
│     matches filled only when depth >= min_prefix_len (3)                     │
│                                                                              │
│  Match<T> { key, value, valid }   valid: true → false, never back           │
└──────────────────────────────────────────────────────────────────────────────┘
         ▼
┌──────────────────────────────── SEARCH LAYER ────────────────────────────────┐
│                                                                              │
│  MatchAggregator<'a, T>   one per query                                      │
│     term → find → valid matches → Score { count, closest }                  │
│     sort: count desc, closest asc, first-observed (stable)                   │
└──────────────────────────────────────────────────────────────────────────────┘
*/
