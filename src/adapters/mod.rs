// Adapters layer: concrete implementations of the domain ports.

pub mod corpus_file;

pub use corpus_file::FileCorpusLoader;
