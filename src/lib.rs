pub mod analysis;
pub mod exclusion;
pub mod feed;
pub mod lexicon;
pub mod plays;
pub mod sentiment;
pub mod state;
pub mod tagger;
