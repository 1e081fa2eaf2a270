use rand::seq::SliceRandom;
use serde::Deserialize;
use serde_json::from_str;

use include_dir::{include_dir, Dir};
use std::error::Error;

static CORPUS_DIR: Dir = include_dir!("src/corpus");

/// A fixed set of reference texts, embedded at compile time.
#[derive(Deserialize, Clone, Debug)]
pub struct Corpus {
    pub name: String,
    pub size: u32,
    pub texts: Vec<String>,
}

impl Corpus {
    /// Load the built-in english corpus.
    pub fn built_in() -> Self {
        read_corpus_from_file("english.json").unwrap()
    }

    /// Pick one reference text uniformly at random.
    pub fn random_text(&self) -> &str {
        self.texts
            .choose(&mut rand::thread_rng())
            .map(String::as_str)
            .unwrap_or("")
    }
}

fn read_corpus_from_file(file_name: &str) -> Result<Corpus, Box<dyn Error>> {
    let file = CORPUS_DIR
        .get_file(file_name)
        .expect("Corpus file not found");

    let file_as_str = file
        .contents_utf8()
        .expect("Unable to interpret file as a string");

    let corpus = from_str(file_as_str).expect("Unable to deserialize corpus json");

    Ok(corpus)
}
