pub mod dictionary;
pub mod fuzzy;
pub mod rack;
pub mod scoring;
pub mod suggestion;
pub mod word_former;
pub mod word_loader;
