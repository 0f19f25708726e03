pub mod fragment_reader;
pub mod raw_fragment;
