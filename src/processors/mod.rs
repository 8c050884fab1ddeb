//! File processors built on the core translator

pub mod text;
