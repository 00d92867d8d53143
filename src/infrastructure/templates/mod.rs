//! Document templates

pub mod front_matter;

pub use front_matter::{
    has_front_matter, render_template, FrontMatterError, FrontMatterInserter, FrontMatterOutcome,
    FrontMatterReport,
};
