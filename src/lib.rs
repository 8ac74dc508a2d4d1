//! Generate a curriculum vitae from a single JSON record, either as a
//! standalone HTML page or as a PDF typeset via LaTeX.

pub mod loading;
pub mod output;
pub mod record;
pub mod rendering;
