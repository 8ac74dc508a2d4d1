//! LaTeX variant of the CV generator, compiled to PDF

use std::path::{Path, PathBuf};

use tracing::info;

use crate::output::{self, OutputError};
use crate::record::CvRecord;
use crate::rendering::Generator;

/// Fixed location of the generated LaTeX source, relative to the working
/// directory.
pub const LATEX_PATH: &str = "output/cv.tex";

/// Document preamble: article class, tight margins, the packages the
/// section layouts rely on, and an empty page style.
static PREAMBLE: &str = r"\documentclass[11pt,a4paper]{article}
\usepackage[margin=0.5in]{geometry}
\usepackage{hyperref}
\usepackage{xcolor}
\usepackage{array}
\usepackage{enumitem}

% Define colors
\definecolor{primary}{RGB}{79,70,229}
\definecolor{darkgray}{RGB}{75,75,75}

% Header styling
\pagestyle{empty}

\begin{document}

% Header
\begin{center}
";

/// Generate the CV as a LaTeX document and compile it to PDF. With the
/// anonymous flag set, the header omits the name and every contact
/// detail, and the artifact is named accordingly.
pub struct LatexGenerator {
    record: CvRecord,
    content: String,
    anonymous: bool,
}

impl LatexGenerator {
    pub fn new(record: CvRecord, anonymous: bool) -> LatexGenerator {
        LatexGenerator {
            record,
            content: String::with_capacity(16 * 1024),
            anonymous,
        }
    }

    /// Section heading with the horizontal rule beneath it. Titles are
    /// fixed literals, not record text.
    fn begin_section(&mut self, title: &str) {
        self.content
            .push_str("\n\\section*{");
        self.content
            .push_str(title);
        self.content
            .push_str("}\n\\vspace{-0.3cm}\n\\hrule\n\\vspace{0.2cm}\n\n");
    }
}

impl Generator for LatexGenerator {
    fn escape_text(&self, raw: &str) -> String {
        escape_latex(raw)
    }

    /// Preamble and the centered header block. Anonymous output keeps the
    /// block but drops the name and contact lines entirely.
    fn generate_header(&mut self) {
        self.content
            .push_str(PREAMBLE);

        if !self.anonymous {
            let personal = &self
                .record
                .personal;

            self.content
                .push_str("{\\Large \\textbf{");
            self.content
                .push_str(&escape_latex(&personal.name));
            self.content
                .push_str("}}\\\\\n\\vspace{0.1cm}\n{\\small ");
            self.content
                .push_str(&escape_latex(&personal.email));
            self.content
                .push_str(" $|$ ");
            self.content
                .push_str(&escape_latex(&personal.phone));
            self.content
                .push_str(" $|$ ");
            self.content
                .push_str(&escape_latex(&personal.location));
            self.content
                .push_str("}\\\\\n\\vspace{0.15cm}\n\\hrule\n");
        }

        self.content
            .push_str("\\end{center}\n\n");
    }

    fn generate_summary(&mut self) {
        self.content
            .push_str("% Professional Summary\n\\vspace{0.2cm}\n{\\small ");
        self.content
            .push_str(&escape_latex(
                &self
                    .record
                    .personal
                    .summary,
            ));
        self.content
            .push_str("}\n\n");
    }

    fn generate_experience(&mut self) {
        self.begin_section("EXPERIENCE");

        for job in &self
            .record
            .experience
        {
            self.content
                .push_str("\\noindent\n\\textbf{");
            self.content
                .push_str(&escape_latex(&job.title));
            self.content
                .push_str("} \\hfill {\\small ");
            self.content
                .push_str(&escape_latex(&job.start_date));
            self.content
                .push_str(" -- ");
            self.content
                .push_str(&escape_latex(&job.end_date));
            self.content
                .push_str("}\\\\\n{\\small \\textit{");
            self.content
                .push_str(&escape_latex(&job.company));
            self.content
                .push_str(", ");
            self.content
                .push_str(&escape_latex(&job.location));
            self.content
                .push_str("}}\n\\vspace{0.15cm}\n");

            for highlight in &job.highlights {
                self.content
                    .push_str("\\begin{itemize}[leftmargin=0.25in,topsep=-0.1cm,partopsep=0pt]\n\\item {\\small ");
                self.content
                    .push_str(&escape_latex(highlight));
                self.content
                    .push_str("}\n\\end{itemize}\n");
            }

            self.content
                .push_str("\\vspace{0.25cm}\n");
        }
    }

    fn generate_education(&mut self) {
        self.begin_section("EDUCATION");

        for entry in &self
            .record
            .education
        {
            self.content
                .push_str("\\noindent\n\\textbf{");
            self.content
                .push_str(&escape_latex(&entry.degree));
            self.content
                .push_str("} \\hfill {\\small ");
            self.content
                .push_str(&escape_latex(&entry.years));
            self.content
                .push_str("}\\\\\n{\\small ");
            self.content
                .push_str(&escape_latex(&entry.institution));
            self.content
                .push_str("}\n\\vspace{0.15cm}\n");

            if let Some(details) = &entry.details {
                if !details.is_empty() {
                    // Borderless table, one column per subject: subjects
                    // across the top row, grades beneath.
                    self.content
                        .push_str("\\\\\n\\vspace{0.05cm}\n\\begin{tabular}{*{");
                    self.content
                        .push_str(
                            &details
                                .len()
                                .to_string(),
                        );
                    self.content
                        .push_str("}{c}}\n");

                    let subjects = details
                        .iter()
                        .map(|detail| escape_latex(&detail.subject))
                        .collect::<Vec<_>>()
                        .join(" & ");
                    self.content
                        .push_str(&subjects);
                    self.content
                        .push_str(" \\\\\n");

                    let grades = details
                        .iter()
                        .map(|detail| escape_latex(&detail.grade))
                        .collect::<Vec<_>>()
                        .join(" & ");
                    self.content
                        .push_str(&grades);
                    self.content
                        .push_str("\n\\end{tabular}\n");
                }
            }

            self.content
                .push_str("\n\\vspace{0.1cm}\n");
        }
    }

    fn generate_skills(&mut self) {
        self.begin_section("SKILLS");

        self.content
            .push_str("\\noindent\n{\\small ");

        let skills = self
            .record
            .skills
            .iter()
            .map(|skill| escape_latex(skill))
            .collect::<Vec<_>>()
            .join(", ");
        self.content
            .push_str(&skills);

        self.content
            .push_str("}\n\n");
    }

    /// The typeset layout cites authors, year, title, and venue; DOIs are
    /// not rendered in this format.
    fn generate_publications(&mut self) {
        if self
            .record
            .publications
            .is_empty()
        {
            return;
        }

        self.begin_section("PUBLICATIONS");

        for publication in &self
            .record
            .publications
        {
            self.content
                .push_str("\\noindent\n{\\small \\textbf{");
            self.content
                .push_str(&escape_latex(&publication.authors));
            self.content
                .push_str("} (");
            self.content
                .push_str(
                    &publication
                        .year
                        .to_string(),
                );
            self.content
                .push_str("). ");
            self.content
                .push_str(&escape_latex(&publication.title));
            self.content
                .push_str(". \\textit{");
            self.content
                .push_str(&escape_latex(&publication.venue));
            self.content
                .push_str("}\\vspace{0.05cm}\\\\\n");
        }

        self.content
            .push('\n');
    }

    fn generate_awards(&mut self) {
        if self
            .record
            .awards
            .is_empty()
        {
            return;
        }

        self.begin_section("AWARDS AND ACCREDITATIONS");

        for award in &self
            .record
            .awards
        {
            self.content
                .push_str("\\noindent\n{\\small \\textbf{");
            self.content
                .push_str(&escape_latex(&award.title));
            self.content
                .push_str("} -- ");
            self.content
                .push_str(&escape_latex(&award.description));
            self.content
                .push_str("}\\\\\n");
        }
    }

    /// Hobby icons are a web affordance; the typeset list is names only.
    fn generate_hobbies(&mut self) {
        if self
            .record
            .hobbies
            .is_empty()
        {
            return;
        }

        self.begin_section("INTERESTS");

        self.content
            .push_str("\\begin{itemize}[leftmargin=0.25in,topsep=0pt,partopsep=0pt]\n");

        for hobby in &self
            .record
            .hobbies
        {
            self.content
                .push_str("\\item {\\small ");
            self.content
                .push_str(&escape_latex(&hobby.name));
            self.content
                .push_str("}\n");
        }

        self.content
            .push_str("\\end{itemize}\n\n");
    }

    fn markup(&self) -> &str {
        &self.content
    }

    /// Close the document, write the source beneath the output directory
    /// (creating it if absent), and hand the file to the external
    /// compiler. The final artifact is named after the subject, or kept
    /// anonymous.
    fn write_output(&mut self) -> Result<PathBuf, OutputError> {
        self.content
            .push_str("\n\\end{document}\n");

        let source = Path::new(LATEX_PATH);
        if let Some(directory) = source.parent() {
            std::fs::create_dir_all(directory).map_err(|error| OutputError::WriteFailed {
                path: directory.to_path_buf(),
                details: error.to_string(),
            })?;
        }

        output::write_file(source, &self.content)?;
        info!("LaTeX written to {}", source.display());

        let artifact = output::artifact_name(
            &self
                .record
                .personal
                .name,
            self.anonymous,
        );
        output::compile(source, &artifact)
    }
}

/// Replace the ten LaTeX-significant characters with their printable
/// forms. A single pass over the input means the backslashes introduced
/// by a substitution are never themselves re-escaped; the tilde and
/// circumflex need control-sequence forms since they cannot simply be
/// prefixed.
fn escape_latex(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '\\' => result.push_str("\\textbackslash{}"),
            '&' => result.push_str("\\&"),
            '%' => result.push_str("\\%"),
            '$' => result.push_str("\\$"),
            '#' => result.push_str("\\#"),
            '_' => result.push_str("\\_"),
            '{' => result.push_str("\\{"),
            '}' => result.push_str("\\}"),
            '~' => result.push_str("\\textasciitilde{}"),
            '^' => result.push_str("\\textasciicircum{}"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn backslash_is_escaped_exactly_once() {
        assert_eq!(escape_latex("a\\b"), "a\\textbackslash{}b");
    }

    #[test]
    fn introduced_backslashes_are_not_re_escaped() {
        // The backslash in \& comes from escaping, not from the input,
        // and must survive untouched.
        assert_eq!(escape_latex("R&D"), "R\\&D");
        assert_eq!(escape_latex("100%"), "100\\%");
        assert_eq!(escape_latex("snake_case"), "snake\\_case");
    }

    #[test]
    fn braces_and_math_characters() {
        assert_eq!(escape_latex("{x}"), "\\{x\\}");
        assert_eq!(escape_latex("$5"), "\\$5");
        assert_eq!(escape_latex("#1"), "\\#1");
    }

    #[test]
    fn tilde_and_circumflex_use_control_sequences() {
        assert_eq!(escape_latex("~"), "\\textasciitilde{}");
        assert_eq!(escape_latex("^"), "\\textasciicircum{}");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_latex("Ada Lovelace"), "Ada Lovelace");
    }
}
