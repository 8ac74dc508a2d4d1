//! HTML variant of the CV generator

use std::path::{Path, PathBuf};

use serde::Serialize;
use tinytemplate::TinyTemplate;
use tracing::info;

use crate::output::{self, OutputError};
use crate::record::CvRecord;
use crate::rendering::Generator;

/// Fixed location of the generated page, relative to the working
/// directory.
pub const HTML_PATH: &str = "index.html";

/// Document shell up to the opening of the main content column. The
/// sidebar carries the profile summary, contact details, and skills, so
/// those sections have no separate rendering hook in this variant. All
/// context values are escaped (or deliberately verbatim) before they
/// reach the template.
static HEADER_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name} - CV</title>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.0/css/all.min.css">
  <link rel="stylesheet" href="css/static-style.css">
</head>
<body>
  <header class="header">
    <h1>{name}</h1>
    <div class="header-controls">
      <a href="{pdf_href}" class="pdf-download" download="{pdf_filename}"><i class="fas fa-file-pdf"></i> Download PDF</a>
      <button id="darkModeBtn" class="dark-mode-button" title="Toggle dark mode"><i class="fas fa-moon"></i></button>
    </div>
  </header>

  <main class="cv-container">
    <aside class="sidebar">
      <div class="profile-image-section">
        <img src="assets/images/profile.png" alt="Profile Photo" class="profile-image">
      </div>

      <section class="profile-section">
        <h2>Profile</h2>
        <p class="summary">{summary}</p>
      </section>

      <section class="contact-section">
        <h2>Contact</h2>
        <ul class="contact-list">
          <li><i class="fas fa-envelope"></i> <a href="mailto:{email_href}">{email}</a></li>
          <li><i class="fas fa-phone"></i> <a href="tel:{phone_href}">{phone}</a></li>
          <li><i class="fas fa-map-marker-alt"></i> {location}</li>
        </ul>
        <div class="social-links">
          {social_links}
        </div>
      </section>

      <section class="skills-section">
        <h2>Skills</h2>
        <ul class="skills-list">
          {skills}
        </ul>
      </section>
    </aside>

    <article class="main-content">
"#;

static FOOTER_TEMPLATE: &str = r#"    </article>
  </main>

  <footer class="footer">
    <p>Generated on {generated}</p>
  </footer>

"#;

/// Client-side dark mode toggle, persisted in localStorage and defaulting
/// to dark. Appended raw; the braces here are JavaScript, not template
/// syntax.
static SCRIPT: &str = r#"  <script>
    // Dark mode toggle
    const darkModeBtn = document.getElementById('darkModeBtn');
    const darkModeIcon = darkModeBtn.querySelector('i');

    const isDarkMode = localStorage.getItem('darkMode') === null
      ? true
      : localStorage.getItem('darkMode') === "true";

    if (isDarkMode) {
      document.body.classList.add('dark-mode');
      darkModeIcon.classList.remove('fa-moon');
      darkModeIcon.classList.add('fa-sun');
    }

    darkModeBtn.addEventListener('click', () => {
      document.body.classList.toggle('dark-mode');
      const isDark = document.body.classList.contains('dark-mode');
      localStorage.setItem('darkMode', isDark);
      darkModeIcon.classList.toggle('fa-moon');
      darkModeIcon.classList.toggle('fa-sun');
    });
  </script>
</body>
</html>
"#;

#[derive(Serialize)]
struct HeaderContext {
    name: String,
    pdf_href: String,
    pdf_filename: String,
    summary: String,
    email_href: String,
    email: String,
    phone_href: String,
    phone: String,
    location: String,
    social_links: String,
    skills: String,
}

#[derive(Serialize)]
struct FooterContext {
    generated: String,
}

/// Generate the CV as a standalone HTML page.
pub struct HtmlGenerator {
    record: CvRecord,
    content: String,
    // Accepted for interface parity with the typeset variant; the web CV
    // is always attributed.
    #[allow(dead_code)]
    anonymous: bool,
}

impl HtmlGenerator {
    pub fn new(record: CvRecord, anonymous: bool) -> HtmlGenerator {
        HtmlGenerator {
            record,
            content: String::with_capacity(16 * 1024),
            anonymous,
        }
    }

    fn templates() -> TinyTemplate<'static> {
        let mut tt = TinyTemplate::new();
        // Context values arrive pre-escaped; the built-in HTML formatter
        // would escape them a second time.
        tt.set_default_formatter(&tinytemplate::format_unescaped);
        tt.add_template("header", HEADER_TEMPLATE)
            .expect("static header template must parse");
        tt.add_template("footer", FOOTER_TEMPLATE)
            .expect("static footer template must parse");
        tt
    }
}

impl Generator for HtmlGenerator {
    fn escape_text(&self, raw: &str) -> String {
        escape_html(raw)
    }

    /// Emit the document shell: head, header bar, and the sidebar with
    /// profile, contact, and skills. Leaves the main content column open
    /// for the remaining sections.
    fn generate_header(&mut self) {
        let personal = &self
            .record
            .personal;

        let social_links = personal
            .social
            .iter()
            .map(|link| {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener" class="social-link" title="{}"><i class="{}"></i></a>"#,
                    link.url,
                    escape_html(&link.name),
                    link.icon
                )
            })
            .collect::<String>();

        let skills = self
            .record
            .skills
            .iter()
            .map(|skill| format!("<li>{}</li>", escape_html(skill)))
            .collect::<String>();

        let artifact = output::artifact_name(&personal.name, false);
        let context = HeaderContext {
            name: escape_html(&personal.name),
            pdf_href: format!("output/{}", artifact.replace(' ', "%20")),
            pdf_filename: escape_html(&artifact),
            summary: escape_html(&personal.summary),
            email_href: personal
                .email
                .clone(),
            email: escape_html(&personal.email),
            phone_href: personal
                .phone
                .clone(),
            phone: escape_html(&personal.phone),
            location: escape_html(&personal.location),
            social_links,
            skills,
        };

        let rendered = Self::templates()
            .render("header", &context)
            .expect("static header template must render");
        self.content
            .push_str(&rendered);
    }

    /// The summary lives in the sidebar and is emitted with the header.
    fn generate_summary(&mut self) {}

    fn generate_experience(&mut self) {
        self.content
            .push_str(
                r#"      <section class="experience-section">
        <h2>Experience</h2>
        <div class="experience-list">
"#,
            );

        for job in &self
            .record
            .experience
        {
            let highlights = job
                .highlights
                .iter()
                .map(|highlight| format!("<li>{}</li>", escape_html(highlight)))
                .collect::<String>();

            self.content
                .push_str(&format!(
                    r#"        <div class="job-card">
          <div class="job-header">
            <div class="job-title"><i class="{icon}"></i> {title}</div>
          </div>
          <div class="job-meta">
            <p class="job-company">{company}, {location}</p>
            <span class="job-dates">{start} - {end}</span>
          </div>
          <ul class="job-highlights">
            {highlights}
          </ul>
        </div>
"#,
                    icon = job.icon,
                    title = escape_html(&job.title),
                    company = escape_html(&job.company),
                    location = escape_html(&job.location),
                    start = escape_html(&job.start_date),
                    end = escape_html(&job.end_date),
                    highlights = highlights
                ));
        }

        self.content
            .push_str("        </div>\n      </section>\n\n");
    }

    fn generate_education(&mut self) {
        self.content
            .push_str(
                r#"      <section class="education-section">
        <h2>Education</h2>
        <div class="education-list">
"#,
            );

        for entry in &self
            .record
            .education
        {
            let details = match &entry.details {
                Some(details) if !details.is_empty() => {
                    let items = details
                        .iter()
                        .map(|detail| {
                            format!(
                                "<li><strong>{}</strong>: {}</li>",
                                escape_html(&detail.subject),
                                escape_html(&detail.grade)
                            )
                        })
                        .collect::<String>();
                    format!("<ul class='education-details'>{}</ul>", items)
                }
                _ => String::new(),
            };

            self.content
                .push_str(&format!(
                    r#"        <div class="education-item">
          <div class="edu-degree">{degree}</div>
          <div class="edu-institution">{institution}</div>
          <div class="edu-years">{years}</div>
          {details}
        </div>
"#,
                    degree = escape_html(&entry.degree),
                    institution = escape_html(&entry.institution),
                    years = escape_html(&entry.years),
                    details = details
                ));
        }

        self.content
            .push_str("        </div>\n      </section>\n\n");
    }

    /// Skills live in the sidebar and are emitted with the header.
    fn generate_skills(&mut self) {}

    fn generate_publications(&mut self) {
        if self
            .record
            .publications
            .is_empty()
        {
            return;
        }

        self.content
            .push_str(
                r#"      <section class="publications-section">
        <h2>Publications</h2>
        <div class="publications-list">
"#,
            );

        for publication in &self
            .record
            .publications
        {
            let doi_link = match &publication.doi {
                Some(doi) => format!(
                    "DOI: <a href='https://doi.org/{}' class='pub-link' target='_blank'>{}</a>",
                    doi,
                    escape_html(doi)
                ),
                None => String::new(),
            };

            self.content
                .push_str(&format!(
                    "          <p><strong>{}</strong> ({}). {}. <em>{}</em>. {}</p>\n",
                    escape_html(&publication.authors),
                    publication.year,
                    escape_html(&publication.title),
                    escape_html(&publication.venue),
                    doi_link
                ));
        }

        self.content
            .push_str("        </div>\n      </section>\n\n");
    }

    fn generate_awards(&mut self) {
        if self
            .record
            .awards
            .is_empty()
        {
            return;
        }

        self.content
            .push_str(
                r#"      <section class="awards-section">
        <h2>Awards and Accreditations</h2>
        <div class="awards-list">
"#,
            );

        for award in &self
            .record
            .awards
        {
            self.content
                .push_str(&format!(
                    "          <p><strong>{}</strong> - {}</p>\n",
                    escape_html(&award.title),
                    escape_html(&award.description)
                ));
        }

        self.content
            .push_str("        </div>\n      </section>\n\n");
    }

    fn generate_hobbies(&mut self) {
        if self
            .record
            .hobbies
            .is_empty()
        {
            return;
        }

        let items = self
            .record
            .hobbies
            .iter()
            .map(|hobby| {
                format!(
                    r#"<li><i class="{}"></i><span>{}</span></li>"#,
                    hobby.icon,
                    escape_html(&hobby.name)
                )
            })
            .collect::<String>();

        self.content
            .push_str(&format!(
                r#"      <section class="hobbies-section">
        <h2>Interests</h2>
        <ul class="hobbies-list">
          {}
        </ul>
      </section>
"#,
                items
            ));
    }

    fn markup(&self) -> &str {
        &self.content
    }

    /// Close the document, append the dark mode script, and write the
    /// whole buffer to index.html, overwriting any previous page.
    fn write_output(&mut self) -> Result<PathBuf, OutputError> {
        let context = FooterContext {
            generated: chrono::Local::now()
                .format("%Y-%m-%d")
                .to_string(),
        };
        let rendered = Self::templates()
            .render("footer", &context)
            .expect("static footer template must render");

        self.content
            .push_str(&rendered);
        self.content
            .push_str(SCRIPT);

        let path = Path::new(HTML_PATH);
        output::write_file(path, &self.content)?;
        info!("HTML written to {}", path.display());

        Ok(path.to_path_buf())
    }
}

/// Replace the five HTML-significant characters with their entities. A
/// single pass over the input means entities just introduced are never
/// themselves re-escaped.
fn escape_html(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            _ => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod check {
    use super::*;

    #[test]
    fn escapes_all_five_significant_characters() {
        assert_eq!(
            escape_html(r#"<a href="x">it's &</a>"#),
            "&lt;a href=&quot;x&quot;&gt;it&#39;s &amp;&lt;/a&gt;"
        );
    }

    #[test]
    fn ampersand_is_escaped_exactly_once() {
        let result = escape_html("A & B");
        assert_eq!(result, "A &amp; B");
        assert!(!result.contains("&amp;amp;"));
    }

    #[test]
    fn entities_in_the_input_are_not_trusted() {
        // Input that already looks escaped still gets its ampersand
        // replaced; rendering must not guess at intent.
        assert_eq!(escape_html("&lt;"), "&amp;lt;");
    }

    #[test]
    fn plain_text_passes_through() {
        assert_eq!(escape_html("Ada Lovelace"), "Ada Lovelace");
    }
}
