use crate::config::SKIP_SECTION_NAME;

/// Changelog sections in first-insertion order. Subjects keep the order in
/// which commits were processed. A missing section reads as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    entries: Vec<(String, Vec<String>)>,
}

impl Sections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a subject line to a section, creating the section on first use.
    pub fn push(&mut self, section: &str, subject: impl Into<String>) {
        let subject = subject.into();

        if let Some((_, lines)) =
            self.entries.iter_mut().find(|(name, _)| name == section)
        {
            lines.push(subject);
            return;
        }

        self.entries.push((section.to_string(), vec![subject]));
    }

    /// Lines filed under a section.
    pub fn get(&self, section: &str) -> &[String] {
        self.entries
            .iter()
            .find(|(name, _)| name == section)
            .map(|(_, lines)| lines.as_slice())
            .unwrap_or(&[])
    }

    /// Section names in insertion order, skip marker included.
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Render every section except the skip marker as a heading, a dashed
    /// underline of the same length and one `- ` line per subject.
    pub fn render(&self) -> String {
        let mut output = String::new();

        for (name, lines) in self.entries.iter() {
            if name == SKIP_SECTION_NAME {
                continue;
            }

            output.push_str(name);
            output.push('\n');
            output.push_str(&"-".repeat(name.chars().count()));
            output.push('\n');

            for line in lines {
                output.push_str(&format!("- {line}\n"));
            }

            output.push('\n');
        }

        output
    }
}
