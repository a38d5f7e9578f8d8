//! Output formatters for screening reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::ScreeningReport;
use colored::Colorize;

/// Trait for formatting screening reports
pub trait OutputFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colored, score-banded presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
    max_matches: usize,
}

/// JSON formatter for scripting and downstream persistence
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for shareable summaries
pub struct MarkdownFormatter;

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool, max_matches: usize) -> Self {
        Self {
            use_colors,
            detailed,
            max_matches,
        }
    }

    fn score_label(&self, score: u32) -> String {
        let label = format!("{}% match", score);
        if !self.use_colors {
            return label;
        }
        // Same bands the original UI used for its border colors.
        if score >= 70 {
            label.green().bold().to_string()
        } else if score >= 50 {
            label.yellow().to_string()
        } else {
            label.dimmed().to_string()
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let mut out = String::new();
        let c = &report.candidate;

        let header = format!("[{}] {} <{}>", report.avatar, c.name, c.email);
        if self.use_colors {
            out.push_str(&header.bold().to_string());
        } else {
            out.push_str(&header);
        }
        out.push('\n');
        out.push_str(&format!("  Source:     {}\n", report.source_file));
        out.push_str(&format!("  Phone:      {}\n", c.phone));
        out.push_str(&format!("  Location:   {}\n", c.location));
        out.push_str(&format!("  Experience: {} years\n", c.experience_years));
        out.push_str(&format!("  Education:  {}\n", c.education));

        if c.skills.is_empty() {
            out.push_str("  Skills:     none recognized\n");
        } else {
            out.push_str(&format!("  Skills:     {}\n", c.skills.join(", ")));
        }

        if report.matches.is_empty() {
            out.push_str("\n  No matching jobs found\n");
        } else {
            out.push_str(&format!(
                "\n  Matching jobs ({} found):\n",
                report.matches.len()
            ));
            for m in report.matches.iter().take(self.max_matches) {
                out.push_str(&format!(
                    "    {} at {} - {} ({}/{} skills)\n",
                    m.job_title,
                    m.company,
                    self.score_label(m.match_score),
                    m.matching_skill_count,
                    m.required_skill_count,
                ));
                if self.detailed && !m.matched_skill_names.is_empty() {
                    out.push_str(&format!(
                        "      matched: {}\n",
                        m.matched_skill_names.join(", ")
                    ));
                }
            }
            if report.matches.len() > self.max_matches {
                out.push_str(&format!(
                    "    ... and {} more\n",
                    report.matches.len() - self.max_matches
                ));
            }
        }

        if self.detailed && !report.near_miss_skills.is_empty() {
            out.push_str("\n  Possible misspelled skills:\n");
            for miss in &report.near_miss_skills {
                out.push_str(&format!(
                    "    '{}' looks like {} ({:.0}% similar)\n",
                    miss.found_text,
                    miss.skill,
                    miss.similarity * 100.0
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &ScreeningReport) -> Result<String> {
        let c = &report.candidate;
        let mut out = String::new();

        out.push_str(&format!("# {}\n\n", c.name));
        out.push_str(&format!("*Screened from `{}`*\n\n", report.source_file));
        out.push_str("| Field | Value |\n|---|---|\n");
        out.push_str(&format!("| Email | {} |\n", c.email));
        out.push_str(&format!("| Phone | {} |\n", c.phone));
        out.push_str(&format!("| Location | {} |\n", c.location));
        out.push_str(&format!("| Experience | {} years |\n", c.experience_years));
        out.push_str(&format!("| Education | {} |\n", c.education));
        out.push_str(&format!("| Skills | {} |\n", c.skills.join(", ")));

        out.push_str("\n## Job matches\n\n");
        if report.matches.is_empty() {
            out.push_str("No matching jobs found.\n");
        } else {
            out.push_str("| Job | Company | Score | Skills matched |\n|---|---|---|---|\n");
            for m in &report.matches {
                out.push_str(&format!(
                    "| {} | {} | {}% | {}/{} |\n",
                    m.job_title, m.company, m.match_score, m.matching_skill_count, m.required_skill_count
                ));
            }
        }

        Ok(out)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

/// Pick the formatter for a requested output format.
pub fn formatter_for(
    format: &OutputFormat,
    use_colors: bool,
    detailed: bool,
    max_matches: usize,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Console => Box::new(ConsoleFormatter::new(use_colors, detailed, max_matches)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::candidate::CandidateAttributes;
    use crate::processing::matcher::JobMatch;

    fn report() -> ScreeningReport {
        let candidate = CandidateAttributes {
            name: "John Doe".to_string(),
            email: "john.doe@email.com".to_string(),
            phone: "Not provided".to_string(),
            location: "Remote".to_string(),
            experience_years: 5,
            education: "BS Computer Science from MIT University".to_string(),
            skills: vec!["React".to_string(), "Node.js".to_string()],
        };
        let matches = vec![JobMatch {
            job_id: 1,
            job_title: "Frontend Engineer".to_string(),
            company: "Acme".to_string(),
            match_score: 67,
            matching_skill_count: 2,
            required_skill_count: 3,
            matched_skill_names: vec!["React".to_string(), "Node.js".to_string()],
        }];
        ScreeningReport::new("john.pdf".to_string(), candidate, matches, vec![])
    }

    #[test]
    fn test_console_format() {
        let formatter = ConsoleFormatter::new(false, false, 3);
        let out = formatter.format_report(&report()).unwrap();
        assert!(out.contains("[JD] John Doe <john.doe@email.com>"));
        assert!(out.contains("Frontend Engineer at Acme"));
        assert!(out.contains("67% match"));
        assert!(out.contains("(2/3 skills)"));
    }

    #[test]
    fn test_json_format_roundtrip() {
        let formatter = JsonFormatter::new(false);
        let out = formatter.format_report(&report()).unwrap();
        let parsed: ScreeningReport = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.candidate.name, "John Doe");
        assert_eq!(parsed.matches[0].match_score, 67);
    }

    #[test]
    fn test_markdown_format() {
        let formatter = MarkdownFormatter;
        let out = formatter.format_report(&report()).unwrap();
        assert!(out.starts_with("# John Doe"));
        assert!(out.contains("| Frontend Engineer | Acme | 67% | 2/3 |"));
    }

    #[test]
    fn test_formatter_for_dispatch() {
        assert_eq!(
            formatter_for(&OutputFormat::Json, false, false, 3).supports_format(),
            OutputFormat::Json
        );
        assert_eq!(
            formatter_for(&OutputFormat::Markdown, false, false, 3).supports_format(),
            OutputFormat::Markdown
        );
    }
}
