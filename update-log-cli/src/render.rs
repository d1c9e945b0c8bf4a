use anyhow::Result;
use colored::Colorize;
use std::io::Write;
use update_log::{CatalogIssue, Category, Changelog, ReleaseEntry};

pub fn write_console(out: &mut dyn Write, log: &Changelog) -> Result<()> {
    writeln!(out, "{}", "📜 Update Log".bright_cyan().bold())?;
    writeln!(out, "{}", "=============".cyan())?;

    if log.is_empty() {
        writeln!(out, "No releases recorded.")?;
        return Ok(());
    }

    for entry in log {
        writeln!(out)?;
        writeln!(out, "{}{}", entry_heading(entry).bold(), summary_badges(entry))?;
        for change in &entry.changes {
            let rgb = change.category().rgb();
            writeln!(
                out,
                "  {} {}",
                change.icon(),
                change.text.truecolor(rgb.r, rgb.g, rgb.b)
            )?;
        }
    }
    Ok(())
}

pub fn write_markdown(out: &mut dyn Write, log: &Changelog) -> Result<()> {
    writeln!(out, "# Update Log")?;
    for entry in log {
        writeln!(out)?;
        writeln!(out, "## {}", entry_heading(entry))?;
        if entry.changes.is_empty() {
            continue;
        }
        writeln!(out)?;
        for change in &entry.changes {
            writeln!(
                out,
                "- {} **{}**: {}",
                change.icon(),
                change.category().label(),
                change.text
            )?;
        }
    }
    Ok(())
}

pub fn write_json(out: &mut dyn Write, log: &Changelog) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, log)?;
    writeln!(out)?;
    Ok(())
}

pub fn write_audit_console(out: &mut dyn Write, issues: &[CatalogIssue]) -> Result<()> {
    writeln!(out, "{}", "🔍 Update Log Audit".bright_cyan().bold())?;
    writeln!(out, "{}", "===================".cyan())?;
    if issues.is_empty() {
        writeln!(out, "{}", "✅ No issues found".green())?;
        return Ok(());
    }
    for issue in issues {
        if issue.is_error() {
            writeln!(out, "  • {}", issue.to_string().red())?;
        } else {
            writeln!(out, "  ℹ {}", issue.to_string().yellow())?;
        }
    }
    writeln!(out, "{} issue(s) found", issues.len().to_string().red())?;
    Ok(())
}

pub fn write_audit_markdown(out: &mut dyn Write, issues: &[CatalogIssue]) -> Result<()> {
    writeln!(out, "# Update Log Audit\n")?;
    if issues.is_empty() {
        writeln!(out, "No issues found.")?;
    }
    for issue in issues {
        writeln!(out, "- {issue}")?;
    }
    Ok(())
}

pub fn write_audit_json(out: &mut dyn Write, issues: &[CatalogIssue]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, issues)?;
    writeln!(out)?;
    Ok(())
}

fn entry_heading(entry: &ReleaseEntry) -> String {
    format!("v{} ({})", entry.version, entry.date)
}

/// `  ✨1 🔧2` style tally; empty when the entry has no changes
fn summary_badges(entry: &ReleaseEntry) -> String {
    entry
        .category_counts()
        .non_zero()
        .map(|(category, count): (Category, usize)| format!("  {}{count}", category.icon()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use update_log::ChangeItem;

    fn sample() -> Changelog {
        Changelog::from_entries(vec![
            ReleaseEntry {
                version: "2.0.0".into(),
                date: "2025-06-01".into(),
                changes: vec![
                    ChangeItem::new("feature", "Co-op mode"),
                    ChangeItem::new("fix", "Stuck camera"),
                    ChangeItem::new("fix", "Audio pop"),
                ],
            },
            ReleaseEntry {
                version: "1.9.0".into(),
                date: "2025-05-01".into(),
                changes: vec![],
            },
        ])
    }

    fn render(f: fn(&mut dyn Write, &Changelog) -> Result<()>, log: &Changelog) -> String {
        colored::control::set_override(false);
        let mut buf = Vec::new();
        f(&mut buf, log).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn console_lists_changes_with_icons() {
        let text = render(write_console, &sample());
        assert!(text.contains("v2.0.0 (2025-06-01)  ✨1  🔧2"));
        assert!(text.contains("  ✨ Co-op mode"));
        assert!(text.contains("  🔧 Audio pop"));
        assert!(text.contains("v1.9.0 (2025-05-01)\n"));
    }

    #[test]
    fn console_reports_empty_log() {
        let text = render(write_console, &Changelog::empty());
        assert!(text.contains("No releases recorded."));
    }

    #[test]
    fn markdown_uses_headings_and_bullets() {
        let text = render(write_markdown, &sample());
        assert!(text.starts_with("# Update Log\n"));
        assert!(text.contains("## v2.0.0 (2025-06-01)\n\n- ✨ **New**: Co-op mode\n"));
        assert!(text.contains("- 🔧 **Fixes**: Stuck camera\n"));
        assert!(text.ends_with("## v1.9.0 (2025-05-01)\n"));
    }

    #[test]
    fn json_parses_back_to_the_same_log() {
        let log = sample();
        let text = render(write_json, &log);
        assert_eq!(Changelog::from_json(&text).unwrap(), log);
    }

    #[test]
    fn audit_output_lists_each_issue() {
        colored::control::set_override(false);
        let issues = vec![CatalogIssue::EmptyVersion { index: 4 }];
        let mut buf = Vec::new();
        write_audit_console(&mut buf, &issues).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("entry #4 has an empty version"));
        assert!(text.contains("1 issue(s) found"));

        let notice = vec![CatalogIssue::UnknownCategory {
            index: 0,
            version: "1.3.0".into(),
            change: 0,
            tag: "lore".into(),
        }];
        let mut buf = Vec::new();
        write_audit_console(&mut buf, &notice).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("  ℹ version 1.3.0 change #0"));

        let mut buf = Vec::new();
        write_audit_markdown(&mut buf, &[]).unwrap();
        assert!(String::from_utf8(buf).unwrap().contains("No issues found."));
    }
}
