use std::fmt::Write;

use shotdiff_core::Verdict;

use crate::summary::{DifferenceEntry, DifferenceKind, ReportSummary};

const REPORT_TITLE: &str = "Visual Diff Report";

const STYLE: &str = r"body { font-family: system-ui, sans-serif; margin: 2rem; color: #1f2328; }
.status { font-size: 1.5rem; font-weight: bold; padding: 1rem; border-radius: 6px; }
.status.passed { background: #dafbe1; }
.status.failed { background: #ffebe9; }
.images { display: flex; gap: 1rem; flex-wrap: wrap; }
figure { margin: 0; }
img { max-width: 100%; border: 1px solid #d0d7de; }
.empty { color: #656d76; }";

/// Renders the report as a standalone HTML page. The output depends only on
/// `summary`, so identical inputs render byte-identical pages.
#[must_use]
pub fn render(summary: &ReportSummary) -> String {
    let mut output = String::new();

    output.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    output.push_str("<meta charset=\"utf-8\">\n");
    let _ = writeln!(output, "<title>{REPORT_TITLE}</title>");
    let _ = writeln!(output, "<style>\n{STYLE}\n</style>");
    output.push_str("</head>\n<body>\n");
    let _ = writeln!(output, "<h1>{REPORT_TITLE}</h1>");

    format_status(&mut output, summary.verdict);
    format_counts(&mut output, summary);
    format_differences(&mut output, &summary.differences);
    format_name_list(&mut output, "identical", "Identical", &summary.identical);
    format_name_list(&mut output, "removed", "Removed", &summary.removed);
    format_name_list(&mut output, "added", "Added", &summary.added);

    output.push_str("</body>\n</html>\n");
    output
}

fn format_status(output: &mut String, verdict: Verdict) {
    let (class, marker) = match verdict {
        Verdict::Pass => ("passed", "\u{2705}"),
        Verdict::Fail => ("failed", "\u{274c}"),
    };
    let _ = writeln!(output, "<div class=\"status {class}\">{marker} {verdict}</div>");
}

fn format_counts(output: &mut String, summary: &ReportSummary) {
    output.push_str("<section class=\"summary\">\n<h2>Summary</h2>\n<ul>\n");
    let counts = [
        ("Total images", summary.total_images),
        ("With differences", summary.different_count),
        ("Identical", summary.identical_count),
        ("Removed", summary.removed_count),
        ("Added", summary.added_count),
    ];
    for (label, count) in counts {
        let _ = writeln!(output, "<li>{label}: {count}</li>");
    }
    output.push_str("</ul>\n</section>\n");
}

fn format_differences(output: &mut String, entries: &[DifferenceEntry]) {
    output.push_str("<section class=\"differences\">\n");
    let _ = writeln!(output, "<h2>With differences ({})</h2>", entries.len());

    if entries.is_empty() {
        output.push_str("<p class=\"empty\">None</p>\n");
    }

    for entry in entries {
        output.push_str("<article class=\"comparison\">\n");
        let _ = writeln!(output, "<h3>{}</h3>", escape(&entry.name));

        match &entry.kind {
            DifferenceKind::Pixels {
                percentage,
                diff_image,
            } => {
                let _ = writeln!(
                    output,
                    "<p class=\"diff-percentage\">Difference: {percentage:.2}%</p>"
                );
                output.push_str("<div class=\"images\">\n");
                format_figure(output, "Baseline", &entry.baseline_image);
                format_figure(output, "Diff", diff_image);
                format_figure(output, "Candidate", &entry.candidate_image);
                output.push_str("</div>\n");
            }
            DifferenceKind::Dimensions(mismatch) => {
                let _ = writeln!(
                    output,
                    "<p class=\"dimension-mismatch\">Dimension mismatch: baseline {}, candidate {}</p>",
                    mismatch.baseline, mismatch.candidate
                );
                output.push_str("<div class=\"images\">\n");
                format_figure(output, "Baseline", &entry.baseline_image);
                format_figure(output, "Candidate", &entry.candidate_image);
                output.push_str("</div>\n");
            }
        }

        output.push_str("</article>\n");
    }

    output.push_str("</section>\n");
}

fn format_figure(output: &mut String, caption: &str, file_name: &str) {
    let _ = writeln!(
        output,
        "<figure><img src=\"{}\" alt=\"{caption}\"><figcaption>{caption}</figcaption></figure>",
        urlencoding::encode(file_name)
    );
}

fn format_name_list(output: &mut String, class: &str, title: &str, names: &[String]) {
    let _ = writeln!(output, "<section class=\"{class}\">");
    let _ = writeln!(output, "<h2>{title} ({})</h2>", names.len());

    if names.is_empty() {
        output.push_str("<p class=\"empty\">None</p>\n");
    } else {
        output.push_str("<ul>\n");
        for name in names {
            let _ = writeln!(output, "<li>{}</li>", escape(name));
        }
        output.push_str("</ul>\n");
    }

    output.push_str("</section>\n");
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
