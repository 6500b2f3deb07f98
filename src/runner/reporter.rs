use crate::runner::types::{ConversionSummary, SkippedFixture};
use colored::Colorize;

pub struct ConversionReporter {
    verbose: bool,
}

impl ConversionReporter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    /// 格式化单个被跳过的 fixture
    pub fn format_skipped(skipped: &SkippedFixture) -> String {
        format!(
            " {} {} {}",
            "⊘".dimmed(),
            skipped.path.display(),
            format!("({})", skipped.reason).dimmed()
        )
    }

    /// 格式化汇总行
    pub fn format_summary(summary: &ConversionSummary) -> String {
        let converted = format!("{} converted", summary.converted);
        let skipped = format!("{} skipped", summary.skipped_count());

        let mut line = format!(
            "{} fixtures: {}, {}",
            summary.discovered,
            converted.green(),
            if summary.all_converted() {
                skipped.dimmed()
            } else {
                skipped.yellow()
            }
        );

        if let Some(ref output) = summary.output {
            line.push_str(&format!(" → {}", output.display().to_string().cyan()));
        }

        line
    }

    /// 打印汇总；verbose 模式下逐个列出被跳过的 fixture
    pub fn print_summary(&self, summary: &ConversionSummary) {
        if self.verbose {
            for skipped in &summary.skipped {
                println!("{}", Self::format_skipped(skipped));
            }
        }
        println!("{}", Self::format_summary(summary));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::FixtureError;
    use crate::parser::ParseError;
    use std::path::PathBuf;

    #[test]
    fn test_format_summary() {
        colored::control::set_override(false);

        let mut summary = ConversionSummary::new(3);
        summary.record_converted();
        summary.record_skipped(
            PathBuf::from("a.yaml"),
            FixtureError::MissingCurl {
                path: PathBuf::from("a.yaml"),
            },
        );
        summary.record_skipped(
            PathBuf::from("b.yaml"),
            ParseError::MissingHost {
                url: "http://".to_string(),
            },
        );
        summary.output = Some(PathBuf::from("output.json"));

        assert_eq!(
            ConversionReporter::format_summary(&summary),
            "3 fixtures: 1 converted, 2 skipped → output.json"
        );
        assert_eq!(
            ConversionReporter::format_skipped(&summary.skipped[0]),
            " ⊘ a.yaml (No 'curl' field in a.yaml)"
        );
        assert_eq!(
            ConversionReporter::format_skipped(&summary.skipped[1]),
            " ⊘ b.yaml (URL 'http://' has no hostname)"
        );
    }
}
