use ambar_core::Severity;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// エディタ診断風のテキスト
    #[default]
    Text,
    Table,
    Json,
    Jsonl,
    Yaml,
    /// 重大度ごとのハイライト範囲
    Ranges,
}

/// CLI で指定する重大度
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum SeverityArg {
    Low,
    Medium,
    High,
}

impl From<SeverityArg> for Severity {
    fn from(s: SeverityArg) -> Self {
        match s {
            SeverityArg::Low => Self::Low,
            SeverityArg::Medium => Self::Medium,
            SeverityArg::High => Self::High,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_arg_ordering_matches_core() {
        let args = [SeverityArg::Low, SeverityArg::Medium, SeverityArg::High];
        for pair in args.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(Severity::from(pair[0]) < Severity::from(pair[1]));
        }
    }

    #[test]
    fn test_value_enum_names() {
        assert_eq!(
            OutputFormat::from_str("ranges", false).unwrap(),
            OutputFormat::Ranges
        );
        assert_eq!(
            SeverityArg::from_str("medium", false).unwrap(),
            SeverityArg::Medium
        );
        assert!(OutputFormat::from_str("csv", false).is_err());
    }
}
