// 実行設定のValue Objects

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 結果の出力形式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// 盤面と集計を人間向けに表示
    #[default]
    Text,
    /// 1つのJSONオブジェクト
    Json,
}

/// 実行モード
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunMode {
    /// 消去パスを1回だけ
    SinglePass,
    /// 連鎖が止まるまで
    #[default]
    Resolve,
}

/// シミュレータ実行設定
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    pub verbose: bool,
    pub log_file: Option<PathBuf>,
    pub output: OutputFormat,
    pub mode: RunMode,
}

impl SimulatorConfig {
    pub fn validate(&self) -> Result<()> {
        if self.verbose && self.log_file.is_none() {
            return Err(anyhow!("詳細ログを有効にするにはログファイルの指定が必要です"));
        }
        Ok(())
    }

    /// JSON文字列から読み込んで検証
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s).context("設定のJSONが不正です")?;
        config.validate()?;
        Ok(config)
    }

    /// JSONファイルから読み込んで検証
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("設定ファイルを読めません: {}", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = SimulatorConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.mode, RunMode::Resolve);
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn missing_fields_use_defaults() {
        let config = SimulatorConfig::from_json_str(r#"{"output": "json"}"#).unwrap();
        assert_eq!(config.output, OutputFormat::Json);
        assert_eq!(config.mode, RunMode::Resolve);
        assert!(!config.verbose);
    }

    #[test]
    fn verbose_requires_log_file() {
        assert!(SimulatorConfig::from_json_str(r#"{"verbose": true}"#).is_err());
        let config = SimulatorConfig::from_json_str(
            r#"{"verbose": true, "log_file": "run.log", "mode": "single_pass"}"#,
        )
        .unwrap();
        assert_eq!(config.log_file, Some(PathBuf::from("run.log")));
        assert_eq!(config.mode, RunMode::SinglePass);
    }

    #[test]
    fn rejects_unknown_enum_value() {
        assert!(SimulatorConfig::from_json_str(r#"{"output": "xml"}"#).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        assert!(SimulatorConfig::load(Path::new("/nonexistent/config.json")).is_err());
    }
}
