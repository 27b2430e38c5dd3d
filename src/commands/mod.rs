use crate::cli::{Cli, Command};
use clap::Parser;
use course_catalog::config::CatalogConfig;
use course_catalog::course::{load_courses, Course};
use std::path::PathBuf;

pub fn dispatch(cli: Cli) -> Result<(), String> {
    match cli.command {
        Command::Render(args) => render::run(args),
        Command::Categories(args) => categories::run(args),
        Command::Browse(args) => browse::run(args),
    }
}

/// コースデータと設定ファイルの指定（全コマンド共通）
#[derive(Debug, Parser)]
pub struct DataArgs {
    /// Course records (JSON array)
    #[arg(long, value_name = "FILE")]
    pub courses: PathBuf,

    /// Catalog settings (TOML). Defaults are used when omitted
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl DataArgs {
    /// コース一覧と設定を読み込む
    pub fn load(&self) -> Result<(Vec<Course>, CatalogConfig), String> {
        let courses = load_courses(&self.courses).map_err(|e| {
            format!("Failed to load courses from {}: {}", self.courses.display(), e)
        })?;
        let config = CatalogConfig::load(self.config.as_deref()).map_err(|e| e.to_string())?;
        Ok((courses, config))
    }
}

pub mod browse;
pub mod categories;
pub mod render;
