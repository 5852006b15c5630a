// ぷよぷよ盤面 消去シミュレータ（コマンドライン）

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use serde::Serialize;

use puyo_eliminator::application::{OutputFormat, RunMode, Simulator, SimulatorConfig};
use puyo_eliminator::domain::board::Board;
use puyo_eliminator::domain::chain::Combo;
use puyo_eliminator::domain::eliminate::Elimination;
use puyo_eliminator::logging;

const USAGE: &str = "使い方: puyo-eliminate <盤面.txt> [設定.json]";

/// 実行結果
#[derive(Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
enum Outcome {
    SinglePass(Elimination),
    Resolve(Combo),
}

#[derive(Serialize)]
struct Report {
    before: String,
    after: String,
    outcome: Outcome,
}

fn run(board: Board, mode: RunMode) -> Report {
    let before = board.to_text();
    let mut sim = Simulator::with_board(board);
    let outcome = match mode {
        RunMode::SinglePass => Outcome::SinglePass(sim.board_mut().eliminate()),
        RunMode::Resolve => Outcome::Resolve(sim.resolve()),
    };
    Report {
        before,
        after: sim.board().to_text(),
        outcome,
    }
}

fn print_text(report: &Report) {
    println!("== 消去前 ==");
    print!("{}", report.before);
    println!("== 消去後 ==");
    print!("{}", report.after);

    match &report.outcome {
        Outcome::SinglePass(e) => {
            println!(
                "消えたマス: {}  色数: {}  連結ボーナス: {}",
                e.cleared, e.colors, e.bonus
            );
        }
        Outcome::Resolve(combo) => {
            for step in &combo.steps {
                let e = &step.elimination;
                println!(
                    "{:2}連鎖: 消去{:2} (色ぷよ{:2}) 色数{} ボーナス{:2} 得点{}",
                    step.link, e.cleared, e.popped, e.colors, e.bonus, step.score
                );
            }
            println!(
                "連鎖数: {}  消したぷよ: {}  得点: {}",
                combo.length, combo.n_beans, combo.score
            );
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let (board_path, config_path) = match args.as_slice() {
        [board] => (PathBuf::from(board), None),
        [board, config] => (PathBuf::from(board), Some(PathBuf::from(config))),
        _ => return Err(anyhow!(USAGE)),
    };

    let config = match &config_path {
        Some(path) => SimulatorConfig::load(path)?,
        None => SimulatorConfig::default(),
    };

    // 詳細ログが無効ならログファイルには触れない
    if config.verbose {
        if let Some(log_path) = &config.log_file {
            logging::init_log_file(log_path)
                .with_context(|| format!("ログファイルを開けません: {}", log_path.display()))?;
        }
        logging::enable_verbose_logging();
    }

    let text = fs::read_to_string(&board_path)
        .with_context(|| format!("盤面ファイルを読めません: {}", board_path.display()))?;
    let board = Board::from_text(&text)
        .with_context(|| format!("盤面が不正です: {}", board_path.display()))?;

    let report = run(board, config.mode);
    match config.output {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}
