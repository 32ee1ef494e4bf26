use bom_datasheet_rust::{cli, config, error, loader, matcher, reconciler, report};
use clap::Parser;
use cli::{Cli, Commands};
use config::Config;
use error::Result;
use matcher::types::{BomRow, MatchSummary, MissingEntry};
use report::MatchReport;
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            bom,
            dest,
            report: report_path,
            no_reconcile,
        } => {
            println!("📋 bom-datasheet - データシート収集\n");

            let database = resolve_database(cli.database.as_deref())?;
            let summary = run_pipeline(&bom, &dest, &database, cli.verbose)?;

            if let Some(path) = report_path {
                MatchReport::from_summary(summary.clone(), &bom, &database).save(&path)?;
                println!("✔ レポートを保存: {}", path.display());
            }

            if summary.missing_count() > 0 && !no_reconcile {
                if reconciler::confirm_opt_in(summary.missing_count())? {
                    reconcile_missing(&summary.missing, &dest, &database)?;
                } else {
                    println!("手動補完をスキップしました");
                }
            }

            println!("\n✅ 完了");
        }

        Commands::Match {
            bom,
            dest,
            report: report_path,
        } => {
            println!("📋 bom-datasheet - 照合のみ\n");

            let database = resolve_database(cli.database.as_deref())?;
            let summary = run_pipeline(&bom, &dest, &database, cli.verbose)?;

            let path = report_path
                .unwrap_or_else(|| dest.join(report::DEFAULT_REPORT_FILE_NAME));
            MatchReport::from_summary(summary, &bom, &database).save(&path)?;
            println!("✔ レポートを保存: {}", path.display());

            println!("\n✅ 完了");
        }

        Commands::Reconcile { report: report_path } => {
            println!("📋 bom-datasheet - 手動補完\n");

            let match_report = MatchReport::load(&report_path)?;
            let database = match cli.database {
                Some(path) => path,
                None => match_report.reference_folder.clone(),
            };
            let dest = match_report.summary.destination_folder.clone();

            if match_report.summary.missing_count() == 0 {
                println!("✓ 未検出の部品はありません");
                return Ok(());
            }

            println!("{}", report::render_summary(&match_report.summary));
            reconcile_missing(&match_report.summary.missing, &dest, &database)?;

            println!("\n✅ 完了");
        }

        Commands::Config { set_database, show } => {
            if let Some(folder) = set_database {
                Config::save(&folder)?;
                println!("✔ データシートフォルダを設定しました: {}", folder.display());
            }

            if show {
                let config_path = Config::config_path()?;
                println!("設定ファイル: {}", config_path.display());
                let config = Config::load()?;
                println!(
                    "データシートフォルダ: {} ({})",
                    config.datasheet_folder.display(),
                    if config.datasheet_folder.is_dir() {
                        "存在します"
                    } else {
                        "見つかりません"
                    }
                );
            }
        }
    }

    Ok(())
}

/// --database 指定があればそれを、なければCONFIG.txtの設定を使う
fn resolve_database(cli_override: Option<&Path>) -> Result<PathBuf> {
    match cli_override {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(Config::load()?.datasheet_folder),
    }
}

/// 読み込み → 照合・コピー → サマリー表示
fn run_pipeline(
    bom: &Path,
    dest: &Path,
    database: &Path,
    verbose: bool,
) -> Result<MatchSummary> {
    println!("[1/3] BOMを読み込み中...");
    let entries = loader::load_bom(bom)?;
    println!("✔ {}行を読み込み\n", entries.len());

    println!("[2/3] データシートを照合中...");
    let summary = matcher::process(&entries, database, dest, verbose)?;
    println!(
        "✔ 照合完了: 成功{} / 未検出{}\n",
        summary.success_count(),
        summary.missing_count()
    );

    println!("[3/3] サマリー\n");
    println!("{}", report::render_summary(&summary));

    Ok(summary)
}

/// 未検出エントリのうち補完できるものを対話式で処理する
fn reconcile_missing(
    missing: &[MissingEntry],
    dest: &Path,
    database: &Path,
) -> Result<()> {
    let rows: Vec<BomRow> = missing
        .iter()
        .filter_map(|entry| entry.reconcilable_row().cloned())
        .collect();

    let skipped = missing.len() - rows.len();
    if skipped > 0 {
        // スキーマエラーの行は検索キーを組み立てられない
        println!("⚠ データ不備の{}件は補完の対象外です", skipped);
    }

    if rows.is_empty() {
        println!("補完できる未検出部品はありません");
        return Ok(());
    }

    let outcome = reconciler::run_reconciliation(&rows, dest, database)?;

    if outcome.aborted {
        println!(
            "\n中止しました（補完済み{} / 残り{}）",
            outcome.resolved.len(),
            outcome.remaining.len()
        );
    } else {
        println!("\n✔ 補完完了: {}件", outcome.resolved.len());
    }

    Ok(())
}
