use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bom-datasheet")]
#[command(about = "BOM部品表データシート照合・収集ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// データシートフォルダ（CONFIG.txtの設定より優先）
    #[arg(long, global = true)]
    pub database: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 照合・コピーからサマリー表示・手動補完まで一括実行
    Run {
        /// BOMファイル（.csv / .xlsx）
        #[arg(required = true)]
        bom: PathBuf,

        /// コピー先フォルダ
        #[arg(required = true)]
        dest: PathBuf,

        /// 照合レポートJSONの出力先（省略時は書き出さない）
        #[arg(short, long)]
        report: Option<PathBuf>,

        /// 手動補完の確認をせずに終了する
        #[arg(long)]
        no_reconcile: bool,
    },

    /// 照合とコピーのみ実行し、レポートを書き出す
    Match {
        /// BOMファイル（.csv / .xlsx）
        #[arg(required = true)]
        bom: PathBuf,

        /// コピー先フォルダ
        #[arg(required = true)]
        dest: PathBuf,

        /// レポート出力先（デフォルト: コピー先/match-report.json）
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// レポートの未検出部品を対話式で補完
    Reconcile {
        /// matchが書き出したレポートJSON
        #[arg(required = true)]
        report: PathBuf,
    },

    /// 設定を表示/編集
    Config {
        /// データシートフォルダを設定してCONFIG.txtへ保存
        #[arg(long)]
        set_database: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
