use clap::{Parser, Subcommand};
use seating_common::MatchRule;

#[derive(Parser)]
#[command(name = "seating")]
#[command(about = "結婚式の席次検索ツール（名前からテーブルを探す）", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// イベントデータ（JSONファイルのパスまたは http(s) URL）
    #[arg(short, long, global = true)]
    pub data: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 名前でテーブルを検索（QUERY省略時は対話モード）
    Search {
        /// 検索する名前（姓または名）
        query: Option<String>,

        /// 照合ルール (contains/exact/word)
        #[arg(short, long)]
        rule: Option<MatchRule>,
    },

    /// イベント情報を表示
    Info,

    /// 検索結果ページの共有リンクを生成
    Link {
        /// 検索する名前
        #[arg(required = true)]
        query: String,

        /// ページのURL
        #[arg(short, long)]
        base: Option<String>,
    },

    /// 設定を表示/編集
    Config {
        /// イベントデータの取得先を設定
        #[arg(long)]
        set_data_url: Option<String>,

        /// 共有リンクのベースURLを設定
        #[arg(long)]
        set_base_url: Option<String>,

        /// 既定の照合ルールを設定 (contains/exact/word)
        #[arg(long)]
        set_rule: Option<MatchRule>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}
