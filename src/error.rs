use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeatingError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("データの取得先が指定されていません。`--data PATH|URL`、環境変数 SEATING_DATA_URL、または `seating config --set-data-url URL` で指定してください")]
    MissingDataSource,

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("データ取得エラー: {0}")]
    Fetch(String),

    #[error("共有リンクのベースURLが設定されていません。`--base URL` または `seating config --set-base-url URL` で指定してください")]
    MissingBaseUrl,

    #[error("{0}")]
    Common(#[from] seating_common::Error),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("入力エラー: {0}")]
    Prompt(String),
}

impl From<reqwest::Error> for SeatingError {
    fn from(e: reqwest::Error) -> Self {
        SeatingError::Fetch(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SeatingError>;
