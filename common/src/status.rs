//! イベントデータ取得状態
//!
//! Idle → Loading → Ready | Rejected の一方向のみ。再試行はしない。

use crate::types::EventData;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready(EventData),
    Rejected(String),
}

impl LoadStatus {
    /// 取得を開始すべきか（Idleのときのみ）
    pub fn should_fetch(&self) -> bool {
        matches!(self, LoadStatus::Idle)
    }

    /// 読み込み中表示の対象（Idle/Loading）
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadStatus::Idle | LoadStatus::Loading)
    }

    /// Idle → Loading。開始した場合 true
    pub fn begin(&mut self) -> bool {
        if self.should_fetch() {
            *self = LoadStatus::Loading;
            true
        } else {
            false
        }
    }

    /// Loading → Ready/Rejected。Loading以外では無視する
    pub fn resolve(&mut self, result: Result<EventData, String>) {
        if matches!(self, LoadStatus::Loading) {
            *self = match result {
                Ok(data) => LoadStatus::Ready(data),
                Err(message) => LoadStatus::Rejected(message),
            };
        }
    }

    pub fn data(&self) -> Option<&EventData> {
        match self {
            LoadStatus::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            LoadStatus::Rejected(message) => Some(message),
            _ => None,
        }
    }
}
