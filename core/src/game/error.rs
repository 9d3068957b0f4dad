use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("資源が不足しています ({resource}): 必要 {required} に対して現在 {available}")]
    InsufficientResources {
        resource: &'static str,
        required: i32,
        available: i32,
    },
    #[error("対象の勢力が無効です: {0}")]
    InvalidTarget(String),
    #[error("{0}")]
    IneligibleAction(String),
    #[error("ゲームは既に終了しています")]
    GameFinished,
}
