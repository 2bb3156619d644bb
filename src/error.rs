//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("节点不存在: {0}")]
    MissingNode(String),

    #[error("顶点不存在: {0}")]
    VertexNotFound(String),

    #[error("不允许自环边: {0}")]
    SelfLoop(String),

    #[error("图已存在: {0}")]
    GraphAlreadyExists(String),

    #[error("图不存在: {0}")]
    GraphNotFound(String),

    #[error("IO 错误: {0}")]
    IoError(#[from] std::io::Error),

    #[error("序列化错误: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::SerializationError(e.to_string())
    }
}

impl Error {
    /// 错误携带的可读信息（不含错误类别前缀）
    pub fn message(&self) -> String {
        match self {
            Error::MissingNode(msg)
            | Error::VertexNotFound(msg)
            | Error::SelfLoop(msg)
            | Error::GraphAlreadyExists(msg)
            | Error::GraphNotFound(msg)
            | Error::SerializationError(msg) => msg.clone(),
            Error::IoError(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_node_message() {
        let err = Error::MissingNode("Node not found".to_string());
        assert_eq!(err.message(), "Node not found");
        assert!(err.to_string().contains("Node not found"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing file");
        let err: Error = io.into();
        assert!(matches!(err, Error::IoError(_)));
        assert_eq!(err.message(), "missing file");
    }
}
