// ==========================================
// 危险品包装标记系统 - 配置层
// ==========================================
// 职责: 从宿主提供的静态 JSON 配置加载相容性矩阵
// 红线: 配置错误携带文件路径上抛, 不做静默兜底
// ==========================================

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::info;

use crate::engine::compatibility::CompatibilityMatrix;

// ==========================================
// ConfigError - 配置加载错误
// ==========================================
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("读取配置文件失败: {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("解析配置文件失败: {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// 从 JSON 文件加载相容性矩阵
///
/// 文件格式: 外层类别代码 → 内层类别代码 → "true"/"false"
/// （incompatibilitytable.json 的原始格式, 缺失条目按相容处理）
pub fn load_compatibility_matrix(path: impl AsRef<Path>) -> Result<CompatibilityMatrix, ConfigError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let matrix = CompatibilityMatrix::from_json_str(&json).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "相容性矩阵加载完成");
    Ok(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_matrix_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "3": {{ "5.1": "false", "8": "true" }} }}"#).unwrap();

        let matrix = load_compatibility_matrix(file.path()).unwrap();
        assert!(!matrix.compatible("3", "5.1"));
        assert!(matrix.compatible("3", "8"));
        assert!(matrix.compatible("6.1", "3"));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = load_compatibility_matrix("/nonexistent/matrix.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/nonexistent/matrix.json"))
            }
            other => panic!("期望 Io 错误, 实际 {:?}", other),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = load_compatibility_matrix(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
