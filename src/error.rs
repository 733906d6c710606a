use std::path::PathBuf;

use thiserror::Error;

/// Everything that can stop a run, one variant per failure stage.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("failed to read image {path}")]
    ImageRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("image analysis request failed")]
    ServiceCall(#[source] anyhow::Error),

    #[error("failed to annotate {path}")]
    Annotation {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ReadError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ReadError::Config(_) => 2,
            ReadError::ImageRead { .. } => 3,
            ReadError::ServiceCall(_) => 4,
            ReadError::Annotation { .. } => 5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ReadError;

    #[test]
    fn exit_codes_are_distinct_per_kind() {
        let errors = [
            ReadError::Config("AI_SERVICE_KEY is not set".to_string()),
            ReadError::ImageRead {
                path: "images/Lincoln.jpg".into(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            },
            ReadError::ServiceCall(anyhow::anyhow!("boom")),
            ReadError::Annotation {
                path: "lines.jpg".into(),
                source: anyhow::anyhow!("boom"),
            },
        ];
        let mut codes = errors.iter().map(ReadError::exit_code).collect::<Vec<_>>();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
        assert!(codes.iter().all(|code| *code != 0));
    }
}
