use crate::core::{CorpusLoader, LabeledCorpus, Sentiment};
use crate::domain::model::MalformedLine;
use crate::utils::error::{Result, SentimentError};
use async_trait::async_trait;
use std::path::PathBuf;

/// Reads label-tagged review files from the local filesystem.
///
/// Each line holds the review text, one separator character and a label:
/// `1` for positive, `0` for negative.
#[derive(Debug, Clone)]
pub struct FileCorpusLoader {
    base_path: PathBuf,
}

impl FileCorpusLoader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Default for FileCorpusLoader {
    fn default() -> Self {
        Self::new(".")
    }
}

#[async_trait]
impl CorpusLoader for FileCorpusLoader {
    async fn load(&self, source: &str) -> Result<LabeledCorpus> {
        let full_path = self.base_path.join(source);
        tracing::debug!("Reading corpus from {}", full_path.display());
        let content = tokio::fs::read(&full_path).await?;
        Ok(parse_corpus_bytes(&content))
    }
}

/// Splits file content into positive and negative reviews.
///
/// Malformed lines are logged and collected in `skipped`; blank lines are
/// ignored.
pub fn parse_corpus(content: &str) -> LabeledCorpus {
    parse_corpus_bytes(content.as_bytes())
}

/// Same as [`parse_corpus`] for raw file bytes. A line that is not valid
/// UTF-8 is skipped like any other malformed line.
pub fn parse_corpus_bytes(content: &[u8]) -> LabeledCorpus {
    let mut corpus = LabeledCorpus::default();

    for (index, raw) in content.split(|&b| b == b'\n').enumerate() {
        let line_number = index + 1;
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let line = match std::str::from_utf8(raw) {
            Ok(line) => line,
            Err(e) => {
                tracing::warn!("⚠️ Line {} is not valid UTF-8: {}", line_number, e);
                corpus.skipped.push(MalformedLine {
                    line_number,
                    content: String::from_utf8_lossy(raw).into_owned(),
                });
                continue;
            }
        };
        match parse_labeled_line(line, line_number) {
            Ok(Some((Sentiment::Positive, text))) => corpus.positive.push(text),
            Ok(Some((Sentiment::Negative, text))) => corpus.negative.push(text),
            Ok(None) => tracing::debug!("Skipping blank line {}", line_number),
            Err(e) => {
                tracing::warn!("⚠️ {}", e);
                corpus.skipped.push(MalformedLine {
                    line_number,
                    content: line.to_string(),
                });
            }
        }
    }

    corpus
}

/// Parses one line into its label and review text. Returns `Ok(None)` for a
/// blank line.
pub fn parse_labeled_line(line: &str, line_number: usize) -> Result<Option<(Sentiment, String)>> {
    let line = line.trim_end();
    if line.is_empty() {
        return Ok(None);
    }

    let malformed = || SentimentError::MalformedInput {
        line_number,
        content: line.to_string(),
    };

    let mut chars = line.char_indices().rev();
    let (_, label) = chars.next().ok_or_else(malformed)?;
    let sentiment = match label {
        '1' => Sentiment::Positive,
        '0' => Sentiment::Negative,
        _ => return Err(malformed()),
    };
    // the separator sits right before the label
    let (separator_at, _) = chars.next().ok_or_else(malformed)?;

    Ok(Some((sentiment, line[..separator_at].to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labeled_line() {
        assert_eq!(
            parse_labeled_line("So there is no way for me to plug it in.\t0", 1).unwrap(),
            Some((
                Sentiment::Negative,
                "So there is no way for me to plug it in.".to_string()
            ))
        );
        assert_eq!(
            parse_labeled_line("Great for the jawbone.  1\r", 2).unwrap(),
            Some((Sentiment::Positive, "Great for the jawbone. ".to_string()))
        );
    }

    #[test]
    fn test_parse_labeled_line_blank() {
        assert_eq!(parse_labeled_line("", 1).unwrap(), None);
        assert_eq!(parse_labeled_line("   \t", 1).unwrap(), None);
    }

    #[test]
    fn test_parse_labeled_line_malformed() {
        for line in ["no label at all", "1", "rated 5", "ok\t2"] {
            match parse_labeled_line(line, 7) {
                Err(SentimentError::MalformedInput { line_number, .. }) => {
                    assert_eq!(line_number, 7)
                }
                other => panic!("expected malformed input for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_parse_corpus_skips_malformed_lines() {
        let content = "Loved it\t1\nWaste of money\t0\nmissing label\n\nWorks fine\t1\n";
        let corpus = parse_corpus(content);
        assert_eq!(corpus.positive, vec!["Loved it", "Works fine"]);
        assert_eq!(corpus.negative, vec!["Waste of money"]);
        assert_eq!(
            corpus.skipped,
            vec![MalformedLine {
                line_number: 3,
                content: "missing label".to_string()
            }]
        );
    }

    #[test]
    fn test_parse_corpus_handles_crlf() {
        let corpus = parse_corpus("Nice\t1\r\nAwful\t0\r\n");
        assert_eq!(corpus.positive, vec!["Nice"]);
        assert_eq!(corpus.negative, vec!["Awful"]);
        assert!(corpus.skipped.is_empty());
    }

    #[tokio::test]
    async fn test_file_loader_reads_relative_to_base_path() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(dir.path().join("TRAINING.txt"), "Good\t1\nBad\t0\n")
            .await
            .unwrap();

        let loader = FileCorpusLoader::new(dir.path());
        let corpus = loader.load("TRAINING.txt").await.unwrap();
        assert_eq!(corpus.len(), 2);

        let missing = loader.load("MISSING.txt").await;
        assert!(matches!(missing, Err(SentimentError::IoError(_))));
    }

    #[tokio::test]
    async fn test_file_loader_skips_invalid_utf8_line() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::write(
            dir.path().join("TRAINING.txt"),
            b"Good phone\t1\nBad \xff battery\t0\nGreat\t1\n",
        )
        .await
        .unwrap();

        let loader = FileCorpusLoader::new(dir.path());
        let corpus = loader.load("TRAINING.txt").await.unwrap();
        assert_eq!(corpus.positive, vec!["Good phone", "Great"]);
        assert!(corpus.negative.is_empty());
        assert_eq!(corpus.skipped.len(), 1);
        assert_eq!(corpus.skipped[0].line_number, 2);
        assert_eq!(corpus.skipped[0].content, "Bad \u{FFFD} battery\t0");
    }
}
