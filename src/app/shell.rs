use crate::core::ReviewClassifier;
use crate::utils::error::{Result, SentimentError};
use std::io::{BufRead, Write};
use std::sync::Arc;

pub const PROMPT: &str = "Enter a sample review:";

/// Line-oriented prompt loop that classifies ad-hoc reviews.
///
/// Stops at the first empty line or at end of input.
pub struct InteractiveShell<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> InteractiveShell<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Runs the loop and returns how many reviews were classified.
    pub fn run<C: ReviewClassifier + ?Sized>(&mut self, classifier: &C) -> std::io::Result<usize> {
        writeln!(self.output, "To exit, press enter at any time")?;
        let mut classified = 0;
        let mut line = String::new();

        loop {
            writeln!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let review = line.trim_end_matches(['\n', '\r']);
            if review.is_empty() {
                break;
            }

            let sentiment = classifier.classify_review(review);
            tracing::debug!("Query {:?} classified as {}", review, sentiment);
            writeln!(self.output, "{}", sentiment)?;
            classified += 1;
        }

        Ok(classified)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R, W> InteractiveShell<R, W>
where
    R: BufRead + Send + 'static,
    W: Write + Send + 'static,
{
    /// Runs the loop on a blocking worker so stdin reads stay off the async
    /// runtime. Returns the classified count and the output sink.
    pub async fn run_blocking<C>(mut self, classifier: Arc<C>) -> Result<(usize, W)>
    where
        C: ReviewClassifier + ?Sized + 'static,
    {
        let handle = tokio::task::spawn_blocking(move || {
            let classified = self.run(classifier.as_ref())?;
            Ok::<_, std::io::Error>((classified, self.output))
        });
        let (classified, output) = handle.await.map_err(|e| SentimentError::TaskError {
            message: e.to_string(),
        })??;
        Ok((classified, output))
    }
}
