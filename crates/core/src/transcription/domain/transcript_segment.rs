/// A contiguous span of recognized speech with start/end times in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptSegment {
    pub start_time: f64,
    pub end_time: f64,
    pub text: String,
}

impl TranscriptSegment {
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Render the segment as one transcript line: `[start - end] text`,
    /// times with exactly two decimal places.
    pub fn format_line(&self) -> String {
        format!(
            "[{:.2} - {:.2}] {}",
            self.start_time, self.end_time, self.text
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fields() {
        let seg = TranscriptSegment {
            start_time: 1.0,
            end_time: 1.5,
            text: "hello".to_string(),
        };
        assert_eq!(seg.start_time, 1.0);
        assert_eq!(seg.end_time, 1.5);
        assert_eq!(seg.text, "hello");
    }

    #[test]
    fn test_duration() {
        let seg = TranscriptSegment {
            start_time: 2.0,
            end_time: 2.8,
            text: "test".to_string(),
        };
        assert_relative_eq!(seg.duration(), 0.8, epsilon = 0.001);
    }

    #[test]
    fn test_format_line_two_decimal_places() {
        let seg = TranscriptSegment {
            start_time: 0.0,
            end_time: 2.5,
            text: "hello".to_string(),
        };
        assert_eq!(seg.format_line(), "[0.00 - 2.50] hello");
    }

    #[test]
    fn test_format_line_rounds_to_centiseconds() {
        let seg = TranscriptSegment {
            start_time: 1.2345,
            end_time: 67.8999,
            text: "long one".to_string(),
        };
        assert_eq!(seg.format_line(), "[1.23 - 67.90] long one");
    }
}
