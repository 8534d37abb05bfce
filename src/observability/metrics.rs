use crate::error::InvalidRequest;
use crate::observability::labels::Labels;
use crate::verdict::Verdict;
use metrics::{counter, Counter};

const REASON: &str = "reason";

pub struct ValidationMetrics {
    validations: Counter,
    failures: Counter,
    format_rejections: Counter,
}

impl ValidationMetrics {
    pub fn new(labels: &Labels) -> Self {
        ValidationMetrics {
            validations: counter!("validation.count", labels.clone()),
            failures: counter!("validation.failed", labels.clone()),
            format_rejections: counter!("validation.format_rejected", labels.clone()),
        }
    }

    pub fn record(&self, verdict: Verdict, rejected_by_format: bool) {
        self.validations.increment(1);
        if verdict == Verdict::Failed {
            self.failures.increment(1);
        }
        if rejected_by_format {
            self.format_rejections.increment(1);
        }
    }
}

pub fn record_invalid_request(error: &InvalidRequest) {
    let reason = match error {
        InvalidRequest::UnknownKind(_) => "unknown_kind",
        InvalidRequest::UnknownRule(_) => "unknown_rule",
        InvalidRequest::MissingField(_) => "missing_field",
    };
    counter!(
        "validation.invalid_requests",
        Labels::new(&[(REASON, reason)])
    )
    .increment(1);
}
