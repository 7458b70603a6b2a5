use prometheus_client::metrics::histogram::Histogram;
use prometheus_client::metrics::{counter::Counter, family::Family};
use prometheus_client_derive_encode::{EncodeLabelSet, EncodeLabelValue};

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Method {
    Get,
    Post,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelValue)]
pub enum Status {
    Success,
    Error,
}

#[derive(Clone, Debug, Hash, PartialEq, Eq, EncodeLabelSet)]
pub struct Labels {
    pub method: Method,
    pub status: Status,
}

#[derive(Clone, Debug)]
pub struct Metrics {
    pub request_counter: Family<Labels, Counter>,
    pub request_duration: Family<Labels, Histogram>,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            request_counter: Family::default(),
            request_duration: Family::new_with_constructor(|| {
                Histogram::new(vec![
                    0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0,
                ])
            }),
        }
    }

    pub fn record(&self, method: Method, status: Status, duration_secs: f64) {
        let labels = Labels { method, status };
        self.request_counter.get_or_create(&labels).inc();
        self.request_duration
            .get_or_create(&labels)
            .observe(duration_secs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_counts_per_label_set() {
        let metrics = Metrics::new();

        metrics.record(Method::Get, Status::Success, 0.01);
        metrics.record(Method::Get, Status::Success, 0.02);
        metrics.record(Method::Post, Status::Error, 0.5);

        let get_ok = Labels {
            method: Method::Get,
            status: Status::Success,
        };
        let post_err = Labels {
            method: Method::Post,
            status: Status::Error,
        };
        let post_ok = Labels {
            method: Method::Post,
            status: Status::Success,
        };

        assert_eq!(metrics.request_counter.get_or_create(&get_ok).get(), 2);
        assert_eq!(metrics.request_counter.get_or_create(&post_err).get(), 1);
        assert_eq!(metrics.request_counter.get_or_create(&post_ok).get(), 0);
    }
}
