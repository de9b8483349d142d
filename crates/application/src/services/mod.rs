pub mod bandwidth_estimator;

pub use bandwidth_estimator::BandwidthEstimator;
