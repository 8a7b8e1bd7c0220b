//! Property tests for the validation boundary of the noise analysis record.

use dtn_common::Error;
use dtn_config::{NoiseAnalysisConfig, NoiseAnalysisOverrides};
use proptest::prelude::*;

proptest! {
    #[test]
    fn rates_in_unit_interval_accepted(rate in 0.0f64..=1.0) {
        let config = NoiseAnalysisOverrides::default()
            .with_max_synch_noise_rate(rate)
            .build()
            .unwrap();
        prop_assert_eq!(config.max_synch_noise_rate(), rate);
    }

    #[test]
    fn rates_above_one_rejected(rate in 1.0f64..1e12) {
        prop_assume!(rate > 1.0);
        let err = NoiseAnalysisOverrides::default()
            .with_max_synch_noise_rate(rate)
            .build()
            .unwrap_err();
        let is_rate = matches!(err, Error::InvalidConfiguration { field: "maxSynchNoiseRate", .. });
        prop_assert!(is_rate);
    }

    #[test]
    fn non_positive_events_cert_rejected(n in i64::MIN..=0) {
        let err = NoiseAnalysisOverrides::default()
            .with_n_events_cert(n)
            .build()
            .unwrap_err();
        let is_cert = matches!(err, Error::InvalidConfiguration { field: "nEventsCert", .. });
        prop_assert!(is_cert);
    }

    #[test]
    fn positive_int32_events_cert_accepted(n in 1i64..=i64::from(i32::MAX)) {
        let config = NoiseAnalysisOverrides::default()
            .with_n_events_cert(n)
            .build()
            .unwrap();
        prop_assert_eq!(i64::from(config.n_events_cert()), n);
    }

    #[test]
    fn unset_fields_keep_defaults(noisy in 0i64..100_000, synch in any::<bool>()) {
        let config = NoiseAnalysisOverrides::default()
            .with_noisy_cell_def(noisy)
            .with_do_synch_noise(synch)
            .build()
            .unwrap();
        let default = NoiseAnalysisConfig::default();
        prop_assert_eq!(config.max_synch_noise_rate(), default.max_synch_noise_rate());
        prop_assert_eq!(config.n_events_cert(), default.n_events_cert());
    }
}
