use crate::datasource::TimeUnit;
use crate::series::TimeSeries;
use crate::signal::HandoverEvent;

/// A series together with handover markers, both in seconds.
///
/// The series keeps its own native timestamps. Nothing is resampled or
/// interpolated: markers that came from another file are only placed on
/// the same time axis, so the pairing is visual, not point by point.
#[derive(Debug, Clone, PartialEq)]
pub struct Overlay {
    pub series: TimeSeries,
    pub markers: Vec<f64>,
}

/// Put `events`, detected on a series logged in `event_unit`, over
/// `series`, logged in `series_unit`. The two inputs may have any length
/// and sampling.
pub fn overlay(
    events: &[HandoverEvent],
    event_unit: TimeUnit,
    series: &TimeSeries,
    series_unit: TimeUnit,
) -> Overlay {
    let to_s = event_unit.seconds_per_unit();
    Overlay {
        series: series.rescale_time(series_unit.seconds_per_unit()),
        markers: events.iter().map(|e| e.time * to_s).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn event(time: f64) -> HandoverEvent {
        HandoverEvent {
            time,
            index: 0,
            from_cell: 1.0,
            to_cell: 2.0,
        }
    }

    #[test]
    fn keeps_native_sampling() {
        let tput = TimeSeries::new(array![0.0, 0.5, 1.0], array![5.0, 7.5, 6.0]).expect("aligned");
        let view = overlay(
            &[event(0.25), event(0.75)],
            TimeUnit::Seconds,
            &tput,
            TimeUnit::Seconds,
        );
        assert_eq!(view.series, tput);
        assert_eq!(view.markers, vec![0.25, 0.75]);
    }

    #[test]
    fn brings_both_sides_to_seconds() {
        let tput = TimeSeries::new(array![0.0, 2000.0], array![1.0, 2.0]).expect("aligned");
        let view = overlay(&[event(1.0)], TimeUnit::Seconds, &tput, TimeUnit::Milliseconds);
        assert_eq!(view.series.timestamps(), &array![0.0, 2.0]);
        assert_eq!(view.markers, vec![1.0]);

        let view = overlay(&[event(1500.0)], TimeUnit::Milliseconds, &tput, TimeUnit::Seconds);
        assert_eq!(view.markers, vec![1.5]);
        assert_eq!(view.series.timestamps(), &array![0.0, 2000.0]);
    }
}
