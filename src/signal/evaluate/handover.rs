use ndarray::ArrayView1;
use serde::Serialize;

use crate::series::TimeSeries;
use crate::signal::EventBlock;

/// A change of serving cell between two consecutive samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellChange<T> {
    /// Index of the first sample on the new cell.
    pub index: usize,
    pub from: T,
    pub to: T,
}

/// A handover placed on the time axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HandoverEvent {
    pub time: f64,
    pub index: usize,
    pub from_cell: f64,
    pub to_cell: f64,
}

/// Event block that reports every sample whose cell id differs from the
/// one before it. There's no hysteresis: a ping-pong between two cells
/// yields one event per transition.
#[derive(Debug)]
pub struct HandoverDetector<T> {
    initial: Option<T>,
    current: Option<T>,

    /// Number of samples processed so far.
    processed: usize,
}

impl<T: PartialEq + Copy> EventBlock<T> for HandoverDetector<T> {
    type Event = CellChange<T>;

    fn reset(&mut self) {
        self.current = self.initial;
        self.processed = 0;
    }

    fn process(&mut self, input: ArrayView1<T>, mut obs: impl FnMut(CellChange<T>)) {
        for &cell in input {
            if let Some(from) = self.current {
                if from != cell {
                    obs(CellChange {
                        index: self.processed,
                        from,
                        to: cell,
                    });
                }
            }
            self.current = Some(cell);
            self.processed += 1
        }
    }
}

impl<T: PartialEq + Copy> HandoverDetector<T> {
    pub fn builder() -> HandoverDetectorBuilder<T> {
        HandoverDetectorBuilder::new()
    }
}

impl HandoverDetector<f64> {
    /// Run over a whole cell-id series from a clean state and place each
    /// change at the timestamp of its later sample.
    pub fn detect(&mut self, cells: &TimeSeries) -> Vec<HandoverEvent> {
        self.reset();
        let times = cells.timestamps();
        let mut events = Vec::new();
        self.process(cells.values().view(), |c| {
            events.push(HandoverEvent {
                time: times[c.index],
                index: c.index,
                from_cell: c.from,
                to_cell: c.to,
            })
        });
        events
    }
}

#[derive(Debug)]
pub struct HandoverDetectorBuilder<T> {
    initial_cell: Option<T>,
}

impl<T: PartialEq + Copy> Default for HandoverDetectorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + Copy> HandoverDetectorBuilder<T> {
    pub fn new() -> Self {
        Self { initial_cell: None }
    }

    /// Cell assumed to be serving before the first sample. Without it the
    /// first sample only sets the starting state.
    pub fn initial_cell(mut self, cell: Option<T>) -> Self {
        self.initial_cell = cell;
        self
    }

    pub fn build(self) -> HandoverDetector<T> {
        HandoverDetector {
            initial: self.initial_cell,
            current: self.initial_cell,
            processed: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    fn cells(time: &[f64], cell: &[f64]) -> TimeSeries {
        TimeSeries::new(time.to_vec().into(), cell.to_vec().into()).expect("aligned")
    }

    #[test]
    fn emits_at_later_sample() {
        let s = cells(&[0.0, 1.0, 2.0], &[1.0, 1.0, 2.0]);
        let events = HandoverDetector::<f64>::builder().build().detect(&s);
        assert_eq!(
            events,
            vec![HandoverEvent {
                time: 2.0,
                index: 2,
                from_cell: 1.0,
                to_cell: 2.0
            }]
        );
    }

    #[test]
    fn constant_series_has_no_events() {
        let s = cells(&[0.0, 1.0, 2.0, 3.0], &[3.0; 4]);
        assert!(HandoverDetector::<f64>::builder().build().detect(&s).is_empty());
    }

    #[test]
    fn short_series_have_no_events() {
        let mut d = HandoverDetector::<f64>::builder().build();
        assert!(d.detect(&cells(&[], &[])).is_empty());
        assert!(d.detect(&cells(&[5.0], &[2.0])).is_empty());
    }

    #[test]
    fn ping_pong_counts_every_transition() {
        let s = cells(
            &[0.0, 0.5, 1.0, 1.5, 2.0, 2.5],
            &[1.0, 2.0, 1.0, 2.0, 2.0, 3.0],
        );
        let times: Vec<f64> = HandoverDetector::<f64>::builder()
            .build()
            .detect(&s)
            .iter()
            .map(|e| e.time)
            .collect();
        assert_eq!(times, vec![0.5, 1.0, 1.5, 2.5]);
    }

    #[test]
    fn initial_cell_can_fire_on_first_sample() {
        let s = cells(&[0.0, 1.0], &[2.0, 2.0]);
        let events = HandoverDetector::<f64>::builder()
            .initial_cell(Some(1.0))
            .build()
            .detect(&s);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].time, 0.0);
        assert_eq!(events[0].from_cell, 1.0);
    }

    #[test]
    fn debug_shows_state() {
        let d = HandoverDetector::<f64>::builder().initial_cell(Some(1.0)).build();
        let text = format!("{d:?}");
        assert!(text.contains("processed: 0"));
        assert!(format!("{:?}", HandoverDetector::<f64>::builder()).contains("initial_cell"));
    }

    #[test]
    fn state_carries_across_chunks() {
        let mut d = HandoverDetector::<i32>::builder().build();
        let mut seen = Vec::new();
        d.process(array![1, 1].view(), |c| seen.push(c.index));
        d.process(array![2, 2, 1].view(), |c| seen.push(c.index));
        assert_eq!(seen, vec![2, 4]);
        d.reset();
        d.process(array![7].view(), |c| seen.push(c.index));
        assert_eq!(seen, vec![2, 4]);
    }
}
