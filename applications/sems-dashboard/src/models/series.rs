use serde::{Deserialize, Serialize};

use crate::format::parse_timestamp;

/// Oldest points are dropped past this many
pub const MAX_SERIES_POINTS: usize = 720;

/// Single battery/solar reading for the chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySolarPoint {
    pub timestamp: String,
    #[serde(default)]
    pub battery_level: f64,
    #[serde(default)]
    pub solar_output: f64,
}

/// Payload of `battery_solar_update`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatterySolarBatch {
    pub data: Vec<BatterySolarPoint>,
}

/// Client-side time series fed by `battery_solar_update`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnergySeries {
    points: Vec<BatterySolarPoint>,
}

impl EnergySeries {
    /// Append a batch. The first batch is taken whole; later batches only
    /// contribute points strictly newer than the last one held.
    /// Returns how many points were added.
    pub fn append(&mut self, batch: Vec<BatterySolarPoint>) -> usize {
        let added = match self.points.last().map(|p| parse_timestamp(&p.timestamp)) {
            None => {
                let count = batch.len();
                self.points = batch;
                count
            }
            Some(last) => {
                let fresh: Vec<_> = batch
                    .into_iter()
                    .filter(|point| match (parse_timestamp(&point.timestamp), last) {
                        (Some(ts), Some(last)) => ts > last,
                        _ => false,
                    })
                    .collect();
                let count = fresh.len();
                self.points.extend(fresh);
                count
            }
        };

        if self.points.len() > MAX_SERIES_POINTS {
            let excess = self.points.len() - MAX_SERIES_POINTS;
            self.points.drain(..excess);
        }

        added
    }

    pub fn points(&self) -> &[BatterySolarPoint] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(ts: &str, battery: f64) -> BatterySolarPoint {
        BatterySolarPoint {
            timestamp: ts.to_string(),
            battery_level: battery,
            solar_output: 0.0,
        }
    }

    #[test]
    fn test_first_batch_taken_whole() {
        let mut series = EnergySeries::default();
        let added = series.append(vec![
            point("2025-03-01 10:00:00", 1.0),
            point("2025-03-01 09:00:00", 2.0),
        ]);

        assert_eq!(added, 2);
        assert_eq!(series.points().len(), 2);
    }

    #[test]
    fn test_only_newer_points_appended() {
        let mut series = EnergySeries::default();
        series.append(vec![point("2025-03-01 10:00:00", 1.0)]);

        let added = series.append(vec![
            point("2025-03-01 09:59:59", 2.0),
            point("2025-03-01 10:00:00", 3.0),
            point("2025-03-01 10:00:03", 4.0),
            point("bogus", 5.0),
        ]);

        assert_eq!(added, 1);
        let levels: Vec<_> = series.points().iter().map(|p| p.battery_level).collect();
        assert_eq!(levels, vec![1.0, 4.0]);
    }

    #[test]
    fn test_series_is_capped() {
        let mut series = EnergySeries::default();
        let batch = (0..MAX_SERIES_POINTS + 10)
            .map(|i| point(&format!("2025-03-01 00:{:02}:{:02}", i / 60 % 60, i % 60), i as f64))
            .collect();
        series.append(batch);

        assert_eq!(series.points().len(), MAX_SERIES_POINTS);
        assert_eq!(series.points()[0].battery_level, 10.0);
    }
}
