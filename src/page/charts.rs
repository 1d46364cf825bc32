//! Chart instances
//!
//! Charts are created once during widget initialization and updated in place.

use crate::consts::dashboard_consts::{CHART_LABELS, elements};
use std::collections::BTreeMap;
use strum::{Display, EnumIter, IntoEnumIterator};

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum ChartKind {
    Activity,
    VideoDistribution,
}

impl ChartKind {
    pub fn element_id(&self) -> &'static str {
        match self {
            ChartKind::Activity => elements::ACTIVITY_CHART,
            ChartKind::VideoDistribution => elements::VIDEO_DISTRIBUTION_CHART,
        }
    }
}

/// One chart with a single dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
    /// Bumped on every redraw request.
    pub revision: u64,
}

impl Chart {
    fn new() -> Self {
        Self {
            labels: CHART_LABELS.iter().map(|label| label.to_string()).collect(),
            data: vec![0; CHART_LABELS.len()],
            revision: 0,
        }
    }

    /// Replace the dataset and request a redraw.
    pub fn replace_data(&mut self, data: Vec<u64>) {
        self.data = data;
        self.revision += 1;
    }
}

#[derive(Debug, Default)]
pub struct ChartSet {
    charts: BTreeMap<ChartKind, Chart>,
}

impl ChartSet {
    /// Create a chart for every kind whose canvas is present.
    pub fn init(present: impl Fn(ChartKind) -> bool) -> Self {
        let charts = ChartKind::iter()
            .filter(|kind| present(*kind))
            .map(|kind| (kind, Chart::new()))
            .collect();
        Self { charts }
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, kind: ChartKind) -> Option<&Chart> {
        self.charts.get(&kind)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChartKind, &Chart)> {
        self.charts.iter()
    }

    /// Feed the same series to every chart. Returns false when none exist.
    pub fn update_all(&mut self, series: &[u64]) -> bool {
        for chart in self.charts.values_mut() {
            chart.replace_data(series.to_vec());
        }
        !self.charts.is_empty()
    }

    pub fn dispose(&mut self) {
        self.charts.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_skips_missing_canvases() {
        let set = ChartSet::init(|kind| kind == ChartKind::Activity);
        assert!(set.get(ChartKind::Activity).is_some());
        assert!(set.get(ChartKind::VideoDistribution).is_none());
    }

    #[test]
    fn test_update_all_bumps_revision() {
        let mut set = ChartSet::init(|_| true);
        assert!(set.update_all(&[3, 10, 42]));
        for (_, chart) in set.iter() {
            assert_eq!(chart.data, vec![3, 10, 42]);
            assert_eq!(chart.revision, 1);
            assert_eq!(chart.labels.len(), 3);
        }
    }

    #[test]
    fn test_update_without_charts_is_noop() {
        let mut set = ChartSet::init(|_| false);
        assert!(!set.update_all(&[1, 2, 3]));
        assert!(set.is_empty());
    }

    #[test]
    fn test_dispose_releases_charts() {
        let mut set = ChartSet::init(|_| true);
        set.dispose();
        assert!(set.is_empty());
    }
}
