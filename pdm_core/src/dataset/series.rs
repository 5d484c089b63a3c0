use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub day: f64,
    pub value: f64,
}

/// Day-indexed numeric series. Order is kept exactly as given; day-ascending
/// input is assumed but not enforced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(points: Vec<SeriesPoint>) -> Self {
        Self { points }
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self {
            points: pairs
                .into_iter()
                .map(|(day, value)| SeriesPoint { day, value })
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &SeriesPoint> {
        self.points.iter()
    }

    pub fn days(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.day).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// `[day, value]` pairs for chart traces
    pub fn to_xy(&self) -> Vec<[f64; 2]> {
        self.points.iter().map(|p| [p.day, p.value]).collect()
    }
}

impl FromIterator<(f64, f64)> for Series {
    fn from_iter<T: IntoIterator<Item = (f64, f64)>>(iter: T) -> Self {
        Self::from_pairs(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_series_accessors_keep_order() {
        let s: Series = vec![(2.0, 0.5), (0.0, 0.1), (1.0, 0.3)].into_iter().collect();
        assert_eq!(s.len(), 3);
        assert_eq!(s.days(), vec![2.0, 0.0, 1.0]);
        assert_eq!(s.values(), vec![0.5, 0.1, 0.3]);
        assert_eq!(s.to_xy()[1], [0.0, 0.1]);
        assert!(Series::default().is_empty());
    }
}
