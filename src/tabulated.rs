// One dimensional tabulated functions decoded from TAB1 records
//
// A TAB1 record partitions one shared grid into contiguous regions, each with
// its own interpolation law. Region `r` ends at the 1-based point count
// NBT[r]; adjacent regions share their boundary point.

use serde::{Deserialize, Serialize};
use std::convert::TryFrom;

use crate::config::Config;
use crate::error::{check_finite, check_strictly_increasing, DataFormatError, Result};
use crate::interpolation::Interpolation;
use crate::record::Record;
use crate::utilities::find_interval;

/// Evaluate a table whose bracket `k` uses the law `law_of(k)`.
#[inline]
fn evaluate_table<F>(x: &[f64], y: &[f64], law_of: F, xq: f64) -> f64
where
    F: Fn(usize) -> Interpolation,
{
    let last = x.len() - 1;
    if xq <= x[0] {
        return y[0];
    }
    if xq >= x[last] {
        return y[last];
    }
    let k = find_interval(x, xq);
    // grid hits never go through the law, which may be NaN at a bracket end
    if xq == x[k] {
        return y[k];
    }
    law_of(k).interpolate(xq, x[k], y[k], x[k + 1], y[k + 1])
}

/// Integrate a table over `[a, b]`, extending it flat outside its grid.
fn integrate_table<F>(x: &[f64], y: &[f64], law_of: F, a: f64, b: f64) -> f64
where
    F: Fn(usize) -> Interpolation,
{
    if a > b {
        return -integrate_table(x, y, law_of, b, a);
    }
    let last = x.len() - 1;
    let mut sum = 0.0;

    if a < x[0] {
        sum += y[0] * (b.min(x[0]) - a);
    }
    if b > x[last] {
        sum += y[last] * (b - a.max(x[last]));
    }

    let lo = a.max(x[0]);
    let hi = b.min(x[last]);
    if lo < hi {
        for k in find_interval(x, lo)..=find_interval(x, hi) {
            let xa = lo.max(x[k]);
            let xb = hi.min(x[k + 1]);
            sum += law_of(k).integrate(xa, xb, x[k], y[k], x[k + 1], y[k + 1]);
        }
    }
    sum
}

fn check_grid(x: &[f64], y: &[f64]) -> Result<()> {
    if x.len() != y.len() {
        return Err(DataFormatError::LengthMismatch {
            what: "dependent values",
            expected: x.len(),
            found: y.len(),
        });
    }
    if x.len() < 2 {
        return Err(DataFormatError::TooFewPoints {
            required: 2,
            found: x.len(),
        });
    }
    check_strictly_increasing("grid", x)?;
    check_finite("dependent values", y)
}

fn warn_on_log_domain(law: Interpolation, x: &[f64], y: &[f64]) {
    let log_x = matches!(law, Interpolation::LinLog | Interpolation::LogLog);
    let log_y = matches!(law, Interpolation::LogLin | Interpolation::LogLog);
    if (log_x && x.iter().any(|&v| v <= 0.0)) || (log_y && y.iter().any(|&v| v <= 0.0)) {
        log::warn!(
            "{} interpolation over non-positive data will evaluate to NaN inside the affected intervals",
            law
        );
    }
}

/// A table with a single interpolation law over its whole grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RegionData")]
pub struct Region1D {
    x: Vec<f64>,
    y: Vec<f64>,
    interpolation: Interpolation,
}

#[derive(Deserialize)]
struct RegionData {
    x: Vec<f64>,
    y: Vec<f64>,
    interpolation: Interpolation,
}

impl TryFrom<RegionData> for Region1D {
    type Error = DataFormatError;

    fn try_from(data: RegionData) -> Result<Self> {
        Region1D::new(data.x, data.y, data.interpolation)
    }
}

impl Region1D {
    /// Build a single region table.
    ///
    /// Fails if the grid has fewer than two points, is not strictly
    /// increasing, or `y` has a different length than `x`.
    pub fn new(x: Vec<f64>, y: Vec<f64>, interpolation: Interpolation) -> Result<Self> {
        check_grid(&x, &y)?;
        warn_on_log_domain(interpolation, &x, &y);
        Ok(Self { x, y, interpolation })
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        let law = self.interpolation;
        evaluate_table(&self.x, &self.y, |_| law, x)
    }

    pub fn integrate(&self, x_low: f64, x_high: f64) -> f64 {
        let law = self.interpolation;
        integrate_table(&self.x, &self.y, |_| law, x_low, x_high)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }
}

/// A table split into several regions, each with its own law.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MultiRegionData")]
pub struct MultiRegion1D {
    breakpoints: Vec<u32>,
    interpolation: Vec<Interpolation>,
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Deserialize)]
struct MultiRegionData {
    breakpoints: Vec<u32>,
    interpolation: Vec<Interpolation>,
    x: Vec<f64>,
    y: Vec<f64>,
}

impl TryFrom<MultiRegionData> for MultiRegion1D {
    type Error = DataFormatError;

    fn try_from(data: MultiRegionData) -> Result<Self> {
        MultiRegion1D::new(data.breakpoints, data.interpolation, data.x, data.y)
    }
}

impl MultiRegion1D {
    /// Build a multi region table from NBT/INT arrays and the shared grid.
    pub fn new(
        breakpoints: Vec<u32>,
        interpolation: Vec<Interpolation>,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<Self> {
        check_grid(&x, &y)?;
        if breakpoints.is_empty() {
            return Err(DataFormatError::InvalidBreakpoints(
                "at least one region is required".to_string(),
            ));
        }
        if interpolation.len() != breakpoints.len() {
            return Err(DataFormatError::LengthMismatch {
                what: "interpolation laws",
                expected: breakpoints.len(),
                found: interpolation.len(),
            });
        }
        if breakpoints[0] < 2 {
            return Err(DataFormatError::InvalidBreakpoints(format!(
                "first region ends at point {}, a region needs at least 2 points",
                breakpoints[0]
            )));
        }
        if let Some(r) = breakpoints.windows(2).position(|w| w[1] <= w[0]) {
            return Err(DataFormatError::InvalidBreakpoints(format!(
                "breakpoints are not strictly increasing at region {}",
                r + 1
            )));
        }
        let last = breakpoints[breakpoints.len() - 1] as usize;
        if last != x.len() {
            return Err(DataFormatError::InvalidBreakpoints(format!(
                "last region ends at point {} but the grid has {} points",
                last,
                x.len()
            )));
        }
        for (r, &law) in interpolation.iter().enumerate() {
            let start = if r == 0 { 0 } else { breakpoints[r - 1] as usize - 1 };
            let end = breakpoints[r] as usize;
            warn_on_log_domain(law, &x[start..end], &y[start..end]);
        }
        Ok(Self {
            breakpoints,
            interpolation,
            x,
            y,
        })
    }

    /// Law of the region owning bracket `[x[k], x[k+1]]`.
    #[inline]
    fn law_of(&self, k: usize) -> Interpolation {
        // first region whose 1-based end point lies past k+1
        let r = self.breakpoints.partition_point(|&b| b as usize <= k + 1);
        self.interpolation[r.min(self.interpolation.len() - 1)]
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        evaluate_table(&self.x, &self.y, |k| self.law_of(k), x)
    }

    pub fn integrate(&self, x_low: f64, x_high: f64) -> f64 {
        integrate_table(&self.x, &self.y, |k| self.law_of(k), x_low, x_high)
    }

    pub fn breakpoints(&self) -> &[u32] {
        &self.breakpoints
    }

    pub fn interpolation(&self) -> &[Interpolation] {
        &self.interpolation
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn min_x(&self) -> f64 {
        self.x[0]
    }

    pub fn max_x(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// The single-law segments making up this table.
    pub fn regions(&self) -> Vec<Region1D> {
        let mut start = 0usize;
        self.breakpoints
            .iter()
            .zip(&self.interpolation)
            .map(|(&end, &law)| {
                let end = end as usize;
                let region = Region1D {
                    x: self.x[start..end].to_vec(),
                    y: self.y[start..end].to_vec(),
                    interpolation: law,
                };
                start = end - 1;
                region
            })
            .collect()
    }
}

/// A tabulated function of one variable.
///
/// The variant is fixed when the table is decoded: a record with a single
/// region yields [`Tabulated1D::Region`], anything else
/// [`Tabulated1D::MultiRegion`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Tabulated1D {
    Region(Region1D),
    MultiRegion(MultiRegion1D),
}

impl From<Region1D> for Tabulated1D {
    fn from(region: Region1D) -> Self {
        Tabulated1D::Region(region)
    }
}

impl From<MultiRegion1D> for Tabulated1D {
    fn from(table: MultiRegion1D) -> Self {
        Tabulated1D::MultiRegion(table)
    }
}

impl Tabulated1D {
    /// Build a table from NBT/INT arrays and the grid.
    ///
    /// Empty `breakpoints` and `interpolation` mean one implicit lin-lin
    /// region over all points.
    pub fn new(
        breakpoints: Vec<u32>,
        interpolation: Vec<Interpolation>,
        x: Vec<f64>,
        y: Vec<f64>,
    ) -> Result<Self> {
        if breakpoints.is_empty() && interpolation.is_empty() {
            return Region1D::new(x, y, Interpolation::LinLin).map(Tabulated1D::Region);
        }
        if breakpoints.len() == 1 && interpolation.len() == 1 {
            if breakpoints[0] as usize != x.len() {
                return Err(DataFormatError::InvalidBreakpoints(format!(
                    "single region ends at point {} but the grid has {} points",
                    breakpoints[0],
                    x.len()
                )));
            }
            return Region1D::new(x, y, interpolation[0]).map(Tabulated1D::Region);
        }
        MultiRegion1D::new(breakpoints, interpolation, x, y).map(Tabulated1D::MultiRegion)
    }

    /// Decode the TAB1 table starting at record offset `i`, converting the
    /// grid with the global [`Config`].
    pub fn from_record<R: Record + ?Sized>(record: &R, i: usize) -> Result<Self> {
        Self::from_record_with_config(record, i, &Config::snapshot())
    }

    pub fn from_record_with_config<R: Record + ?Sized>(
        record: &R,
        i: usize,
        config: &Config,
    ) -> Result<Self> {
        let mut tab = Tab1Record::read(record, i)?;
        tab.scale_x(config.energy_scale);
        tab.into_table()
    }

    #[inline]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self {
            Tabulated1D::Region(t) => t.evaluate(x),
            Tabulated1D::MultiRegion(t) => t.evaluate(x),
        }
    }

    /// Integral over `[x_low, x_high]`; the table is extended flat outside
    /// its grid, matching [`Tabulated1D::evaluate`].
    pub fn integrate(&self, x_low: f64, x_high: f64) -> f64 {
        match self {
            Tabulated1D::Region(t) => t.integrate(x_low, x_high),
            Tabulated1D::MultiRegion(t) => t.integrate(x_low, x_high),
        }
    }

    pub fn x(&self) -> &[f64] {
        match self {
            Tabulated1D::Region(t) => t.x(),
            Tabulated1D::MultiRegion(t) => t.x(),
        }
    }

    pub fn y(&self) -> &[f64] {
        match self {
            Tabulated1D::Region(t) => t.y(),
            Tabulated1D::MultiRegion(t) => t.y(),
        }
    }

    /// NBT array; a single region reports one breakpoint at the last point.
    pub fn breakpoints(&self) -> Vec<u32> {
        match self {
            Tabulated1D::Region(t) => vec![t.x().len() as u32],
            Tabulated1D::MultiRegion(t) => t.breakpoints().to_vec(),
        }
    }

    pub fn interpolation(&self) -> Vec<Interpolation> {
        match self {
            Tabulated1D::Region(t) => vec![t.interpolation()],
            Tabulated1D::MultiRegion(t) => t.interpolation().to_vec(),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.x()[0]
    }

    pub fn max_x(&self) -> f64 {
        let x = self.x();
        x[x.len() - 1]
    }
}

/// Raw TAB1 layout as stored in a record, before validation.
///
/// | Field | Offset |
/// |---|---|
/// | NR | i |
/// | NBT\[NR\] | i+1 |
/// | INT\[NR\] | i+1+NR |
/// | NE | i+1+2NR |
/// | x\[NE\] | i+2+2NR |
/// | y\[NE\] | i+2+2NR+NE |
#[derive(Debug, Clone, PartialEq)]
pub struct Tab1Record {
    pub breakpoints: Vec<u32>,
    pub interpolation: Vec<Interpolation>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Tab1Record {
    pub fn read<R: Record + ?Sized>(record: &R, i: usize) -> Result<Self> {
        let nr: usize = record.scalar(i)?;
        let breakpoints = record.sequence::<u32>(i + 1, nr)?;
        let interpolation = record.sequence::<Interpolation>(i + 1 + nr, nr)?;
        let ne: usize = record.scalar(i + 1 + 2 * nr)?;
        if ne < 2 {
            log::warn!("TAB1 record at offset {} has {} points", i, ne);
            return Err(DataFormatError::TooFewPoints {
                required: 2,
                found: ne,
            });
        }
        let x = record.sequence::<f64>(i + 2 + 2 * nr, ne)?;
        let y = record.sequence::<f64>(i + 2 + 2 * nr + ne, ne)?;
        Ok(Self {
            breakpoints,
            interpolation,
            x,
            y,
        })
    }

    /// Number of record words occupied by this table.
    pub fn len(&self) -> usize {
        2 + 2 * self.breakpoints.len() + 2 * self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn scale_x(&mut self, factor: f64) {
        self.x.iter_mut().for_each(|v| *v *= factor);
    }

    pub fn scale_y(&mut self, factor: f64) {
        self.y.iter_mut().for_each(|v| *v *= factor);
    }

    pub fn into_table(self) -> Result<Tabulated1D> {
        let n_points = self.x.len();
        let n_regions = self.breakpoints.len().max(1);
        let table = Tabulated1D::new(self.breakpoints, self.interpolation, self.x, self.y)
            .map_err(|e| {
                log::warn!("rejected TAB1 table: {}", e);
                e
            })?;
        log::debug!(
            "decoded TAB1 table with {} points in {} region(s)",
            n_points,
            n_regions
        );
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn lin_log_table() -> MultiRegion1D {
        MultiRegion1D::new(
            vec![3, 5],
            vec![Interpolation::LinLin, Interpolation::LogLog],
            vec![1.0, 2.0, 3.0, 6.0, 12.0],
            vec![1.0, 2.0, 3.0, 6.0, 24.0],
        )
        .unwrap()
    }

    #[test]
    fn test_region_evaluate() {
        let t = Region1D::new(vec![1.0, 2.0, 4.0], vec![10.0, 20.0, 0.0], Interpolation::LinLin).unwrap();
        assert_eq!(t.evaluate(0.0), 10.0);
        assert_eq!(t.evaluate(1.0), 10.0);
        assert_eq!(t.evaluate(1.5), 15.0);
        assert_eq!(t.evaluate(2.0), 20.0);
        assert_eq!(t.evaluate(3.0), 10.0);
        assert_eq!(t.evaluate(4.0), 0.0);
        assert_eq!(t.evaluate(1e9), 0.0);
    }

    #[test]
    fn test_region_histogram() {
        let t = Region1D::new(vec![1.0, 2.0, 4.0], vec![10.0, 20.0, 30.0], Interpolation::Histogram).unwrap();
        assert_eq!(t.evaluate(1.99), 10.0);
        assert_eq!(t.evaluate(2.0), 20.0);
        assert_eq!(t.evaluate(3.99), 20.0);
        assert_eq!(t.evaluate(4.0), 30.0);
    }

    #[test]
    fn test_grid_points_exact_with_zero_under_log_axis() {
        let log_lin = Region1D::new(vec![1.0, 2.0, 3.0], vec![4.0, 2.0, 0.0], Interpolation::LogLin).unwrap();
        for (&x, &y) in log_lin.x().iter().zip(log_lin.y()) {
            assert_eq!(log_lin.evaluate(x), y, "log-lin grid point {}", x);
        }

        let lin_log = Region1D::new(vec![-1.0, 1.0, 2.0], vec![1.0, 2.0, 3.0], Interpolation::LinLog).unwrap();
        for (&x, &y) in lin_log.x().iter().zip(lin_log.y()) {
            assert_eq!(lin_log.evaluate(x), y, "lin-log grid point {}", x);
        }

        let multi = MultiRegion1D::new(
            vec![2, 3],
            vec![Interpolation::LinLin, Interpolation::LogLin],
            vec![1.0, 2.0, 3.0],
            vec![4.0, 2.0, 0.0],
        )
        .unwrap();
        for (&x, &y) in multi.x().iter().zip(multi.y()) {
            assert_eq!(multi.evaluate(x), y, "multi-region grid point {}", x);
        }
    }

    #[test]
    fn test_region_rejects_bad_data() {
        assert!(matches!(
            Region1D::new(vec![1.0], vec![1.0], Interpolation::LinLin),
            Err(DataFormatError::TooFewPoints { found: 1, .. })
        ));
        assert!(matches!(
            Region1D::new(vec![1.0, 2.0], vec![1.0], Interpolation::LinLin),
            Err(DataFormatError::LengthMismatch { .. })
        ));
        assert!(matches!(
            Region1D::new(vec![2.0, 1.0], vec![1.0, 1.0], Interpolation::LinLin),
            Err(DataFormatError::NonIncreasingGrid { index: 1, .. })
        ));
    }

    #[test]
    fn test_multi_region_laws_by_bracket() {
        let t = lin_log_table();
        assert_eq!(t.law_of(0), Interpolation::LinLin);
        assert_eq!(t.law_of(1), Interpolation::LinLin);
        assert_eq!(t.law_of(2), Interpolation::LogLog);
        assert_eq!(t.law_of(3), Interpolation::LogLog);
        // linear in first region
        assert_relative_eq!(t.evaluate(2.5), 2.5);
        // y = x^2 / 6 between 6 and 12
        assert_relative_eq!(t.evaluate(9.0), 13.5, max_relative = 1e-12);
        // shared boundary point
        assert_eq!(t.evaluate(3.0), 3.0);
    }

    #[test]
    fn test_multi_region_rejects_bad_breakpoints() {
        let x = vec![1.0, 2.0, 3.0, 4.0];
        let y = vec![1.0, 2.0, 3.0, 4.0];
        let laws = vec![Interpolation::LinLin, Interpolation::LinLin];
        assert!(matches!(
            MultiRegion1D::new(vec![2, 3], laws.clone(), x.clone(), y.clone()),
            Err(DataFormatError::InvalidBreakpoints(_))
        ));
        assert!(matches!(
            MultiRegion1D::new(vec![3, 3], laws.clone(), x.clone(), y.clone()),
            Err(DataFormatError::InvalidBreakpoints(_))
        ));
        assert!(matches!(
            MultiRegion1D::new(vec![1, 4], laws.clone(), x.clone(), y.clone()),
            Err(DataFormatError::InvalidBreakpoints(_))
        ));
        assert!(matches!(
            MultiRegion1D::new(vec![2, 4], vec![Interpolation::LinLin], x.clone(), y.clone()),
            Err(DataFormatError::LengthMismatch { .. })
        ));
        assert!(MultiRegion1D::new(vec![2, 4], laws, x, y).is_ok());
    }

    #[test]
    fn test_regions_share_boundary_points() {
        let regions = lin_log_table().regions();
        assert_eq!(regions.len(), 2);
        assert_eq!(regions[0].x(), &[1.0, 2.0, 3.0]);
        assert_eq!(regions[1].x(), &[3.0, 6.0, 12.0]);
        assert_eq!(regions[1].interpolation(), Interpolation::LogLog);
    }

    #[test]
    fn test_tabulated_variant_selection() {
        let implicit = Tabulated1D::new(vec![], vec![], vec![1.0, 2.0], vec![1.0, 2.0]).unwrap();
        assert!(matches!(implicit, Tabulated1D::Region(_)));
        assert_eq!(implicit.interpolation(), vec![Interpolation::LinLin]);
        assert_eq!(implicit.breakpoints(), vec![2]);

        let single = Tabulated1D::new(vec![2], vec![Interpolation::LogLog], vec![1.0, 2.0], vec![1.0, 2.0]).unwrap();
        assert!(matches!(single, Tabulated1D::Region(_)));

        let bad = Tabulated1D::new(vec![3], vec![Interpolation::LinLin], vec![1.0, 2.0], vec![1.0, 2.0]);
        assert!(matches!(bad, Err(DataFormatError::InvalidBreakpoints(_))));

        let multi: Tabulated1D = lin_log_table().into();
        assert!(matches!(multi, Tabulated1D::MultiRegion(_)));
        assert_eq!(multi.min_x(), 1.0);
        assert_eq!(multi.max_x(), 12.0);
    }

    #[test]
    fn test_integrate_with_flat_extension() {
        let t: Tabulated1D = Region1D::new(vec![1.0, 3.0], vec![2.0, 4.0], Interpolation::LinLin)
            .unwrap()
            .into();
        assert_relative_eq!(t.integrate(1.0, 3.0), 6.0);
        assert_relative_eq!(t.integrate(0.0, 1.0), 2.0);
        assert_relative_eq!(t.integrate(3.0, 5.0), 8.0);
        assert_relative_eq!(t.integrate(0.0, 5.0), 16.0);
        assert_relative_eq!(t.integrate(3.0, 1.0), -6.0);
        assert_eq!(t.integrate(2.0, 2.0), 0.0);
    }

    #[test]
    fn test_integrate_multi_region() {
        let t = lin_log_table();
        // trapezoid on [1, 3] = 4, y = x on [3, 6] = 13.5, y = x^2/6 on [6, 12] = 84
        let expected = 4.0 + 13.5 + 84.0;
        assert_relative_eq!(t.integrate(1.0, 12.0), expected, max_relative = 1e-12);
    }

    #[test]
    fn test_tab1_record_layout() {
        let xss = vec![
            2.0, // NR
            3.0, 5.0, // NBT
            2.0, 5.0, // INT
            5.0, // NE
            1.0, 2.0, 3.0, 6.0, 12.0, // x
            1.0, 2.0, 3.0, 6.0, 24.0, // y
            99.0,
        ];
        let tab = Tab1Record::read(&xss, 0).unwrap();
        assert_eq!(tab.len(), 16);
        assert_eq!(tab.breakpoints, vec![3, 5]);
        assert_eq!(tab.interpolation, vec![Interpolation::LinLin, Interpolation::LogLog]);
        assert_eq!(tab.into_table().unwrap(), Tabulated1D::MultiRegion(lin_log_table()));
    }

    #[test]
    fn test_from_record_converts_grid() {
        let xss = vec![0.0, 2.0, 1.0, 2.0, 5.0, 7.0];
        let config = Config::new();
        let t = Tabulated1D::from_record_with_config(&xss, 0, &config).unwrap();
        assert_eq!(t.x(), &[1.0e6, 2.0e6]);
        assert_eq!(t.y(), &[5.0, 7.0]);
        assert_eq!(t.evaluate(1.5e6), 6.0);
    }

    #[test]
    fn test_serde_validates() {
        let t: Tabulated1D = lin_log_table().into();
        let json = serde_json::to_string(&t).unwrap();
        let back: Tabulated1D = serde_json::from_str(&json).unwrap();
        assert_eq!(back, t);

        let bad = r#"{"type":"Region","x":[2.0,1.0],"y":[1.0,1.0],"interpolation":2}"#;
        assert!(serde_json::from_str::<Tabulated1D>(bad).is_err());
    }

    #[test]
    fn test_send_sync_bounds() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Tabulated1D>();
        assert_sync::<Tabulated1D>();
    }
}
