// General evaporation spectrum (ENDF law 5 / ACE law 5)
//
// The outgoing energy is E_out = chi * T(E_in), where T is a tabulated
// nuclear temperature and chi is drawn from a piecewise uniform density over
// equiprobable bins.

use std::sync::Arc;

use crate::angle_energy::EnergyLaw;
use crate::config::Config;
use crate::error::{check_strictly_increasing, DataFormatError, Result};
use crate::record::Record;
use crate::tabulated::{Tab1Record, Tabulated1D};
use crate::utilities::floor_index;

/// General evaporation spectrum.
///
/// `bin_bounds` holds the edges of the equiprobable bins of the
/// dimensionless ratio `chi = E_out / T`; there is one bin fewer than edges.
#[derive(Debug, Clone)]
pub struct GeneralEvaporation {
    temperature: Arc<Tabulated1D>,
    bin_bounds: Vec<f64>,
}

impl GeneralEvaporation {
    pub fn new(temperature: Arc<Tabulated1D>, bin_bounds: Vec<f64>) -> Result<Self> {
        if bin_bounds.len() < 2 {
            return Err(DataFormatError::EmptyBins(bin_bounds.len()));
        }
        check_strictly_increasing("evaporation bin bounds", &bin_bounds)?;
        Ok(Self {
            temperature,
            bin_bounds,
        })
    }

    /// Decode the distribution starting at record offset `i`.
    ///
    /// Layout: the temperature TAB1 table, then `NX` (number of bin edges),
    /// then the `NX` edges. Incident energies and temperatures are both
    /// converted with the global [`Config`] energy scale.
    pub fn from_record<R: Record + ?Sized>(record: &R, i: usize) -> Result<Self> {
        Self::from_record_with_config(record, i, &Config::snapshot())
    }

    pub fn from_record_with_config<R: Record + ?Sized>(
        record: &R,
        i: usize,
        config: &Config,
    ) -> Result<Self> {
        let mut tab = Tab1Record::read(record, i)?;
        let nx_index = i + tab.len();
        tab.scale_x(config.energy_scale);
        tab.scale_y(config.energy_scale);
        let temperature = tab.into_table()?;

        let nx: usize = record.scalar(nx_index)?;
        if nx < 2 {
            log::warn!(
                "evaporation record at offset {} has {} bin edges",
                i,
                nx
            );
            return Err(DataFormatError::EmptyBins(nx));
        }
        let bin_bounds = record.sequence::<f64>(nx_index + 1, nx)?;

        let law = Self::new(Arc::new(temperature), bin_bounds)?;
        log::debug!(
            "decoded general evaporation law with {} temperature points and {} bins",
            law.temperature.x().len(),
            law.n_bins()
        );
        Ok(law)
    }

    /// Nuclear temperature as a function of incident energy.
    pub fn temperature(&self) -> &Arc<Tabulated1D> {
        &self.temperature
    }

    pub fn bin_bounds(&self) -> &[f64] {
        &self.bin_bounds
    }

    pub fn n_bins(&self) -> usize {
        self.bin_bounds.len() - 1
    }

    /// Sample an outgoing energy using two uniform variates.
    pub fn sample_energy<F: FnMut() -> f64>(&self, e_in: f64, mut rng: F) -> f64 {
        let t = self.temperature.evaluate(e_in);
        let n_bins = self.n_bins();

        let xi1 = rng();
        let bin = ((n_bins as f64 * xi1).floor() as usize).min(n_bins - 1);

        let xi2 = rng();
        let lo = self.bin_bounds[bin];
        let hi = self.bin_bounds[bin + 1];
        let chi = lo + xi2 * (hi - lo);

        chi * t
    }

    /// Density of outgoing energy `e_out` at incident energy `e_in`.
    ///
    /// `None` when the temperature at `e_in` is not positive.
    pub fn pdf(&self, e_in: f64, e_out: f64) -> Option<f64> {
        let t = self.temperature.evaluate(e_in);
        if t.is_nan() || t <= 0.0 {
            return None;
        }
        let chi = e_out / t;
        let first = self.bin_bounds[0];
        let last = self.bin_bounds[self.bin_bounds.len() - 1];
        if chi < first || chi > last {
            return Some(0.0);
        }
        let bin = floor_index(&self.bin_bounds, chi)?.min(self.n_bins() - 1);
        let width = self.bin_bounds[bin + 1] - self.bin_bounds[bin];
        Some(1.0 / (self.n_bins() as f64 * width * t))
    }
}

impl EnergyLaw for GeneralEvaporation {
    fn sample_energy<F: FnMut() -> f64>(&self, e_in: f64, rng: F) -> f64 {
        GeneralEvaporation::sample_energy(self, e_in, rng)
    }

    fn pdf(&self, e_in: f64, e_out: f64) -> Option<f64> {
        GeneralEvaporation::pdf(self, e_in, e_out)
    }
}
