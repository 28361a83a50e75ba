// Coherent elastic scattering from the Bragg edges of a crystalline moderator
//
// Bragg diffraction turns on plane by plane as the incident energy crosses
// each edge E_i, so the cross section is a right-continuous step function of
// the cumulative structure factor sum, divided by energy:
//
//     xs(E) = S_l / E,  E_l <= E < E_{l+1}
//
// Scattering off the plane at E_i leaves the energy unchanged and has
// cosine mu = 1 - 2 E_i / E.

use crate::angle_energy::{AngleEnergy, AngleEnergyPacket};
use crate::config::Config;
use crate::error::{check_finite, check_strictly_increasing, DataFormatError, Result};
use crate::record::Record;
use crate::utilities::floor_index;

/// Coherent elastic scattering data of one material at one temperature.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoherentElastic {
    bragg_edges: Vec<f64>,
    structure_factor_sum: Vec<f64>,
    clamp_cosine: bool,
}

impl CoherentElastic {
    /// Build from Bragg edges (eV) and the cumulative structure factor sums
    /// (eV * barn).
    pub fn new(bragg_edges: Vec<f64>, structure_factor_sum: Vec<f64>) -> Result<Self> {
        if bragg_edges.len() != structure_factor_sum.len() {
            return Err(DataFormatError::LengthMismatch {
                what: "structure factor sums",
                expected: bragg_edges.len(),
                found: structure_factor_sum.len(),
            });
        }
        check_strictly_increasing("Bragg edges", &bragg_edges)?;
        check_finite("structure factor sums", &structure_factor_sum)?;
        Ok(Self {
            bragg_edges,
            structure_factor_sum,
            clamp_cosine: false,
        })
    }

    /// A material without coherent elastic scattering.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Clamp sampled cosines into [-1, 1].
    pub fn with_clamped_cosine(mut self, clamp: bool) -> Self {
        self.clamp_cosine = clamp;
        self
    }

    /// Decode the Bragg edge block starting at record offset `i`.
    ///
    /// Layout: `Ne`, then `Ne` Bragg edges, then `Ne` cumulative structure
    /// factor sums. Both arrays are scaled by the global [`Config`] energy
    /// scale so that [`CoherentElastic::xs`] is in barns for energies in eV.
    pub fn from_record<R: Record + ?Sized>(record: &R, i: usize) -> Result<Self> {
        Self::from_record_with_config(record, i, &Config::snapshot())
    }

    pub fn from_record_with_config<R: Record + ?Sized>(
        record: &R,
        i: usize,
        config: &Config,
    ) -> Result<Self> {
        let ne: usize = record.scalar(i)?;
        let scale = config.energy_scale;
        let edges: Vec<f64> = record
            .sequence::<f64>(i + 1, ne)?
            .into_iter()
            .map(|e| e * scale)
            .collect();
        let sums: Vec<f64> = record
            .sequence::<f64>(i + 1 + ne, ne)?
            .into_iter()
            .map(|s| s * scale)
            .collect();

        let model = Self::new(edges, sums)
            .map_err(|e| {
                log::warn!("rejected coherent elastic data at offset {}: {}", i, e);
                e
            })?
            .with_clamped_cosine(config.clamp_bragg_cosine);
        log::debug!("decoded coherent elastic data with {} Bragg edges", ne);
        Ok(model)
    }

    pub fn bragg_edges(&self) -> &[f64] {
        &self.bragg_edges
    }

    pub fn structure_factor_sum(&self) -> &[f64] {
        &self.structure_factor_sum
    }

    pub fn is_empty(&self) -> bool {
        self.bragg_edges.is_empty()
    }

    /// Coherent elastic cross section at incident energy `e`.
    pub fn xs(&self, e: f64) -> f64 {
        match floor_index(&self.bragg_edges, e) {
            Some(l) => self.structure_factor_sum[l] / e,
            None => 0.0,
        }
    }

    /// Energy of the Bragg edge the neutron scatters from: the greatest edge
    /// not above `e_in`, or zero below the first edge.
    fn scattering_edge(&self, e_in: f64) -> f64 {
        floor_index(&self.bragg_edges, e_in)
            .map(|l| self.bragg_edges[l])
            .unwrap_or(0.0)
    }

    /// Scattering cosine and outgoing energy. Deterministic; `rng` is never
    /// called.
    pub fn sample_angle_energy<F: FnMut() -> f64>(&self, e_in: f64, _rng: F) -> AngleEnergyPacket {
        let e_i = self.scattering_edge(e_in);
        let mut mu = 1.0 - 2.0 * e_i / e_in;
        if self.clamp_cosine {
            mu = mu.clamp(-1.0, 1.0);
        }
        AngleEnergyPacket {
            cosine_angle: mu,
            energy: e_in,
        }
    }

    /// Always `None`: the angular distribution is a sum of delta functions.
    pub fn angle_pdf(&self, _e_in: f64, _mu: f64) -> Option<f64> {
        None
    }

    /// Always `None`, see [`CoherentElastic::angle_pdf`].
    pub fn pdf(&self, _e_in: f64, _mu: f64, _e_out: f64) -> Option<f64> {
        None
    }
}

impl AngleEnergy for CoherentElastic {
    fn sample_angle_energy<F: FnMut() -> f64>(&self, e_in: f64, rng: F) -> AngleEnergyPacket {
        CoherentElastic::sample_angle_energy(self, e_in, rng)
    }

    fn angle_pdf(&self, e_in: f64, mu: f64) -> Option<f64> {
        CoherentElastic::angle_pdf(self, e_in, mu)
    }

    fn pdf(&self, e_in: f64, mu: f64, e_out: f64) -> Option<f64> {
        CoherentElastic::pdf(self, e_in, mu, e_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graphite_like() -> CoherentElastic {
        CoherentElastic::new(vec![2.0e-3, 5.0e-3, 8.0e-3], vec![1.0e-3, 3.0e-3, 4.0e-3]).unwrap()
    }

    fn no_draws() -> f64 {
        panic!("coherent elastic scattering must not consume random numbers")
    }

    #[test]
    fn test_xs_steps() {
        let ce = graphite_like();
        assert_eq!(ce.xs(1.0e-3), 0.0);
        assert_eq!(ce.xs(2.0e-3), 1.0e-3 / 2.0e-3);
        assert_eq!(ce.xs(4.0e-3), 1.0e-3 / 4.0e-3);
        assert_eq!(ce.xs(5.0e-3), 3.0e-3 / 5.0e-3);
        assert_eq!(ce.xs(8.0e-3), 4.0e-3 / 8.0e-3);
        assert_eq!(ce.xs(1.0), 4.0e-3);
    }

    #[test]
    fn test_empty() {
        let ce = CoherentElastic::empty();
        assert!(ce.is_empty());
        assert_eq!(ce.xs(1.0), 0.0);
        let packet = ce.sample_angle_energy(1.0, no_draws);
        assert_eq!(packet.cosine_angle, 1.0);
        assert_eq!(packet.energy, 1.0);
    }

    #[test]
    fn test_sample_angle_energy() {
        let ce = graphite_like();
        // below the first edge there is no plane to scatter from
        assert_eq!(ce.sample_angle_energy(1.0e-3, no_draws).cosine_angle, 1.0);
        // on an edge: backscatter
        assert_eq!(ce.sample_angle_energy(5.0e-3, no_draws).cosine_angle, -1.0);
        let packet = ce.sample_angle_energy(1.0e-2, no_draws);
        assert!((packet.cosine_angle - (1.0 - 2.0 * 0.8)).abs() < 1e-12);
        assert_eq!(packet.energy, 1.0e-2);
    }

    #[test]
    fn test_clamped_cosine() {
        // a negative edge below a negative energy puts 1 - 2 E_i / E outside [-1, 1]
        let raw = CoherentElastic::new(vec![-2.0e-3, 5.0e-3], vec![1.0e-3, 3.0e-3]).unwrap();
        let unclamped = raw.sample_angle_energy(-1.0e-3, no_draws).cosine_angle;
        assert!((unclamped - -3.0).abs() < 1e-12);

        let clamped = raw.with_clamped_cosine(true);
        assert_eq!(clamped.sample_angle_energy(-1.0e-3, no_draws).cosine_angle, -1.0);
        // in-range cosines are left alone
        let packet = clamped.sample_angle_energy(6.0e-3, no_draws);
        assert!((packet.cosine_angle - (1.0 - 2.0 * 5.0e-3 / 6.0e-3)).abs() < 1e-12);
    }

    #[test]
    fn test_no_density() {
        let ce = graphite_like();
        assert_eq!(ce.angle_pdf(1.0e-2, 0.5), None);
        assert_eq!(ce.pdf(1.0e-2, 0.5, 1.0e-2), None);
    }

    #[test]
    fn test_rejects_bad_data() {
        assert!(matches!(
            CoherentElastic::new(vec![1.0, 2.0], vec![1.0]),
            Err(DataFormatError::LengthMismatch { .. })
        ));
        assert!(matches!(
            CoherentElastic::new(vec![2.0, 1.0], vec![1.0, 2.0]),
            Err(DataFormatError::NonIncreasingGrid { .. })
        ));
    }

    #[test]
    fn test_from_record_layout() {
        let xss = vec![2.0, 2.0e-9, 5.0e-9, 1.0e-9, 3.0e-9];
        let mut config = Config::new();
        config.set_clamp_bragg_cosine(true);
        let ce = CoherentElastic::from_record_with_config(&xss, 0, &config).unwrap();
        assert_eq!(ce.bragg_edges().len(), 2);
        assert!((ce.bragg_edges()[0] - 2.0e-3).abs() < 1e-15);
        assert!((ce.structure_factor_sum()[1] - 3.0e-3).abs() < 1e-15);
        assert!(ce.clamp_cosine);

        let empty = CoherentElastic::from_record_with_config(&vec![0.0], 0, &Config::new()).unwrap();
        assert!(empty.is_empty());
    }
}
