// Sampling interfaces shared by secondary distributions
//
// Random numbers are never generated here: every sampler takes a closure
// returning uniform variates on [0, 1), so the caller keeps control of the
// generator and its thread affinity.

/// Outcome of sampling a joint angle-energy distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleEnergyPacket {
    /// Cosine of the scattering angle
    pub cosine_angle: f64,
    /// Outgoing energy in eV
    pub energy: f64,
}

/// A distribution of outgoing energy only.
pub trait EnergyLaw {
    /// Sample an outgoing energy for incident energy `e_in`.
    fn sample_energy<F: FnMut() -> f64>(&self, e_in: f64, rng: F) -> f64;

    /// Probability density of `e_out` at incident energy `e_in`, when the law
    /// has one.
    fn pdf(&self, e_in: f64, e_out: f64) -> Option<f64>;
}

/// A joint distribution of scattering cosine and outgoing energy.
pub trait AngleEnergy {
    fn sample_angle_energy<F: FnMut() -> f64>(&self, e_in: f64, rng: F) -> AngleEnergyPacket;

    /// Marginal density of the scattering cosine. `None` when the
    /// distribution has no finite density (e.g. discrete Bragg angles).
    fn angle_pdf(&self, e_in: f64, mu: f64) -> Option<f64>;

    /// Joint density of cosine and outgoing energy, `None` when undefined.
    fn pdf(&self, e_in: f64, mu: f64, e_out: f64) -> Option<f64>;
}
